//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod content_card;
pub mod county_select;
pub mod error_banner;
pub mod impact_map;
pub mod loading;
pub mod nav;
pub mod petition_form;
pub mod stat_grid;
pub mod story_form;

pub use chart::ClimateChart;
pub use content_card::ContentCard;
pub use county_select::CountySelect;
pub use error_banner::ErrorBanner;
pub use impact_map::ImpactMap;
pub use loading::Loading;
pub use nav::Nav;
pub use petition_form::PetitionForm;
pub use stat_grid::StatGrid;
pub use story_form::StoryForm;
