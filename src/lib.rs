//! # Paradox
//!
//! Client core for Climate Paradox Kenya, an advocacy site that contrasts
//! Kenya's tiny share of global emissions with the climate impacts its
//! counties live with.
//!
//! ## Modules
//!
//! - [`models`]: Wire types shared with the REST backend
//! - [`client`]: The [`Backend`] seam and its HTTP implementation
//! - [`page`]: Page controllers and their load/ready/failed lifecycle
//! - [`forms`]: Story and signature drafts with the submit state machine
//! - [`viz`]: Chart adapter and Chart.js configuration
//! - [`devserver`]: In-memory fixture backend (native only)
//!
//! The browser front end in `paradox-ui` builds on the same modules with
//! `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paradox::page::{load, PetitionPage, PageState};
//! use paradox::HttpBackend;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpBackend::new("http://localhost:5000/api", Duration::from_secs(30))?;
//!
//!     match load(&PetitionPage, &backend).await {
//!         PageState::Ready(view) => println!("{} signatures", view.stats.total_signatures),
//!         PageState::Failed(message) => eprintln!("{}", message),
//!         PageState::Loading => {}
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod forms;
pub mod models;
pub mod page;
pub mod viz;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod devserver;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

// Re-export top-level types for convenience
pub use client::{Backend, ClientError, ClientResult};

#[cfg(feature = "native")]
pub use client::HttpBackend;

pub use models::{
    ClimateDataSeries, DataPoint, PetitionSignature, PetitionStats, Story, StoryCategory,
    StoryFilter, StoryStats, VisualizationKind,
};

pub use forms::{FormFlow, FormPhase, SignatureDraft, StoryDraft, SubmitOutcome};

pub use page::{load, Liveness, Page, PageController, PageState};

pub use viz::{adapt, ChartSeries};

#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, DevServerConfig, LoggingConfig};
