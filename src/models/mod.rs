//! Data model shared by the API client, page controllers and both front ends
//!
//! - [`ClimateDataSeries`]: one chartable series from `/climate-data`
//! - [`Story`] and [`StoryStats`]: impact stories and their aggregates
//! - [`PetitionSignature`] and [`PetitionStats`]: petition signers and aggregates
//! - [`Envelope`]: the `{ "data": ... }` wrapper every response uses
//!
//! Everything here is camelCase on the wire.

mod climate;
mod counties;
mod envelope;
mod petition;
mod story;

pub use climate::{ClimateDataSeries, DataPoint, VisualizationKind};
pub use counties::{is_known_county, KENYA_COUNTIES};
pub use envelope::{Envelope, ErrorBody};
pub use petition::{PetitionSignature, PetitionStats};
pub use story::{GroupCount, Story, StoryCategory, StoryFilter, StoryStats};
