//! API Client
//!
//! One async operation per backend operation over the three resources
//! (climate data, stories, petition). Every call performs exactly one HTTP
//! request and decodes the `{ "data": ... }` envelope. There are no retries,
//! no caching and no request deduplication: each page mount fetches afresh.
//!
//! [`Backend`] is the seam between the page/form logic and the transport.
//! [`HttpBackend`] implements it with reqwest for native builds; the browser
//! crate implements it with gloo-net. Both share the paths and body decoding
//! in [`endpoints`].

pub mod endpoints;
mod error;
#[cfg(feature = "native")]
mod http;

pub use error::{ClientError, ClientResult, GENERIC_TRANSPORT_MESSAGE};
#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;

use crate::forms::{SignatureDraft, StoryDraft};
use crate::models::{
    ClimateDataSeries, PetitionSignature, PetitionStats, Story, StoryFilter, StoryStats,
};

/// Typed operations of the REST backend
///
/// Futures are not required to be `Send`: the browser runs everything on a
/// single cooperative event loop.
#[async_trait(?Send)]
pub trait Backend {
    /// GET /climate-data
    async fn fetch_all_climate_data(&self) -> ClientResult<Vec<ClimateDataSeries>>;

    /// GET /climate-data?category=
    async fn fetch_climate_data_by_category(
        &self,
        category: &str,
    ) -> ClientResult<Vec<ClimateDataSeries>>;

    /// GET /climate-data/categories
    async fn fetch_climate_categories(&self) -> ClientResult<Vec<String>>;

    /// GET /stories/stats
    async fn fetch_story_stats(&self) -> ClientResult<StoryStats>;

    /// GET /stories?verified=
    async fn fetch_all_stories(&self, filter: StoryFilter) -> ClientResult<Vec<Story>>;

    /// POST /stories (multipart form fields)
    async fn submit_story(&self, draft: &StoryDraft) -> ClientResult<Story>;

    /// GET /petition/stats
    async fn fetch_petition_stats(&self) -> ClientResult<PetitionStats>;

    /// GET /petition?page=&limit=
    async fn fetch_signatures(
        &self,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Vec<PetitionSignature>>;

    /// POST /petition/sign (JSON)
    async fn submit_signature(&self, draft: &SignatureDraft) -> ClientResult<PetitionSignature>;
}
