//! HTTP API Client
//!
//! [`Backend`] over `fetch`, one request per operation.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use paradox::client::endpoints::{self, decode_envelope, error_from_body, DEFAULT_API_BASE};
use paradox::forms::{SignatureDraft, StoryDraft};
use paradox::models::{
    ClimateDataSeries, PetitionSignature, PetitionStats, Story, StoryFilter, StoryStats,
};
use paradox::{Backend, ClientError, ClientResult};

const API_URL_KEY: &str = "paradox_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    endpoints::normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn transport(e: gloo_net::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

fn js_error(e: JsValue) -> ClientError {
    ClientError::Request(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Read-only handle shared by every page through context
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: endpoints::normalize_base(base_url),
        }
    }

    /// Backend at the URL saved in local storage
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let request = builder.build().map_err(|e| ClientError::Request(e.to_string()))?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> ClientResult<T> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if response.ok() {
            decode_envelope(&body)
        } else {
            web_sys::console::warn_1(
                &format!("{} returned {}", response.url(), status).into(),
            );
            Err(error_from_body(status, &body))
        }
    }
}

#[async_trait(?Send)]
impl Backend for GlooBackend {
    async fn fetch_all_climate_data(&self) -> ClientResult<Vec<ClimateDataSeries>> {
        self.get(Request::get(&self.url(endpoints::CLIMATE_DATA)))
            .await
    }

    async fn fetch_climate_data_by_category(
        &self,
        category: &str,
    ) -> ClientResult<Vec<ClimateDataSeries>> {
        self.get(
            Request::get(&self.url(endpoints::CLIMATE_DATA)).query([("category", category)]),
        )
        .await
    }

    async fn fetch_climate_categories(&self) -> ClientResult<Vec<String>> {
        self.get(Request::get(&self.url(endpoints::CLIMATE_CATEGORIES)))
            .await
    }

    async fn fetch_story_stats(&self) -> ClientResult<StoryStats> {
        self.get(Request::get(&self.url(endpoints::STORY_STATS)))
            .await
    }

    async fn fetch_all_stories(&self, filter: StoryFilter) -> ClientResult<Vec<Story>> {
        let mut builder = Request::get(&self.url(endpoints::STORIES));
        if let Some(verified) = filter.verified {
            builder = builder.query([("verified", if verified { "true" } else { "false" })]);
        }
        self.get(builder).await
    }

    async fn submit_story(&self, draft: &StoryDraft) -> ClientResult<Story> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in draft.form_fields() {
            form.append_with_str(name, &value).map_err(js_error)?;
        }

        let request = Request::post(&self.url(endpoints::STORIES))
            .body(form)
            .map_err(|e| ClientError::Request(e.to_string()))?;
        self.send(request).await
    }

    async fn fetch_petition_stats(&self) -> ClientResult<PetitionStats> {
        self.get(Request::get(&self.url(endpoints::PETITION_STATS)))
            .await
    }

    async fn fetch_signatures(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<Vec<PetitionSignature>> {
        let page = page.to_string();
        let limit = limit.to_string();
        self.get(
            Request::get(&self.url(endpoints::PETITION))
                .query([("page", page.as_str()), ("limit", limit.as_str())]),
        )
        .await
    }

    async fn submit_signature(&self, draft: &SignatureDraft) -> ClientResult<PetitionSignature> {
        let request = Request::post(&self.url(endpoints::PETITION_SIGN))
            .json(&draft.payload())
            .map_err(|e| ClientError::Request(e.to_string()))?;
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_new_normalizes_base() {
        let backend = GlooBackend::new("http://localhost:5000/api/ ");
        assert_eq!(
            backend.url(endpoints::PETITION_SIGN),
            "http://localhost:5000/api/petition/sign"
        );
    }
}
