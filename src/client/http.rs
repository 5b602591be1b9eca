//! reqwest implementation of [`Backend`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::endpoints::{self, decode_envelope, error_from_body};
use super::{Backend, ClientError, ClientResult};
use crate::config::ApiConfig;
use crate::forms::{SignatureDraft, StoryDraft};
use crate::models::{
    ClimateDataSeries, PetitionSignature, PetitionStats, Story, StoryFilter, StoryStats,
};

/// HTTP client for the Climate Paradox REST API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CategoryQuery<'a> {
    category: &'a str,
}

#[derive(Serialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(base_url),
        })
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    /// Send one request and decode its envelope
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        debug!(path = %url, status = status.as_u16(), bytes = body.len(), "API response");

        if status.is_success() {
            decode_envelope(&body)
        } else {
            Err(error_from_body(status.as_u16(), &body))
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_all_climate_data(&self) -> ClientResult<Vec<ClimateDataSeries>> {
        self.get(endpoints::CLIMATE_DATA).await
    }

    async fn fetch_climate_data_by_category(
        &self,
        category: &str,
    ) -> ClientResult<Vec<ClimateDataSeries>> {
        self.get_with(endpoints::CLIMATE_DATA, &CategoryQuery { category })
            .await
    }

    async fn fetch_climate_categories(&self) -> ClientResult<Vec<String>> {
        self.get(endpoints::CLIMATE_CATEGORIES).await
    }

    async fn fetch_story_stats(&self) -> ClientResult<StoryStats> {
        self.get(endpoints::STORY_STATS).await
    }

    async fn fetch_all_stories(&self, filter: StoryFilter) -> ClientResult<Vec<Story>> {
        self.get_with(endpoints::STORIES, &filter).await
    }

    async fn submit_story(&self, draft: &StoryDraft) -> ClientResult<Story> {
        let form = draft
            .form_fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            });

        self.send(
            self.client
                .post(self.url(endpoints::STORIES))
                .multipart(form),
        )
        .await
    }

    async fn fetch_petition_stats(&self) -> ClientResult<PetitionStats> {
        self.get(endpoints::PETITION_STATS).await
    }

    async fn fetch_signatures(
        &self,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Vec<PetitionSignature>> {
        self.get_with(
            endpoints::PETITION,
            &PageQuery {
                page,
                limit: page_size,
            },
        )
        .await
    }

    async fn submit_signature(&self, draft: &SignatureDraft) -> ClientResult<PetitionSignature> {
        self.send(
            self.client
                .post(self.url(endpoints::PETITION_SIGN))
                .json(&draft.payload()),
        )
        .await
    }
}
