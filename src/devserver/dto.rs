//! Request and response bodies

use serde::{Deserialize, Serialize};

use crate::forms::SignatureDraft;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> DataResponse<Vec<T>> {
    /// List response carrying its length
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ClimateQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoryQuery {
    pub verified: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl PageQuery {
    pub const MAX_LIMIT: u32 = 100;

    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(1, Self::MAX_LIMIT)
    }
}

/// JSON body of `POST /petition/sign`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl From<SignRequest> for SignatureDraft {
    fn from(req: SignRequest) -> Self {
        SignatureDraft {
            name: req.name.unwrap_or_default(),
            email: req.email,
            location: req.location,
            county: req.county,
            comment: req.comment.unwrap_or_default(),
            is_anonymous: req.is_anonymous,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
