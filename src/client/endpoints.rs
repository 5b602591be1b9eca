//! Paths and body decoding shared by every [`Backend`](super::Backend) implementation

use serde::de::DeserializeOwned;

use super::error::ClientError;
use crate::models::{Envelope, ErrorBody};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

pub const CLIMATE_DATA: &str = "/climate-data";
pub const CLIMATE_CATEGORIES: &str = "/climate-data/categories";
pub const STORIES: &str = "/stories";
pub const STORY_STATS: &str = "/stories/stats";
pub const PETITION: &str = "/petition";
pub const PETITION_STATS: &str = "/petition/stats";
pub const PETITION_SIGN: &str = "/petition/sign";

/// Normalize a configured base URL: trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join the base URL and an endpoint path
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

/// Decode a 2xx body: `{ "data": T }`
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Build the error for a non-2xx response, keeping the backend's message when there is one
pub fn error_from_body(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);

    ClientError::Status { status, message }
}
