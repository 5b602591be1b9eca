//! Story Routes
//!
//! - GET /api/stories - Stories, newest first; `?verified=true` for published only
//! - GET /api/stories/stats - Totals and group counts
//! - POST /api/stories - Submit a story (multipart text fields)
//! - PATCH /api/stories/:id/verify - Publish a story

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::devserver::dto::{DataResponse, StoryQuery};
use crate::devserver::error::{ApiError, ApiResult};
use crate::devserver::state::AppState;
use crate::forms::{Draft, FieldChange, FormError, StoryDraft};
use crate::models::{Story, StoryStats};

/// GET /api/stories
pub async fn list_stories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StoryQuery>,
) -> Json<DataResponse<Vec<Story>>> {
    let store = state.store.read().await;
    Json(DataResponse::list(store.stories(query.verified)))
}

/// GET /api/stories/stats
pub async fn story_stats(State(state): State<Arc<AppState>>) -> Json<DataResponse<StoryStats>> {
    let store = state.store.read().await;
    Json(DataResponse::new(store.story_stats()))
}

/// POST /api/stories
///
/// Fields arrive as multipart text parts named like the form inputs.
/// Unknown parts are ignored.
pub async fn create_story(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<DataResponse<Story>>)> {
    let mut draft = StoryDraft::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::Multipart(e.to_string()))?;

        match draft.apply(&FieldChange::text(name.as_str(), value)) {
            Ok(()) => {}
            Err(FormError::UnknownField(_)) => {
                tracing::debug!(field = %name, "Ignoring unknown story field");
            }
            Err(e) => return Err(ApiError::Validation(e.to_string())),
        }
    }

    let story = state.store.write().await.add_story(&draft)?;
    tracing::info!(id = %story.id, county = %story.county, "Story submitted for review");

    Ok((StatusCode::CREATED, Json(DataResponse::new(story))))
}

/// PATCH /api/stories/:id/verify
pub async fn verify_story(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Story>>> {
    let story = state.store.write().await.verify_story(&id)?;
    Ok(Json(DataResponse::new(story)))
}
