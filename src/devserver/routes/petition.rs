//! Petition Routes
//!
//! - GET /api/petition?page=&limit= - Signatures, newest first
//! - GET /api/petition/stats - Totals, last seven days and counties
//! - POST /api/petition/sign - Sign (JSON)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::devserver::dto::{DataResponse, PageQuery, SignRequest};
use crate::devserver::error::ApiResult;
use crate::devserver::state::AppState;
use crate::forms::SignatureDraft;
use crate::models::{PetitionSignature, PetitionStats};

/// GET /api/petition
pub async fn list_signatures(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<DataResponse<Vec<PetitionSignature>>> {
    let store = state.store.read().await;
    Json(DataResponse::list(
        store.signatures(query.page, query.clamped_limit()),
    ))
}

/// GET /api/petition/stats
pub async fn petition_stats(State(state): State<Arc<AppState>>) -> Json<DataResponse<PetitionStats>> {
    let store = state.store.read().await;
    Json(DataResponse::new(store.petition_stats(Utc::now())))
}

/// POST /api/petition/sign
pub async fn sign_petition(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<PetitionSignature>>)> {
    let draft = SignatureDraft::from(req);
    let signature = state.store.write().await.sign(&draft)?;
    tracing::info!(id = %signature.id, county = %signature.county, "Petition signed");

    Ok((StatusCode::CREATED, Json(DataResponse::new(signature))))
}
