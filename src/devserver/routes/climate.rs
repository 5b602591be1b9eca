//! Climate Data Routes
//!
//! - GET /api/climate-data - All series, or `?category=` for one category
//! - GET /api/climate-data/categories - Distinct categories

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::devserver::dto::{ClimateQuery, DataResponse};
use crate::devserver::state::AppState;
use crate::models::ClimateDataSeries;

/// GET /api/climate-data
pub async fn list_climate_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClimateQuery>,
) -> Json<DataResponse<Vec<ClimateDataSeries>>> {
    let store = state.store.read().await;
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    Json(DataResponse::list(store.climate(category)))
}

/// GET /api/climate-data/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<DataResponse<Vec<String>>> {
    let store = state.store.read().await;
    Json(DataResponse::new(store.categories()))
}
