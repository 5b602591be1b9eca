//! Fixture REST backend
//!
//! Serves the full Climate Paradox API contract from memory, built with Axum.
//! Used for UI development and by the HTTP client tests.
//!
//! # Endpoints
//!
//! ## Climate data
//! - `GET /api/climate-data` - All series (`?category=` to filter)
//! - `GET /api/climate-data/categories` - Distinct categories
//!
//! ## Stories
//! - `GET /api/stories` - Stories (`?verified=true` for published only)
//! - `GET /api/stories/stats` - Story aggregates
//! - `POST /api/stories` - Submit a story (multipart)
//! - `PATCH /api/stories/:id/verify` - Publish a story
//!
//! ## Petition
//! - `GET /api/petition` - Signatures (`?page=&limit=`)
//! - `GET /api/petition/stats` - Petition aggregates
//! - `POST /api/petition/sign` - Sign (JSON)
//!
//! ## Health
//! - `GET /health` - Status and uptime

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use store::Store;

use axum::{
    http::HeaderValue,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Climate data routes
        .route("/climate-data", get(routes::climate::list_climate_data))
        .route(
            "/climate-data/categories",
            get(routes::climate::list_categories),
        )
        // Story routes
        .route(
            "/stories",
            get(routes::stories::list_stories).post(routes::stories::create_story),
        )
        .route("/stories/stats", get(routes::stories::story_stats))
        .route("/stories/:id/verify", patch(routes::stories::verify_story))
        // Petition routes
        .route("/petition", get(routes::petition::list_signatures))
        .route("/petition/stats", get(routes::petition::petition_stats))
        .route("/petition/sign", post(routes::petition::sign_petition));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; `"*"` allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the devserver and run until Ctrl+C or SIGTERM
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.bind_addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Paradox devserver listening on http://{}/api", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Paradox devserver shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevServerConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::seeded(DevServerConfig::default()))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_climate_data_envelope() {
        let response = create_test_app()
            .oneshot(get("/api/climate-data?category=emissions"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|s| s["category"] == "emissions"));
        assert_eq!(data[0]["visualizationType"], "bar");
        assert!(data[0]["dataPoints"].is_array());
    }

    #[tokio::test]
    async fn test_categories() {
        let response = create_test_app()
            .oneshot(get("/api/climate-data/categories"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"][0], "emissions");
    }

    #[tokio::test]
    async fn test_sign_petition_created() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/petition/sign")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name":"Jane","email":"jane@x.com","location":"Nairobi","county":"Nairobi","comment":"","isAnonymous":false}"#,
            ))
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["data"]["name"], "Jane");
        assert!(body["data"]["_id"].is_string());
        assert!(body["data"].get("email").is_none());
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/petition/sign")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Jane","email":"jane@x.com"}"#))
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("county is required"));
    }

    #[tokio::test]
    async fn test_create_story_multipart() {
        let boundary = "paradox-boundary";
        let fields = [
            ("title", "Dry wells"),
            ("content", "The borehole failed."),
            ("author", "Ekai"),
            ("email", "ekai@example.org"),
            ("location", "Kakuma"),
            ("county", "Turkana"),
            ("category", "drought"),
            ("consent", "true"),
        ];
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        let request = Request::builder()
            .method("POST")
            .uri("/api/stories")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["data"]["title"], "Dry wells");
        assert_eq!(body["data"]["verified"], false);
    }

    #[tokio::test]
    async fn test_unknown_story_is_not_found() {
        let request = Request::builder()
            .method("PATCH")
            .uri("/api/stories/missing/verify")
            .body(Body::empty())
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
