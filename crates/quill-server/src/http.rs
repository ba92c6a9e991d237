//! HTTP transport
//!
//! `POST /rpc` takes one JSON-RPC request per body and answers with the
//! JSON-RPC response. `GET /health` reports liveness.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use quill_core::DataService;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::QuillServer;

/// Maximum request body size (1MB)
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Create the HTTP router
pub fn create_router<S: DataService + 'static>(server: Arc<QuillServer<S>>) -> Router {
    // Restrictive CORS: only allow localhost origins
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:4000"),
            HeaderValue::from_static("http://127.0.0.1:4000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/rpc", post(rpc_handler::<S>))
        .route("/health", get(health_handler))
        .with_state(server)
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "server": "quill",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn rpc_handler<S: DataService + 'static>(
    State(server): State<Arc<QuillServer<S>>>,
    body: String,
) -> impl IntoResponse {
    let response = server.handle_line(&body).await;
    if let Some(error) = &response.error {
        tracing::debug!("HTTP request rejected: {}", error.message);
    }
    Json(response)
}

/// Run the HTTP server
pub async fn run_http_server<S: DataService + 'static>(
    server: Arc<QuillServer<S>>,
    addr: &str,
) -> anyhow::Result<()> {
    let router = create_router(server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Quill HTTP server listening on {}", addr);
    tracing::info!("  RPC endpoint: http://{}/rpc", addr);
    tracing::info!("  Health check: http://{}/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use quill_storage::MemoryStorage;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        create_router(Arc::new(QuillServer::new(Arc::new(MemoryStorage::new()))))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_rpc_call() {
        let request = json!({
            "jsonrpc": "2.0",
            "id": "a",
            "method": "operations/call",
            "params": {"name": "listAccounts", "selection": ["name"]}
        });

        let response = router()
            .oneshot(
                Request::post("/rpc")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(request.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "a");
        assert_eq!(body["result"]["data"], json!({"listAccounts": []}));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let response = router()
            .oneshot(
                Request::post("/rpc")
                    .body(Body::from(vec![b' '; MAX_BODY_SIZE + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
