//! The content worker: a thin JSON API over a key-value store

use super::api_types::ApiResponse;
use crate::application::repositories::{KeyValueStore, StoreError};
use crate::domain::defaults::seed_entries;
use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

pub type WorkerState = Arc<dyn KeyValueStore>;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        let status = match &self {
            WorkerError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WorkerError::Store(e) => {
                error!("Worker storage failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

type WorkerResult = Result<Json<ApiResponse>, WorkerError>;

/// Every worker route, with permissive CORS so any site origin may call it
pub fn worker_router(store: WorkerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/api/data/{key}",
            get(get_value)
                .post(put_value)
                .put(put_value)
                .delete(delete_value),
        )
        .route("/api/list-keys", get(list_keys))
        .route("/api/initialize", post(initialize))
        .route("/api/test", get(test))
        .route("/api/debug", get(debug_info))
        .fallback(endpoint_not_found)
        .with_state(store)
        .layer(cors)
}

async fn get_value(State(store): State<WorkerState>, Path(key): Path<String>) -> WorkerResult {
    let raw = store
        .get(&key)
        .await?
        .ok_or_else(|| WorkerError::NotFound(format!("Key not found: {}", key)))?;

    let data: Value = serde_json::from_str(&raw)
        .map_err(|e| StoreError::Malformed(format!("Stored value for {} is not JSON: {}", key, e)))?;
    Ok(Json(ApiResponse::with_data(data)))
}

/// Stores the body verbatim once it is known to be JSON
async fn put_value(
    State(store): State<WorkerState>,
    Path(key): Path<String>,
    body: String,
) -> WorkerResult {
    if let Err(e) = serde_json::from_str::<Value>(&body) {
        return Err(WorkerError::BadRequest(format!("Invalid JSON body: {}", e)));
    }

    store.put(&key, body).await?;
    debug!("Stored {}", key);
    Ok(Json(ApiResponse::ok()))
}

async fn delete_value(State(store): State<WorkerState>, Path(key): Path<String>) -> WorkerResult {
    store.delete(&key).await?;
    debug!("Deleted {}", key);
    Ok(Json(ApiResponse::ok()))
}

#[derive(Debug, Deserialize)]
struct ListKeysQuery {
    prefix: Option<String>,
}

async fn list_keys(State(store): State<WorkerState>, Query(query): Query<ListKeysQuery>) -> WorkerResult {
    let entries = store.list(query.prefix.as_deref()).await?;
    let data = serde_json::to_value(entries).map_err(StoreError::from)?;
    Ok(Json(ApiResponse::with_data(data)))
}

/// Write every default key the store does not hold yet
async fn initialize(State(store): State<WorkerState>) -> WorkerResult {
    let mut seeded = Vec::new();
    for (key, value) in seed_entries() {
        if store.get(&key).await?.is_none() {
            store.put(&key, value.to_string()).await?;
            seeded.push(key);
        }
    }
    info!("Worker seeded {} default keys", seeded.len());

    Ok(Json(ApiResponse {
        data: Some(json!({ "seeded": seeded })),
        ..ApiResponse::with_message("Database initialized")
    }))
}

async fn test() -> Json<ApiResponse> {
    Json(ApiResponse {
        data: Some(json!({ "timestamp": Utc::now().to_rfc3339() })),
        ..ApiResponse::with_message("Worker is running")
    })
}

async fn debug_info(State(store): State<WorkerState>) -> WorkerResult {
    let keys = store.list(None).await?;
    Ok(Json(ApiResponse::with_data(json!({
        "timestamp": Utc::now().to_rfc3339(),
        "keyCount": keys.len(),
        "keys": keys,
    }))))
}

async fn endpoint_not_found() -> WorkerError {
    WorkerError::NotFound("Endpoint not found".to_string())
}
