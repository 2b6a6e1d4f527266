//! Axum HTTP API
//!
//! Routes:
//! - `GET    /health`
//! - `POST   /predict`            multipart `image` file, optional `session_id`
//! - `POST   /chat`               `{message, session_id?}`
//! - `GET    /chat/:session_id`   history snapshot
//! - `DELETE /chat/:session_id`   explicit eviction

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::chat::{BotanicalResponder, ChatService, InMemorySessionStore};
use crate::classifier::{ClassificationResult, ColorHeuristicClassifier};
use crate::config::ServerConfig;
use crate::error::{ChatError, ClassifyError};

/// Accepted upload extensions (case-insensitive)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ColorHeuristicClassifier>,
    pub chat: Arc<ChatService<InMemorySessionStore>>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!("Initializing color heuristic classifier...");
        let classifier = Arc::new(ColorHeuristicClassifier::new(config.classifier.clone()));

        tracing::info!(
            "Initializing Moka session store (TTL {:?}, capacity {})...",
            config.sessions.ttl,
            config.sessions.max_sessions
        );
        let store = InMemorySessionStore::new(&config.sessions, config.responder.history_cap);
        let chat = Arc::new(ChatService::new(
            BotanicalResponder::new(config.responder.clone()),
            store,
        ));

        Self {
            classifier,
            chat,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Image identification (multipart upload)
        .route(
            "/predict",
            post(predict).layer(DefaultBodyLimit::max(upload_limit)),
        )

        // Chat endpoints
        .route("/chat", post(chat))
        .route("/chat/:session_id", get(get_history).delete(delete_session))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn prediction_json(result: &ClassificationResult) -> Result<serde_json::Value, AppError> {
    let mut value = serde_json::to_value(result)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    if let Some(fields) = value.as_object_mut() {
        fields.insert(
            "confidence_percent".to_string(),
            serde_json::json!(result.confidence_percent()),
        );
    }
    Ok(value)
}

async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut upload = None;
    let mut session_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                upload = Some((filename, data));
            }
            "session_id" => session_id = Some(field.text().await?),
            _ => {}
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::BadRequest("No image file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::BadRequest("No file selected".to_string()));
    }
    if !allowed_file(&filename) {
        return Err(AppError::BadRequest(
            "Invalid file type. Please upload PNG, JPG, JPEG, GIF, or WEBP images.".to_string(),
        ));
    }

    tracing::info!("Classifying upload {} ({} bytes)", filename, data.len());

    // CPU-bound work: run in blocking thread pool
    let classifier = state.classifier.clone();
    let result = tokio::task::spawn_blocking(move || classifier.classify(&data))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::from)?;

    if let Some(id) = session_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        state.chat.remember_plant(id, result.label);
    }

    Ok(Json(prediction_json(&result)?))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session_id = payload
        .session_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let reply = state.chat.chat(&session_id, &payload.message)?;

    Ok(Json(serde_json::json!({
        "response": reply.text,
        "type": reply.kind,
        "session_id": session_id,
    })))
}

async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = state
        .chat
        .history(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))?;

    Ok(Json(serde_json::json!({
        "session_id": session.id(),
        "history": session.history(),
        "last_plant": session.last_plant(),
    })))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "evicted": state.chat.forget(&session_id)
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PayloadTooLarge(String),
    NotFound(String),
    Internal(String),
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::EmptyInput => AppError::BadRequest("No image data provided".to_string()),
            ClassifyError::Decode(e) => AppError::Internal(format!("Image decode error: {}", e)),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyInput => AppError::BadRequest("No message provided".to_string()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!("File too large: {}", err.body_text()))
        } else {
            AppError::BadRequest(err.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
