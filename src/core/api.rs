//! Landing page API endpoints
//!
//! Provides REST API endpoints for the landing page:
//! - POST /api/waitlist - Join the waitlist with an email and idea
//! - POST /api/analytics - Record a coarse analytics event

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::db::{RecordStore, StoreError};
use crate::core::{
    AnalyticsEvent, ApiError, DUPLICATE_EMAIL_CODE, SignupValidationError, WaitlistSignup,
    validate_signup,
};

/// API state containing the record store
#[derive(Clone)]
pub struct WaitlistApiState {
    pub store: Arc<dyn RecordStore>,
}

impl WaitlistApiState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// Errors returned by the landing page API
#[derive(Debug, thiserror::Error)]
pub enum WaitlistApiError {
    #[error("Email already on the waitlist")]
    DuplicateEmail,

    #[error("{0}")]
    InvalidSignup(#[from] SignupValidationError),

    #[error("Unknown event type: {0}")]
    InvalidEvent(String),

    #[error("Internal error")]
    InternalError(String),
}

impl From<StoreError> for WaitlistApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => WaitlistApiError::DuplicateEmail,
            StoreError::DatabaseError(e) => WaitlistApiError::InternalError(e.to_string()),
        }
    }
}

/// Convert WaitlistApiError to API response
impl IntoResponse for WaitlistApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            WaitlistApiError::DuplicateEmail => (StatusCode::CONFLICT, DUPLICATE_EMAIL_CODE),
            WaitlistApiError::InvalidSignup(SignupValidationError::InvalidEmail) => {
                (StatusCode::BAD_REQUEST, "INVALID_EMAIL")
            }
            WaitlistApiError::InvalidSignup(SignupValidationError::IdeaTooLong) => {
                (StatusCode::BAD_REQUEST, "INVALID_IDEA")
            }
            WaitlistApiError::InvalidEvent(_) => (StatusCode::BAD_REQUEST, "INVALID_EVENT"),
            WaitlistApiError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Create the landing page API router
pub fn waitlist_api_router(state: WaitlistApiState) -> Router {
    Router::new()
        .route("/api/waitlist", post(join_waitlist_handler))
        .route("/api/analytics", post(record_event_handler))
        .with_state(state)
}

/// POST /api/waitlist
/// Add an email and idea to the waitlist
async fn join_waitlist_handler(
    State(state): State<WaitlistApiState>,
    Json(request): Json<WaitlistSignup>,
) -> Result<(StatusCode, Json<SuccessResponse>), WaitlistApiError> {
    let signup = request.normalized();
    validate_signup(&signup)?;

    match state.store.insert_signup(&signup).await {
        Ok(entry) => {
            tracing::info!("Waitlist signup stored: {}", entry.id);
            Ok((
                StatusCode::CREATED,
                Json(SuccessResponse {
                    success: true,
                    message: "You're on the waitlist".to_string(),
                }),
            ))
        }
        Err(StoreError::DuplicateKey) => {
            tracing::info!("Duplicate waitlist signup rejected");
            Err(WaitlistApiError::DuplicateEmail)
        }
        Err(err) => {
            tracing::error!("Failed to store waitlist signup: {}", err);
            Err(err.into())
        }
    }
}

/// POST /api/analytics
/// Record an analytics event
async fn record_event_handler(
    State(state): State<WaitlistApiState>,
    Json(event): Json<AnalyticsEvent>,
) -> Result<StatusCode, WaitlistApiError> {
    if event.kind().is_err() {
        return Err(WaitlistApiError::InvalidEvent(event.event_type));
    }

    state.store.insert_event(&event).await.map_err(|err| {
        tracing::warn!("Failed to store analytics event: {}", err);
        WaitlistApiError::from(err)
    })?;

    tracing::debug!("Analytics event recorded: {}", event.event_type);

    Ok(StatusCode::ACCEPTED)
}
