//! Handlers for the `/registrations` resource.
//!
//! Registration is not available yet; every route answers 501.

use axum::extract::OriginalUri;
use eventdesk_core::error::CoreError;

use crate::error::AppError;

/// ANY /registrations/*
pub async fn not_implemented(OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(path = %uri.path(), "Registration route called");
    AppError::Core(CoreError::NotImplemented(
        "Event registration is not available".into(),
    ))
}
