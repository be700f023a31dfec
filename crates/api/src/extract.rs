//! Custom Axum extractors.
//!
//! - [`ValidatedJson`]: deserialize a JSON body and run its `validator`
//!   rules before the handler sees it.
//!
//! # Example
//!
//! ```ignore
//! pub async fn create(
//!     State(state): State<AppState>,
//!     ValidatedJson(input): ValidatedJson<NewResource>,
//! ) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
//!     // `input` has passed every field rule here.
//! }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use eventdesk_core::validation::{field_error, general_error, validate_fields, FieldErrors};
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;
use validator::Validate;

use crate::error::AppError;

/// A JSON request body that has passed field validation.
///
/// Rejections are reported as [`AppError::InvalidFields`] (400):
/// - a missing content type or malformed JSON is listed under `_general`;
/// - a mistyped or missing value is listed under the top-level field it
///   belongs to;
/// - rule failures are listed under the offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                AppError::InvalidFields(general_error(rejection.body_text()))
            })?;

        let value: T = serde_path_to_error::deserialize(body).map_err(|err| {
            tracing::debug!(path = %err.path(), error = %err.inner(), "Rejected JSON body");
            AppError::InvalidFields(deserialize_errors(&err))
        })?;

        validate_fields(&value).map_err(AppError::InvalidFields)?;

        Ok(Self(value))
    }
}

/// Key a deserialization failure by the top-level field it occurred in.
fn deserialize_errors(err: &serde_path_to_error::Error<serde_json::Error>) -> FieldErrors {
    let message = err.inner().to_string();
    match offending_field(err.path(), &message) {
        Some(field) => field_error(field, message),
        None => general_error(message),
    }
}

/// The top-level field a deserialization error belongs to. A missing
/// top-level field fails at the root, so its name is only in the message.
fn offending_field(path: &serde_path_to_error::Path, message: &str) -> Option<String> {
    match path.iter().next() {
        Some(Segment::Map { key }) => Some(key.clone()),
        Some(_) => None,
        None => message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split_once('`'))
            .map(|(field, _)| field.to_string()),
    }
}
