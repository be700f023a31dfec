//! Field-level validation helpers shared by every input payload.
//!
//! Input payloads derive [`validator::Validate`]. The helpers here turn a
//! [`ValidationErrors`] tree into a flat `field -> messages` map (the shape
//! returned to HTTP clients) or into a plain list of messages (the shape
//! used by batch tooling and tests).

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Key under which errors without an identifiable field are grouped.
pub const GENERAL_FIELD: &str = "_general";

/// Key `validator` uses for struct-level errors.
const SCHEMA_FIELD: &str = "__all__";

/// Validation messages keyed by field name, ordered by field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten `validator` errors into a `field -> messages` map.
///
/// Struct-level errors are grouped under [`GENERAL_FIELD`]. Errors declared
/// without a message fall back to `"<field> failed '<code>' check"`.
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut collected = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let key = if field == SCHEMA_FIELD {
            GENERAL_FIELD.to_string()
        } else {
            field.clone()
        };

        let messages = collected.entry(key).or_default();
        for err in field_errors.iter() {
            messages.push(describe(&field, err));
        }
    }

    collected
}

fn describe(field: &str, err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("{field} failed '{}' check", err.code),
    }
}

/// Run the derived rules on `input`, returning the collected field errors.
pub fn validate_fields<T: Validate>(input: &T) -> Result<(), FieldErrors> {
    input.validate().map_err(|e| collect_field_errors(&e))
}

/// Run the derived rules on `input` and return every message, ordered by
/// field name. An empty list means the input is valid.
pub fn messages<T: Validate>(input: &T) -> Vec<String> {
    match validate_fields(input) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.into_values().flatten().collect(),
    }
}

/// Build a [`FieldErrors`] map holding a single message under
/// [`GENERAL_FIELD`].
pub fn general_error(message: impl Into<String>) -> FieldErrors {
    field_error(GENERAL_FIELD, message)
}

/// Build a [`FieldErrors`] map holding a single message under `field`.
pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.into(), vec![message.into()]);
    errors
}

/// Validate `input`, folding all messages into a single
/// [`CoreError::Validation`]. Used outside the HTTP path.
pub fn ensure_valid<T: Validate>(input: &T) -> Result<(), CoreError> {
    let errors = messages(input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors.join("; ")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
