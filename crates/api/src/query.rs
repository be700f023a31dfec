//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_disabled` flag.
///
/// Used by notification listing; disabled rows are hidden by default.
#[derive(Debug, Deserialize)]
pub struct IncludeDisabledParams {
    #[serde(default)]
    pub include_disabled: bool,
}
