//! Resource inventory payloads and validation.
//!
//! A resource is an item that can be allocated to events (projector, chairs,
//! catering) with a unit cost.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

/// Minimum length of a resource name, in characters.
pub const MIN_NAME_LENGTH: u64 = 3;

/// Maximum length of a resource name, in characters.
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum length of a resource description, in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 500;

/// Payload for creating a resource.
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewResource {
    #[validate(
        required(message = "resource_name is required"),
        length(
            min = MIN_NAME_LENGTH,
            max = MAX_NAME_LENGTH,
            message = "resource_name must be between 3 and 100 characters"
        )
    )]
    pub resource_name: Option<String>,

    #[validate(
        required(message = "description is required"),
        length(max = MAX_DESCRIPTION_LENGTH, message = "description must be at most 500 characters")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "cost_per_unit is required"),
        range(exclusive_min = 0.0, message = "cost_per_unit must be a positive number")
    )]
    pub cost_per_unit: Option<f64>,
}

/// Partial update for a resource. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResourcePatch {
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "resource_name must be between 3 and 100 characters"
    ))]
    pub resource_name: Option<String>,

    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "description must be at most 500 characters"
    ))]
    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "cost_per_unit must be a positive number"))]
    pub cost_per_unit: Option<f64>,
}

/// Validate a create payload. Returns an empty list when valid.
pub fn validate(input: &NewResource) -> Vec<String> {
    validation::messages(input)
}

/// Validate an update payload. Returns an empty list when valid.
pub fn validate_patch(input: &ResourcePatch) -> Vec<String> {
    validation::messages(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_fields;

    fn projector() -> NewResource {
        NewResource {
            resource_name: Some("Projector".into()),
            description: Some("HD projector".into()),
            cost_per_unit: Some(15.5),
        }
    }

    #[test]
    fn valid_resource_has_no_errors() {
        assert!(validate(&projector()).is_empty());
    }

    #[test]
    fn name_at_bounds_is_accepted() {
        let mut input = projector();
        input.resource_name = Some("n".repeat(MIN_NAME_LENGTH as usize));
        assert!(validate(&input).is_empty());

        input.resource_name = Some("n".repeat(MAX_NAME_LENGTH as usize));
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn short_name_reports_only_name() {
        let mut input = projector();
        input.resource_name = Some("ab".into());
        assert_eq!(
            validate(&input),
            vec!["resource_name must be between 3 and 100 characters".to_string()]
        );
    }

    #[test]
    fn long_name_reports_only_name() {
        let mut input = projector();
        input.resource_name = Some("n".repeat(MAX_NAME_LENGTH as usize + 1));
        let errors = validate_fields(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("resource_name"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut input = projector();
        input.resource_name = Some("ééé".into());
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn long_description_reports_only_description() {
        let mut input = projector();
        input.description = Some("d".repeat(MAX_DESCRIPTION_LENGTH as usize + 1));
        assert_eq!(
            validate(&input),
            vec!["description must be at most 500 characters".to_string()]
        );
    }

    #[test]
    fn zero_cost_is_rejected() {
        let mut input = projector();
        input.cost_per_unit = Some(0.0);
        assert_eq!(
            validate(&input),
            vec!["cost_per_unit must be a positive number".to_string()]
        );
    }

    #[test]
    fn negative_cost_is_rejected() {
        let mut input = projector();
        input.cost_per_unit = Some(-3.0);
        let errors = validate_fields(&input).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["cost_per_unit"]);
    }

    #[test]
    fn name_only_payload_lists_missing_fields() {
        let input = NewResource {
            resource_name: Some("A".into()),
            ..Default::default()
        };
        let errors = validate_fields(&input).unwrap_err();
        assert_eq!(errors["description"], vec!["description is required".to_string()]);
        assert_eq!(errors["cost_per_unit"], vec!["cost_per_unit is required".to_string()]);
        assert!(errors.contains_key("resource_name"));
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(validate_patch(&ResourcePatch::default()).is_empty());
    }

    #[test]
    fn patch_applies_same_bounds() {
        let patch = ResourcePatch {
            resource_name: Some("ab".into()),
            description: None,
            cost_per_unit: Some(0.0),
        };
        assert_eq!(validate_patch(&patch).len(), 2);
    }
}
