use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A row keyed by a pair of ids, e.g. a membership or role assignment.
    #[error("Entity not found: {entity} with {first_key} {first_id} and {second_key} {second_id}")]
    LinkNotFound {
        entity: &'static str,
        first_key: &'static str,
        first_id: DbId,
        second_key: &'static str,
        second_id: DbId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
