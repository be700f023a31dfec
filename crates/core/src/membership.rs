//! Composite-key associations: organization membership and user roles.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation;

/// Payload for adding a user to an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewOrganizationUser {
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<DbId>,

    #[validate(required(message = "organization_id is required"))]
    pub organization_id: Option<DbId>,
}

/// Payload for granting a role to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewUserRole {
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<DbId>,

    #[validate(required(message = "role_id is required"))]
    pub role_id: Option<DbId>,
}

pub fn validate_organization_user(input: &NewOrganizationUser) -> Vec<String> {
    validation::messages(input)
}

pub fn validate_user_role(input: &NewUserRole) -> Vec<String> {
    validation::messages(input)
}
