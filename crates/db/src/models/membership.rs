//! Composite-key association rows.

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eventdesk_core::membership::{NewOrganizationUser, NewUserRole};

/// A row from the `organization_users` table. Primary key is
/// `(organization_id, user_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrganizationUser {
    pub organization_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `user_roles` table. Primary key is `(user_id, role_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRole {
    pub user_id: DbId,
    pub role_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
