//! Repositories for the composite-key `organization_users` and `user_roles`
//! association tables.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::membership::{NewOrganizationUser, NewUserRole, OrganizationUser, UserRole};

/// Column list for `organization_users` queries.
const MEMBER_COLUMNS: &str = "organization_id, user_id, created_at, updated_at";

/// Column list for `user_roles` queries.
const ROLE_COLUMNS: &str = "user_id, role_id, created_at, updated_at";

/// Provides data access for organization membership.
pub struct OrganizationUserRepo;

impl OrganizationUserRepo {
    /// Add a user to an organization.
    ///
    /// Returns `None` if the pair already exists.
    pub async fn add(
        pool: &PgPool,
        input: &NewOrganizationUser,
    ) -> Result<Option<OrganizationUser>, sqlx::Error> {
        let query = format!(
            "INSERT INTO organization_users (organization_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (organization_id, user_id) DO NOTHING
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, OrganizationUser>(&query)
            .bind(input.organization_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the members of an organization, oldest membership first.
    pub async fn list_for_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<OrganizationUser>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM organization_users
             WHERE organization_id = $1
             ORDER BY created_at"
        );
        sqlx::query_as::<_, OrganizationUser>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// List the organizations a user belongs to.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OrganizationUser>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM organization_users
             WHERE user_id = $1
             ORDER BY created_at"
        );
        sqlx::query_as::<_, OrganizationUser>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a user from an organization. Returns `true` if a row was removed.
    pub async fn remove(
        pool: &PgPool,
        organization_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM organization_users WHERE organization_id = $1 AND user_id = $2",
        )
        .bind(organization_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}

/// Provides data access for user role grants.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Grant a role to a user.
    ///
    /// Returns `None` if the user already holds the role.
    pub async fn add(pool: &PgPool, input: &NewUserRole) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_roles (user_id, role_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, role_id) DO NOTHING
             RETURNING {ROLE_COLUMNS}"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(input.user_id)
            .bind(input.role_id)
            .fetch_optional(pool)
            .await
    }

    /// List the roles granted to a user.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<UserRole>, sqlx::Error> {
        let query = format!(
            "SELECT {ROLE_COLUMNS} FROM user_roles WHERE user_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the users holding a role.
    pub async fn list_for_role(pool: &PgPool, role_id: DbId) -> Result<Vec<UserRole>, sqlx::Error> {
        let query = format!(
            "SELECT {ROLE_COLUMNS} FROM user_roles WHERE role_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(role_id)
            .fetch_all(pool)
            .await
    }

    /// Revoke a role from a user. Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
