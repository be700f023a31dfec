//! Repository for the `event_resources` table.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_resource::{EventResource, EventResourcePatch, NewEventResource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "event_resource_id, event_id, resource_id, quantity, amount_spent, created_at, updated_at";

/// Provides CRUD operations for event resource allocations.
pub struct EventResourceRepo;

impl EventResourceRepo {
    /// Insert a new allocation, returning the created row.
    ///
    /// Fails with a foreign key violation if `resource_id` does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &NewEventResource,
    ) -> Result<EventResource, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_resources (event_id, resource_id, quantity, amount_spent)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventResource>(&query)
            .bind(input.event_id)
            .bind(input.resource_id)
            .bind(input.quantity)
            .bind(input.amount_spent)
            .fetch_one(pool)
            .await
    }

    /// List all allocations, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventResource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_resources ORDER BY created_at");
        sqlx::query_as::<_, EventResource>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an allocation by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventResource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_resources WHERE event_resource_id = $1");
        sqlx::query_as::<_, EventResource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List allocations for one event.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventResource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_resources WHERE event_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, EventResource>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List allocations referencing any of the given resources.
    pub async fn list_for_resources(
        pool: &PgPool,
        resource_ids: &[DbId],
    ) -> Result<Vec<EventResource>, sqlx::Error> {
        if resource_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM event_resources
             WHERE resource_id = ANY($1)
             ORDER BY created_at"
        );
        sqlx::query_as::<_, EventResource>(&query)
            .bind(resource_ids)
            .fetch_all(pool)
            .await
    }

    /// Update an allocation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EventResourcePatch,
    ) -> Result<Option<EventResource>, sqlx::Error> {
        let query = format!(
            "UPDATE event_resources SET
                quantity = COALESCE($2, quantity),
                amount_spent = COALESCE($3, amount_spent)
             WHERE event_resource_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventResource>(&query)
            .bind(id)
            .bind(input.quantity)
            .bind(input.amount_spent)
            .fetch_optional(pool)
            .await
    }

    /// Delete an allocation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_resources WHERE event_resource_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
