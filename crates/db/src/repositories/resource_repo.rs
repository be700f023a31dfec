//! Repository for the `resources` table.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{NewResource, Resource, ResourcePatch, ResourceWithEventResources};
use crate::repositories::EventResourceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "resource_id, resource_name, description, cost_per_unit, created_at, updated_at";

/// Provides CRUD operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (resource_name, description, cost_per_unit)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.resource_name)
            .bind(&input.description)
            .bind(input.cost_per_unit)
            .fetch_one(pool)
            .await
    }

    /// List all resources, oldest first, with their event allocations.
    pub async fn list(pool: &PgPool) -> Result<Vec<ResourceWithEventResources>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY created_at, resource_id");
        let resources = sqlx::query_as::<_, Resource>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = resources.iter().map(|r| r.resource_id).collect();
        let allocations = EventResourceRepo::list_for_resources(pool, &ids).await?;

        Ok(ResourceWithEventResources::attach(resources, allocations))
    }

    /// Find a resource by ID, with its event allocations.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ResourceWithEventResources>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE resource_id = $1");
        let resource = sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(resource) = resource else {
            return Ok(None);
        };

        let allocations = EventResourceRepo::list_for_resources(pool, &[id]).await?;
        Ok(ResourceWithEventResources::attach(vec![resource], allocations).pop())
    }

    /// Update a resource. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ResourcePatch,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                resource_name = COALESCE($2, resource_name),
                description = COALESCE($3, description),
                cost_per_unit = COALESCE($4, cost_per_unit)
             WHERE resource_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.resource_name)
            .bind(&input.description)
            .bind(input.cost_per_unit)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource by ID. Its allocations are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE resource_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
