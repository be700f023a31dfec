//! Repository for the `feedback` table. Uses soft delete.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{Feedback, FeedbackPatch, NewFeedback, RatingSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "feedback_id, event_id, user_id, rating, comments, deleted_at, created_at, updated_at";

/// Provides CRUD operations for event feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a feedback entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (event_id, user_id, rating, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.event_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Find a feedback entry by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedback WHERE feedback_id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback for an event, newest first. Excludes soft-deleted rows.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback
             WHERE event_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a feedback entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FeedbackPatch,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET
                rating = COALESCE($2, rating),
                comments = COALESCE($3, comments)
             WHERE feedback_id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a feedback entry. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE feedback SET deleted_at = NOW() WHERE feedback_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count and average rating of the live feedback for an event.
    pub async fn rating_summary(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<RatingSummary, sqlx::Error> {
        let (count, average_rating): (i64, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(*), AVG(rating)::DOUBLE PRECISION
             FROM feedback
             WHERE event_id = $1 AND deleted_at IS NULL",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await?;

        Ok(RatingSummary {
            event_id,
            count,
            average_rating,
        })
    }
}
