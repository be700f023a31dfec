//! Repository for the `notifications` table.
//!
//! Notifications are soft-deleted: `deleted_at` is set and every read query
//! filters on `deleted_at IS NULL`.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{NewNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "notification_id, user_id, event_id, message, sent_at, is_read, \
                       is_disabled, deleted_at, created_at, updated_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification. `sent_at` defaults to now.
    pub async fn create(
        pool: &PgPool,
        input: &NewNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, event_id, message, sent_at)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(input.event_id)
            .bind(&input.message)
            .bind(input.sent_at)
            .fetch_one(pool)
            .await
    }

    /// Find a notification by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE notification_id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's notifications, newest first.
    ///
    /// Disabled notifications are only included when `include_disabled` is
    /// `true`. Soft-deleted rows are never returned.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        include_disabled: bool,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if include_disabled {
            ""
        } else {
            "AND is_disabled = false"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1 AND deleted_at IS NULL {filter}
             ORDER BY sent_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a notification as read. Returns `None` if it does not exist.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_read = true
             WHERE notification_id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Enable or disable a notification. Returns `None` if it does not exist.
    pub async fn set_disabled(
        pool: &PgPool,
        id: DbId,
        disabled: bool,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_disabled = $2
             WHERE notification_id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(disabled)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a notification. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET deleted_at = NOW()
             WHERE notification_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
