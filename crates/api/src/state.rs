use std::sync::Arc;

use eventdesk_core::services::{
    NotificationService, PaymentService, PlaceholderNotificationService, PlaceholderPaymentService,
    PlaceholderTicketService, TicketService,
};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: eventdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payment provider integration.
    pub payments: Arc<dyn PaymentService>,
    /// Ticket issuing integration.
    pub tickets: Arc<dyn TicketService>,
    /// Outbound message delivery (email, push).
    pub notifier: Arc<dyn NotificationService>,
}

impl AppState {
    /// Build state wired to the placeholder external integrations.
    pub fn with_placeholders(pool: eventdesk_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            payments: PlaceholderPaymentService::shared(),
            tickets: PlaceholderTicketService::shared(),
            notifier: PlaceholderNotificationService::shared(),
        }
    }
}
