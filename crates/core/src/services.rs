//! Contracts for external payment, ticketing and notification integrations.
//!
//! None of these integrations exist yet. Each trait describes the calls the
//! API expects to make; the `Placeholder*` implementations return fixed
//! values (`false`, `"pending"`, an empty buffer, an empty list or an empty
//! object) and log a warning so that an unconfigured integration is visible
//! in the logs. Replace them in `AppState` once a real provider is wired in.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;

/// Status reported for every payment until a gateway is integrated.
pub const PLACEHOLDER_PAYMENT_STATUS: &str = "pending";

// ---------------------------------------------------------------------------
// Request shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub event_id: DbId,
    pub user_id: DbId,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    pub payment_id: DbId,
    pub amount: Option<f64>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    pub event_id: DbId,
    pub user_id: DbId,
    pub registration_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Charge a user for an event. Returns whether the charge succeeded.
    async fn process_payment(&self, request: &PaymentRequest) -> Result<bool, CoreError>;

    /// Current status of a payment.
    async fn payment_status(&self, payment_id: DbId) -> Result<String, CoreError>;

    /// Full gateway record for a payment.
    async fn payment_details(&self, payment_id: DbId) -> Result<Value, CoreError>;

    /// Refund all or part of a payment. Returns whether the refund was issued.
    async fn refund_payment(&self, request: &RefundRequest) -> Result<bool, CoreError>;

    /// Payments made by a user, newest first.
    async fn payment_history(&self, user_id: DbId) -> Result<Vec<Value>, CoreError>;
}

#[async_trait]
pub trait TicketService: Send + Sync {
    /// Issue a ticket for a registration, returning the ticket record.
    async fn issue_ticket(&self, request: &TicketRequest) -> Result<Value, CoreError>;

    /// Render a ticket as a PDF document.
    async fn render_ticket_pdf(&self, ticket_id: DbId) -> Result<Vec<u8>, CoreError>;

    /// Check a scanned ticket code at the door.
    async fn validate_ticket(&self, ticket_code: &str) -> Result<bool, CoreError>;

    /// Move a ticket to another user.
    async fn transfer_ticket(&self, ticket_id: DbId, to_user_id: DbId) -> Result<bool, CoreError>;

    /// Tickets held by a user.
    async fn tickets_for_user(&self, user_id: DbId) -> Result<Vec<Value>, CoreError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Push a notification to a user's devices.
    async fn send_notification(&self, user_id: DbId, message: &str) -> Result<bool, CoreError>;

    /// Send an email.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, CoreError>;

    /// Send the same message to many users, returning those reached.
    async fn send_bulk(&self, user_ids: &[DbId], message: &str) -> Result<Vec<DbId>, CoreError>;

    /// Delivery receipt for a previously sent notification.
    async fn delivery_status(&self, notification_id: DbId) -> Result<Value, CoreError>;
}

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Unimplemented payment integration.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderPaymentService;

impl PlaceholderPaymentService {
    pub fn shared() -> Arc<dyn PaymentService> {
        Arc::new(Self)
    }
}

#[async_trait]
impl PaymentService for PlaceholderPaymentService {
    async fn process_payment(&self, request: &PaymentRequest) -> Result<bool, CoreError> {
        tracing::warn!(event_id = %request.event_id, "Payment integration not configured");
        Ok(false)
    }

    async fn payment_status(&self, payment_id: DbId) -> Result<String, CoreError> {
        tracing::warn!(%payment_id, "Payment integration not configured");
        Ok(PLACEHOLDER_PAYMENT_STATUS.to_string())
    }

    async fn payment_details(&self, payment_id: DbId) -> Result<Value, CoreError> {
        tracing::warn!(%payment_id, "Payment integration not configured");
        Ok(empty_object())
    }

    async fn refund_payment(&self, request: &RefundRequest) -> Result<bool, CoreError> {
        tracing::warn!(payment_id = %request.payment_id, "Payment integration not configured");
        Ok(false)
    }

    async fn payment_history(&self, user_id: DbId) -> Result<Vec<Value>, CoreError> {
        tracing::warn!(%user_id, "Payment integration not configured");
        Ok(Vec::new())
    }
}

/// Unimplemented ticketing integration.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTicketService;

impl PlaceholderTicketService {
    pub fn shared() -> Arc<dyn TicketService> {
        Arc::new(Self)
    }
}

#[async_trait]
impl TicketService for PlaceholderTicketService {
    async fn issue_ticket(&self, request: &TicketRequest) -> Result<Value, CoreError> {
        tracing::warn!(event_id = %request.event_id, "Ticket integration not configured");
        Ok(empty_object())
    }

    async fn render_ticket_pdf(&self, ticket_id: DbId) -> Result<Vec<u8>, CoreError> {
        tracing::warn!(%ticket_id, "Ticket integration not configured");
        Ok(Vec::new())
    }

    async fn validate_ticket(&self, _ticket_code: &str) -> Result<bool, CoreError> {
        tracing::warn!("Ticket integration not configured");
        Ok(false)
    }

    async fn transfer_ticket(&self, ticket_id: DbId, _to_user_id: DbId) -> Result<bool, CoreError> {
        tracing::warn!(%ticket_id, "Ticket integration not configured");
        Ok(false)
    }

    async fn tickets_for_user(&self, user_id: DbId) -> Result<Vec<Value>, CoreError> {
        tracing::warn!(%user_id, "Ticket integration not configured");
        Ok(Vec::new())
    }
}

/// Unimplemented notification delivery channel.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderNotificationService;

impl PlaceholderNotificationService {
    pub fn shared() -> Arc<dyn NotificationService> {
        Arc::new(Self)
    }
}

#[async_trait]
impl NotificationService for PlaceholderNotificationService {
    async fn send_notification(&self, user_id: DbId, _message: &str) -> Result<bool, CoreError> {
        tracing::warn!(%user_id, "Notification delivery not configured");
        Ok(false)
    }

    async fn send_email(&self, to: &str, _subject: &str, _body: &str) -> Result<bool, CoreError> {
        tracing::warn!(%to, "Email delivery not configured");
        Ok(false)
    }

    async fn send_bulk(&self, user_ids: &[DbId], _message: &str) -> Result<Vec<DbId>, CoreError> {
        tracing::warn!(recipients = user_ids.len(), "Notification delivery not configured");
        Ok(Vec::new())
    }

    async fn delivery_status(&self, notification_id: DbId) -> Result<Value, CoreError> {
        tracing::warn!(%notification_id, "Notification delivery not configured");
        Ok(empty_object())
    }
}
