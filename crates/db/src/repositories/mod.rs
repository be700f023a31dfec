//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Callers are expected to have
//! validated create payloads; a missing required field surfaces as a
//! `NOT NULL` violation.

pub mod budget_repo;
pub mod event_resource_repo;
pub mod feedback_repo;
pub mod membership_repo;
pub mod notification_repo;
pub mod resource_repo;
pub mod venue_repo;

pub use budget_repo::BudgetRepo;
pub use event_resource_repo::EventResourceRepo;
pub use feedback_repo::FeedbackRepo;
pub use membership_repo::{OrganizationUserRepo, UserRoleRepo};
pub use notification_repo::NotificationRepo;
pub use resource_repo::ResourceRepo;
pub use venue_repo::VenueRepo;
