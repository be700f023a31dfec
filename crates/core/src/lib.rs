//! Domain types, input payloads and validation rules for the event
//! management backend.
//!
//! Nothing in this crate touches the database or HTTP; the validation
//! functions here are reused by the API layer, the repository tests and any
//! batch tooling.

pub mod budget;
pub mod error;
pub mod event_resource;
pub mod feedback;
pub mod membership;
pub mod notification;
pub mod resource;
pub mod services;
pub mod types;
pub mod validation;
pub mod venue;
