//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The create / patch payloads from `eventdesk_core`, re-exported so
//!   callers can import everything for one table from one place

pub mod budget;
pub mod event_resource;
pub mod feedback;
pub mod membership;
pub mod notification;
pub mod resource;
pub mod venue;
