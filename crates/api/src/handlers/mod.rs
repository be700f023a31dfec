pub mod budget;
pub mod event_resource;
pub mod feedback;
pub mod health;
pub mod membership;
pub mod notification;
pub mod payment;
pub mod registration;
pub mod resource;
pub mod venue;
