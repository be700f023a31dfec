//! Resource entity model.

use std::collections::HashMap;

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::event_resource::EventResource;

pub use eventdesk_core::resource::{NewResource, ResourcePatch};

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub resource_id: DbId,
    pub resource_name: String,
    pub description: Option<String>,
    pub cost_per_unit: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A resource with its event allocations loaded.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceWithEventResources {
    #[serde(flatten)]
    pub resource: Resource,
    pub event_resources: Vec<EventResource>,
}

impl ResourceWithEventResources {
    /// Pair each resource with the allocations that reference it.
    ///
    /// Resource order is preserved; allocations keep their input order within
    /// each resource. Allocations for resources not in `resources` are dropped.
    pub fn attach(resources: Vec<Resource>, allocations: Vec<EventResource>) -> Vec<Self> {
        let mut by_resource: HashMap<DbId, Vec<EventResource>> = HashMap::new();
        for allocation in allocations {
            by_resource
                .entry(allocation.resource_id)
                .or_default()
                .push(allocation);
        }

        resources
            .into_iter()
            .map(|resource| {
                let event_resources = by_resource
                    .remove(&resource.resource_id)
                    .unwrap_or_default();
                Self {
                    resource,
                    event_resources,
                }
            })
            .collect()
    }
}
