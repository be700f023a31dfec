//! Integration tests for resource, allocation, budget and membership CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create then fetch returns the stored fields
//! - Updates merge only the provided fields
//! - Updating or deleting a missing id reports absence
//! - Foreign key and cascade behaviour of allocations
//! - Composite-key associations reject duplicates

use assert_matches::assert_matches;
use eventdesk_db::models::budget::{BudgetPatch, NewBudget};
use eventdesk_db::models::event_resource::{EventResourcePatch, NewEventResource};
use eventdesk_db::models::membership::{NewOrganizationUser, NewUserRole};
use eventdesk_db::models::resource::{NewResource, ResourcePatch};
use sqlx::PgPool;
use uuid::Uuid;
use eventdesk_db::repositories::{
    BudgetRepo, EventResourceRepo, OrganizationUserRepo, ResourceRepo, UserRoleRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_resource(name: &str, cost: f64) -> NewResource {
    NewResource {
        resource_name: Some(name.to_string()),
        description: Some(format!("{name} for events")),
        cost_per_unit: Some(cost),
    }
}

fn new_allocation(event_id: Uuid, resource_id: Uuid, quantity: i32) -> NewEventResource {
    NewEventResource {
        event_id: Some(event_id),
        resource_id: Some(resource_id),
        quantity: Some(quantity),
        amount_spent: None,
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_returns_same_fields(pool: PgPool) {
    let created = ResourceRepo::create(&pool, &new_resource("Projector", 15.5))
        .await
        .unwrap();

    let found = ResourceRepo::find_by_id(&pool, created.resource_id)
        .await
        .unwrap()
        .expect("resource should exist");

    assert_eq!(found.resource.resource_name, "Projector");
    assert_eq!(found.resource.description.as_deref(), Some("Projector for events"));
    assert_eq!(found.resource.cost_per_unit, 15.5);
    assert!(found.event_resources.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_loads_allocations(pool: PgPool) {
    let chairs = ResourceRepo::create(&pool, &new_resource("Chairs", 2.0))
        .await
        .unwrap();
    let stage = ResourceRepo::create(&pool, &new_resource("Stage", 400.0))
        .await
        .unwrap();
    let event_id = Uuid::new_v4();

    EventResourceRepo::create(&pool, &new_allocation(event_id, chairs.resource_id, 120))
        .await
        .unwrap();
    EventResourceRepo::create(&pool, &new_allocation(event_id, chairs.resource_id, 30))
        .await
        .unwrap();

    let all = ResourceRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    let loaded_chairs = all
        .iter()
        .find(|r| r.resource.resource_id == chairs.resource_id)
        .unwrap();
    assert_eq!(loaded_chairs.event_resources.len(), 2);

    let loaded_stage = all
        .iter()
        .find(|r| r.resource.resource_id == stage.resource_id)
        .unwrap();
    assert!(loaded_stage.event_resources.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_merges_provided_fields(pool: PgPool) {
    let created = ResourceRepo::create(&pool, &new_resource("Microphone", 8.0))
        .await
        .unwrap();

    let patch = ResourcePatch {
        cost_per_unit: Some(9.25),
        ..Default::default()
    };
    let updated = ResourceRepo::update(&pool, created.resource_id, &patch)
        .await
        .unwrap()
        .expect("resource should exist");

    assert_eq!(updated.cost_per_unit, 9.25);
    assert_eq!(updated.resource_name, "Microphone");
    assert_eq!(updated.description, created.description);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_resource_returns_none(pool: PgPool) {
    let result = ResourceRepo::update(&pool, Uuid::new_v4(), &ResourcePatch::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_twice_reports_true_then_false(pool: PgPool) {
    let created = ResourceRepo::create(&pool, &new_resource("Lectern", 20.0))
        .await
        .unwrap();

    assert!(ResourceRepo::delete(&pool, created.resource_id).await.unwrap());
    assert!(!ResourceRepo::delete(&pool, created.resource_id).await.unwrap());
    assert!(ResourceRepo::find_by_id(&pool, created.resource_id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Event resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn allocation_requires_existing_resource(pool: PgPool) {
    let result =
        EventResourceRepo::create(&pool, &new_allocation(Uuid::new_v4(), Uuid::new_v4(), 1)).await;

    assert_matches!(
        result,
        Err(sqlx::Error::Database(err)) if err.code().as_deref() == Some("23503")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_quantity_is_rejected_by_schema(pool: PgPool) {
    let resource = ResourceRepo::create(&pool, &new_resource("Tables", 5.0))
        .await
        .unwrap();
    let result =
        EventResourceRepo::create(&pool, &new_allocation(Uuid::new_v4(), resource.resource_id, 0))
            .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_resource_cascades_to_allocations(pool: PgPool) {
    let resource = ResourceRepo::create(&pool, &new_resource("Speakers", 40.0))
        .await
        .unwrap();
    let allocation =
        EventResourceRepo::create(&pool, &new_allocation(Uuid::new_v4(), resource.resource_id, 2))
            .await
            .unwrap();

    assert!(ResourceRepo::delete(&pool, resource.resource_id).await.unwrap());
    assert!(EventResourceRepo::find_by_id(&pool, allocation.event_resource_id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn allocation_update_and_event_listing(pool: PgPool) {
    let resource = ResourceRepo::create(&pool, &new_resource("Lights", 12.0))
        .await
        .unwrap();
    let event_id = Uuid::new_v4();
    let allocation =
        EventResourceRepo::create(&pool, &new_allocation(event_id, resource.resource_id, 4))
            .await
            .unwrap();
    EventResourceRepo::create(&pool, &new_allocation(Uuid::new_v4(), resource.resource_id, 1))
        .await
        .unwrap();

    let patch = EventResourcePatch {
        quantity: None,
        amount_spent: Some(48.0),
    };
    let updated = EventResourceRepo::update(&pool, allocation.event_resource_id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.quantity, 4);
    assert_eq!(updated.amount_spent, Some(48.0));

    let for_event = EventResourceRepo::list_for_event(&pool, event_id).await.unwrap();
    assert_eq!(for_event.len(), 1);
    assert_eq!(EventResourceRepo::list(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_defaults_income_and_expenditure(pool: PgPool) {
    let event_id = Uuid::new_v4();
    let input = NewBudget {
        event_id: Some(event_id),
        expected_amount: Some(2500.0),
        ..Default::default()
    };

    let budget = BudgetRepo::create(&pool, &input).await.unwrap();
    assert_eq!(budget.income, 0.0);
    assert_eq!(budget.expenditure, 0.0);
    assert!(budget.notes.is_none());

    let patch = BudgetPatch {
        expenditure: Some(300.0),
        notes: Some("Deposit paid".into()),
        ..Default::default()
    };
    let updated = BudgetRepo::update(&pool, budget.budget_id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.expected_amount, 2500.0);
    assert_eq!(updated.expenditure, 300.0);

    let for_event = BudgetRepo::list_for_event(&pool, event_id).await.unwrap();
    assert_eq!(for_event.len(), 1);

    assert!(BudgetRepo::delete(&pool, budget.budget_id).await.unwrap());
    assert!(BudgetRepo::find_by_id(&pool, budget.budget_id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Composite-key associations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_membership_is_unique_per_pair(pool: PgPool) {
    let input = NewOrganizationUser {
        user_id: Some(Uuid::new_v4()),
        organization_id: Some(Uuid::new_v4()),
    };

    assert!(OrganizationUserRepo::add(&pool, &input).await.unwrap().is_some());
    assert!(OrganizationUserRepo::add(&pool, &input).await.unwrap().is_none());

    let organization_id = input.organization_id.unwrap();
    let user_id = input.user_id.unwrap();
    assert_eq!(
        OrganizationUserRepo::list_for_organization(&pool, organization_id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(OrganizationUserRepo::list_for_user(&pool, user_id).await.unwrap().len(), 1);

    assert!(OrganizationUserRepo::remove(&pool, organization_id, user_id).await.unwrap());
    assert!(!OrganizationUserRepo::remove(&pool, organization_id, user_id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_roles_list_by_either_key(pool: PgPool) {
    let user_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();

    for role in [role_id, Uuid::new_v4()] {
        let input = NewUserRole {
            user_id: Some(user_id),
            role_id: Some(role),
        };
        UserRoleRepo::add(&pool, &input).await.unwrap().unwrap();
    }

    assert_eq!(UserRoleRepo::list_for_user(&pool, user_id).await.unwrap().len(), 2);
    assert_eq!(UserRoleRepo::list_for_role(&pool, role_id).await.unwrap().len(), 1);
    assert!(UserRoleRepo::remove(&pool, user_id, role_id).await.unwrap());
}
