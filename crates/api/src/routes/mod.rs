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

use axum::Router;

use crate::state::AppState;

/// Build the API route tree. Mounted at the root alongside the health check.
///
/// Route hierarchy:
///
/// ```text
/// /resources/create-resource                          create
/// /resources/find-all                                 list with allocations
/// /resources/find-one/{id}                            get
/// /resources/update-resource/{id}                     update
/// /resources/delete-resource/{id}                     delete
///
/// /budgets/create-budget                              create
/// /budgets/find-all                                   list
/// /budgets/find-one/{id}                              get
/// /budgets/by-event/{event_id}                        list for event
/// /budgets/update-budget/{id}                         update
/// /budgets/delete-budget/{id}                         delete
///
/// /event-resources/create-event-resource              create
/// /event-resources/find-all                           list
/// /event-resources/find-one/{id}                      get
/// /event-resources/by-event/{event_id}                list for event
/// /event-resources/update-event-resource/{id}         update
/// /event-resources/delete-event-resource/{id}         delete
///
/// /organization-users                                 add (POST)
/// /organization-users/organization/{organization_id}  members
/// /organization-users/user/{user_id}                  memberships
/// /organization-users/{organization_id}/{user_id}     remove (DELETE)
///
/// /user-roles                                         assign (POST)
/// /user-roles/user/{user_id}                          roles of user
/// /user-roles/role/{role_id}                          holders of role
/// /user-roles/{user_id}/{role_id}                     revoke (DELETE)
///
/// /notifications                                      create (POST)
/// /notifications/user/{user_id}                       list for user
/// /notifications/{id}                                 get, delete (soft)
/// /notifications/{id}/read                            mark read (PUT)
/// /notifications/{id}/disable                         disable (PUT)
///
/// /feedback                                           create (POST)
/// /feedback/{id}                                      get, update, delete (soft)
/// /feedback/event/{event_id}                          list for event
/// /feedback/event/{event_id}/summary                  rating summary
///
/// /venues/{venue_id}/slots                            list, create
/// /venues/slots/{slot_id}                             update, delete
///
/// /payments/{payment_id}                              payment status
///
/// /registrations/*                                    501
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Resource catalogue and per-event allocations.
        .nest("/resources", resource::router())
        .nest("/event-resources", event_resource::router())
        // Event budgets.
        .nest("/budgets", budget::router())
        // Composite-key associations.
        .nest("/organization-users", membership::organization_users_router())
        .nest("/user-roles", membership::user_roles_router())
        // In-app notifications and event feedback (soft delete).
        .nest("/notifications", notification::router())
        .nest("/feedback", feedback::router())
        // Venue availability slots.
        .nest("/venues", venue::router())
        // External integrations.
        .nest("/payments", payment::router())
        .nest("/registrations", registration::router())
}
