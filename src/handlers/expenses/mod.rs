// handlers/expenses/mod.rs - Expense collection handlers
//
// Every route here sits behind jwt_auth_middleware and receives the caller as
// an explicit AuthUser. All store access is filtered by that caller's id.

use axum::{extract::rejection::JsonRejection, Json};

use crate::database::models::ExpenseFields;
use crate::error::ApiError;
use crate::types::Operation;

pub mod create;   // POST /create
pub mod list;     // GET /
pub mod update;   // PUT /:id
pub mod delete;   // DELETE /:id
pub mod grouped;  // GET /grouped/categories

pub use create::expense_create;
pub use list::expense_list;
pub use update::expense_update;
pub use delete::expense_delete;
pub use grouped::expense_grouped_categories;

/// Unreadable bodies are reported as the operation's generic failure, since no
/// validation layer sits in front of the store.
fn body_or_failure(
    operation: Operation,
    payload: Result<Json<ExpenseFields>, JsonRejection>,
) -> Result<ExpenseFields, ApiError> {
    payload.map(|Json(fields)| fields).map_err(|rejection| {
        tracing::warn!(?operation, "rejected expense body: {}", rejection.body_text());
        ApiError::store_failure(operation.failure_message())
    })
}
