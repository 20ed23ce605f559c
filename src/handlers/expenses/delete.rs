// handlers/expenses/delete.rs - DELETE {base}/:id handler

use axum::extract::{Extension, Path, State};

use crate::app::AppState;
use crate::database::models::Expense;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::Operation;

/// DELETE /:id - Hard delete one of the caller's expenses and return it
pub async fn expense_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Expense> {
    let expense = state
        .expenses
        .delete(user.user_id, &id)
        .await
        .map_err(|e| ApiError::from_expense_error(Operation::Delete, e))?;

    tracing::info!(expense_id = %expense.id, owner_id = %user.user_id, "expense deleted");
    Ok(ApiResponse::success(Operation::Delete, expense))
}
