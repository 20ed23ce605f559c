// handlers/expenses/create.rs - POST {base}/create handler

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{Expense, ExpenseFields};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::Operation;

use super::body_or_failure;

/**
 * POST /create - Record a new expense for the caller
 *
 * Expected Input:
 * ```json
 * {
 *   "title": "Lunch",
 *   "amount": 12.5,
 *   "date": "2024-01-01",
 *   "category": "Food",
 *   "description": "optional"
 * }
 * ```
 *
 * `ownerId` is always the authenticated caller; any owner-like key in the body is ignored.
 */
pub async fn expense_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ExpenseFields>, JsonRejection>,
) -> ApiResult<Expense> {
    let fields = body_or_failure(Operation::Create, payload)?;

    let expense = state
        .expenses
        .create(user.user_id, fields)
        .await
        .map_err(|e| ApiError::from_expense_error(Operation::Create, e))?;

    tracing::info!(expense_id = %expense.id, owner_id = %user.user_id, "expense created");
    Ok(ApiResponse::created(Operation::Create, expense))
}
