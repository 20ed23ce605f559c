// handlers/expenses/update.rs - PUT {base}/:id handler

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{Expense, ExpenseFields};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::Operation;

use super::body_or_failure;

/**
 * PUT /:id - Replace all editable fields of one of the caller's expenses
 *
 * This is a full overwrite: fields missing from the body are cleared.
 * An id that is unknown or owned by someone else yields 404 and nothing is modified.
 */
pub async fn expense_update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseFields>, JsonRejection>,
) -> ApiResult<Expense> {
    let fields = body_or_failure(Operation::Update, payload)?;

    let expense = state
        .expenses
        .update(user.user_id, &id, fields)
        .await
        .map_err(|e| ApiError::from_expense_error(Operation::Update, e))?;

    Ok(ApiResponse::success(Operation::Update, expense))
}
