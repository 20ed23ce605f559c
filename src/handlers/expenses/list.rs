// handlers/expenses/list.rs - GET {base}/ handler

use axum::extract::{Extension, State};

use crate::app::AppState;
use crate::database::models::Expense;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::Operation;

/// GET / - Every expense owned by the caller, in no particular order
pub async fn expense_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Expense>> {
    let expenses = state
        .expenses
        .list(user.user_id)
        .await
        .map_err(|e| ApiError::from_expense_error(Operation::List, e))?;

    Ok(ApiResponse::success(Operation::List, expenses))
}
