// handlers/expenses/grouped.rs - GET {base}/grouped/categories handler

use axum::extract::{Extension, State};

use crate::app::AppState;
use crate::database::models::CategoryGroup;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::Operation;

/**
 * GET /grouped/categories - The caller's expenses grouped by category
 *
 * Response data:
 * ```json
 * [
 *   { "category": "Food",   "expenses": [{ "title": "Lunch", "amount": 12.5 }] },
 *   { "category": "Travel", "expenses": [{ "title": "Taxi",  "amount": 30 }] }
 * ]
 * ```
 *
 * Only categories that have at least one expense appear. Group order is unspecified.
 */
pub async fn expense_grouped_categories(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<CategoryGroup>> {
    let groups = state
        .expenses
        .grouped_by_category(user.user_id)
        .await
        .map_err(|e| ApiError::from_expense_error(Operation::Group, e))?;

    Ok(ApiResponse::success(Operation::Group, groups))
}
