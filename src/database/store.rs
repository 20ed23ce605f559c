use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{CategoryGroup, Expense, ExpenseFields};

/// Errors raised by an expense store. None of these are shown to clients verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid expense id: {0}")]
    InvalidId(String),

    #[error("Failed to decode stored document: {0}")]
    Decode(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence boundary for expenses.
///
/// Every method that reads or mutates existing documents takes the owner id and
/// must apply it inside the query filter; callers never post-filter results.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Insert a new document owned by `owner_id`; the store assigns the id
    async fn insert_one(&self, owner_id: Uuid, fields: ExpenseFields) -> Result<Expense, StoreError>;

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Expense>, StoreError>;

    /// Overwrite all editable fields of `{id, owner_id}`; `None` when nothing matched
    async fn find_one_and_update(
        &self,
        id: &str,
        owner_id: Uuid,
        fields: ExpenseFields,
    ) -> Result<Option<Expense>, StoreError>;

    async fn find_one_and_delete(&self, id: &str, owner_id: Uuid) -> Result<Option<Expense>, StoreError>;

    /// Group the owner's documents by category, keeping `{title, amount}` per entry
    async fn group_by_category(&self, owner_id: Uuid) -> Result<Vec<CategoryGroup>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub(crate) fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
