use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{CategoryGroup, Expense, ExpenseFields};
use crate::database::store::{ExpenseStore, StoreError};

#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Target id does not exist or belongs to another owner
    #[error("Expense not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Owner-scoped expense operations. The caller id is always an explicit argument.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, owner_id: Uuid, fields: ExpenseFields) -> Result<Expense, ExpenseError> {
        Ok(self.store.insert_one(owner_id, fields).await?)
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.store.find_by_owner(owner_id).await?)
    }

    pub async fn update(
        &self,
        owner_id: Uuid,
        id: &str,
        fields: ExpenseFields,
    ) -> Result<Expense, ExpenseError> {
        self.store
            .find_one_and_update(id, owner_id, fields)
            .await?
            .ok_or(ExpenseError::NotFound)
    }

    pub async fn delete(&self, owner_id: Uuid, id: &str) -> Result<Expense, ExpenseError> {
        self.store
            .find_one_and_delete(id, owner_id)
            .await?
            .ok_or(ExpenseError::NotFound)
    }

    pub async fn grouped_by_category(&self, owner_id: Uuid) -> Result<Vec<CategoryGroup>, ExpenseError> {
        tracing::debug!(%owner_id, "grouping expenses by category");
        Ok(self.store.group_by_category(owner_id).await?)
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
