use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{CategoryGroup, Expense, ExpenseFields};
use crate::database::store::{parse_id, ExpenseStore, StoreError};

/// In-process expense store used by tests and database-less development runs.
/// Documents are kept in insertion order, which is the order scans return.
#[derive(Default)]
pub struct MemoryExpenseStore {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn insert_one(&self, owner_id: Uuid, fields: ExpenseFields) -> Result<Expense, StoreError> {
        let expense = Expense::new(owner_id, fields);
        self.expenses.write().await.push(expense.clone());
        Ok(expense)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Expense>, StoreError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.iter().filter(|e| e.owner_id == owner_id).cloned().collect())
    }

    async fn find_one_and_update(
        &self,
        id: &str,
        owner_id: Uuid,
        fields: ExpenseFields,
    ) -> Result<Option<Expense>, StoreError> {
        let id = parse_id(id)?;
        let mut expenses = self.expenses.write().await;

        Ok(expenses
            .iter_mut()
            .find(|e| e.id == id && e.owner_id == owner_id)
            .map(|expense| {
                expense.overwrite(fields);
                expense.clone()
            }))
    }

    async fn find_one_and_delete(&self, id: &str, owner_id: Uuid) -> Result<Option<Expense>, StoreError> {
        let id = parse_id(id)?;
        let mut expenses = self.expenses.write().await;

        let position = expenses.iter().position(|e| e.id == id && e.owner_id == owner_id);
        Ok(position.map(|index| expenses.remove(index)))
    }

    async fn group_by_category(&self, owner_id: Uuid) -> Result<Vec<CategoryGroup>, StoreError> {
        let expenses = self.expenses.read().await;
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for expense in expenses.iter().filter(|e| e.owner_id == owner_id) {
            match groups.iter_mut().find(|g| g.category == expense.category) {
                Some(group) => group.expenses.push(expense.summary()),
                None => groups.push(CategoryGroup {
                    category: expense.category.clone(),
                    expenses: vec![expense.summary()],
                }),
            }
        }

        Ok(groups)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
