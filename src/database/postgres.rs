use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::database::models::{CategoryGroup, Expense, ExpenseFields, ExpenseSummary};
use crate::database::store::{parse_id, ExpenseStore, StoreError};

const RETURNING: &str = "RETURNING id, owner_id, title, amount, date, category, description";

/// PostgreSQL-backed expense store. Each operation is a single statement.
#[derive(Clone)]
pub struct PgExpenseStore {
    pool: PgPool,
}

impl PgExpenseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseStore for PgExpenseStore {
    async fn insert_one(&self, owner_id: Uuid, fields: ExpenseFields) -> Result<Expense, StoreError> {
        let sql = format!(
            "INSERT INTO expenses (owner_id, title, amount, date, category, description) \
             VALUES ($1, $2, $3, $4, $5, $6) {}",
            RETURNING
        );

        let expense = sqlx::query_as::<_, Expense>(&sql)
            .bind(owner_id)
            .bind(fields.title)
            .bind(fields.amount)
            .bind(fields.date)
            .bind(fields.category)
            .bind(fields.description)
            .fetch_one(&self.pool)
            .await?;

        Ok(expense)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Expense>, StoreError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT id, owner_id, title, amount, date, category, description \
             FROM expenses WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    async fn find_one_and_update(
        &self,
        id: &str,
        owner_id: Uuid,
        fields: ExpenseFields,
    ) -> Result<Option<Expense>, StoreError> {
        let id = parse_id(id)?;
        let sql = format!(
            "UPDATE expenses \
             SET title = $3, amount = $4, date = $5, category = $6, description = $7 \
             WHERE id = $1 AND owner_id = $2 {}",
            RETURNING
        );

        let expense = sqlx::query_as::<_, Expense>(&sql)
            .bind(id)
            .bind(owner_id)
            .bind(fields.title)
            .bind(fields.amount)
            .bind(fields.date)
            .bind(fields.category)
            .bind(fields.description)
            .fetch_optional(&self.pool)
            .await?;

        Ok(expense)
    }

    async fn find_one_and_delete(&self, id: &str, owner_id: Uuid) -> Result<Option<Expense>, StoreError> {
        let id = parse_id(id)?;
        let sql = format!("DELETE FROM expenses WHERE id = $1 AND owner_id = $2 {}", RETURNING);

        let expense = sqlx::query_as::<_, Expense>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(expense)
    }

    async fn group_by_category(&self, owner_id: Uuid) -> Result<Vec<CategoryGroup>, StoreError> {
        // json_agg without ORDER BY keeps the heap scan order, no sort is imposed
        let rows = sqlx::query(
            "SELECT category, \
                    json_agg(json_build_object('title', title, 'amount', amount)) AS expenses \
             FROM expenses WHERE owner_id = $1 \
             GROUP BY category",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<CategoryGroup, StoreError> {
                let category: Option<String> = row.try_get("category")?;
                let expenses: Value = row.try_get("expenses")?;
                let expenses: Vec<ExpenseSummary> =
                    serde_json::from_value(expenses).map_err(|e| StoreError::Decode(e.to_string()))?;
                Ok(CategoryGroup { category, expenses })
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
