pub mod expense;

pub use expense::{CategoryGroup, Expense, ExpenseFields, ExpenseSummary};
