pub mod expense_service;

pub use expense_service::{ExpenseError, ExpenseService};
