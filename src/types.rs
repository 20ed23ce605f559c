//! Shared types used across the codebase

/// Expense operations exposed over HTTP.
/// Each one owns the fixed messages used in its response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
    Group,
}

impl Operation {
    pub fn success_message(self) -> &'static str {
        match self {
            Operation::Create => "Expense created successfully",
            Operation::List => "Expenses retrieved successfully",
            Operation::Update => "Expense updated successfully",
            Operation::Delete => "Expense deleted successfully",
            Operation::Group => "Expenses grouped by category",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Error creating expense",
            Operation::List => "Error fetching expenses",
            Operation::Update => "Error updating expense",
            Operation::Delete => "Error deleting expense",
            Operation::Group => "Error grouping expenses",
        }
    }

    /// Envelope key the payload is placed under
    pub fn payload_key(self) -> &'static str {
        match self {
            Operation::Create | Operation::Update | Operation::Delete => "expense",
            Operation::List => "expenses",
            Operation::Group => "data",
        }
    }
}
