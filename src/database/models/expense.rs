use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted expense record. `owner_id` is always the caller that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Expense {
    pub fn new(owner_id: Uuid, fields: ExpenseFields) -> Self {
        let mut expense = Self {
            id: Uuid::new_v4(),
            owner_id,
            title: None,
            amount: None,
            date: None,
            category: None,
            description: None,
        };
        expense.overwrite(fields);
        expense
    }

    /// Replace every editable field; anything missing from `fields` is cleared
    pub fn overwrite(&mut self, fields: ExpenseFields) {
        self.title = fields.title;
        self.amount = fields.amount;
        self.date = fields.date;
        self.category = fields.category;
        self.description = fields.description;
    }

    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary {
            title: self.title.clone(),
            amount: self.amount,
        }
    }
}

/// The client-editable portion of an expense (create and update bodies).
/// Unknown keys such as `ownerId` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpenseFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
}

/// One entry of the grouped-by-category view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Option<String>,
    pub expenses: Vec<ExpenseSummary>,
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (taken as midnight UTC)
pub mod flexible_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw))),
        }
    }
}
