//! Domain models for Tally

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Status label for expenses awaiting approval
pub const STATUS_PENDING: &str = "pending";

/// A single recorded expense
///
/// `category` and `status` are kept as free strings: the engine treats
/// unlisted values as opaque labels rather than rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub item: String,
    pub description: String,
    pub category: String,
    pub cost: f64,
    pub status: String,
}

impl Expense {
    /// Month key (`YYYY-MM`) used by the time breakdown
    ///
    /// Taken from the first seven characters of `date` without parsing, so a
    /// malformed date still lands in a (strange) bucket instead of failing.
    pub fn month_key(&self) -> &str {
        month_key(&self.date)
    }

    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    /// Parse `date` as a calendar date, if it is one
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Month key for a date string: its first seven characters (or all of it)
pub fn month_key(date: &str) -> &str {
    match date.char_indices().nth(7) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// Known expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Office,
    Travel,
    Meals,
    Software,
    Equipment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Travel => "Travel",
            Self::Meals => "Meals",
            Self::Software => "Software",
            Self::Equipment => "Equipment",
        }
    }

    /// Get all known categories
    pub fn all() -> &'static [Category] {
        &[
            Self::Office,
            Self::Travel,
            Self::Meals,
            Self::Software,
            Self::Equipment,
        ]
    }

    /// Whether a free-text label names one of the known categories
    pub fn is_known(label: &str) -> bool {
        label.parse::<Category>().is_ok()
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "office" => Ok(Self::Office),
            "travel" => Ok(Self::Travel),
            "meals" => Ok(Self::Meals),
            "software" => Ok(Self::Software),
            "equipment" => Ok(Self::Equipment),
            _ => Err(format!(
                "Unknown category: {} (known: Office, Travel, Meals, Software, Equipment)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense to be added to a ledger (id assigned on insert)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExpense {
    pub date: String,
    pub item: String,
    pub description: String,
    pub category: String,
    pub cost: f64,
    pub status: String,
}

impl Default for NewExpense {
    /// A blank entry as the table editor creates it: dated today, pending
    fn default() -> Self {
        Self {
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            item: "New Item".to_string(),
            description: "Enter description".to_string(),
            category: Category::Office.as_str().to_string(),
            cost: 0.0,
            status: STATUS_PENDING.to_string(),
        }
    }
}

impl NewExpense {
    pub fn into_expense(self, id: i64) -> Expense {
        Expense {
            id,
            date: self.date,
            item: self.item,
            description: self.description,
            category: self.category,
            cost: self.cost,
            status: self.status,
        }
    }
}

/// Partial update for an existing expense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub date: Option<String>,
    pub item: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<String>,
}

impl ExpenseUpdate {
    /// Apply the set fields onto an expense; the id is never touched
    pub fn apply(self, expense: &mut Expense) {
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(item) = self.item {
            expense.item = item;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(cost) = self.cost {
            expense.cost = cost;
        }
        if let Some(status) = self.status {
            expense.status = status;
        }
    }
}
