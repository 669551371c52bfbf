//! Expense import from CSV and JSON files
//!
//! Both formats carry the same fields. Explicit ids must be unique within a
//! file; rows without an id get one assigned after the largest explicit id.

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Category, Expense};

/// Column positions resolved from a CSV header row
struct Columns {
    id: Option<usize>,
    date: usize,
    item: usize,
    description: Option<usize>,
    category: usize,
    cost: usize,
    status: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::Import(format!("Missing column: {}", name)))
        };

        Ok(Self {
            id: find("id"),
            date: require("date")?,
            item: require("item")?,
            description: find("description"),
            category: require("category")?,
            cost: require("cost")?,
            status: require("status")?,
        })
    }
}

/// An expense as read from a file, before id assignment
#[derive(Debug, Deserialize)]
struct RawExpense {
    id: Option<i64>,
    date: String,
    item: String,
    #[serde(default)]
    description: String,
    category: String,
    cost: f64,
    status: String,
}

impl RawExpense {
    /// Check the fields the engine relies on; `row` is 1-based for messages
    fn validate(&self, row: usize) -> Result<()> {
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(Error::Import(format!(
                "Row {}: cost must be a non-negative number, got {}",
                row, self.cost
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Import(format!("Row {}: missing category", row)));
        }
        if self.status.trim().is_empty() {
            return Err(Error::Import(format!("Row {}: missing status", row)));
        }

        if !Category::is_known(&self.category) {
            warn!(row, category = %self.category, "Unlisted category");
        }
        Ok(())
    }
}

/// Parse expenses from CSV with a header row
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut raws = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let row = idx + 2;
        let field = |col: usize| record.get(col).unwrap_or("").to_string();

        let id = match columns.id.map(&field) {
            Some(s) if !s.is_empty() => Some(
                s.parse::<i64>()
                    .map_err(|_| Error::Import(format!("Row {}: invalid id: {}", row, s)))?,
            ),
            _ => None,
        };

        let raw = RawExpense {
            id,
            date: field(columns.date),
            item: field(columns.item),
            description: columns.description.map(&field).unwrap_or_default(),
            category: field(columns.category),
            cost: parse_cost(&field(columns.cost), row)?,
            status: field(columns.status),
        };
        raw.validate(row)?;
        raws.push(raw);
    }

    let expenses = assign_ids(raws, 2)?;
    debug!("Parsed {} expenses from CSV", expenses.len());
    Ok(expenses)
}

/// Parse expenses from a JSON array
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let raws: Vec<RawExpense> = serde_json::from_reader(reader)?;
    for (idx, raw) in raws.iter().enumerate() {
        raw.validate(idx + 1)?;
    }

    let expenses = assign_ids(raws, 1)?;
    debug!("Parsed {} expenses from JSON", expenses.len());
    Ok(expenses)
}

/// Load expenses from a `.csv` or `.json` file
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let reader = || -> Result<BufReader<File>> { Ok(BufReader::new(File::open(path)?)) };

    match extension.as_deref() {
        Some("csv") => parse_csv(reader()?),
        Some("json") => parse_json(reader()?),
        _ => Err(Error::Import(format!(
            "Unsupported file type: {} (expected .csv or .json)",
            path.display()
        ))),
    }
}

/// Parse a cost cell, accepting a leading `$` and thousands separators
fn parse_cost(s: &str, row: usize) -> Result<f64> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Row {}: unable to parse cost: {}", row, s)))
}

/// Turn validated rows into expenses, checking explicit ids for duplicates
/// and giving id-less rows sequential ids after the largest explicit one
///
/// `first_row` is the row number of `raws[0]` in error messages.
fn assign_ids(raws: Vec<RawExpense>, first_row: usize) -> Result<Vec<Expense>> {
    let mut seen = HashSet::new();
    for (idx, raw) in raws.iter().enumerate() {
        if let Some(id) = raw.id {
            if !seen.insert(id) {
                return Err(Error::Import(format!(
                    "Row {}: duplicate id {}",
                    first_row + idx,
                    id
                )));
            }
        }
    }

    let mut next_id = seen.iter().copied().max().unwrap_or(0);
    let mut expenses = Vec::with_capacity(raws.len());

    for (idx, raw) in raws.into_iter().enumerate() {
        let row = first_row + idx;
        let id = match raw.id {
            Some(id) => id,
            None => {
                let last = next_id;
                next_id = last.checked_add(1).ok_or_else(|| {
                    Error::Import(format!("Row {}: no free id after {}", row, last))
                })?;
                next_id
            }
        };
        let expense = Expense {
            id,
            date: raw.date,
            item: raw.item,
            description: raw.description,
            category: raw.category,
            cost: raw.cost,
            status: raw.status,
        };
        if expense.parsed_date().is_none() {
            warn!(row, date = %expense.date, "Date is not YYYY-MM-DD; keeping as-is");
        }
        expenses.push(expense);
    }

    Ok(expenses)
}
