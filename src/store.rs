// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendlens", "spendlens"));

const EXPENSES_FILE: &str = "expenses.csv";
const INCOMES_FILE: &str = "incomes.csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("{file} line {line}: {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },
    #[error("invalid record: {0}")]
    Invalid(String),
    #[error("record '{0}' not found")]
    NotFound(String),
    #[error("duplicate id '{0}'")]
    Duplicate(String),
    #[error("could not determine platform-specific data dir")]
    NoDataDir,
}

/// Capability set the aggregation layer is handed instead of a global
/// mutable record array. Reads return fully-validated records; anything
/// malformed fails the load rather than leaking into the analytics.
pub trait Store {
    fn expenses(&self) -> Result<Vec<Expense>, StoreError>;
    fn incomes(&self) -> Result<Vec<Income>, StoreError>;
    fn add_expense(&mut self, expense: Expense) -> Result<(), StoreError>;
    fn update_expense(&mut self, expense: Expense) -> Result<(), StoreError>;
    fn delete_expense(&mut self, id: &str) -> Result<(), StoreError>;
    fn delete_all_expenses(&mut self) -> Result<usize, StoreError>;
    fn add_income(&mut self, income: Income) -> Result<(), StoreError>;
    fn update_income(&mut self, income: Income) -> Result<(), StoreError>;
    fn delete_income(&mut self, id: &str) -> Result<(), StoreError>;
    fn delete_all_incomes(&mut self) -> Result<usize, StoreError>;
}

fn validate_expense(e: &Expense) -> Result<(), StoreError> {
    if e.id.trim().is_empty() {
        return Err(StoreError::Invalid("id must not be empty".into()));
    }
    if e.amount <= Decimal::ZERO {
        return Err(StoreError::Invalid(format!(
            "amount must be positive, got {}",
            e.amount
        )));
    }
    if e.category.trim().is_empty() {
        return Err(StoreError::Invalid("category must not be empty".into()));
    }
    Ok(())
}

fn validate_income(i: &Income) -> Result<(), StoreError> {
    if i.id.trim().is_empty() {
        return Err(StoreError::Invalid("id must not be empty".into()));
    }
    if i.amount <= Decimal::ZERO {
        return Err(StoreError::Invalid(format!(
            "amount must be positive, got {}",
            i.amount
        )));
    }
    Ok(())
}

pub fn data_dir() -> Result<PathBuf, StoreError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::NoDataDir)?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Flat-file store: one CSV per record kind, rewritten whole on mutation.
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(data_dir()?)
    }

    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for (i, rec) in rdr.deserialize::<T>().enumerate() {
            // line 1 is the header row
            let row = rec.map_err(|e| StoreError::Malformed {
                file: file.into(),
                line: i + 2,
                reason: e.to_string(),
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    fn save<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<(), StoreError> {
        let mut wtr = csv::Writer::from_path(self.dir.join(file))?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Store for CsvStore {
    fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        let rows: Vec<Expense> = self.load(EXPENSES_FILE)?;
        for (i, e) in rows.iter().enumerate() {
            validate_expense(e).map_err(|err| StoreError::Malformed {
                file: EXPENSES_FILE.into(),
                line: i + 2,
                reason: err.to_string(),
            })?;
        }
        Ok(rows)
    }

    fn incomes(&self) -> Result<Vec<Income>, StoreError> {
        let rows: Vec<Income> = self.load(INCOMES_FILE)?;
        for (i, inc) in rows.iter().enumerate() {
            validate_income(inc).map_err(|err| StoreError::Malformed {
                file: INCOMES_FILE.into(),
                line: i + 2,
                reason: err.to_string(),
            })?;
        }
        Ok(rows)
    }

    fn add_expense(&mut self, expense: Expense) -> Result<(), StoreError> {
        validate_expense(&expense)?;
        let mut rows = self.expenses()?;
        if rows.iter().any(|e| e.id == expense.id) {
            return Err(StoreError::Duplicate(expense.id));
        }
        rows.push(expense);
        self.save(EXPENSES_FILE, &rows)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<(), StoreError> {
        validate_expense(&expense)?;
        let mut rows = self.expenses()?;
        let pos = rows
            .iter()
            .position(|e| e.id == expense.id)
            .ok_or_else(|| StoreError::NotFound(expense.id.clone()))?;
        rows[pos] = expense;
        self.save(EXPENSES_FILE, &rows)
    }

    fn delete_expense(&mut self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.expenses()?;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id.into()));
        }
        self.save(EXPENSES_FILE, &rows)
    }

    fn delete_all_expenses(&mut self) -> Result<usize, StoreError> {
        let n = self.expenses()?.len();
        self.save::<Expense>(EXPENSES_FILE, &[])?;
        Ok(n)
    }

    fn add_income(&mut self, income: Income) -> Result<(), StoreError> {
        validate_income(&income)?;
        let mut rows = self.incomes()?;
        if rows.iter().any(|i| i.id == income.id) {
            return Err(StoreError::Duplicate(income.id));
        }
        rows.push(income);
        self.save(INCOMES_FILE, &rows)
    }

    fn update_income(&mut self, income: Income) -> Result<(), StoreError> {
        validate_income(&income)?;
        let mut rows = self.incomes()?;
        let pos = rows
            .iter()
            .position(|i| i.id == income.id)
            .ok_or_else(|| StoreError::NotFound(income.id.clone()))?;
        rows[pos] = income;
        self.save(INCOMES_FILE, &rows)
    }

    fn delete_income(&mut self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.incomes()?;
        let before = rows.len();
        rows.retain(|i| i.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id.into()));
        }
        self.save(INCOMES_FILE, &rows)
    }

    fn delete_all_incomes(&mut self) -> Result<usize, StoreError> {
        let n = self.incomes()?.len();
        self.save::<Income>(INCOMES_FILE, &[])?;
        Ok(n)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemStore {
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(expenses: Vec<Expense>, incomes: Vec<Income>) -> Self {
        Self { expenses, incomes }
    }
}

impl Store for MemStore {
    fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.expenses.clone())
    }

    fn incomes(&self) -> Result<Vec<Income>, StoreError> {
        Ok(self.incomes.clone())
    }

    fn add_expense(&mut self, expense: Expense) -> Result<(), StoreError> {
        validate_expense(&expense)?;
        if self.expenses.iter().any(|e| e.id == expense.id) {
            return Err(StoreError::Duplicate(expense.id));
        }
        self.expenses.push(expense);
        Ok(())
    }

    fn update_expense(&mut self, expense: Expense) -> Result<(), StoreError> {
        validate_expense(&expense)?;
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == expense.id)
            .ok_or_else(|| StoreError::NotFound(expense.id.clone()))?;
        self.expenses[pos] = expense;
        Ok(())
    }

    fn delete_expense(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(StoreError::NotFound(id.into()));
        }
        Ok(())
    }

    fn delete_all_expenses(&mut self) -> Result<usize, StoreError> {
        let n = self.expenses.len();
        self.expenses.clear();
        Ok(n)
    }

    fn add_income(&mut self, income: Income) -> Result<(), StoreError> {
        validate_income(&income)?;
        if self.incomes.iter().any(|i| i.id == income.id) {
            return Err(StoreError::Duplicate(income.id));
        }
        self.incomes.push(income);
        Ok(())
    }

    fn update_income(&mut self, income: Income) -> Result<(), StoreError> {
        validate_income(&income)?;
        let pos = self
            .incomes
            .iter()
            .position(|i| i.id == income.id)
            .ok_or_else(|| StoreError::NotFound(income.id.clone()))?;
        self.incomes[pos] = income;
        Ok(())
    }

    fn delete_income(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.incomes.len();
        self.incomes.retain(|i| i.id != id);
        if self.incomes.len() == before {
            return Err(StoreError::NotFound(id.into()));
        }
        Ok(())
    }

    fn delete_all_incomes(&mut self) -> Result<usize, StoreError> {
        let n = self.incomes.len();
        self.incomes.clear();
        Ok(n)
    }
}
