// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const EXPENSE_TYPE: &str = "expense";

fn expense_tag() -> String {
    EXPENSE_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default = "expense_tag")]
    pub kind: String,
}

impl Expense {
    pub fn new(
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            date,
            category: category.into(),
            description: description.into(),
            kind: expense_tag(),
        }
    }
}

/// Income sources are a closed set, unlike expense categories which stay an
/// open vocabulary with a side color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    Salary,
    Freelance,
    Investments,
    Other,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 4] = [
        IncomeSource::Salary,
        IncomeSource::Freelance,
        IncomeSource::Investments,
        IncomeSource::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeSource::Salary => "Salary",
            IncomeSource::Freelance => "Freelance",
            IncomeSource::Investments => "Investments",
            IncomeSource::Other => "Other",
        }
    }
}

impl std::fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IncomeSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeSource::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown income source '{}', expected one of Salary, Freelance, Investments, Other",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub source: IncomeSource,
    #[serde(default)]
    pub description: String,
}

impl Income {
    pub fn new(
        amount: Decimal,
        date: NaiveDate,
        source: IncomeSource,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            date,
            source,
            description: description.into(),
        }
    }
}

/// Common view of a record for the filter engine and the summarizer.
/// `label` is the expense category or the income source name.
pub trait Record {
    fn amount(&self) -> Decimal;
    fn date(&self) -> NaiveDate;
    fn label(&self) -> &str;
    fn description(&self) -> &str;
}

impl Record for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn label(&self) -> &str {
        &self.category
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Record for Income {
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn label(&self) -> &str {
        self.source.as_str()
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Conjunction of optional predicates; an absent field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub label: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub search: Option<String>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.label.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.search.is_none()
    }

    pub fn matches<R: Record>(&self, r: &R) -> bool {
        if let Some(start) = self.start_date {
            if r.date() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if r.date() > end {
                return false;
            }
        }
        if let Some(ref label) = self.label {
            if !r.label().eq_ignore_ascii_case(label) {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if r.amount() < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if r.amount() > max {
                return false;
            }
        }
        if let Some(ref q) = self.search {
            let q = q.to_lowercase();
            if !r.description().to_lowercase().contains(&q)
                && !r.label().to_lowercase().contains(&q)
            {
                return false;
            }
        }
        true
    }

    /// Lenient extraction from tool-boundary JSON. Unknown or malformed
    /// fields are ignored rather than rejected; `category` and `source` both
    /// feed the label predicate.
    pub fn from_value(v: &Value) -> Option<Filter> {
        let obj = v.as_object()?;
        let date = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        };
        let f = Filter {
            start_date: date("startDate"),
            end_date: date("endDate"),
            label: obj
                .get("category")
                .or_else(|| obj.get("source"))
                .and_then(Value::as_str)
                .map(str::to_string),
            min_amount: obj.get("minAmount").and_then(value_to_decimal),
            max_amount: obj.get("maxAmount").and_then(value_to_decimal),
            search: obj
                .get("searchQuery")
                .and_then(Value::as_str)
                .map(str::to_string),
        };
        if f.is_empty() { None } else { Some(f) }
    }
}

fn value_to_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => n.as_f64().and_then(|x| Decimal::try_from(x).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
