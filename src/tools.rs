// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Agent-facing tool registry. Each tool wraps one analytics operation with
//! a JSON input/output surface; calls run the same code paths as the CLI,
//! with no special-casing by caller.

use crate::analytics::{balance, breakdown, filter, monthly, summary, trends};
use crate::models::Filter;
use crate::store::Store;
use anyhow::Result;
use serde_json::{Value, json};

pub trait Tool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> Value;
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value>;
}

fn filter_schema(label_key: &str) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "startDate": { "type": "string", "description": "Inclusive lower date bound, YYYY-MM-DD" },
            "endDate": { "type": "string", "description": "Inclusive upper date bound, YYYY-MM-DD" },
            "minAmount": { "type": "number" },
            "maxAmount": { "type": "number" },
            "searchQuery": { "type": "string", "description": "Substring of description or label, case-insensitive" }
        }
    });
    schema["properties"][label_key] =
        json!({ "type": "string", "description": "Exact match, case-insensitive" });
    schema
}

pub struct GetExpenses;

impl Tool for GetExpenses {
    fn name(&self) -> &str {
        "get_expenses"
    }
    fn description(&self) -> &str {
        "List expenses matching an optional filter, newest first"
    }
    fn schema(&self) -> Value {
        filter_schema("category")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let rows = filter::apply(&store.expenses()?, f.as_ref());
        Ok(serde_json::to_value(rows)?)
    }
}

pub struct GetIncomes;

impl Tool for GetIncomes {
    fn name(&self) -> &str {
        "get_incomes"
    }
    fn description(&self) -> &str {
        "List income records matching an optional filter, newest first"
    }
    fn schema(&self) -> Value {
        filter_schema("source")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let rows = filter::apply(&store.incomes()?, f.as_ref());
        Ok(serde_json::to_value(rows)?)
    }
}

pub struct SummarizeExpenses;

impl Tool for SummarizeExpenses {
    fn name(&self) -> &str {
        "summarize_expenses"
    }
    fn description(&self) -> &str {
        "Totals, average, count, and category/month breakdowns of filtered expenses"
    }
    fn schema(&self) -> Value {
        filter_schema("category")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let rows = filter::apply(&store.expenses()?, f.as_ref());
        Ok(serde_json::to_value(summary::summarize(&rows))?)
    }
}

pub struct SummarizeIncome;

impl Tool for SummarizeIncome {
    fn name(&self) -> &str {
        "summarize_income"
    }
    fn description(&self) -> &str {
        "Totals, average, count, and source/month breakdowns of filtered income"
    }
    fn schema(&self) -> Value {
        filter_schema("source")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let rows = filter::apply(&store.incomes()?, f.as_ref());
        Ok(serde_json::to_value(summary::summarize(&rows))?)
    }
}

pub struct GetBalance;

impl Tool for GetBalance {
    fn name(&self) -> &str {
        "balance_summary"
    }
    fn description(&self) -> &str {
        "Total income, total expenses, balance, and savings rate; each side takes its own filter"
    }
    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "expenseFilter": filter_schema("category"),
                "incomeFilter": filter_schema("source")
            }
        })
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let ef = input.get("expenseFilter").and_then(Filter::from_value);
        let inf = input.get("incomeFilter").and_then(Filter::from_value);
        let expenses = filter::apply(&store.expenses()?, ef.as_ref());
        let incomes = filter::apply(&store.incomes()?, inf.as_ref());
        let result = balance::balance_summary(
            &summary::summarize(&incomes),
            &summary::summarize(&expenses),
        );
        Ok(serde_json::to_value(result)?)
    }
}

pub struct SpendingByCategory;

impl Tool for SpendingByCategory {
    fn name(&self) -> &str {
        "spending_by_category"
    }
    fn description(&self) -> &str {
        "Per-category spend with share of the filtered total and a chart color, largest first"
    }
    fn schema(&self) -> Value {
        filter_schema("category")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let rows = filter::apply(&store.expenses()?, f.as_ref());
        let result = breakdown::spending_by_category(&summary::summarize(&rows));
        Ok(serde_json::to_value(result)?)
    }
}

pub struct SpendingTrends;

impl Tool for SpendingTrends {
    fn name(&self) -> &str {
        "spending_trends"
    }
    fn description(&self) -> &str {
        "Daily income/expense/balance series over the filtered records, oldest first"
    }
    fn schema(&self) -> Value {
        filter_schema("category")
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let f = Filter::from_value(&input);
        let expenses = filter::apply(&store.expenses()?, f.as_ref());
        let incomes = filter::apply(&store.incomes()?, f.as_ref());
        Ok(serde_json::to_value(trends::spending_trends(
            &expenses, &incomes,
        ))?)
    }
}

pub struct MonthlyBreakdown;

impl Tool for MonthlyBreakdown {
    fn name(&self) -> &str {
        "monthly_breakdown"
    }
    fn description(&self) -> &str {
        "Per-month income, expenses, savings, and top 3 spend categories over all records"
    }
    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "months": { "type": "integer", "description": "How many most-recent months to return", "default": monthly::DEFAULT_MONTHS }
            }
        })
    }
    fn call(&self, store: &dyn Store, input: Value) -> Result<Value> {
        let months = input
            .get("months")
            .and_then(Value::as_u64)
            .unwrap_or(monthly::DEFAULT_MONTHS as u64) as usize;
        let result = monthly::monthly_breakdown(&store.expenses()?, &store.incomes()?, months);
        Ok(serde_json::to_value(result)?)
    }
}

pub fn registry() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(GetExpenses),
        Box::new(GetIncomes),
        Box::new(SummarizeExpenses),
        Box::new(SummarizeIncome),
        Box::new(GetBalance),
        Box::new(SpendingByCategory),
        Box::new(SpendingTrends),
        Box::new(MonthlyBreakdown),
    ]
}

pub fn find<'a>(tools: &'a [Box<dyn Tool>], name: &str) -> Option<&'a dyn Tool> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}
