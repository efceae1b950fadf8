// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter;
use crate::models::Expense;
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle(store: &mut dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("description").cloned().unwrap_or_default();

    let expense = Expense::new(amount, date, category.clone(), description);
    let id = expense.id.clone();
    store.add_expense(expense)?;
    println!("Recorded {} '{}' on {} ({})", fmt_amount(&amount), category, date, id);
    Ok(())
}

fn list(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let f = crate::commands::filter_from_matches(sub, Some("category"))?;
    let rows = filter::apply(&store.expenses()?, f.as_ref());
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.category.clone(),
                    fmt_amount(&e.amount),
                    e.description.clone(),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Amount", "Description", "Id"], data)
        );
    }
    Ok(())
}

fn update(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let rows = store.expenses()?;
    let mut expense = rows
        .into_iter()
        .find(|e| e.id == *id)
        .with_context(|| format!("Expense '{}' not found", id))?;
    if let Some(s) = sub.get_one::<String>("date") {
        expense.date = parse_date(s)?;
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        expense.amount = parse_decimal(s)?;
    }
    if let Some(s) = sub.get_one::<String>("category") {
        expense.category = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("description") {
        expense.description = s.clone();
    }
    store.update_expense(expense)?;
    println!("Updated {}", id);
    Ok(())
}

fn delete(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("all") {
        let n = store.delete_all_expenses()?;
        println!("Deleted {} expenses", n);
    } else {
        let id = sub
            .get_one::<String>("id")
            .context("Provide an id or --all")?;
        store.delete_expense(id)?;
        println!("Deleted {}", id);
    }
    Ok(())
}
