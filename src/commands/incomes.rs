// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter;
use crate::models::{Income, IncomeSource};
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
    let source: IncomeSource = sub.get_one::<String>("source").unwrap().parse()?;
    let description = sub.get_one::<String>("description").cloned().unwrap_or_default();

    let income = Income::new(amount, date, source, description);
    let id = income.id.clone();
    store.add_income(income)?;
    println!("Recorded {} from {} on {} ({})", fmt_amount(&amount), source, date, id);
    Ok(())
}

fn list(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let f = crate::commands::filter_from_matches(sub, Some("source"))?;
    let rows = filter::apply(&store.incomes()?, f.as_ref());
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|i| {
                vec![
                    i.date.to_string(),
                    i.source.to_string(),
                    fmt_amount(&i.amount),
                    i.description.clone(),
                    i.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Source", "Amount", "Description", "Id"], data)
        );
    }
    Ok(())
}

fn update(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let rows = store.incomes()?;
    let mut income = rows
        .into_iter()
        .find(|i| i.id == *id)
        .with_context(|| format!("Income '{}' not found", id))?;
    if let Some(s) = sub.get_one::<String>("date") {
        income.date = parse_date(s)?;
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        income.amount = parse_decimal(s)?;
    }
    if let Some(s) = sub.get_one::<String>("source") {
        income.source = s.parse()?;
    }
    if let Some(s) = sub.get_one::<String>("description") {
        income.description = s.clone();
    }
    store.update_income(income)?;
    println!("Updated {}", id);
    Ok(())
}

fn delete(store: &mut dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("all") {
        let n = store.delete_all_incomes()?;
        println!("Deleted {} income entries", n);
    } else {
        let id = sub
            .get_one::<String>("id")
            .context("Provide an id or --all")?;
        store.delete_income(id)?;
        println!("Deleted {}", id);
    }
    Ok(())
}
