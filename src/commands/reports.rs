// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{balance, breakdown, filter, monthly, summary};
use crate::analytics::{Summary, trends};
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary_report(store, sub)?,
        Some(("balance", sub)) => balance_report(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("trends", sub)) => trends_report(store, sub)?,
        Some(("monthly", sub)) => monthly_report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn print_summary(s: &Summary, json_flag: bool, jsonl_flag: bool) -> Result<()> {
    if maybe_print_json(json_flag, jsonl_flag, s)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Total", "Average", "Count"],
            vec![vec![
                fmt_amount(&s.total),
                fmt_amount(&s.average),
                s.count.to_string(),
            ]],
        )
    );
    let cats: Vec<Vec<String>> = s
        .by_category
        .iter()
        .map(|g| vec![g.key.clone(), fmt_amount(&g.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], cats));
    let months: Vec<Vec<String>> = s
        .by_month
        .iter()
        .map(|g| vec![g.key.clone(), fmt_amount(&g.total)])
        .collect();
    println!("{}", pretty_table(&["Month", "Total"], months));
    Ok(())
}

fn summary_report(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = sub.get_one::<String>("kind").unwrap();
    let s = if kind == "income" {
        let f = crate::commands::filter_from_matches(sub, Some("source"))?;
        summary::summarize(&filter::apply(&store.incomes()?, f.as_ref()))
    } else {
        let f = crate::commands::filter_from_matches(sub, Some("category"))?;
        summary::summarize(&filter::apply(&store.expenses()?, f.as_ref()))
    };
    print_summary(&s, json_flag, jsonl_flag)
}

fn balance_report(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    // Same criteria on both sides from the CLI; the tool boundary allows
    // independent filters.
    let f = crate::commands::filter_from_matches(sub, None)?;
    let expenses = filter::apply(&store.expenses()?, f.as_ref());
    let incomes = filter::apply(&store.incomes()?, f.as_ref());
    let b = balance::balance_summary(
        &summary::summarize(&incomes),
        &summary::summarize(&expenses),
    );
    if !maybe_print_json(json_flag, jsonl_flag, &b)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expenses", "Balance", "Savings %"],
                vec![vec![
                    fmt_amount(&b.total_income),
                    fmt_amount(&b.total_expenses),
                    fmt_amount(&b.balance),
                    format!("{:.2}", b.savings_rate),
                ]],
            )
        );
    }
    Ok(())
}

fn by_category(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let f = crate::commands::filter_from_matches(sub, Some("category"))?;
    let rows = filter::apply(&store.expenses()?, f.as_ref());
    let entries = breakdown::spending_by_category(&summary::summarize(&rows));
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let data: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.category.clone(),
                    fmt_amount(&e.amount),
                    format!("{:.2}", e.percentage),
                    e.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share %", "Color"], data)
        );
    }
    Ok(())
}

fn trends_report(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let f = crate::commands::filter_from_matches(sub, None)?;
    let expenses = filter::apply(&store.expenses()?, f.as_ref());
    let incomes = filter::apply(&store.incomes()?, f.as_ref());
    let points = trends::spending_trends(&expenses, &incomes);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let data: Vec<Vec<String>> = points
            .iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    fmt_amount(&p.income),
                    fmt_amount(&p.expenses),
                    fmt_amount(&p.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Income", "Expenses", "Balance"], data)
        );
    }
    Ok(())
}

fn monthly_report(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&monthly::DEFAULT_MONTHS);
    let rows = monthly::monthly_breakdown(&store.expenses()?, &store.incomes()?, months);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|b| {
                let top = b
                    .top_categories
                    .iter()
                    .map(|c| format!("{} {}", c.name, fmt_amount(&c.amount)))
                    .collect::<Vec<_>>()
                    .join("; ");
                vec![
                    b.month.clone(),
                    fmt_amount(&b.income),
                    fmt_amount(&b.expenses),
                    fmt_amount(&b.savings),
                    top,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expenses", "Savings", "Top categories"],
                data,
            )
        );
    }
    Ok(())
}
