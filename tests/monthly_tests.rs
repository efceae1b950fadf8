// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::analytics::monthly;
use spendlens::models::{Expense, Income, IncomeSource};

fn exp(amount: i64, date: &str, category: &str) -> Expense {
    Expense::new(Decimal::from(amount), date.parse().unwrap(), category, "")
}

fn inc(amount: i64, date: &str) -> Income {
    Income::new(
        Decimal::from(amount),
        date.parse().unwrap(),
        IncomeSource::Salary,
        "",
    )
}

#[test]
fn requesting_one_month_returns_only_the_most_recent() {
    let expenses = vec![
        exp(10, "2026-01-05", "Dining"),
        exp(20, "2026-02-05", "Dining"),
        // five categories in March, top 3 must be truncated
        exp(500, "2026-03-01", "Rent"),
        exp(120, "2026-03-02", "Groceries"),
        exp(80, "2026-03-03", "Dining"),
        exp(40, "2026-03-04", "Transport"),
        exp(15, "2026-03-05", "Entertainment"),
    ];
    let incomes = vec![inc(3000, "2026-03-01")];

    let rows = monthly::monthly_breakdown(&expenses, &incomes, 1);
    assert_eq!(rows.len(), 1);
    let march = &rows[0];
    assert_eq!(march.month, "2026-03");
    assert_eq!(march.income, Decimal::from(3000));
    assert_eq!(march.expenses, Decimal::from(755));
    assert_eq!(march.savings, Decimal::from(2245));

    let top: Vec<&str> = march.top_categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(top, vec!["Rent", "Groceries", "Dining"]);
}

#[test]
fn months_are_descending_and_clipped() {
    let mut expenses = Vec::new();
    for m in 1..=8 {
        expenses.push(exp(10 + m as i64, &format!("2026-{:02}-15", m), "Misc"));
    }
    let rows = monthly::monthly_breakdown(&expenses, &[], monthly::DEFAULT_MONTHS);
    assert_eq!(rows.len(), 6);
    let months: Vec<&str> = rows.iter().map(|b| b.month.as_str()).collect();
    assert_eq!(
        months,
        vec!["2026-08", "2026-07", "2026-06", "2026-05", "2026-04", "2026-03"]
    );
}

#[test]
fn savings_is_income_minus_expenses_per_month() {
    let rows = monthly::monthly_breakdown(
        &[exp(300, "2026-04-10", "Rent")],
        &[inc(1000, "2026-04-01"), inc(200, "2026-04-20")],
        6,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].savings, rows[0].income - rows[0].expenses);
    assert_eq!(rows[0].savings, Decimal::from(900));
}

#[test]
fn income_only_month_has_no_top_categories() {
    let rows = monthly::monthly_breakdown(&[], &[inc(100, "2026-05-01")], 6);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].expenses, Decimal::ZERO);
    assert!(rows[0].top_categories.is_empty());
}

#[test]
fn equal_category_amounts_keep_first_encountered_order() {
    let expenses = vec![
        exp(50, "2026-06-01", "Alpha"),
        exp(50, "2026-06-02", "Beta"),
        exp(50, "2026-06-03", "Gamma"),
        exp(50, "2026-06-04", "Delta"),
    ];
    let rows = monthly::monthly_breakdown(&expenses, &[], 1);
    let top: Vec<&str> = rows[0].top_categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(top, vec!["Alpha", "Beta", "Gamma"]);
}
