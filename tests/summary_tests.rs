// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::analytics::summary;
use spendlens::models::{Expense, Income, IncomeSource};

fn exp(amount: i64, date: &str, category: &str) -> Expense {
    Expense::new(Decimal::from(amount), date.parse().unwrap(), category, "")
}

#[test]
fn empty_input_yields_all_zero_summary() {
    let s = summary::summarize(&Vec::<Expense>::new());
    assert_eq!(s.total, Decimal::ZERO);
    assert_eq!(s.average, Decimal::ZERO);
    assert_eq!(s.count, 0);
    assert!(s.by_category.is_empty());
    assert!(s.by_month.is_empty());
}

#[test]
fn totals_average_and_count() {
    let records = vec![
        exp(100, "2026-02-01", "Rent"),
        exp(50, "2026-02-10", "Dining"),
        exp(30, "2026-03-01", "Dining"),
    ];
    let s = summary::summarize(&records);
    assert_eq!(s.total, Decimal::from(180));
    assert_eq!(s.count, 3);
    assert_eq!(s.average, Decimal::from(60));
}

#[test]
fn groups_keep_first_occurrence_order() {
    let records = vec![
        exp(100, "2026-02-01", "Rent"),
        exp(50, "2026-02-10", "Dining"),
        exp(30, "2026-03-01", "Dining"),
    ];
    let s = summary::summarize(&records);
    let cats: Vec<&str> = s.by_category.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(cats, vec!["Rent", "Dining"]);
    assert_eq!(s.by_category[1].total, Decimal::from(80));

    let months: Vec<&str> = s.by_month.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(months, vec!["2026-02", "2026-03"]);
    assert_eq!(s.by_month[0].total, Decimal::from(150));
}

#[test]
fn income_groups_by_source_name() {
    let records = vec![
        Income::new(
            Decimal::from(5000),
            "2026-02-01".parse().unwrap(),
            IncomeSource::Salary,
            "",
        ),
        Income::new(
            Decimal::from(400),
            "2026-02-15".parse().unwrap(),
            IncomeSource::Freelance,
            "logo work",
        ),
        Income::new(
            Decimal::from(600),
            "2026-02-20".parse().unwrap(),
            IncomeSource::Salary,
            "bonus",
        ),
    ];
    let s = summary::summarize(&records);
    assert_eq!(s.by_category[0].key, "Salary");
    assert_eq!(s.by_category[0].total, Decimal::from(5600));
    assert_eq!(s.by_category[1].key, "Freelance");
}

#[test]
fn totals_add_over_any_partition() {
    let a = vec![exp(10, "2026-01-01", "A"), exp(25, "2026-01-02", "B")];
    let b = vec![
        exp(7, "2026-02-01", "A"),
        exp(13, "2026-02-02", "C"),
        exp(45, "2026-03-01", "B"),
    ];
    let both: Vec<Expense> = a.iter().chain(b.iter()).cloned().collect();
    let sum_a = summary::summarize(&a).total;
    let sum_b = summary::summarize(&b).total;
    assert_eq!(sum_a + sum_b, summary::summarize(&both).total);
}
