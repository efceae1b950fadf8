// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::analytics::{balance, summary};
use spendlens::models::{Expense, Income, IncomeSource};

fn expenses(amounts: &[i64]) -> Vec<Expense> {
    amounts
        .iter()
        .map(|a| Expense::new(Decimal::from(*a), "2026-02-01".parse().unwrap(), "Misc", ""))
        .collect()
}

fn incomes(amounts: &[i64]) -> Vec<Income> {
    amounts
        .iter()
        .map(|a| {
            Income::new(
                Decimal::from(*a),
                "2026-02-01".parse().unwrap(),
                IncomeSource::Salary,
                "",
            )
        })
        .collect()
}

#[test]
fn balance_is_income_minus_expenses() {
    let b = balance::balance_summary(
        &summary::summarize(&incomes(&[5000, 200])),
        &summary::summarize(&expenses(&[1200, 300])),
    );
    assert_eq!(b.total_income, Decimal::from(5200));
    assert_eq!(b.total_expenses, Decimal::from(1500));
    assert_eq!(b.balance, b.total_income - b.total_expenses);
    assert_eq!(b.balance, Decimal::from(3700));
}

#[test]
fn savings_rate_is_zero_without_income() {
    let b = balance::balance_summary(
        &summary::summarize(&incomes(&[])),
        &summary::summarize(&expenses(&[500])),
    );
    assert_eq!(b.savings_rate, 0.0);
    assert_eq!(b.balance, Decimal::from(-500));
}

#[test]
fn savings_rate_percentage() {
    // (5000 - 1000) / 5000 * 100 = 80
    let b = balance::balance_summary(
        &summary::summarize(&incomes(&[5000])),
        &summary::summarize(&expenses(&[1000])),
    );
    assert!((b.savings_rate - 80.0).abs() < 1e-9);
}

#[test]
fn sides_may_be_summarized_from_different_sets() {
    // Filters on the two sides are independent; combining a February income
    // summary with a March expense summary is legal.
    let b = balance::balance_summary(
        &summary::summarize(&incomes(&[100])),
        &summary::summarize(&expenses(&[40, 10])),
    );
    assert_eq!(b.balance, Decimal::from(50));
    assert!((b.savings_rate - 50.0).abs() < 1e-9);
}
