// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Merge expenses and incomes into one chronological series, one point per
/// distinct date seen on either side. A date with only one side present
/// reports 0 for the other.
pub fn spending_trends(expenses: &[Expense], incomes: &[Income]) -> Vec<TrendPoint> {
    let mut days: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for e in expenses {
        days.entry(e.date).or_insert((Decimal::ZERO, Decimal::ZERO)).1 += e.amount;
    }
    for i in incomes {
        days.entry(i.date).or_insert((Decimal::ZERO, Decimal::ZERO)).0 += i.amount;
    }
    days.into_iter()
        .map(|(date, (income, expenses))| TrendPoint {
            date,
            income,
            expenses,
            balance: income - expenses,
        })
        .collect()
}
