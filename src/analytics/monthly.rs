// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use crate::utils::month_key;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_MONTHS: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryAmount {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub top_categories: Vec<CategoryAmount>,
}

#[derive(Default)]
struct Bucket {
    income: Decimal,
    expenses: Decimal,
    categories: Vec<CategoryAmount>,
}

/// Bucket every record passed by calendar month, most recent month first,
/// truncated to `months` entries. Top categories are expense-only, the 3
/// largest per month; ties keep first-encountered order (stable sort).
///
/// Unlike the other builders this one takes no filter: it always reflects
/// the full record set handed to it.
pub fn monthly_breakdown(
    expenses: &[Expense],
    incomes: &[Income],
    months: usize,
) -> Vec<MonthlyBreakdown> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
    for e in expenses {
        let b = buckets.entry(month_key(e.date)).or_default();
        b.expenses += e.amount;
        match b.categories.iter_mut().find(|c| c.name == e.category) {
            Some(c) => c.amount += e.amount,
            None => b.categories.push(CategoryAmount {
                name: e.category.clone(),
                amount: e.amount,
            }),
        }
    }
    for i in incomes {
        buckets.entry(month_key(i.date)).or_default().income += i.amount;
    }
    buckets
        .into_iter()
        .rev()
        .take(months)
        .map(|(month, mut b)| {
            b.categories.sort_by(|x, y| y.amount.cmp(&x.amount));
            b.categories.truncate(3);
            MonthlyBreakdown {
                month,
                income: b.income,
                expenses: b.expenses,
                savings: b.income - b.expenses,
                top_categories: b.categories,
            }
        })
        .collect()
}
