// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::summary::Summary;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::HashMap;

/// Chart colors for the conventional category vocabulary. Lookup is
/// case-sensitive; anything off the list gets the neutral gray.
static CATEGORY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Food", "#f59e0b"),
        ("Dining", "#f97316"),
        ("Groceries", "#84cc16"),
        ("Rent", "#6366f1"),
        ("Housing", "#8b5cf6"),
        ("Transport", "#06b6d4"),
        ("Utilities", "#0ea5e9"),
        ("Entertainment", "#ec4899"),
        ("Health", "#ef4444"),
        ("Shopping", "#d946ef"),
        ("Travel", "#14b8a6"),
        ("Education", "#3b82f6"),
        ("Other", "#9ca3af"),
    ])
});

pub const FALLBACK_COLOR: &str = "#6b7280";

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS.get(category).copied().unwrap_or(FALLBACK_COLOR)
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
    pub percentage: f64,
    pub color: String,
}

/// Annotate a summary's category totals with their share of the summary's
/// own total (0 when the total is 0) and sort descending by amount.
pub fn spending_by_category(summary: &Summary) -> Vec<CategorySpend> {
    let mut out: Vec<CategorySpend> = summary
        .by_category
        .iter()
        .map(|g| CategorySpend {
            category: g.key.clone(),
            amount: g.total,
            percentage: if summary.total.is_zero() {
                0.0
            } else {
                ((g.total / summary.total) * Decimal::ONE_HUNDRED)
                    .round_dp(2)
                    .to_f64()
                    .unwrap_or(0.0)
            },
            color: category_color(&g.key).to_string(),
        })
        .collect();
    out.sort_by(|a, b| b.amount.cmp(&a.amount));
    out
}
