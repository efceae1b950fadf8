// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::summary::Summary;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub savings_rate: f64,
}

/// Combine independently-computed income and expense summaries. The two
/// sides may have been filtered with different criteria; that is the
/// caller's choice. `savings_rate` is 0 when there is no income.
pub fn balance_summary(incomes: &Summary, expenses: &Summary) -> BalanceSummary {
    let balance = incomes.total - expenses.total;
    let savings_rate = if incomes.total.is_zero() {
        0.0
    } else {
        ((balance / incomes.total) * Decimal::ONE_HUNDRED)
            .round_dp(2)
            .to_f64()
            .unwrap_or(0.0)
    };
    BalanceSummary {
        total_income: incomes.total,
        total_expenses: expenses.total,
        balance,
        savings_rate,
    }
}
