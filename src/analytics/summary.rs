// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Record;
use crate::utils::month_key;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One key of a grouped total. Groups keep first-occurrence order so that
/// iteration is deterministic for a given input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: Decimal,
    pub average: Decimal,
    pub count: usize,
    #[serde(serialize_with = "groups_as_map")]
    pub by_category: Vec<GroupTotal>,
    #[serde(serialize_with = "groups_as_map")]
    pub by_month: Vec<GroupTotal>,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            average: Decimal::ZERO,
            count: 0,
            by_category: Vec::new(),
            by_month: Vec::new(),
        }
    }
}

fn groups_as_map<S: Serializer>(groups: &[GroupTotal], s: S) -> Result<S::Ok, S::Error> {
    let mut m = s.serialize_map(Some(groups.len()))?;
    for g in groups {
        m.serialize_entry(&g.key, &g.total)?;
    }
    m.end()
}

fn bump(groups: &mut Vec<GroupTotal>, key: &str, amount: Decimal) {
    match groups.iter_mut().find(|g| g.key == key) {
        Some(g) => g.total += amount,
        None => groups.push(GroupTotal {
            key: key.to_string(),
            total: amount,
        }),
    }
}

/// Reduce an already-filtered record set into totals and the two breakdowns.
/// Single accumulation pass; empty input yields the all-zero summary.
pub fn summarize<R: Record>(records: &[R]) -> Summary {
    let mut summary = Summary::empty();
    for r in records {
        summary.total += r.amount();
        bump(&mut summary.by_category, r.label(), r.amount());
        bump(&mut summary.by_month, &month_key(r.date()), r.amount());
    }
    summary.count = records.len();
    if summary.count > 0 {
        summary.average = summary.total / Decimal::from(summary.count as u64);
    }
    summary
}
