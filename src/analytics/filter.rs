// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Filter, Record};

/// Narrow `records` to those matching `filter` and return them newest first.
/// All predicates are inclusive bounds; equal dates keep their input order
/// (`sort_by` is stable). No filter means sort only.
pub fn apply<R: Record + Clone>(records: &[R], filter: Option<&Filter>) -> Vec<R> {
    let mut out: Vec<R> = match filter {
        Some(f) => records.iter().filter(|r| f.matches(*r)).cloned().collect(),
        None => records.to_vec(),
    };
    out.sort_by(|a, b| b.date().cmp(&a.date()));
    out
}
