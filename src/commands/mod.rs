// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod incomes;
pub mod reports;
pub mod assistant;
pub mod session;

use crate::models::Filter;
use crate::utils::{parse_date, parse_decimal};
use anyhow::Result;

/// Build a filter from the shared CLI flags. `label_arg` names the
/// category/source argument when the subcommand has one.
pub fn filter_from_matches(m: &clap::ArgMatches, label_arg: Option<&str>) -> Result<Option<Filter>> {
    let mut f = Filter::default();
    if let Some(s) = m.get_one::<String>("from") {
        f.start_date = Some(parse_date(s)?);
    }
    if let Some(s) = m.get_one::<String>("to") {
        f.end_date = Some(parse_date(s)?);
    }
    if let Some(name) = label_arg {
        if let Some(s) = m.get_one::<String>(name) {
            f.label = Some(s.clone());
        }
    }
    if let Some(s) = m.get_one::<String>("min") {
        f.min_amount = Some(parse_decimal(s)?);
    }
    if let Some(s) = m.get_one::<String>("max") {
        f.max_amount = Some(parse_decimal(s)?);
    }
    if let Some(s) = m.get_one::<String>("search") {
        f.search = Some(s.clone());
    }
    Ok(if f.is_empty() { None } else { Some(f) })
}
