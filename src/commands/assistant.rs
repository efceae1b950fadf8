// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::tools;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use serde_json::{Value, json};

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        Some(("call", sub)) => call(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let registry = tools::registry();
    if json_flag || jsonl_flag {
        let entries: Vec<Value> = registry
            .iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "schema": t.schema(),
                })
            })
            .collect();
        maybe_print_json(json_flag, jsonl_flag, &entries)?;
        return Ok(());
    }
    let data: Vec<Vec<String>> = registry
        .iter()
        .map(|t| vec![t.name().to_string(), t.description().to_string()])
        .collect();
    println!("{}", pretty_table(&["Tool", "Description"], data));
    Ok(())
}

fn call(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let input: Value = match sub.get_one::<String>("input") {
        Some(s) => serde_json::from_str(s).context("Invalid --input JSON")?,
        None => json!({}),
    };
    let registry = tools::registry();
    let tool = tools::find(&registry, name).with_context(|| format!("Unknown tool '{}'", name))?;
    let out = tool.call(store, input)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
