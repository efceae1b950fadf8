// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlens::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::CsvStore::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data directory initialized at {}", store.dir().display());
        }
        Some(("login", sub)) => commands::session::handle(sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut store, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("tools", sub)) => commands::assistant::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
