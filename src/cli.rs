// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Earliest date, inclusive"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Latest date, inclusive"),
    )
    .arg(
        Arg::new("min")
            .long("min")
            .value_name("AMOUNT")
            .help("Minimum amount, inclusive"),
    )
    .arg(
        Arg::new("max")
            .long("max")
            .value_name("AMOUNT")
            .help("Maximum amount, inclusive"),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .value_name("TEXT")
            .help("Case-insensitive substring of description or category/source"),
    )
}

fn filter_args(cmd: Command, label: &'static str, label_help: &'static str) -> Command {
    range_args(cmd).arg(Arg::new(label).long(label).help(label_help))
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Record and query expenses")
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("date").long("date").required(true).value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(json_flags(filter_args(
            Command::new("list").about("List expenses, newest first"),
            "category",
            "Category, case-insensitive exact match",
        )))
        .subcommand(
            Command::new("update")
                .about("Change fields of an existing expense")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete one expense by id, or all of them")
                .arg(Arg::new("id"))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("id")
                        .help("Delete every expense"),
                ),
        )
}

fn income_cmd() -> Command {
    Command::new("income")
        .about("Record and query income")
        .subcommand(
            Command::new("add")
                .about("Record an income entry")
                .arg(Arg::new("date").long("date").required(true).value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("source")
                        .long("source")
                        .required(true)
                        .help("Salary, Freelance, Investments, or Other"),
                )
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(json_flags(filter_args(
            Command::new("list").about("List income, newest first"),
            "source",
            "Source, case-insensitive exact match",
        )))
        .subcommand(
            Command::new("update")
                .about("Change fields of an existing income entry")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("source").long("source"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete one income entry by id, or all of them")
                .arg(Arg::new("id"))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("id")
                        .help("Delete every income entry"),
                ),
        )
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Aggregated views over the recorded data")
        .subcommand(json_flags(
            filter_args(
                Command::new("summary").about("Totals, average, and breakdowns"),
                "category",
                "Category, case-insensitive exact match (expense summaries)",
            )
            .arg(
                Arg::new("kind")
                    .long("kind")
                    .value_parser(["expense", "income"])
                    .default_value("expense"),
            )
            .arg(
                Arg::new("source")
                    .long("source")
                    .help("Source, case-insensitive exact match (income summaries)"),
            ),
        ))
        .subcommand(json_flags(range_args(
            Command::new("balance").about("Income vs expenses and savings rate"),
        )))
        .subcommand(json_flags(filter_args(
            Command::new("by-category").about("Spend per category with share of total"),
            "category",
            "Category, case-insensitive exact match",
        )))
        .subcommand(json_flags(range_args(
            Command::new("trends").about("Daily income/expense/balance series"),
        )))
        .subcommand(json_flags(
            Command::new("monthly")
                .about("Per-month rollup with top spend categories")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("6")
                        .help("How many most-recent months to return"),
                ),
        ))
}

fn tools_cmd() -> Command {
    Command::new("tools")
        .about("Assistant tool registry")
        .subcommand(json_flags(Command::new("list").about("List available tools")))
        .subcommand(
            Command::new("call")
                .about("Invoke a tool with a JSON input")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_name("JSON")
                        .help("Tool input object, defaults to {}"),
                ),
        )
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(crate_version!())
        .about("Expense and income tracking with category analytics, trends, and assistant tools")
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("login")
                .about("Check credentials against the flat-file store")
                .arg(Arg::new("user").long("user").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_name("PATH")
                        .help("Credentials file, defaults to the data dir"),
                ),
        )
        .subcommand(expense_cmd())
        .subcommand(income_cmd())
        .subcommand(report_cmd())
        .subcommand(tools_cmd())
}
