// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::{cli, commands};

#[test]
fn list_flags_build_the_expected_filter() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "spendlens", "expense", "list", "--category", "Rent", "--from", "2026-01-01", "--min",
        "10.50", "--search", "landlord",
    ]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = exp_m.subcommand() else {
        panic!("no list subcommand");
    };
    let f = commands::filter_from_matches(list_m, Some("category"))
        .unwrap()
        .unwrap();
    assert_eq!(f.label.as_deref(), Some("Rent"));
    assert_eq!(f.start_date.unwrap().to_string(), "2026-01-01");
    assert_eq!(f.min_amount, Some(Decimal::new(1050, 2)));
    assert_eq!(f.search.as_deref(), Some("landlord"));
    assert!(f.end_date.is_none());
    assert!(f.max_amount.is_none());
}

#[test]
fn no_flags_mean_no_filter() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendlens", "income", "list"]);
    let Some(("income", inc_m)) = matches.subcommand() else {
        panic!("no income subcommand");
    };
    let Some(("list", list_m)) = inc_m.subcommand() else {
        panic!("no list subcommand");
    };
    let f = commands::filter_from_matches(list_m, Some("source")).unwrap();
    assert!(f.is_none());
}

#[test]
fn monthly_months_defaults_to_six() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendlens", "report", "monthly"]);
    let Some(("report", rep_m)) = matches.subcommand() else {
        panic!("no report subcommand");
    };
    let Some(("monthly", monthly_m)) = rep_m.subcommand() else {
        panic!("no monthly subcommand");
    };
    assert_eq!(*monthly_m.get_one::<usize>("months").unwrap(), 6);
}

#[test]
fn monthly_months_parses_as_number() {
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["spendlens", "report", "monthly", "--months", "2", "--json"]);
    let Some(("report", rep_m)) = matches.subcommand() else {
        panic!("no report subcommand");
    };
    let Some(("monthly", monthly_m)) = rep_m.subcommand() else {
        panic!("no monthly subcommand");
    };
    assert_eq!(*monthly_m.get_one::<usize>("months").unwrap(), 2);
    assert!(monthly_m.get_flag("json"));
}

#[test]
fn expense_add_requires_amount() {
    let cli = cli::build_cli();
    let err = cli
        .try_get_matches_from(["spendlens", "expense", "add", "--date", "2026-01-01"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn bad_date_flag_is_reported_with_context() {
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["spendlens", "expense", "list", "--from", "01/02/2026"]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = exp_m.subcommand() else {
        panic!("no list subcommand");
    };
    let err = commands::filter_from_matches(list_m, Some("category")).unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
}
