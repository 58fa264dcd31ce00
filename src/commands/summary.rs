// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Kind;
use crate::rollups;
use crate::store::TransactionStore;
use crate::utils::{fmt_brl, maybe_print_json, parse_date, pretty_table};

pub fn handle<S: TransactionStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let as_of = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let expenses = store.list(Kind::Expense)?;
    let incomes = store.list(Kind::Income)?;
    let totals = store.totals()?;
    let rollups = rollups::compute(&expenses, &incomes, &totals, as_of);

    if !maybe_print_json(json_flag, jsonl_flag, &rollups)? {
        let rows = vec![
            vec!["Balance".to_string(), fmt_brl(rollups.balance)],
            vec!["Today expenses".to_string(), fmt_brl(rollups.today_expenses)],
            vec!["Today incomes".to_string(), fmt_brl(rollups.today_incomes)],
            vec!["Month expenses".to_string(), fmt_brl(rollups.month_expenses)],
            vec!["Month incomes".to_string(), fmt_brl(rollups.month_incomes)],
        ];
        println!("{}", pretty_table(&["Metric", "Amount"], rows));
        match &rollups.last_transaction {
            Some(last) => {
                let sign = match last.kind {
                    Kind::Expense => "-",
                    Kind::Income => "+",
                };
                println!(
                    "Last transaction: {} ({}{}) on {}",
                    last.transaction.title,
                    sign,
                    fmt_brl(last.transaction.amount),
                    last.transaction.date
                );
            }
            None => println!("No transactions recorded"),
        }
    }
    Ok(())
}
