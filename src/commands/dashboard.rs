// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::analytics;
use crate::models::Kind;
use crate::store::TransactionStore;
use crate::utils::{fmt_brl, maybe_print_json, pretty_table};

pub fn handle<S: TransactionStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let expenses = store.list(Kind::Expense)?;
    let incomes = store.list(Kind::Income)?;
    let view = analytics::dashboard(&expenses, &incomes);

    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    // Overview cards: balance from the store's cheap aggregate, per-kind
    // totals from the breakdown slices actually shown below.
    let totals = store.totals()?;
    let shown_expenses: f64 = view.expenses_by_category.iter().map(|s| s.amount).sum();
    let shown_incomes: f64 = view.incomes_by_category.iter().map(|s| s.amount).sum();
    println!(
        "{}",
        pretty_table(
            &["Balance", "Expenses", "Incomes"],
            vec![vec![
                fmt_brl(totals.balance),
                fmt_brl(shown_expenses),
                fmt_brl(shown_incomes),
            ]],
        )
    );

    println!("\nBalance over time");
    println!(
        "{}",
        pretty_table(
            &["Date", "Balance"],
            view.series
                .iter()
                .map(|p| vec![p.label.clone(), fmt_brl(p.value)])
                .collect(),
        )
    );

    for (heading, slices) in [
        ("Expenses by category", &view.expenses_by_category),
        ("Incomes by category", &view.incomes_by_category),
    ] {
        println!("\n{}", heading);
        println!(
            "{}",
            pretty_table(
                &["Category", "Total", "Color"],
                slices
                    .iter()
                    .map(|s| vec![s.label.clone(), fmt_brl(s.amount), s.color.clone()])
                    .collect(),
            )
        );
    }
    Ok(())
}
