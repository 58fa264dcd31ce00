// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::models::{Kind, NewTransaction, TransactionType};
use crate::store::TransactionStore;
use crate::utils::{fmt_brl, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table};

pub fn handle<S: TransactionStore>(store: &mut S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: TransactionStore>(store: &mut S, sub: &clap::ArgMatches) -> Result<()> {
    let kind: Kind = sub
        .get_one::<String>("kind")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    if title.is_empty() {
        bail!("Title must not be empty");
    }
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    if amount <= 0.0 {
        bail!("Amount must be positive, got {}", amount);
    }
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let r#type: TransactionType = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let record = store.insert(
        kind,
        &NewTransaction {
            title,
            amount,
            category,
            r#type,
            date: date.to_string(),
        },
    )?;
    println!(
        "Recorded {} '{}' of {} on {} (id: {})",
        kind,
        record.title,
        fmt_brl(record.amount),
        record.date,
        record.id
    );
    Ok(())
}

fn list<S: TransactionStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.kind.to_string(),
                    r.id.to_string(),
                    r.date.clone(),
                    r.title.clone(),
                    fmt_brl(r.amount),
                    r.category.clone(),
                    r.r#type.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Kind", "Id", "Date", "Title", "Amount", "Category", "Type"],
                rows,
            )
        );
    }
    Ok(())
}

fn delete<S: TransactionStore>(store: &mut S, sub: &clap::ArgMatches) -> Result<()> {
    let kind: Kind = sub
        .get_one::<String>("kind")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete(kind, id)?;
    println!("Deleted {} {}", kind, id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub kind: Kind,
    pub id: i64,
    pub date: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub r#type: String,
}

pub fn query_rows<S: TransactionStore>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let kinds: Vec<Kind> = match sub.get_one::<String>("kind") {
        Some(k) => vec![k.parse().map_err(anyhow::Error::msg)?],
        None => vec![Kind::Expense, Kind::Income],
    };
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };

    let mut rows = Vec::new();
    for kind in kinds {
        for tx in store.list(kind)? {
            if let Some(month) = &month {
                if !tx.date.starts_with(month.as_str()) {
                    continue;
                }
            }
            rows.push(TransactionRow {
                kind,
                id: tx.id,
                date: tx.date,
                title: tx.title,
                amount: tx.amount,
                category: tx.category.unwrap_or_default(),
                r#type: tx.r#type.to_string(),
            });
        }
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
