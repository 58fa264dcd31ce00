// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::models::Kind;
use crate::store::TransactionStore;

#[derive(Serialize)]
struct ExportRow {
    kind: Kind,
    title: String,
    amount: f64,
    category: String,
    r#type: String,
    date: String,
}

/// Full backup of both kinds, oldest first, as CSV or JSON.
pub fn handle<S: TransactionStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let mut rows: Vec<ExportRow> = Vec::new();
    for kind in [Kind::Expense, Kind::Income] {
        for tx in store.list(kind)? {
            rows.push(ExportRow {
                kind,
                title: tx.title,
                amount: tx.amount,
                category: tx.category.unwrap_or_default(),
                r#type: tx.r#type.to_string(),
                date: tx.date,
            });
        }
    }
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["kind", "title", "amount", "category", "type", "date"])?;
            for r in &rows {
                let amount = r.amount.to_string();
                wtr.write_record([
                    r.kind.as_str(),
                    r.title.as_str(),
                    amount.as_str(),
                    r.category.as_str(),
                    r.r#type.as_str(),
                    r.date.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
