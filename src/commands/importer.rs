// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::{Kind, NewTransaction, TransactionType};
use crate::store::TransactionStore;
use crate::utils::parse_amount;

/// Restore transactions from a CSV backup. Columns:
/// `kind,title,amount,category,type,date`, header row expected. Any
/// malformed row aborts the import with context naming the offender.
pub fn handle<S: TransactionStore>(store: &mut S, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let kind_raw = rec.get(0).context("kind missing")?.trim();
        let kind: Kind = kind_raw
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid kind '{}'", kind_raw))?;
        let title = rec.get(1).context("title missing")?.trim().to_string();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let amount = parse_amount(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, title))?;
        let category = rec
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let r#type = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<TransactionType>().map_err(anyhow::Error::msg))
            .transpose()?
            .unwrap_or_default();
        let date = rec.get(5).context("date missing")?.trim().to_string();

        store.insert(
            kind,
            &NewTransaction {
                title,
                amount,
                category,
                r#type,
                date,
            },
        )?;
        imported += 1;
    }
    tracing::info!(imported, path, "csv import complete");
    println!("Imported {} transactions from {}", imported, path);
    Ok(())
}
