// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::TransactionStore;

/// Clear both partitions. Destructive, so it refuses to run without an
/// explicit `--yes`.
pub fn handle<S: TransactionStore>(store: &mut S, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        println!("This deletes every stored transaction and cannot be undone.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }
    store.clear_all()?;
    tracing::info!("database cleared");
    println!("All transactions deleted.");
    Ok(())
}
