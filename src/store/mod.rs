// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Storage capability for transaction records.
//!
//! The backend is picked once at process start; everything above this seam
//! talks to [TransactionStore] and never learns which one it got.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Error;
use crate::models::{Kind, NewTransaction, Totals, Transaction};

/// Durable record of expense and income transactions, partitioned by
/// [Kind].
pub trait TransactionStore {
    /// Persist a new record in the `kind` partition and assign its id.
    fn insert(&mut self, kind: Kind, tx: &NewTransaction) -> Result<Transaction, Error>;

    /// All records of one kind, newest date first. Callers must not depend
    /// on the order; the analytics layer resorts internally.
    fn list(&self, kind: Kind) -> Result<Vec<Transaction>, Error>;

    /// Remove a single record. [Error::NotFound] when the id is absent.
    fn delete(&mut self, kind: Kind, id: i64) -> Result<(), Error>;

    /// Cheap aggregate totals, consistent with summing every record.
    fn totals(&self) -> Result<Totals, Error>;

    /// Remove every record of both kinds.
    fn clear_all(&mut self) -> Result<(), Error>;
}
