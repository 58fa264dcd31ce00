// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Error;
use crate::models::{Kind, NewTransaction, Totals, Transaction};
use crate::store::TransactionStore;

/// In-memory store. Stands in where no SQLite file is wanted (tests,
/// ephemeral sessions); ids come from a single counter shared by both
/// partitions, and new records go to the front so listing is
/// newest-insert-first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: Vec<Transaction>,
    incomes: Vec<Transaction>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, kind: Kind) -> &Vec<Transaction> {
        match kind {
            Kind::Expense => &self.expenses,
            Kind::Income => &self.incomes,
        }
    }

    fn partition_mut(&mut self, kind: Kind) -> &mut Vec<Transaction> {
        match kind {
            Kind::Expense => &mut self.expenses,
            Kind::Income => &mut self.incomes,
        }
    }
}

impl TransactionStore for MemoryStore {
    fn insert(&mut self, kind: Kind, tx: &NewTransaction) -> Result<Transaction, Error> {
        self.last_id += 1;
        let record = tx.clone().with_id(self.last_id);
        self.partition_mut(kind).insert(0, record.clone());
        Ok(record)
    }

    fn list(&self, kind: Kind) -> Result<Vec<Transaction>, Error> {
        Ok(self.partition(kind).clone())
    }

    fn delete(&mut self, kind: Kind, id: i64) -> Result<(), Error> {
        let partition = self.partition_mut(kind);
        match partition.iter().position(|t| t.id == id) {
            Some(idx) => {
                partition.remove(idx);
                Ok(())
            }
            None => Err(Error::NotFound { kind, id }),
        }
    }

    fn totals(&self) -> Result<Totals, Error> {
        let total_expenses: f64 = self.expenses.iter().map(|t| t.amount).sum();
        let total_incomes: f64 = self.incomes.iter().map(|t| t.amount).sum();
        Ok(Totals {
            total_expenses,
            total_incomes,
            balance: total_incomes - total_expenses,
        })
    }

    fn clear_all(&mut self) -> Result<(), Error> {
        self.expenses.clear();
        self.incomes.clear();
        self.last_id = 0;
        Ok(())
    }
}
