// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, params};

use crate::db;
use crate::error::Error;
use crate::models::{Kind, NewTransaction, Totals, Transaction};
use crate::store::TransactionStore;

/// SQLite-backed store, the on-device default.
pub struct SqliteStore {
    conn: Connection,
}

fn table(kind: Kind) -> &'static str {
    match kind {
        Kind::Expense => "expenses",
        Kind::Income => "incomes",
    }
}

impl SqliteStore {
    /// Open the database at its configured path. Schema setup runs here,
    /// before any data operation can be issued, and is idempotent.
    pub fn open() -> Result<Self> {
        Ok(Self {
            conn: db::open_or_init()?,
        })
    }

    /// Throwaway database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl TransactionStore for SqliteStore {
    fn insert(&mut self, kind: Kind, tx: &NewTransaction) -> Result<Transaction, Error> {
        self.conn.execute(
            &format!(
                "INSERT INTO {}(title, amount, category, type, date) VALUES (?1, ?2, ?3, ?4, ?5)",
                table(kind)
            ),
            params![
                tx.title,
                tx.amount,
                tx.category,
                tx.r#type.as_str(),
                tx.date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(kind = %kind, id, "inserted transaction");
        Ok(tx.clone().with_id(id))
    }

    fn list(&self, kind: Kind) -> Result<Vec<Transaction>, Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, title, amount, category, type, date FROM {} ORDER BY date DESC, id DESC",
            table(kind)
        ))?;
        let rows = stmt.query_map([], |r| {
            Ok(Transaction {
                id: r.get(0)?,
                title: r.get(1)?,
                amount: r.get(2)?,
                category: r.get(3)?,
                // Legacy rows may hold NULL or junk here; fall back to the
                // default class rather than failing the whole list.
                r#type: r
                    .get::<_, Option<String>>(4)?
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
                date: r.get(5)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn delete(&mut self, kind: Kind, id: i64) -> Result<(), Error> {
        let affected = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", table(kind)),
            params![id],
        )?;
        if affected == 0 {
            return Err(Error::NotFound { kind, id });
        }
        Ok(())
    }

    fn totals(&self) -> Result<Totals, Error> {
        let total_expenses: f64 =
            self.conn
                .query_row("SELECT COALESCE(SUM(amount), 0) FROM expenses", [], |r| {
                    r.get(0)
                })?;
        let total_incomes: f64 =
            self.conn
                .query_row("SELECT COALESCE(SUM(amount), 0) FROM incomes", [], |r| {
                    r.get(0)
                })?;
        Ok(Totals {
            total_expenses,
            total_incomes,
            balance: total_incomes - total_expenses,
        })
    }

    fn clear_all(&mut self) -> Result<(), Error> {
        self.conn
            .execute_batch("DELETE FROM expenses; DELETE FROM incomes;")?;
        Ok(())
    }
}
