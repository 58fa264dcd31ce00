// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Point-in-time rollups: today, this month, all-time, and the most
//! recent transaction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Kind, Totals, Transaction};

/// Scalar aggregates for the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollups {
    pub balance: f64,
    pub today_expenses: f64,
    pub today_incomes: f64,
    pub month_expenses: f64,
    pub month_incomes: f64,
    pub last_transaction: Option<LastTransaction>,
}

/// The most recent transaction across both kinds, tagged with the
/// partition it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTransaction {
    pub kind: Kind,
    #[serde(flatten)]
    pub transaction: Transaction,
}

/// Compute all rollups for the `as_of` day. `totals` comes from the
/// store's aggregate query instead of re-summing the full lists, but is
/// numerically consistent with doing so.
pub fn compute(
    expenses: &[Transaction],
    incomes: &[Transaction],
    totals: &Totals,
    as_of: NaiveDate,
) -> Rollups {
    let today = as_of.format("%Y-%m-%d").to_string();
    let month = &today[..7];

    Rollups {
        balance: totals.balance,
        today_expenses: sum_with_prefix(expenses, &today),
        today_incomes: sum_with_prefix(incomes, &today),
        month_expenses: sum_with_prefix(expenses, month),
        month_incomes: sum_with_prefix(incomes, month),
        last_transaction: last_transaction(expenses, incomes),
    }
}

/// Prefix match, not exact-length match: a stored date-time still counts
/// toward its day. Non-finite amounts are skipped so the sum stays a
/// number.
fn sum_with_prefix(transactions: &[Transaction], prefix: &str) -> f64 {
    transactions
        .iter()
        .filter(|t| t.date.starts_with(prefix))
        .map(|t| t.amount)
        .filter(|a| a.is_finite())
        .sum()
}

/// Milliseconds since epoch for a stored date string. Accepts RFC 3339,
/// a naive date-time, or a bare date; anything else ranks lowest.
fn timestamp_millis(date: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.and_utc().timestamp_millis();
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    }
    i64::MIN
}

/// The record with the maximum parsed date across the union of both
/// kinds, or `None` when both lists are empty. Ties go to the record
/// encountered first, expenses before incomes, so the result is
/// deterministic for a given snapshot.
pub fn last_transaction(
    expenses: &[Transaction],
    incomes: &[Transaction],
) -> Option<LastTransaction> {
    let mut best: Option<(i64, LastTransaction)> = None;
    let tagged = expenses
        .iter()
        .map(|t| (Kind::Expense, t))
        .chain(incomes.iter().map(|t| (Kind::Income, t)));

    for (kind, tx) in tagged {
        let ts = timestamp_millis(&tx.date);
        let newer = match &best {
            Some((best_ts, _)) => ts > *best_ts,
            None => true,
        };
        if newer {
            best = Some((
                ts,
                LastTransaction {
                    kind,
                    transaction: tx.clone(),
                },
            ));
        }
    }
    best.map(|(_, last)| last)
}
