// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived dashboard analytics.
//!
//! Pure, stateless transformations from a snapshot of transaction records
//! to chart-ready view models. Amounts are untrusted input here: each
//! aggregation applies its own exclusion rule and none of them can fail.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Palette cycled through category slices, in first-encounter order.
pub const CATEGORY_COLORS: [&str; 7] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#81C784", "#E57373", "#BA68C8", "#4DD0E1",
];

const FALLBACK_COLOR: &str = "#687076";

/// One point of the cumulative balance-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One slice of a per-kind category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub label: String,
    pub amount: f64,
    pub color: String,
}

/// Everything the dashboard screen renders, recomputed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub series: Vec<SeriesPoint>,
    pub expenses_by_category: Vec<CategorySlice>,
    pub incomes_by_category: Vec<CategorySlice>,
}

/// Date-only key of a record: the first ten characters of its date field.
/// Empty keys exclude the record from date-bucketed aggregation.
fn date_key(date: &str) -> Option<String> {
    let key: String = date.chars().take(10).collect();
    if key.is_empty() { None } else { Some(key) }
}

/// `MM-DD` when the key has the expected ten-character form, else the key
/// itself.
fn day_label(key: &str) -> String {
    if key.chars().count() == 10 {
        key.chars().skip(5).collect()
    } else {
        key.to_string()
    }
}

fn finite_or_zero(amount: f64) -> f64 {
    if amount.is_finite() { amount } else { 0.0 }
}

/// Cumulative balance sampled once per distinct date across both kinds,
/// ascending. A non-finite amount contributes zero but still opens its
/// date bucket; a record without a usable date is left out entirely. The
/// running total resets to zero if it ever goes non-finite. Never empty:
/// with no usable dates the series is a single zero point with an empty
/// label.
pub fn balance_series(expenses: &[Transaction], incomes: &[Transaction]) -> Vec<SeriesPoint> {
    // Lexicographic order of the ISO keys is chronological order.
    let mut daily: BTreeMap<String, f64> = BTreeMap::new();
    for tx in incomes {
        if let Some(key) = date_key(&tx.date) {
            *daily.entry(key).or_insert(0.0) += finite_or_zero(tx.amount);
        }
    }
    for tx in expenses {
        if let Some(key) = date_key(&tx.date) {
            *daily.entry(key).or_insert(0.0) -= finite_or_zero(tx.amount);
        }
    }

    if daily.is_empty() {
        return vec![SeriesPoint {
            label: String::new(),
            value: 0.0,
        }];
    }

    let mut cumulative = 0.0;
    daily
        .into_iter()
        .map(|(key, net)| {
            cumulative += net;
            if !cumulative.is_finite() {
                cumulative = 0.0;
            }
            SeriesPoint {
                label: day_label(&key),
                value: cumulative,
            }
        })
        .collect()
}

/// Per-category totals for a single kind, descending by amount. Records
/// without a usable category, or with a non-finite or non-positive amount,
/// are excluded outright. Colors cycle through `palette` by
/// first-encounter order and are assigned before sorting, so they stick to
/// their category; amount ties keep first-encounter order (stable sort).
pub fn category_breakdown(transactions: &[Transaction], palette: &[&str]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        let Some(category) = tx.category.as_deref() else {
            continue;
        };
        if category.trim().is_empty() {
            continue;
        }
        if !tx.amount.is_finite() || tx.amount <= 0.0 {
            continue;
        }
        match index.get(category) {
            Some(&i) => slices[i].amount += tx.amount,
            None => {
                let color = if palette.is_empty() {
                    FALLBACK_COLOR
                } else {
                    palette[slices.len() % palette.len()]
                };
                index.insert(category.to_string(), slices.len());
                slices.push(CategorySlice {
                    label: category.to_string(),
                    amount: tx.amount,
                    color: color.to_string(),
                });
            }
        }
    }

    // Amounts are finite and positive here, so the comparison is total.
    slices.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    slices
}

/// The full dashboard view: balance series plus one breakdown per kind.
/// The two breakdowns never mix.
pub fn dashboard(expenses: &[Transaction], incomes: &[Transaction]) -> Dashboard {
    Dashboard {
        series: balance_series(expenses, incomes),
        expenses_by_category: category_breakdown(expenses, &CATEGORY_COLORS),
        incomes_by_category: category_breakdown(incomes, &CATEGORY_COLORS),
    }
}
