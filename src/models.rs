// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recurrence class of a transaction. Carried through storage for
/// presentation; the analytics engine ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Fixed,
    #[default]
    Variable,
    Extra,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Fixed => "fixed",
            TransactionType::Variable => "variable",
            TransactionType::Extra => "extra",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(TransactionType::Fixed),
            "variable" => Ok(TransactionType::Variable),
            "extra" => Ok(TransactionType::Extra),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a record is an expense or an income. A transaction carries no
/// kind field; the kind is implied by which store partition it was read
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Expense,
    Income,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Expense => "expense",
            Kind::Income => "income",
        }
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Kind::Expense),
            "income" => Ok(Kind::Income),
            other => Err(format!("unknown kind '{}' (use expense|income)", other)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored transaction. `date` stays a string on purpose: only its first
/// ten characters are significant for aggregation, and malformed values
/// must flow through to the analytics layer, which excludes them per
/// aggregate instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    pub r#type: TransactionType,
    pub date: String,
}

/// A transaction before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    pub r#type: TransactionType,
    pub date: String,
}

impl NewTransaction {
    pub fn with_id(self, id: i64) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            r#type: self.r#type,
            date: self.date,
        }
    }
}

/// All-time aggregate totals, produced by the store's cheap summary query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_expenses: f64,
    pub total_incomes: f64,
    pub balance: f64,
}
