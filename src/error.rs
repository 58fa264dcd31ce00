// Copyright (c) 2025 Econdash.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::models::Kind;

/// Errors surfaced by the transaction store seam.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("no {kind} with id {id}")]
    NotFound { kind: Kind, id: i64 },
}
