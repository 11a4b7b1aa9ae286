// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a move tree.

use thiserror::Error;

/// Why a single record was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The record has no moves.
    #[error("empty move sequence")]
    EmptyMoves,
    /// The move at this position has an empty label.
    #[error("move {0} has an empty label")]
    EmptyLabel(usize),
    /// The record has no (or an empty) game reference.
    #[error("missing game reference")]
    MissingGame,
    /// An earlier record already used this game reference.
    #[error("game reference already used by record {0}")]
    DuplicateGame(usize),
}

/// Failure to build a [`MoveTree`](crate::MoveTree). Building is all-or-nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A record could not be ingested.
    #[error("record {index} is malformed: {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the input.
        index: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },
    /// No records were supplied, so the root would have no weight.
    #[error("no game records to build a move tree from")]
    NoRecords,
}
