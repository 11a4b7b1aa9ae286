// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading game records from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use openings_tree::GameRecord;
use serde::Deserialize;

/// Accepted file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    /// `[{"moves": ["e2e4", ...], "game": "https://..."}, ...]`
    Records(Vec<GameRecord>),
    /// `[["e2e4", "e7e5"], ...]`; games are named after their position in the file.
    MoveLists(Vec<Vec<String>>),
}

/// Parse records from a JSON document.
///
/// With `skip_empty`, games without moves are dropped instead of failing the build.
pub fn parse_records(json: &str, skip_empty: bool) -> Result<Vec<GameRecord>> {
    let input: Input = serde_json::from_str(json)
        .context("expected an array of game records or move lists")?;
    let mut records = match input {
        Input::Records(records) => records,
        Input::MoveLists(lists) => lists
            .into_iter()
            .enumerate()
            .map(|(i, moves)| GameRecord::new(moves, format!("game-{i}")))
            .collect(),
    };
    if skip_empty {
        let before = records.len();
        records.retain(|r| !r.moves.is_empty());
        let skipped = before - records.len();
        if skipped > 0 {
            tracing::warn!(skipped, "dropped games without moves");
        }
    }
    Ok(records)
}

/// Read and parse a records file.
pub fn load_records(path: &Path, skip_empty: bool) -> Result<Vec<GameRecord>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let records = parse_records(&json, skip_empty)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(records = records.len(), path = %path.display(), "loaded games");
    Ok(records)
}
