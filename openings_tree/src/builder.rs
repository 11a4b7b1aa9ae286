// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregation of game records into a [`MoveTree`].

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{BuildError, MalformedReason};
use crate::node::MoveNode;
use crate::tree::MoveTree;
use crate::types::{GameRecord, GameRef, NodeKind};

/// Build a move tree from `records` in one call.
///
/// Fails on the first malformed record; no partial tree is produced.
///
/// ```rust
/// use openings_tree::{GameRecord, build};
///
/// let tree = build([
///     GameRecord::new(["e4", "e5"], "g1"),
///     GameRecord::new(["d4"], "g2"),
/// ])
/// .unwrap();
/// assert_eq!(tree.total_games(), 2);
/// assert_eq!(tree.root().children()[0].label(), "d4");
/// ```
pub fn build<I>(records: I) -> Result<MoveTree, BuildError>
where
    I: IntoIterator<Item = GameRecord>,
{
    let mut builder = TreeBuilder::new();
    for record in records {
        builder.push(&record)?;
    }
    builder.finish()
}

/// Incremental tree builder.
///
/// Records are validated before they touch the accumulator, so a rejected record leaves
/// the builder exactly as it was. Call [`TreeBuilder::finish`] to freeze the tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Pending,
    records: usize,
    /// Index of the record that introduced each game reference.
    seen: BTreeMap<GameRef, usize>,
}

/// Mutable accumulator for one node.
#[derive(Debug, Default)]
struct Pending {
    children: BTreeMap<String, Self>,
    weight: u64,
    games: BTreeSet<GameRef>,
    /// Number of records whose move sequence stops here.
    ended: u64,
    ended_games: BTreeSet<GameRef>,
}

impl TreeBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records ingested so far.
    pub fn len(&self) -> usize {
        self.records
    }

    /// Returns `true` if nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Ingest one record.
    ///
    /// Each game reference may back only one record, so that the games behind a node always
    /// number as many as its weight.
    pub fn push(&mut self, record: &GameRecord) -> Result<(), BuildError> {
        let index = self.records;
        let game =
            validate(record).map_err(|reason| BuildError::MalformedRecord { index, reason })?;
        if let Some(&first) = self.seen.get(game) {
            return Err(BuildError::MalformedRecord {
                index,
                reason: MalformedReason::DuplicateGame(first),
            });
        }
        self.seen.insert(game.clone(), index);

        let mut node = &mut self.root;
        node.weight += 1;
        node.games.insert(game.clone());
        for label in &record.moves {
            node = node.children.entry(label.clone()).or_default();
            node.weight += 1;
            node.games.insert(game.clone());
        }
        node.ended += 1;
        node.ended_games.insert(game.clone());

        self.records += 1;
        Ok(())
    }

    /// Freeze the accumulated records into an immutable tree.
    pub fn finish(self) -> Result<MoveTree, BuildError> {
        if self.records == 0 {
            return Err(BuildError::NoRecords);
        }
        let mut len = 0;
        let root = freeze(String::new(), self.root, &mut len);
        #[cfg(feature = "tracing")]
        tracing::debug!(records = self.records, nodes = len, "built move tree");
        Ok(MoveTree::new(root, len))
    }
}

fn validate(record: &GameRecord) -> Result<&GameRef, MalformedReason> {
    let game = match &record.game {
        Some(game) if !game.as_str().is_empty() => game,
        _ => return Err(MalformedReason::MissingGame),
    };
    if record.moves.is_empty() {
        return Err(MalformedReason::EmptyMoves);
    }
    if let Some(pos) = record.moves.iter().position(String::is_empty) {
        return Err(MalformedReason::EmptyLabel(pos));
    }
    Ok(game)
}

fn freeze(label: String, pending: Pending, len: &mut usize) -> MoveNode {
    *len += 1;
    let Pending {
        children,
        weight,
        games,
        ended,
        ended_games,
    } = pending;

    let mut frozen: Vec<MoveNode> = children
        .into_iter()
        .map(|(label, child)| freeze(label, child, len))
        .collect();

    // Games that stop at a position other games continue from get their own leaf, so
    // the weight of an interior node is always the sum of its children.
    if !frozen.is_empty() && ended > 0 {
        *len += 1;
        frozen.push(MoveNode {
            label: String::new(),
            kind: NodeKind::GameEnd,
            weight: ended,
            children: Vec::new(),
            game_refs: ended_games,
        });
    }

    frozen.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then(a.kind.cmp(&b.kind))
            .then_with(|| a.label.cmp(&b.label))
    });

    debug_assert!(
        frozen.is_empty() || frozen.iter().map(|c| c.weight).sum::<u64>() == weight,
        "interior weight must equal the sum of its children"
    );

    MoveNode {
        label,
        kind: NodeKind::Move,
        weight,
        children: frozen,
        game_refs: games,
    }
}
