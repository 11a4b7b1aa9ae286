// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{GameRef, NodeKind};

/// A position in the move tree, reached by playing `label` from its parent.
///
/// Children are owned exclusively by their parent and sorted by descending weight.
/// For every node with children, `weight` equals the sum of the children's weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveNode {
    pub(crate) label: String,
    pub(crate) kind: NodeKind,
    pub(crate) weight: u64,
    pub(crate) children: Vec<Self>,
    pub(crate) game_refs: BTreeSet<GameRef>,
}

impl MoveNode {
    /// Move notation. Empty for the root and for [`NodeKind::GameEnd`] nodes.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label suitable for display: `"(end)"` for game-end nodes, `"-"` for the root.
    pub fn display_label(&self) -> &str {
        match self.kind {
            NodeKind::GameEnd => "(end)",
            NodeKind::Move if self.label.is_empty() => "-",
            NodeKind::Move => &self.label,
        }
    }

    /// Whether this node is a move or a game-end marker.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Number of games passing through this node.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Children, heaviest first.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Child at `index`, if any.
    pub fn child(&self, index: u32) -> Option<&Self> {
        self.children.get(index as usize)
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Games whose move sequence passes through this node.
    pub fn game_refs(&self) -> &BTreeSet<GameRef> {
        &self.game_refs
    }

    /// The underlying game if exactly one game passes through this node.
    pub fn single_game(&self) -> Option<&GameRef> {
        if self.game_refs.len() == 1 {
            self.game_refs.first()
        } else {
            None
        }
    }
}
