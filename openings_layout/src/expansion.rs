// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of opened nodes, kept outside the immutable tree.

use alloc::vec::Vec;

use hashbrown::HashSet;
use openings_tree::{MoveTree, NodePath};

/// Which nodes currently show their children instead of themselves.
///
/// The root is always open and never stored. Every stored path addresses a node with
/// children whose ancestors are all stored too, so collapsing a node can never leave
/// orphaned state behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<NodePath>,
}

impl ExpansionState {
    /// Nothing opened: only the root's children are visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `path` is opened. The root always is.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        path.is_root() || self.open.contains(path)
    }

    /// Number of opened nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if only the root is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Opened paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &NodePath> {
        self.open.iter()
    }

    /// Opened paths in tree order.
    pub fn sorted_paths(&self) -> Vec<NodePath> {
        let mut paths: Vec<NodePath> = self.open.iter().cloned().collect();
        paths.sort();
        paths
    }

    /// Open `path`, along with any closed ancestors so that it becomes visible.
    ///
    /// Returns `true` if the state changed. Leaves and unknown paths are ignored.
    pub fn expand(&mut self, tree: &MoveTree, path: &NodePath) -> bool {
        if path.is_root() || self.open.contains(path) {
            return false;
        }
        match tree.node(path) {
            Some(node) if !node.is_leaf() => {}
            _ => return false,
        }
        let mut ancestor = path.parent();
        while let Some(p) = ancestor {
            if p.is_root() {
                break;
            }
            ancestor = p.parent();
            self.open.insert(p);
        }
        self.open.insert(path.clone());
        true
    }

    /// Close `path` and everything below it. Collapsing the root closes everything.
    ///
    /// Returns `true` if the state changed.
    pub fn collapse(&mut self, path: &NodePath) -> bool {
        let before = self.open.len();
        self.open.retain(|p| p != path && !p.is_descendant_of(path));
        self.open.len() != before
    }

    /// Expand a closed node, collapse an open one. Returns `true` if the state changed.
    pub fn toggle(&mut self, tree: &MoveTree, path: &NodePath) -> bool {
        if !path.is_root() && self.open.contains(path) {
            self.collapse(path)
        } else {
            self.expand(tree, path)
        }
    }

    /// Open `path` and every descendant that has children.
    ///
    /// Returns the number of newly opened nodes.
    pub fn expand_all(&mut self, tree: &MoveTree, path: &NodePath) -> usize {
        let Some(start) = tree.node(path) else {
            return 0;
        };
        let before = self.open.len();
        if !start.is_leaf() {
            self.expand(tree, path);
        }
        let mut stack = alloc::vec![(path.clone(), start)];
        while let Some((p, node)) = stack.pop() {
            for (i, child) in node.children().iter().enumerate() {
                if child.is_leaf() {
                    continue;
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodePath uses 32-bit child indices."
                )]
                let index = i as u32;
                let child_path = p.child(index);
                self.open.insert(child_path.clone());
                stack.push((child_path, child));
            }
        }
        self.open.len() - before
    }

    /// Close everything.
    pub fn clear(&mut self) {
        self.open.clear();
    }
}
