// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable move tree and its queries.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::node::MoveNode;
use crate::types::{NodeKind, NodePath};

const SEPARATOR: &str = " | ";
const INDENT: &str = "    ";

/// A weighted move hierarchy built by [`TreeBuilder`](crate::TreeBuilder).
///
/// Nodes are addressed by [`NodePath`]. The tree never changes after it is built, so
/// state such as which nodes are expanded is kept elsewhere, keyed by path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTree {
    root: MoveNode,
    len: usize,
}

impl MoveTree {
    pub(crate) fn new(root: MoveNode, len: usize) -> Self {
        Self { root, len }
    }

    /// The start position. Its weight is the number of games loaded.
    pub fn root(&self) -> &MoveNode {
        &self.root
    }

    /// Number of games the tree was built from.
    pub fn total_games(&self) -> u64 {
        self.root.weight
    }

    /// Number of nodes, including the root and game-end leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a built tree holds at least the root and one move.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve a path to its node.
    pub fn node(&self, path: &NodePath) -> Option<&MoveNode> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &index| node.child(index))
    }

    /// Nodes along `path`, starting with the root and ending with the addressed node.
    pub fn lineage(&self, path: &NodePath) -> Option<Vec<&MoveNode>> {
        let mut nodes = vec![&self.root];
        let mut node = &self.root;
        for &index in path.indices() {
            node = node.child(index)?;
            nodes.push(node);
        }
        Some(nodes)
    }

    /// Move labels played to reach `path`. Game-end markers contribute nothing.
    pub fn moves(&self, path: &NodePath) -> Option<Vec<&str>> {
        let lineage = self.lineage(path)?;
        Some(
            lineage
                .into_iter()
                .skip(1)
                .filter(|n| n.kind() == NodeKind::Move)
                .map(MoveNode::label)
                .collect(),
        )
    }

    /// Status line for a node, for example `"- | e4 | e5 (end)"`.
    ///
    /// Interior positions are suffixed with the side to move; leaves with `(end)`.
    pub fn describe(&self, path: &NodePath) -> Option<String> {
        let lineage = self.lineage(path)?;
        let node = *lineage.last()?;
        let mut out = String::from(self.root.display_label());
        let mut plies = 0_usize;
        for step in lineage.iter().skip(1) {
            if step.kind() == NodeKind::GameEnd {
                continue;
            }
            plies += 1;
            out.push_str(SEPARATOR);
            out.push_str(step.label());
        }
        let suffix = if node.is_leaf() {
            "end"
        } else if plies % 2 == 0 {
            "white to play"
        } else {
            "black to play"
        };
        out.push_str(&format!(" ({suffix}) [{}]", node.weight()));
        Some(out)
    }

    /// Pre-order traversal over every node with its path.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: vec![(NodePath::root(), &self.root)],
        }
    }
}

/// Indented outline of the whole tree, one node per line with its weight.
///
/// ```rust
/// use openings_tree::{GameRecord, build};
///
/// let tree = build([
///     GameRecord::new(["e4", "e5"], "g1"),
///     GameRecord::new(["d4"], "g2"),
///     GameRecord::new(["e4"], "g3"),
/// ])
/// .unwrap();
/// let outline = "- (3)\n    e4 (2)\n        e5 (1)\n        (end) (1)\n    d4 (1)";
/// assert_eq!(tree.to_string(), outline);
/// ```
impl fmt::Display for MoveTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, node)) in self.depth_first().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for _ in 0..path.depth() {
                f.write_str(INDENT)?;
            }
            write!(f, "{} ({})", node.display_label(), node.weight())?;
        }
        Ok(())
    }
}

/// Iterator returned by [`MoveTree::depth_first`].
#[derive(Clone, Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<(NodePath, &'a MoveNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodePath, &'a MoveNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (i, child) in node.children().iter().enumerate().rev() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodePath uses 32-bit child indices."
            )]
            let index = i as u32;
            self.stack.push((path.child(index), child));
        }
        Some((path, node))
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build;
    use crate::types::{GameRecord, NodePath};
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn tree() -> crate::MoveTree {
        build(vec![
            GameRecord::new(["e4", "e5"], "g1"),
            GameRecord::new(["e4", "c5"], "g2"),
            GameRecord::new(["d4"], "g3"),
            GameRecord::new(["e4"], "g4"),
        ])
        .unwrap()
    }

    #[test]
    fn node_lookup_follows_indices() {
        let tree = tree();
        assert_eq!(tree.node(&NodePath::root()).unwrap().weight(), 4);
        assert_eq!(tree.node(&NodePath::from_indices(&[0])).unwrap().label(), "e4");
        assert!(tree.node(&NodePath::from_indices(&[7])).is_none());
        assert!(tree.node(&NodePath::from_indices(&[1, 0])).is_none());
    }

    #[test]
    fn describe_reports_side_to_move() {
        let tree = tree();
        assert_eq!(
            tree.describe(&NodePath::root()).unwrap(),
            "- (white to play) [4]"
        );
        assert_eq!(
            tree.describe(&NodePath::from_indices(&[0])).unwrap(),
            "- | e4 (black to play) [3]"
        );
        assert_eq!(
            tree.describe(&NodePath::from_indices(&[0, 1])).unwrap(),
            "- | e4 | e5 (end) [1]"
        );
        // The game-end leaf under e4 reads as e4 itself, ended.
        assert_eq!(
            tree.describe(&NodePath::from_indices(&[0, 2])).unwrap(),
            "- | e4 (end) [1]"
        );
    }

    #[test]
    fn moves_skip_game_end_markers() {
        let tree = tree();
        assert_eq!(tree.moves(&NodePath::from_indices(&[0, 2])).unwrap(), ["e4"]);
        assert_eq!(tree.moves(&NodePath::from_indices(&[0, 0])).unwrap(), ["e4", "c5"]);
    }

    #[test]
    fn display_outlines_the_tree() {
        let tree = tree();
        let text = tree.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), tree.len());
        assert_eq!(
            lines,
            [
                "- (4)",
                "    e4 (3)",
                "        c5 (1)",
                "        e5 (1)",
                "        (end) (1)",
                "    d4 (1)",
            ]
        );
    }

    #[test]
    fn depth_first_visits_every_node_once() {
        let tree = tree();
        let visited: Vec<_> = tree.depth_first().collect();
        assert_eq!(visited.len(), tree.len());
        assert!(visited[0].0.is_root());
        for (path, node) in &visited {
            assert_eq!(tree.node(path), Some(*node));
        }
        assert_eq!(visited[1].1.label(), "e4");
    }
}
