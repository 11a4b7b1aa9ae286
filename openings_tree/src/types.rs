// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the move tree: node paths, game references, and input records.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// Identity of a node: the child indices walked from the root (inclusive of the node).
///
/// The root is the empty path. Because a [`MoveTree`](crate::MoveTree) is immutable once
/// built, a path stays valid for the whole session.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath(SmallVec<[u32; 8]>);

impl NodePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Build a path from raw child indices.
    pub fn from_indices(indices: &[u32]) -> Self {
        Self(SmallVec::from_slice(indices))
    }

    /// Child indices from the root, outermost first.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Number of steps from the root. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`th child of this node.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut path = self.clone();
        path.0.push(index);
        path
    }

    /// Path of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, head) = self.0.split_last()?;
        Some(Self(SmallVec::from_slice(head)))
    }

    /// Returns `true` if `self` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

/// Identifier or URL of a source game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct GameRef(String);

impl GameRef {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GameRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One recorded game, already deserialized: its moves in order and where it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GameRecord {
    /// Move labels, first move first. Labels are opaque; no chess rules are applied.
    pub moves: Vec<String>,
    /// Source game identifier. `None` is rejected by the builder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub game: Option<GameRef>,
}

impl GameRecord {
    /// Convenience constructor.
    pub fn new<I, S>(moves: I, game: impl Into<GameRef>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            game: Some(game.into()),
        }
    }
}

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// A move played from the parent position.
    Move,
    /// Games that ended at the parent position although other games continued from it.
    GameEnd,
}

#[cfg(test)]
mod tests {
    use super::NodePath;
    use alloc::string::ToString;

    #[test]
    fn parent_and_child_are_inverse() {
        let path = NodePath::from_indices(&[2, 0, 5]);
        assert_eq!(path.parent().unwrap().child(5), path);
        assert_eq!(NodePath::root().parent(), None);
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn descendant_is_strict_prefix_extension() {
        let a = NodePath::from_indices(&[1]);
        let b = NodePath::from_indices(&[1, 3]);
        let c = NodePath::from_indices(&[2, 3]);
        assert!(b.is_descendant_of(&a));
        assert!(!a.is_descendant_of(&a));
        assert!(!c.is_descendant_of(&a));
        assert!(a.is_descendant_of(&NodePath::root()));
    }

    #[test]
    fn display_lists_indices() {
        assert_eq!(NodePath::root().to_string(), "/");
        assert_eq!(NodePath::from_indices(&[0, 4]).to_string(), "/0/4");
    }
}
