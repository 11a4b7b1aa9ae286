// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Openings Tree: a weighted move hierarchy aggregated from recorded games.
//!
//! Each node of the tree is a position reached by a specific sequence of moves from the
//! start position. A node's weight is the number of games that passed through it, which
//! is what a treemap turns into area.
//!
//! - [`TreeBuilder`] / [`build`] aggregate [`GameRecord`]s into a [`MoveTree`].
//! - [`MoveNode`] exposes label, weight, children (heaviest first), and the set of
//!   [`GameRef`]s behind the node.
//! - [`NodePath`] identifies a node by child indices from the root. The tree is immutable,
//!   so paths are stable and can key external state such as expansion.
//!
//! Moves are opaque labels; no chess rules are applied.
//!
//! ## Invariants
//!
//! - Every node has a positive weight; the root's weight is the number of records.
//! - Every node with children weighs exactly the sum of its children. Games that stop at a
//!   position other games continue from are collected in a [`NodeKind::GameEnd`] leaf.
//! - Siblings are ordered by descending weight, then moves before game ends, then label.
//!
//! ## Example
//!
//! ```rust
//! use openings_tree::{GameRecord, NodePath, build};
//!
//! let tree = build([
//!     GameRecord::new(["e4", "e5"], "g1"),
//!     GameRecord::new(["e4", "c5"], "g2"),
//!     GameRecord::new(["d4"], "g3"),
//! ])
//! .unwrap();
//!
//! let e4 = tree.node(&NodePath::from_indices(&[0])).unwrap();
//! assert_eq!(e4.label(), "e4");
//! assert_eq!(e4.weight(), 2);
//! assert_eq!(e4.game_refs().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Deserialize`/`Serialize` for [`GameRecord`] and [`GameRef`].
//! - `tracing`: log a summary when a tree is built.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod node;
mod tree;
mod types;

pub use builder::{TreeBuilder, build};
pub use error::{BuildError, MalformedReason};
pub use node::MoveNode;
pub use tree::{DepthFirst, MoveTree};
pub use types::{GameRecord, GameRef, NodeKind, NodePath};
