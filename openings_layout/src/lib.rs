// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Openings Layout: a Kurbo-native slice-and-dice treemap over a move tree.
//!
//! The layout maps the visible frontier of an [`openings_tree::MoveTree`] onto disjoint
//! rectangles inside a bounding [`kurbo::Rect`]. Each rectangle's area is proportional to
//! its node's weight relative to its siblings.
//!
//! - [`ExpansionState`]: which nodes are opened, keyed by [`openings_tree::NodePath`]. It
//!   lives outside the tree so the tree stays immutable.
//! - [`layout`] / [`layout_node`]: compute a frame of [`LayoutRect`]s. Pure functions of
//!   tree, expansion state, bounds, and [`LayoutOptions`]; re-run them whenever any of
//!   those change.
//! - [`partition`]: the proportional split of one node's bounds among its children.
//! - [`hit_test`]: resolve a point to the deepest visible rectangle.
//!
//! ## Partitioning
//!
//! With the default [`SplitPolicy::Alternating`], the root's children are placed side by
//! side along the x-axis, their children are stacked along the y-axis, and so on,
//! alternating with every level. [`SplitPolicy::LongestSide`] instead splits along the
//! longer side of each rectangle.
//!
//! Edges are computed from running weight totals in floating point, and the last sibling
//! always ends on the parent's far edge. Sibling rectangles therefore share edges exactly
//! and tile their parent with no gaps or overlaps. Zero-weight children are dropped.
//!
//! ## Not a renderer
//!
//! This crate does not draw, pick colours, or track selection. See `openings_interaction`
//! for the controller that owns expansion state and drives re-layout.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log frame sizes at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expansion;
mod hit;
mod layout;

pub use expansion::ExpansionState;
pub use hit::hit_test;
pub use layout::{Axis, LayoutOptions, LayoutRect, SplitPolicy, layout, layout_node, partition};
