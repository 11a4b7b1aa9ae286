// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice-and-dice partitioning of the visible frontier.

use alloc::vec::Vec;

use kurbo::Rect;
use openings_tree::{MoveNode, MoveTree, NodePath};

use crate::expansion::ExpansionState;

/// Axis along which siblings are placed next to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side, splitting the width.
    Horizontal,
    /// Stacked, splitting the height.
    Vertical,
}

/// How the split axis is chosen for each partitioned node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitPolicy {
    /// Horizontal for the root's children, then alternating with every level.
    #[default]
    Alternating,
    /// Split along whichever side of the parent rectangle is longer.
    LongestSide,
}

impl SplitPolicy {
    /// Axis used to partition the children of the node at `path` inside `bounds`.
    pub fn axis(self, path: &NodePath, bounds: Rect) -> Axis {
        match self {
            Self::Alternating if path.depth() % 2 == 0 => Axis::Horizontal,
            Self::Alternating => Axis::Vertical,
            Self::LongestSide if bounds.width() > bounds.height() => Axis::Horizontal,
            Self::LongestSide => Axis::Vertical,
        }
    }
}

/// Tunables for [`layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Axis selection policy.
    pub policy: SplitPolicy,
    /// Rectangles narrower or shorter than this are flagged [`LayoutRect::tiny`].
    pub min_extent: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            policy: SplitPolicy::Alternating,
            min_extent: 1.0,
        }
    }
}

/// Placement of one visible node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRect {
    /// The node this rectangle draws.
    pub path: NodePath,
    /// Area covered by the node.
    pub rect: Rect,
    /// Games through the node, copied for the renderer.
    pub weight: u64,
    /// Too thin to carry a label.
    pub tiny: bool,
}

impl LayoutRect {
    fn new(node: &MoveNode, path: NodePath, rect: Rect, options: &LayoutOptions) -> Self {
        Self {
            tiny: rect.width() < options.min_extent || rect.height() < options.min_extent,
            weight: node.weight(),
            path,
            rect,
        }
    }
}

/// Lay out a whole tree. The root is always open, so its children form the first level.
///
/// Returns an empty frame for degenerate or non-finite bounds.
///
/// ```rust
/// use kurbo::Rect;
/// use openings_layout::{ExpansionState, LayoutOptions, layout};
/// use openings_tree::{GameRecord, build};
///
/// let tree = build([
///     GameRecord::new(["e4", "e5"], "g1"),
///     GameRecord::new(["e4", "c5"], "g2"),
///     GameRecord::new(["d4"], "g3"),
/// ])
/// .unwrap();
///
/// let frame = layout(
///     &tree,
///     &ExpansionState::new(),
///     Rect::new(0.0, 0.0, 300.0, 100.0),
///     &LayoutOptions::default(),
/// );
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame[0].rect.width(), 200.0);
/// assert_eq!(frame[1].rect.width(), 100.0);
/// ```
pub fn layout(
    tree: &MoveTree,
    expanded: &ExpansionState,
    bounds: Rect,
    options: &LayoutOptions,
) -> Vec<LayoutRect> {
    layout_node(tree.root(), NodePath::root(), expanded, bounds, options)
}

/// Lay out the subtree at `path`, whose node is `node`, inside `bounds`.
///
/// A node that is not expanded, or has no children, is a single rectangle equal to
/// `bounds`. Otherwise `bounds` is split among the children in proportion to weight and
/// each child is laid out recursively. The result is a pure function of its arguments.
pub fn layout_node(
    node: &MoveNode,
    path: NodePath,
    expanded: &ExpansionState,
    bounds: Rect,
    options: &LayoutOptions,
) -> Vec<LayoutRect> {
    let mut out = Vec::new();
    if is_degenerate(bounds) {
        return out;
    }
    place(node, path, expanded, bounds, options, &mut out);
    #[cfg(feature = "tracing")]
    tracing::trace!(rects = out.len(), "laid out treemap frame");
    out
}

fn is_degenerate(bounds: Rect) -> bool {
    !bounds.is_finite() || !(bounds.width() > 0.0 && bounds.height() > 0.0)
}

fn place(
    node: &MoveNode,
    path: NodePath,
    expanded: &ExpansionState,
    bounds: Rect,
    options: &LayoutOptions,
    out: &mut Vec<LayoutRect>,
) {
    if node.is_leaf() || !expanded.is_expanded(&path) {
        out.push(LayoutRect::new(node, path, bounds, options));
        return;
    }
    let axis = options.policy.axis(&path, bounds);
    let slices = partition(node, bounds, axis);
    if slices.is_empty() {
        // Only zero-weight children: the node stands in for them.
        out.push(LayoutRect::new(node, path, bounds, options));
        return;
    }
    for (index, rect) in slices {
        if let Some(child) = node.child(index) {
            place(child, path.child(index), expanded, rect, options, out);
        }
    }
}

/// Split `bounds` among the weighted children of `node` along `axis`.
///
/// Edges are computed from running weight totals, and the last slice ends exactly on the
/// far edge of `bounds`, so the slices tile `bounds` with no gaps or overlaps.
/// Zero-weight children get no slice.
pub fn partition(node: &MoveNode, bounds: Rect, axis: Axis) -> Vec<(u32, Rect)> {
    let weighted: Vec<(u32, u64)> = node
        .children()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.weight() > 0)
        .map(|(i, c)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodePath uses 32-bit child indices."
            )]
            let index = i as u32;
            (index, c.weight())
        })
        .collect();
    let total: u64 = weighted.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return Vec::new();
    }

    let (start, end) = match axis {
        Axis::Horizontal => (bounds.x0, bounds.x1),
        Axis::Vertical => (bounds.y0, bounds.y1),
    };
    let extent = end - start;
    let total = total as f64;

    let mut slices = Vec::with_capacity(weighted.len());
    let mut running = 0_u64;
    let mut near = start;
    for (k, &(index, weight)) in weighted.iter().enumerate() {
        running += weight;
        let far = if k + 1 == weighted.len() {
            end
        } else {
            start + extent * running as f64 / total
        };
        let rect = match axis {
            Axis::Horizontal => Rect::new(near, bounds.y0, far, bounds.y1),
            Axis::Vertical => Rect::new(bounds.x0, near, bounds.x1, far),
        };
        slices.push((index, rect));
        near = far;
    }
    slices
}
