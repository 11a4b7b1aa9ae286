// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries against a laid-out frame.

use kurbo::{Point, Rect};

use crate::layout::LayoutRect;

/// Find the visible rectangle under `point`.
///
/// A frame only holds frontier nodes, so the match is always the deepest visible node at
/// that position. Edges are inclusive on every side; a point on an edge shared by two
/// rectangles resolves to the one that comes first in traversal order. Points outside the
/// frame return `None`.
pub fn hit_test(frame: &[LayoutRect], point: Point) -> Option<&LayoutRect> {
    frame.iter().find(|r| contains_closed(r.rect, point))
}

fn contains_closed(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}
