// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use openings_layout::{ExpansionState, LayoutOptions, LayoutRect, hit_test, layout};
use openings_tree::{MoveTree, NodePath};

use crate::changes::Changes;
use crate::click::{ClickResult, ClickState};
use crate::host::{LinkOpener, LinkTemplate, Rgb, Surface};

/// Keyboard commands understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `o`: open the selected node's game.
    Open,
    /// `p`: open the position reached at the selected node.
    OpenPosition,
    /// `e`: expand the selected node and select its first child.
    Expand,
    /// `a`: expand the selected subtree fully.
    ExpandAll,
    /// `c`: collapse the selected node if it is open, otherwise its parent.
    Collapse,
    /// `x`: collapse everything.
    CollapseAll,
}

impl Key {
    /// Map a typed character to a command.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Open),
            'p' => Some(Self::OpenPosition),
            'e' => Some(Self::Expand),
            'a' => Some(Self::ExpandAll),
            'c' => Some(Self::Collapse),
            'x' => Some(Self::CollapseAll),
            _ => None,
        }
    }
}

/// Result of asking to open the selected node's game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The link opener was asked to open this URL.
    Opened(String),
    /// More than one game passes through the selected node; nothing was opened.
    Ambiguous(usize),
    /// Nothing is selected.
    NoSelection,
}

/// Response to a key press.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyResponse {
    /// State that changed.
    pub changes: Changes,
    /// Set when the key asked to open a game.
    pub open: Option<OpenOutcome>,
}

/// Tunables for [`InteractionController`].
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerOptions {
    /// Layout policy.
    pub layout: LayoutOptions,
    /// How game references become URLs.
    pub links: LinkTemplate,
    /// How move sequences become URLs of positions.
    pub position_links: LinkTemplate,
    /// Fill used for the selected node's rectangles.
    pub highlight: Rgb,
    /// Pointer travel tolerated between press and release on different nodes.
    pub click_slop: Option<f64>,
    /// Milliseconds tolerated between press and release on different nodes.
    pub click_time: Option<u64>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            links: LinkTemplate::default(),
            position_links: LinkTemplate::lichess_analysis(),
            highlight: Rgb::new(255, 215, 0),
            click_slop: Some(5.0),
            click_time: Some(300),
        }
    }
}

/// Owns the session: the tree, what is expanded, what is selected, and the current frame.
///
/// Every handler runs to completion, mutates state, recomputes the frame if needed, and
/// reports what changed. There is no terminal state.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use openings_interaction::{Changes, InteractionController, OpenOutcome};
/// use openings_tree::{GameRecord, build};
///
/// let tree = build([
///     GameRecord::new(["e4", "e5"], "g1"),
///     GameRecord::new(["e4", "c5"], "g2"),
///     GameRecord::new(["d4"], "g3"),
/// ])
/// .unwrap();
/// let mut ui = InteractionController::new(tree, Rect::new(0.0, 0.0, 300.0, 100.0));
///
/// // Clicking "e4" opens it: its two replies are stacked inside its 200px column.
/// let changes = ui.on_click(Point::new(50.0, 50.0));
/// assert!(changes.contains(Changes::EXPANSION));
/// assert_eq!(ui.frame().len(), 3);
///
/// // "e4" is backed by two games, so opening it is ambiguous.
/// let mut opened = Vec::new();
/// let response = ui.on_key('o', &mut |url: &str| opened.push(url.to_owned()));
/// assert_eq!(response.open, Some(OpenOutcome::Ambiguous(2)));
/// assert!(opened.is_empty());
/// ```
#[derive(Debug)]
pub struct InteractionController {
    tree: MoveTree,
    expanded: ExpansionState,
    selected: Option<NodePath>,
    bounds: Rect,
    frame: Vec<LayoutRect>,
    options: ControllerOptions,
    clicks: ClickState<NodePath>,
}

impl InteractionController {
    /// A controller with default options. Nothing is expanded or selected.
    pub fn new(tree: MoveTree, bounds: Rect) -> Self {
        Self::with_options(tree, bounds, ControllerOptions::default())
    }

    /// A controller with custom options.
    pub fn with_options(tree: MoveTree, bounds: Rect, options: ControllerOptions) -> Self {
        let clicks = ClickState::with_thresholds(options.click_slop, options.click_time);
        let mut controller = Self {
            tree,
            expanded: ExpansionState::new(),
            selected: None,
            bounds,
            frame: Vec::new(),
            options,
            clicks,
        };
        controller.relayout();
        controller
    }

    /// The tree being explored.
    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }

    /// Currently opened nodes.
    pub fn expanded(&self) -> &ExpansionState {
        &self.expanded
    }

    /// Currently selected node.
    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    /// Current drawing bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The latest frame, in traversal order.
    pub fn frame(&self) -> &[LayoutRect] {
        &self.frame
    }

    /// Options in effect.
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Select the deepest visible node under `point` and toggle its expansion.
    ///
    /// Clicks outside every rectangle are ignored.
    pub fn on_click(&mut self, point: Point) -> Changes {
        let Some(hit) = hit_test(&self.frame, point) else {
            return Changes::empty();
        };
        let path = hit.path.clone();
        self.activate(path)
    }

    /// Pointer went down at `point` (`time` in milliseconds).
    pub fn on_pointer_down(&mut self, point: Point, time: u64) {
        match hit_test(&self.frame, point) {
            Some(hit) => self.clicks.on_down(hit.path.clone(), point, time),
            None => {
                self.clicks.cancel();
            }
        }
    }

    /// Pointer went up at `point`. Completes a click on the pressed node if the release
    /// still counts as one.
    pub fn on_pointer_up(&mut self, point: Point, time: u64) -> Changes {
        let target = hit_test(&self.frame, point).map(|hit| hit.path.clone());
        match self.clicks.on_up(target.as_ref(), point, time) {
            ClickResult::Click(path) => self.activate(path),
            ClickResult::Suppressed(_) => Changes::empty(),
        }
    }

    /// Handle a typed character. Unknown keys are ignored.
    pub fn on_key(&mut self, key: char, opener: &mut dyn LinkOpener) -> KeyResponse {
        match Key::from_char(key) {
            Some(key) => self.command(key, opener),
            None => KeyResponse::default(),
        }
    }

    /// Run a keyboard command.
    pub fn command(&mut self, key: Key, opener: &mut dyn LinkOpener) -> KeyResponse {
        match key {
            Key::Open => KeyResponse {
                changes: Changes::empty(),
                open: Some(self.open_selected(opener)),
            },
            Key::OpenPosition => KeyResponse {
                changes: Changes::empty(),
                open: Some(self.open_position(opener)),
            },
            Key::Expand => self.expand_selected().into(),
            Key::ExpandAll => self.expand_all_selected().into(),
            Key::Collapse => self.collapse_selected().into(),
            Key::CollapseAll => self.collapse_all().into(),
        }
    }

    /// Re-run layout inside `bounds`. Expansion and selection are untouched.
    pub fn on_resize(&mut self, bounds: Rect) -> Changes {
        if bounds == self.bounds {
            return Changes::empty();
        }
        self.bounds = bounds;
        self.relayout();
        Changes::LAYOUT
    }

    /// Open the selected node's game if exactly one game passes through it.
    pub fn open_selected(&self, opener: &mut dyn LinkOpener) -> OpenOutcome {
        let Some(node) = self.selected.as_ref().and_then(|p| self.tree.node(p)) else {
            return OpenOutcome::NoSelection;
        };
        match node.single_game() {
            Some(game) => {
                let url = self.options.links.resolve(game);
                #[cfg(feature = "tracing")]
                tracing::info!(%game, %url, "opening game");
                opener.open_external_url(&url);
                OpenOutcome::Opened(url)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(games = node.game_refs().len(), "open is ambiguous");
                OpenOutcome::Ambiguous(node.game_refs().len())
            }
        }
    }

    /// Open the position reached at the selected node, whatever games pass through it.
    pub fn open_position(&self, opener: &mut dyn LinkOpener) -> OpenOutcome {
        let Some(moves) = self.selected.as_ref().and_then(|p| self.tree.moves(p)) else {
            return OpenOutcome::NoSelection;
        };
        let url = self.options.position_links.resolve_moves(&moves);
        #[cfg(feature = "tracing")]
        tracing::info!(plies = moves.len(), %url, "opening position");
        opener.open_external_url(&url);
        OpenOutcome::Opened(url)
    }

    /// Select `path`, then expand it if closed or collapse it if open.
    pub fn toggle(&mut self, path: &NodePath) -> Changes {
        if self.tree.node(path).is_none() {
            return Changes::empty();
        }
        self.activate(path.clone())
    }

    /// Expand the selected node and select its first child.
    pub fn expand_selected(&mut self) -> Changes {
        let Some(path) = self.selected.clone() else {
            return Changes::empty();
        };
        if !self.expanded.expand(&self.tree, &path) {
            return Changes::empty();
        }
        self.relayout();
        let mut changes = Changes::EXPANSION | Changes::LAYOUT;
        changes |= self.select(Some(path.child(0)));
        changes
    }

    /// Expand everything below the selection (or the whole tree) and select the last
    /// visible node of that subtree.
    pub fn expand_all_selected(&mut self) -> Changes {
        let start = self.selected.clone().unwrap_or_else(NodePath::root);
        if self.expanded.expand_all(&self.tree, &start) == 0 {
            return Changes::empty();
        }
        self.relayout();
        let last = self
            .frame
            .iter()
            .rev()
            .find(|r| r.path == start || r.path.is_descendant_of(&start))
            .map(|r| r.path.clone());
        let mut changes = Changes::EXPANSION | Changes::LAYOUT;
        changes |= self.select(last);
        changes
    }

    /// Collapse the selected node if it is open. Otherwise collapse its parent and select
    /// the parent.
    ///
    /// A closed top-level node has the root as parent, which always stays open.
    pub fn collapse_selected(&mut self) -> Changes {
        let Some(selected) = self.selected.clone() else {
            return Changes::empty();
        };
        if self.expanded.is_expanded(&selected) && !selected.is_root() {
            return self.collapse_at(&selected);
        }
        let Some(parent) = selected.parent() else {
            return Changes::empty();
        };
        if parent.is_root() {
            return Changes::empty();
        }
        let mut changes = self.collapse_at(&parent);
        changes |= self.select(Some(parent));
        changes
    }

    /// Collapse everything. A selection moves to its top-level ancestor.
    pub fn collapse_all(&mut self) -> Changes {
        let mut changes = self.collapse_at(&NodePath::root());
        let top = self
            .selected
            .as_ref()
            .and_then(|p| p.indices().first().copied())
            .map(|i| NodePath::root().child(i));
        changes |= self.select(top);
        changes
    }

    /// Draw the current frame. Rectangles under the selected node use the highlight fill.
    pub fn render(&self, surface: &mut dyn Surface) {
        for r in &self.frame {
            let selected = self
                .selected
                .as_ref()
                .is_some_and(|s| r.path == *s || r.path.is_descendant_of(s));
            let fill = if selected {
                self.options.highlight
            } else {
                Rgb::for_path(&r.path)
            };
            let label = match self.tree.node(&r.path) {
                Some(node) if !r.tiny => format!("{} ({})", node.display_label(), r.weight),
                _ => String::new(),
            };
            surface.draw_rectangle(r.rect, fill, &label);
        }
    }

    /// Status text for the selection, or for the root when nothing is selected.
    pub fn status_line(&self) -> String {
        let path = self.selected.clone().unwrap_or_else(NodePath::root);
        self.tree.describe(&path).unwrap_or_default()
    }

    fn activate(&mut self, path: NodePath) -> Changes {
        let mut changes = self.select(Some(path.clone()));
        if self.expanded.is_expanded(&path) && !path.is_root() {
            changes |= self.collapse_at(&path);
        } else if self.expanded.expand(&self.tree, &path) {
            self.relayout();
            changes |= Changes::EXPANSION | Changes::LAYOUT;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%path, ?changes, "activated node");
        changes
    }

    fn collapse_at(&mut self, path: &NodePath) -> Changes {
        if !self.expanded.collapse(path) {
            return Changes::empty();
        }
        self.relayout();
        Changes::EXPANSION | Changes::LAYOUT
    }

    fn select(&mut self, path: Option<NodePath>) -> Changes {
        if self.selected == path {
            return Changes::empty();
        }
        self.selected = path;
        Changes::SELECTION
    }

    fn relayout(&mut self) {
        self.frame = layout(&self.tree, &self.expanded, self.bounds, &self.options.layout);
    }
}

impl From<Changes> for KeyResponse {
    fn from(changes: Changes) -> Self {
        Self {
            changes,
            open: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Changes, InteractionController, Key, OpenOutcome};
    use crate::host::{LinkTemplate, Rgb, Surface};
    use crate::ControllerOptions;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};
    use openings_tree::{GameRecord, MoveTree, NodePath, build};

    fn scenario() -> MoveTree {
        build(vec![
            GameRecord::new(["e4", "e5"], "g1"),
            GameRecord::new(["e4", "c5"], "g2"),
            GameRecord::new(["d4"], "g3"),
        ])
        .unwrap()
    }

    fn controller() -> InteractionController {
        InteractionController::new(scenario(), Rect::new(0.0, 0.0, 300.0, 100.0))
    }

    fn p(indices: &[u32]) -> NodePath {
        NodePath::from_indices(indices)
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Rect, Rgb, String)>,
    }

    impl Surface for Recorder {
        fn draw_rectangle(&mut self, rect: Rect, fill: Rgb, label: &str) {
            self.calls.push((rect, fill, label.to_string()));
        }
    }

    #[test]
    fn initial_frame_shows_top_level_moves() {
        let ui = controller();
        assert_eq!(ui.frame().len(), 2);
        assert_eq!(ui.frame()[0].rect, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(ui.frame()[1].rect, Rect::new(200.0, 0.0, 300.0, 100.0));
        assert!(ui.selected().is_none());
        assert!(ui.expanded().is_empty());
    }

    #[test]
    fn click_expands_into_stacked_children() {
        let mut ui = controller();
        let changes = ui.on_click(Point::new(100.0, 30.0));
        assert_eq!(
            changes,
            Changes::SELECTION | Changes::EXPANSION | Changes::LAYOUT
        );
        assert_eq!(ui.selected(), Some(&p(&[0])));
        let frame = ui.frame();
        assert_eq!(frame.len(), 3);
        assert_eq!(frame[0].rect, Rect::new(0.0, 0.0, 200.0, 50.0));
        assert_eq!(frame[1].rect, Rect::new(0.0, 50.0, 200.0, 100.0));
        assert_eq!(frame[0].rect.height(), 50.0);
        assert_eq!(frame[1].rect.height(), 50.0);
    }

    #[test]
    fn click_on_leaf_only_selects() {
        let mut ui = controller();
        let changes = ui.on_click(Point::new(250.0, 50.0));
        assert_eq!(changes, Changes::SELECTION);
        assert_eq!(ui.selected(), Some(&p(&[1])));
        assert_eq!(ui.on_click(Point::new(250.0, 50.0)), Changes::empty());
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut ui = controller();
        assert_eq!(ui.on_click(Point::new(500.0, 50.0)), Changes::empty());
        assert!(ui.selected().is_none());
    }

    #[test]
    fn open_single_game_leaf() {
        let mut ui = controller();
        ui.on_click(Point::new(100.0, 30.0));
        // e5 sits in the lower half of the e4 column.
        ui.on_click(Point::new(100.0, 75.0));
        assert_eq!(ui.selected(), Some(&p(&[0, 1])));

        let mut opened: Vec<String> = Vec::new();
        let response = ui.on_key('o', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(response.open, Some(OpenOutcome::Opened("g1".to_string())));
        assert_eq!(opened, ["g1"]);
    }

    #[test]
    fn open_multi_game_node_is_ambiguous() {
        let mut ui = controller();
        ui.on_click(Point::new(100.0, 30.0));
        assert_eq!(ui.selected(), Some(&p(&[0])));
        let mut opened: Vec<String> = Vec::new();
        let response = ui.on_key('o', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(response.open, Some(OpenOutcome::Ambiguous(2)));
        assert!(opened.is_empty());
    }

    #[test]
    fn open_without_selection() {
        let mut ui = controller();
        let mut opened: Vec<String> = Vec::new();
        let response = ui.on_key('o', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(response.open, Some(OpenOutcome::NoSelection));
        assert!(opened.is_empty());
    }

    #[test]
    fn links_go_through_template() {
        let options = ControllerOptions {
            links: LinkTemplate::new("https://lichess.org/{game}"),
            ..ControllerOptions::default()
        };
        let mut ui =
            InteractionController::with_options(scenario(), Rect::new(0.0, 0.0, 300.0, 100.0), options);
        ui.on_click(Point::new(250.0, 50.0));
        let mut opened: Vec<String> = Vec::new();
        ui.on_key('o', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(opened, ["https://lichess.org/g3"]);
    }

    #[test]
    fn toggle_twice_restores_frame() {
        let mut ui = controller();
        let before = ui.frame().to_vec();
        ui.toggle(&p(&[0]));
        assert_ne!(ui.frame(), before.as_slice());
        ui.toggle(&p(&[0]));
        assert_eq!(ui.frame(), before.as_slice());
        assert!(ui.expanded().is_empty());
    }

    #[test]
    fn resize_keeps_expansion() {
        let mut ui = controller();
        ui.on_click(Point::new(100.0, 30.0));
        let changes = ui.on_resize(Rect::new(0.0, 0.0, 600.0, 200.0));
        assert_eq!(changes, Changes::LAYOUT);
        assert_eq!(ui.expanded().len(), 1);
        assert_eq!(ui.frame()[0].rect, Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(ui.on_resize(Rect::new(0.0, 0.0, 600.0, 200.0)), Changes::empty());
    }

    #[test]
    fn keyboard_expand_and_collapse() {
        let tree = build(vec![
            GameRecord::new(["e4", "e5", "Nf3"], "g1"),
            GameRecord::new(["e4", "e5", "Bc4"], "g2"),
            GameRecord::new(["e4", "c5"], "g3"),
            GameRecord::new(["d4"], "g4"),
        ])
        .unwrap();
        let mut ui = InteractionController::new(tree, Rect::new(0.0, 0.0, 400.0, 400.0));
        let mut ignore = |_: &str| {};

        // Nothing selected: expand does nothing.
        assert_eq!(ui.command(Key::Expand, &mut ignore).changes, Changes::empty());

        ui.on_click(Point::new(10.0, 10.0));
        assert_eq!(ui.selected(), Some(&p(&[0])));
        // e4 is open, its first child e5 is closed: expand it.
        ui.on_click(Point::new(10.0, 10.0));
        assert_eq!(ui.selected(), Some(&p(&[0, 0])));
        assert_eq!(ui.expanded().len(), 2);

        // e5 itself is open, so it closes first and stays selected.
        let response = ui.on_key('c', &mut ignore);
        assert_eq!(response.changes, Changes::EXPANSION | Changes::LAYOUT);
        assert_eq!(ui.selected(), Some(&p(&[0, 0])));
        assert_eq!(ui.expanded().len(), 1);

        // Now closed, e5 hands the collapse to its parent e4.
        let response = ui.on_key('c', &mut ignore);
        assert!(response.changes.contains(Changes::EXPANSION));
        assert_eq!(ui.selected(), Some(&p(&[0])));
        assert!(ui.expanded().is_empty());
        assert_eq!(ui.frame().len(), 2);

        // 'e' re-opens e4 and selects its first child.
        ui.on_key('e', &mut ignore);
        assert_eq!(ui.selected(), Some(&p(&[0, 0])));
        assert_eq!(ui.frame().len(), 3);
    }

    #[test]
    fn expand_all_then_collapse_all() {
        let tree = build(vec![
            GameRecord::new(["e4", "e5", "Nf3"], "g1"),
            GameRecord::new(["e4", "e5", "Bc4"], "g2"),
            GameRecord::new(["e4", "c5"], "g3"),
            GameRecord::new(["d4"], "g4"),
        ])
        .unwrap();
        let mut ui = InteractionController::new(tree, Rect::new(0.0, 0.0, 400.0, 400.0));
        let mut ignore = |_: &str| {};

        ui.on_key('a', &mut ignore);
        // Every leaf is visible: Nf3, Bc4, c5, d4.
        assert_eq!(ui.frame().len(), 4);
        // The last visible node in traversal order is d4.
        assert_eq!(ui.selected(), Some(&p(&[1])));

        ui.on_click(Point::new(10.0, 10.0));
        let deep = ui.selected().cloned().unwrap();
        assert_eq!(deep.depth(), 3);

        ui.on_key('x', &mut ignore);
        assert!(ui.expanded().is_empty());
        assert_eq!(ui.selected(), Some(&p(&[0])));
        assert_eq!(ui.frame().len(), 2);
    }

    #[test]
    fn collapse_key_undoes_a_click() {
        let mut ui = controller();
        let before = ui.frame().to_vec();
        ui.on_click(Point::new(50.0, 50.0));
        assert_eq!(ui.frame().len(), 3);

        let mut ignore = |_: &str| {};
        let response = ui.on_key('c', &mut ignore);
        assert_eq!(response.changes, Changes::EXPANSION | Changes::LAYOUT);
        assert_eq!(ui.frame(), before.as_slice());
        assert!(ui.expanded().is_empty());
        assert_eq!(ui.selected(), Some(&p(&[0])));

        // The collapsed node is visible again, so a click re-opens it.
        assert!(ui.on_click(Point::new(50.0, 50.0)).contains(Changes::EXPANSION));
    }

    #[test]
    fn open_position_works_on_shared_lines() {
        let mut ui = controller();
        ui.on_click(Point::new(100.0, 30.0));
        ui.on_click(Point::new(100.0, 75.0));
        let mut opened: Vec<String> = Vec::new();
        let response = ui.on_key('p', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(
            response.open,
            Some(OpenOutcome::Opened(
                "https://lichess.org/analysis/pgn/e4_e5".to_string()
            ))
        );

        // e4 is backed by two games, but its position is still a single board.
        ui.collapse_all();
        let response = ui.on_key('p', &mut |url: &str| opened.push(url.to_string()));
        assert_eq!(
            response.open,
            Some(OpenOutcome::Opened(
                "https://lichess.org/analysis/pgn/e4".to_string()
            ))
        );
        assert_eq!(opened.len(), 2);
    }

    #[test]
    fn open_position_without_selection() {
        let ui = controller();
        let mut opened: Vec<String> = Vec::new();
        let outcome = ui.open_position(&mut |url: &str| opened.push(url.to_string()));
        assert_eq!(outcome, OpenOutcome::NoSelection);
        assert!(opened.is_empty());
    }

    #[test]
    fn collapse_of_top_level_is_a_no_op() {
        let mut ui = controller();
        ui.on_click(Point::new(250.0, 50.0));
        let mut ignore = |_: &str| {};
        assert_eq!(ui.on_key('c', &mut ignore).changes, Changes::empty());
        assert_eq!(ui.on_key('?', &mut ignore), Default::default());
    }

    #[test]
    fn press_and_release_complete_a_click() {
        let mut ui = controller();
        ui.on_pointer_down(Point::new(100.0, 30.0), 0);
        let changes = ui.on_pointer_up(Point::new(102.0, 31.0), 40);
        assert!(changes.contains(Changes::EXPANSION));

        // Dragging from e5 over to d4 is not a click.
        ui.on_pointer_down(Point::new(100.0, 75.0), 100);
        assert_eq!(ui.on_pointer_up(Point::new(250.0, 75.0), 150), Changes::empty());
    }

    #[test]
    fn render_highlights_selection() {
        let mut ui = controller();
        ui.on_click(Point::new(100.0, 30.0));
        let mut surface = Recorder::default();
        ui.render(&mut surface);
        assert_eq!(surface.calls.len(), 3);
        let highlight = ui.options().highlight;
        // Both children of the selected e4 are highlighted, d4 is not.
        assert_eq!(surface.calls[0].1, highlight);
        assert_eq!(surface.calls[1].1, highlight);
        assert_eq!(surface.calls[2].1, Rgb::for_path(&p(&[1])));
        assert_eq!(surface.calls[0].2, "c5 (1)");
        assert_eq!(surface.calls[2].2, "d4 (1)");
    }

    #[test]
    fn status_line_describes_selection() {
        let mut ui = controller();
        assert_eq!(ui.status_line(), "- (white to play) [3]");
        ui.on_click(Point::new(100.0, 30.0));
        ui.on_click(Point::new(100.0, 75.0));
        assert_eq!(ui.status_line(), "- | e4 | e5 (end) [1]");
    }
}
