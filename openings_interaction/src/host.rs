// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the controller needs from its host: a surface to draw on and a way to open links.

use alloc::string::String;

use kurbo::Rect;
use openings_tree::{GameRef, NodePath};

/// An opaque 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Construct from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A stable, readable fill for the node at `path`.
    ///
    /// Colours are derived from an FNV-1a hash of the path, so a node keeps its colour
    /// across frames and sessions. Components stay within `64..=223`.
    pub fn for_path(path: &NodePath) -> Self {
        let mut hash: u32 = 0x811c_9dc5;
        for index in path.indices() {
            for byte in index.to_le_bytes() {
                hash ^= u32::from(byte);
                hash = hash.wrapping_mul(0x0100_0193);
            }
        }
        let [r, g, b, _] = hash.to_le_bytes();
        Self::new(64 + r % 160, 64 + g % 160, 64 + b % 160)
    }
}

/// Drawing surface provided by the host.
pub trait Surface {
    /// Fill `rect` with `fill` and write `label` inside it. `label` may be empty.
    fn draw_rectangle(&mut self, rect: Rect, fill: Rgb, label: &str);
}

/// Opens URLs outside the application, typically in a web browser.
pub trait LinkOpener {
    /// Open `url`.
    fn open_external_url(&mut self, url: &str);
}

impl<F: FnMut(&str)> LinkOpener for F {
    fn open_external_url(&mut self, url: &str) {
        self(url);
    }
}

/// Turns a [`GameRef`] or a move sequence into a URL.
///
/// `{game}` is replaced by the game identifier and `{moves}` by the moves joined with
/// [`LinkTemplate::MOVE_SEPARATOR`]. A template without the relevant placeholder gets the
/// value appended.
///
/// ```
/// use openings_interaction::LinkTemplate;
/// use openings_tree::GameRef;
///
/// let links = LinkTemplate::new("https://lichess.org/{game}");
/// assert_eq!(links.resolve(&GameRef::new("abcd1234")), "https://lichess.org/abcd1234");
/// assert_eq!(LinkTemplate::default().resolve(&GameRef::new("g1")), "g1");
///
/// let board = LinkTemplate::new("https://lichess.org/analysis/pgn/{moves}");
/// assert_eq!(
///     board.resolve_moves(&["e4", "e5"]),
///     "https://lichess.org/analysis/pgn/e4_e5"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    /// Placeholder replaced by the game identifier.
    pub const PLACEHOLDER: &'static str = "{game}";
    /// Placeholder replaced by the moves leading to a position.
    pub const MOVES_PLACEHOLDER: &'static str = "{moves}";
    /// Separator between moves in a resolved `{moves}` placeholder.
    pub const MOVE_SEPARATOR: &'static str = "_";

    /// A template; without a placeholder the value is appended.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Lichess analysis board for the position reached by a move sequence.
    pub fn lichess_analysis() -> Self {
        Self::new("https://lichess.org/analysis/pgn/{moves}")
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// URL for `game`.
    pub fn resolve(&self, game: &GameRef) -> String {
        self.fill(Self::PLACEHOLDER, game.as_str())
    }

    /// URL for the position reached by playing `moves` from the start position.
    pub fn resolve_moves(&self, moves: &[&str]) -> String {
        self.fill(Self::MOVES_PLACEHOLDER, &moves.join(Self::MOVE_SEPARATOR))
    }

    fn fill(&self, placeholder: &str, value: &str) -> String {
        if self.template.contains(placeholder) {
            self.template.replace(placeholder, value)
        } else {
            let mut url = self.template.clone();
            url.push_str(value);
            url
        }
    }
}

impl Default for LinkTemplate {
    /// Game references are already URLs.
    fn default() -> Self {
        Self::new(Self::PLACEHOLDER)
    }
}
