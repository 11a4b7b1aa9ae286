// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal stand-ins for a drawing surface and a browser.

use std::io::{self, Write};

use kurbo::Rect;
use openings_interaction::{LinkOpener, Rgb, Surface};

/// Prints one line per rectangle.
#[derive(Debug)]
pub struct TextSurface<W> {
    out: W,
    drawn: usize,
    error: Option<io::Error>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            drawn: 0,
            error: None,
        }
    }

    /// Rectangles drawn so far, and the first write error if any.
    pub fn finish(self) -> io::Result<usize> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.drawn),
        }
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn draw_rectangle(&mut self, rect: Rect, fill: Rgb, label: &str) {
        if self.error.is_some() {
            return;
        }
        self.drawn += 1;
        let result = writeln!(
            self.out,
            "  [{:7.1} {:7.1} {:7.1} {:7.1}] #{:02x}{:02x}{:02x} {label}",
            rect.x0, rect.y0, rect.x1, rect.y1, fill.r, fill.g, fill.b,
        );
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

/// Records URLs instead of launching a browser.
#[derive(Debug, Default)]
pub struct PrintOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for PrintOpener {
    fn open_external_url(&mut self, url: &str) {
        println!("open {url}");
        self.opened.push(url.to_owned());
    }
}
