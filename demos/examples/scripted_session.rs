// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk through a short session: build a tree, drill into a line, and open its game.
//!
//! Run:
//! - `cargo run -p openings_demos --example scripted_session`

use kurbo::{Point, Rect};
use openings_interaction::{InteractionController, LinkTemplate, OpenOutcome, Rgb, Surface};
use openings_tree::{BuildError, GameRecord, build};

struct Printer;

impl Surface for Printer {
    fn draw_rectangle(&mut self, rect: Rect, _fill: Rgb, label: &str) {
        println!("  {rect:?} {label}");
    }
}

fn main() -> Result<(), BuildError> {
    let tree = build([
        GameRecord::new(["e4", "e5", "Nf3", "Nc6"], "abc123"),
        GameRecord::new(["e4", "e5", "Bc4"], "def456"),
        GameRecord::new(["e4", "c5"], "ghi789"),
        GameRecord::new(["d4", "d5", "c4"], "jkl012"),
    ])?;
    println!("{} games, {} nodes", tree.total_games(), tree.len());

    let mut ui = InteractionController::new(tree, Rect::new(0.0, 0.0, 800.0, 600.0));
    println!("Top level:");
    ui.render(&mut Printer);

    // e4 takes the left three quarters; open it, then its first reply.
    ui.on_click(Point::new(100.0, 100.0));
    ui.on_click(Point::new(100.0, 100.0));
    println!("After two clicks: {}", ui.status_line());
    ui.render(&mut Printer);

    let mut open = |url: &str| println!("  would open {url}");
    match ui.on_key('o', &mut open).open {
        Some(OpenOutcome::Ambiguous(n)) => println!("{n} games share this line"),
        other => println!("{other:?}"),
    }

    // The position itself is a single board however many games reach it.
    ui.on_key('p', &mut open);

    // Drill down to a single game and open it on a real site.
    ui.on_key('a', &mut open);
    println!("Expanded: {}", ui.status_line());
    let links = LinkTemplate::new("https://lichess.org/{game}");
    if let Some(game) = ui
        .selected()
        .and_then(|path| ui.tree().node(path))
        .and_then(|node| node.single_game())
    {
        println!("  {}", links.resolve(game));
    }

    ui.on_resize(Rect::new(0.0, 0.0, 400.0, 300.0));
    println!("Resized to {:?}:", ui.bounds());
    ui.render(&mut Printer);
    Ok(())
}
