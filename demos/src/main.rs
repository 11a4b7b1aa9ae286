// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explore an openings treemap from the terminal.
//!
//! Loads games from JSON, builds the move tree, draws the initial frame, then replays the
//! scripted events given with `--event`, redrawing whenever one changes something.
//!
//! ```text
//! openings-treemap games.json --event click:100,30 --event key:o \
//!     --links 'https://lichess.org/{game}'
//! ```
//!
//! Set `RUST_LOG=debug` to watch the tree builder and the controller at work.

mod load;
mod script;
mod surface;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kurbo::Rect;
use openings_interaction::{
    Changes, ControllerOptions, InteractionController, LinkTemplate, OpenOutcome,
};
use openings_layout::{LayoutOptions, SplitPolicy};
use tracing_subscriber::EnvFilter;

use crate::script::Event;
use crate::surface::{PrintOpener, TextSurface};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Columns at even depths, rows at odd depths.
    Alternating,
    /// Split each region across its longer side.
    LongestSide,
}

impl From<Policy> for SplitPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Alternating => Self::Alternating,
            Policy::LongestSide => Self::LongestSide,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Explore chess openings as a treemap")]
struct Args {
    /// JSON file with game records or plain move lists.
    input: PathBuf,
    /// Drawing width.
    #[arg(long, default_value_t = 1024.0)]
    width: f64,
    /// Drawing height.
    #[arg(long, default_value_t = 768.0)]
    height: f64,
    /// URL template for opening games; `{game}` is replaced by the game reference.
    #[arg(long, default_value = "{game}")]
    links: String,
    /// URL template for opening positions; `{moves}` is replaced by the moves played.
    #[arg(long, default_value = "https://lichess.org/analysis/pgn/{moves}")]
    position_links: String,
    /// How regions are split.
    #[arg(long, value_enum, default_value_t = Policy::Alternating)]
    policy: Policy,
    /// Rectangles narrower than this are drawn without a label.
    #[arg(long, default_value_t = 1.0)]
    min_extent: f64,
    /// Drop games without moves instead of rejecting the input.
    #[arg(long)]
    skip_empty: bool,
    /// Print the whole move tree as an indented outline before drawing.
    #[arg(long)]
    outline: bool,
    /// Scripted event: `click:X,Y`, `key:C`, or `resize:W,H`. Repeatable.
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<Event>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let records = load::load_records(&args.input, args.skip_empty)?;
    let tree = openings_tree::build(records)
        .with_context(|| format!("building the move tree from {}", args.input.display()))?;
    tracing::info!(games = tree.total_games(), nodes = tree.len(), "built move tree");
    if args.outline {
        println!("{tree}");
    }

    let options = ControllerOptions {
        layout: LayoutOptions {
            policy: args.policy.into(),
            min_extent: args.min_extent,
        },
        links: LinkTemplate::new(args.links),
        position_links: LinkTemplate::new(args.position_links),
        ..ControllerOptions::default()
    };
    let bounds = Rect::new(0.0, 0.0, args.width, args.height);
    let mut ui = InteractionController::with_options(tree, bounds, options);
    let mut opener = PrintOpener::default();

    draw(&ui, "initial")?;
    for event in args.events {
        let changes = match event {
            Event::Click(point) => ui.on_click(point),
            Event::Resize(bounds) => ui.on_resize(bounds),
            Event::Key(key) => {
                let response = ui.on_key(key, &mut opener);
                match response.open {
                    Some(OpenOutcome::Ambiguous(games)) => {
                        println!("{games} games pass through the selection; select a single line");
                    }
                    Some(OpenOutcome::NoSelection) => println!("nothing selected"),
                    Some(OpenOutcome::Opened(_)) | None => {}
                }
                response.changes
            }
        };
        tracing::debug!(?event, ?changes, "handled event");
        if changes.is_empty() {
            continue;
        }
        draw(&ui, &describe(changes))?;
    }
    if !opener.opened.is_empty() {
        tracing::info!(links = opener.opened.len(), "opened links");
    }
    Ok(())
}

fn draw(ui: &InteractionController, reason: &str) -> Result<()> {
    println!("== {reason}: {}", ui.status_line());
    let mut surface = TextSurface::new(io::stdout().lock());
    ui.render(&mut surface);
    let drawn = surface.finish().context("writing the frame")?;
    tracing::debug!(drawn, "drew frame");
    Ok(())
}

fn describe(changes: Changes) -> String {
    changes
        .iter_names()
        .map(|(name, _)| name.to_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}
