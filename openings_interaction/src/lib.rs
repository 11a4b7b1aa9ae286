// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Openings Interaction: the event-driven controller of an openings treemap.
//!
//! [`InteractionController`] owns a session: the immutable [`openings_tree::MoveTree`],
//! the [`openings_layout::ExpansionState`], the optional selection, the drawing bounds,
//! and the latest frame. The host's event loop feeds it events one at a time:
//!
//! - [`InteractionController::on_click`]: select the deepest visible node under the
//!   pointer and toggle its expansion. Collapsing a node also closes everything below it.
//!   [`InteractionController::on_pointer_down`] / [`InteractionController::on_pointer_up`]
//!   do the same for hosts that report presses and releases (see [`click`]).
//! - [`InteractionController::on_key`]: `o` opens the selected node's game when exactly
//!   one game passes through it, and reports [`OpenOutcome::Ambiguous`] otherwise. `p`
//!   opens the position reached at the selected node instead, which is never ambiguous.
//!   `e` and `a` expand and expand all. `c` collapses the selected node if it is open and
//!   its parent otherwise; `x` collapses everything.
//! - [`InteractionController::on_resize`]: lay the same state out in new bounds.
//!
//! Each handler returns the [`Changes`] it caused. Drawing goes through the host's
//! [`Surface`], and links through its [`LinkOpener`].
//!
//! ## Interaction anomalies
//!
//! Clicks outside every rectangle and unknown keys are ignored. An ambiguous open request
//! is reported, never guessed. None of these end the session.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log transitions and opened links.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod changes;
pub mod click;
mod controller;
mod host;

pub use changes::Changes;
pub use controller::{ControllerOptions, InteractionController, Key, KeyResponse, OpenOutcome};
pub use host::{LinkOpener, LinkTemplate, Rgb, Surface};
