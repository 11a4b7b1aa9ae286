// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// What an event changed. Hosts redraw when this is non-empty.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The selected node changed.
        const SELECTION = 0b0000_0001;
        /// Nodes were expanded or collapsed.
        const EXPANSION = 0b0000_0010;
        /// The frame was recomputed.
        const LAYOUT    = 0b0000_0100;
    }
}
