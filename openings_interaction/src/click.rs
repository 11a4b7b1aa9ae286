// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/release pairing for hosts that report pointer down and up separately.
//!
//! A press on one rectangle and a release on another is normally not a click. When the
//! frame changes between the two (for example after a resize), the release may land on a
//! different node even though the pointer barely moved. [`ClickState`] keeps the original
//! target in that case, as long as the pointer stayed within the configured slop and the
//! release came soon enough.
//!
//! ```
//! use kurbo::Point;
//! use openings_interaction::click::{ClickResult, ClickState};
//!
//! let mut state: ClickState<u32> = ClickState::with_thresholds(Some(4.0), None);
//! state.on_down(7, Point::new(10.0, 10.0), 0);
//! // Released over another target, but only 3px away.
//! assert_eq!(state.on_up(Some(&8), Point::new(13.0, 10.0), 50), ClickResult::Click(7));
//! ```

use kurbo::Point;

/// Pairs a single pointer's presses and releases into clicks.
#[derive(Clone, Debug)]
pub struct ClickState<K> {
    press: Option<Press<K>>,
    /// Distance the pointer may travel when press and release targets differ.
    pub slop: Option<f64>,
    /// Time in milliseconds a release may take when press and release targets differ.
    pub time_threshold: Option<u64>,
}

/// An active press.
#[derive(Clone, Debug, PartialEq)]
pub struct Press<K> {
    /// Target under the pointer when it went down.
    pub target: K,
    /// Pointer position at press time.
    pub position: Point,
    /// Press timestamp in milliseconds.
    pub time: u64,
}

/// Outcome of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickResult<K> {
    /// The release completes a click on this target.
    Click(K),
    /// No click. Carries the pressed target, if there was one.
    Suppressed(Option<K>),
}

impl<K: PartialEq> ClickState<K> {
    /// Default thresholds: 5 pixels and 300 milliseconds.
    pub fn new() -> Self {
        Self::with_thresholds(Some(5.0), Some(300))
    }

    /// Custom thresholds; `None` means unlimited.
    pub fn with_thresholds(slop: Option<f64>, time_threshold: Option<u64>) -> Self {
        Self {
            press: None,
            slop,
            time_threshold,
        }
    }

    /// Record a press on `target`. A press that was never released is replaced.
    pub fn on_down(&mut self, target: K, position: Point, time: u64) {
        self.press = Some(Press {
            target,
            position,
            time,
        });
    }

    /// Record a release over `target` (`None` when outside every target).
    pub fn on_up(&mut self, target: Option<&K>, position: Point, time: u64) -> ClickResult<K> {
        let Some(press) = self.press.take() else {
            return ClickResult::Suppressed(None);
        };
        if target == Some(&press.target) {
            return ClickResult::Click(press.target);
        }
        if self.slop.is_none() && self.time_threshold.is_none() {
            return ClickResult::Suppressed(Some(press.target));
        }
        let distance_ok = self
            .slop
            .is_none_or(|slop| press.position.distance(position) <= slop);
        let time_ok = self
            .time_threshold
            .is_none_or(|limit| time.saturating_sub(press.time) <= limit);
        if distance_ok && time_ok {
            ClickResult::Click(press.target)
        } else {
            ClickResult::Suppressed(Some(press.target))
        }
    }

    /// The active press, if any.
    pub fn press(&self) -> Option<&Press<K>> {
        self.press.as_ref()
    }

    /// Drop the active press. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }
}

impl<K: PartialEq> Default for ClickState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickResult, ClickState};
    use kurbo::Point;

    #[test]
    fn same_target_generates_click() {
        let mut state: ClickState<u32> = ClickState::with_thresholds(None, None);
        state.on_down(42, Point::new(10.0, 20.0), 1000);
        let result = state.on_up(Some(&42), Point::new(90.0, 20.0), 9000);
        assert_eq!(result, ClickResult::Click(42));
        assert!(state.press().is_none());
    }

    #[test]
    fn different_targets_without_thresholds_are_suppressed() {
        let mut state: ClickState<u32> = ClickState::with_thresholds(None, None);
        state.on_down(42, Point::new(10.0, 20.0), 1000);
        let result = state.on_up(Some(&99), Point::new(10.0, 20.0), 1001);
        assert_eq!(result, ClickResult::Suppressed(Some(42)));
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut state: ClickState<u32> = ClickState::new();
        let result = state.on_up(Some(&1), Point::ZERO, 0);
        assert_eq!(result, ClickResult::Suppressed(None));
    }

    #[test]
    fn slop_and_time_both_apply() {
        let mut state: ClickState<u32> = ClickState::with_thresholds(Some(5.0), Some(100));
        state.on_down(1, Point::new(0.0, 0.0), 0);
        assert_eq!(
            state.on_up(None, Point::new(3.0, 4.0), 100),
            ClickResult::Click(1)
        );

        state.on_down(1, Point::new(0.0, 0.0), 0);
        assert_eq!(
            state.on_up(None, Point::new(6.0, 0.0), 10),
            ClickResult::Suppressed(Some(1))
        );

        state.on_down(1, Point::new(0.0, 0.0), 0);
        assert_eq!(
            state.on_up(None, Point::new(1.0, 0.0), 101),
            ClickResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn cancel_drops_press() {
        let mut state: ClickState<u32> = ClickState::new();
        state.on_down(1, Point::ZERO, 0);
        assert!(state.cancel());
        assert!(!state.cancel());
        assert_eq!(state.on_up(Some(&1), Point::ZERO, 1), ClickResult::Suppressed(None));
    }
}
