// SPDX-License-Identifier: MPL-2.0
//! Input normalization for the circular selector.
//!
//! Four channels (wheel, pointer drag, click, arrow buttons) are reduced to a
//! single [`Direction`]. The wheel gate and drag origin live here; the
//! navigation lock lives on the selector itself.

use super::Direction;
use crate::domain::ui::{DragThreshold, LockDuration, WheelCooldown};
use std::time::{Duration, Instant};

/// Timing and distance knobs for input handling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputPolicy {
    pub wheel_cooldown: WheelCooldown,
    pub lock_duration: LockDuration,
    pub drag_threshold: DragThreshold,
}

impl InputPolicy {
    #[must_use]
    pub fn wheel_cooldown(&self) -> Duration {
        self.wheel_cooldown.as_duration()
    }

    #[must_use]
    pub fn lock_duration(&self) -> Duration {
        self.lock_duration.as_duration()
    }
}

/// Part of the control that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The label above the selection.
    UpperSlot,
    /// The caret above the viewport.
    UpCaret,
    /// The selected label.
    CenterSlot,
    /// The label below the selection.
    LowerSlot,
    /// The caret below the viewport.
    DownCaret,
    /// Anywhere else on the control.
    Body,
}

impl ClickTarget {
    /// Upper targets step backward; everything else steps forward.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            ClickTarget::UpperSlot | ClickTarget::UpCaret => Direction::Backward,
            ClickTarget::CenterSlot
            | ClickTarget::LowerSlot
            | ClickTarget::DownCaret
            | ClickTarget::Body => Direction::Forward,
        }
    }
}

/// Discrete arrow buttons flanking the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

impl ArrowSide {
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            ArrowSide::Left => Direction::Backward,
            ArrowSide::Right => Direction::Forward,
        }
    }
}

/// Raw input delivered to the selector, already stripped of toolkit types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectorInput {
    /// Wheel or trackpad scroll; `delta_y` is positive when scrolling down.
    Wheel { delta_y: f32 },
    /// Primary button pressed over the control.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved over the control.
    PointerMoved { x: f32, y: f32 },
    /// Primary button released over the control body. Only a release that
    /// ends a press made over the control counts as a click.
    PointerUp,
    /// Pointer left the control or the gesture was interrupted.
    PointerCancelled,
    /// Release over a specific part of the control; same press rule as
    /// `PointerUp`.
    Click(ClickTarget),
    /// Arrow button pressed.
    Arrow(ArrowSide),
}

/// Tracks the wheel gate and the in-flight drag gesture.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    last_wheel_at: Option<Instant>,
    drag_origin: Option<(f32, f32)>,
    drag_fired: bool,
}

impl GestureTracker {
    /// Timestamp of the last wheel event that passed the gate.
    #[must_use]
    pub fn last_wheel_at(&self) -> Option<Instant> {
        self.last_wheel_at
    }

    /// Whether a pointer is currently held down over the control.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Reduces one input to at most one direction.
    pub fn interpret(
        &mut self,
        input: SelectorInput,
        now: Instant,
        policy: &InputPolicy,
    ) -> Option<Direction> {
        match input {
            SelectorInput::Wheel { delta_y } => self.wheel(delta_y, now, policy.wheel_cooldown()),
            SelectorInput::PointerDown { x, y } => {
                self.drag_origin = Some((x, y));
                self.drag_fired = false;
                None
            }
            SelectorInput::PointerMoved { x, y } => {
                self.pointer_moved(x, y, policy.drag_threshold.pixels())
            }
            SelectorInput::PointerUp => self
                .end_gesture()
                .then(|| ClickTarget::Body.direction()),
            SelectorInput::PointerCancelled => {
                self.end_gesture();
                None
            }
            SelectorInput::Click(target) => self.end_gesture().then(|| target.direction()),
            SelectorInput::Arrow(side) => Some(side.direction()),
        }
    }

    fn wheel(&mut self, delta_y: f32, now: Instant, cooldown: Duration) -> Option<Direction> {
        if delta_y == 0.0 || delta_y.is_nan() {
            return None;
        }

        if let Some(last) = self.last_wheel_at {
            if now.saturating_duration_since(last) < cooldown {
                return None;
            }
        }

        self.last_wheel_at = Some(now);
        Some(if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    fn pointer_moved(&mut self, x: f32, y: f32, threshold: f32) -> Option<Direction> {
        let (origin_x, origin_y) = self.drag_origin?;
        let delta_x = x - origin_x;
        let delta_y = y - origin_y;

        if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
            // Re-anchor so a long drag can fire several steps.
            self.drag_origin = Some((x, y));
            self.drag_fired = true;
            Some(if delta_x > 0.0 {
                Direction::Backward
            } else {
                Direction::Forward
            })
        } else {
            None
        }
    }

    /// Clears the drag and reports whether the release counts as a click:
    /// a press was tracked over the control and no drag step fired.
    fn end_gesture(&mut self) -> bool {
        let is_click = self.drag_origin.is_some() && !self.drag_fired;
        self.drag_origin = None;
        self.drag_fired = false;
        is_click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> InputPolicy {
        InputPolicy::default()
    }

    #[test]
    fn wheel_sign_maps_to_direction() {
        let mut tracker = GestureTracker::default();
        let t0 = Instant::now();
        assert_eq!(
            tracker.interpret(SelectorInput::Wheel { delta_y: 3.0 }, t0, &policy()),
            Some(Direction::Forward)
        );
        let later = t0 + Duration::from_secs(1);
        assert_eq!(
            tracker.interpret(SelectorInput::Wheel { delta_y: -1.0 }, later, &policy()),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn wheel_inside_cooldown_is_dropped() {
        let mut tracker = GestureTracker::default();
        let t0 = Instant::now();
        assert!(tracker
            .interpret(SelectorInput::Wheel { delta_y: 1.0 }, t0, &policy())
            .is_some());
        let burst = t0 + Duration::from_millis(120);
        assert!(tracker
            .interpret(SelectorInput::Wheel { delta_y: 1.0 }, burst, &policy())
            .is_none());
        // Dropped events do not push the gate forward.
        assert_eq!(tracker.last_wheel_at(), Some(t0));
        let after = t0 + Duration::from_millis(750);
        assert!(tracker
            .interpret(SelectorInput::Wheel { delta_y: 1.0 }, after, &policy())
            .is_some());
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut tracker = GestureTracker::default();
        let t0 = Instant::now();
        assert!(tracker
            .interpret(SelectorInput::Wheel { delta_y: 0.0 }, t0, &policy())
            .is_none());
        assert!(tracker.last_wheel_at().is_none());
    }

    #[test]
    fn drag_below_threshold_does_nothing() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 100.0, y: 10.0 }, now, &policy());
        assert!(tracker
            .interpret(SelectorInput::PointerMoved { x: 80.0, y: 10.0 }, now, &policy())
            .is_none());
    }

    #[test]
    fn vertical_drag_does_nothing() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 100.0, y: 10.0 }, now, &policy());
        assert!(tracker
            .interpret(SelectorInput::PointerMoved { x: 70.0, y: 60.0 }, now, &policy())
            .is_none());
    }

    #[test]
    fn drag_left_steps_forward_and_reanchors() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 100.0, y: 10.0 }, now, &policy());
        assert_eq!(
            tracker.interpret(SelectorInput::PointerMoved { x: 70.0, y: 12.0 }, now, &policy()),
            Some(Direction::Forward)
        );
        // Origin is now 70; another 30px left fires again.
        assert_eq!(
            tracker.interpret(SelectorInput::PointerMoved { x: 40.0, y: 12.0 }, now, &policy()),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn drag_right_steps_backward() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 0.0, y: 0.0 }, now, &policy());
        assert_eq!(
            tracker.interpret(SelectorInput::PointerMoved { x: 25.0, y: 0.0 }, now, &policy()),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        assert!(tracker
            .interpret(SelectorInput::PointerMoved { x: 500.0, y: 0.0 }, now, &policy())
            .is_none());
    }

    #[test]
    fn release_without_drag_is_a_body_click() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 5.0, y: 5.0 }, now, &policy());
        assert_eq!(
            tracker.interpret(SelectorInput::PointerUp, now, &policy()),
            Some(Direction::Forward)
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_after_drag_is_not_a_click() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 100.0, y: 0.0 }, now, &policy());
        tracker.interpret(SelectorInput::PointerMoved { x: 50.0, y: 0.0 }, now, &policy());
        assert!(tracker
            .interpret(SelectorInput::Click(ClickTarget::LowerSlot), now, &policy())
            .is_none());
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        assert!(tracker
            .interpret(SelectorInput::PointerUp, now, &policy())
            .is_none());
        assert!(tracker
            .interpret(SelectorInput::Click(ClickTarget::LowerSlot), now, &policy())
            .is_none());
    }

    #[test]
    fn release_after_leaving_mid_drag_is_not_a_click() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 200.0, y: 0.0 }, now, &policy());
        assert_eq!(
            tracker.interpret(SelectorInput::PointerMoved { x: 160.0, y: 0.0 }, now, &policy()),
            Some(Direction::Forward)
        );
        tracker.interpret(SelectorInput::PointerCancelled, now, &policy());

        assert!(tracker
            .interpret(SelectorInput::PointerUp, now, &policy())
            .is_none());
        assert!(tracker
            .interpret(SelectorInput::Click(ClickTarget::CenterSlot), now, &policy())
            .is_none());
    }

    #[test]
    fn slot_click_then_body_release_is_one_step() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 5.0, y: 5.0 }, now, &policy());
        assert_eq!(
            tracker.interpret(SelectorInput::Click(ClickTarget::UpperSlot), now, &policy()),
            Some(Direction::Backward)
        );
        assert!(tracker
            .interpret(SelectorInput::PointerUp, now, &policy())
            .is_none());
    }

    #[test]
    fn cancel_ends_the_gesture() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        tracker.interpret(SelectorInput::PointerDown { x: 100.0, y: 0.0 }, now, &policy());
        tracker.interpret(SelectorInput::PointerCancelled, now, &policy());
        assert!(tracker
            .interpret(SelectorInput::PointerMoved { x: 0.0, y: 0.0 }, now, &policy())
            .is_none());
    }

    #[test]
    fn click_targets_map_to_directions() {
        assert_eq!(ClickTarget::UpperSlot.direction(), Direction::Backward);
        assert_eq!(ClickTarget::UpCaret.direction(), Direction::Backward);
        assert_eq!(ClickTarget::LowerSlot.direction(), Direction::Forward);
        assert_eq!(ClickTarget::DownCaret.direction(), Direction::Forward);
        assert_eq!(ClickTarget::CenterSlot.direction(), Direction::Forward);
        assert_eq!(ClickTarget::Body.direction(), Direction::Forward);
    }

    #[test]
    fn arrows_map_to_directions() {
        let mut tracker = GestureTracker::default();
        let now = Instant::now();
        assert_eq!(
            tracker.interpret(SelectorInput::Arrow(ArrowSide::Left), now, &policy()),
            Some(Direction::Backward)
        );
        assert_eq!(
            tracker.interpret(SelectorInput::Arrow(ArrowSide::Right), now, &policy()),
            Some(Direction::Forward)
        );
    }
}
