// SPDX-License-Identifier: MPL-2.0
//! Circular selector state machine.
//!
//! A [`CircularSelector`] holds a fixed ring of labels and one current index.
//! Directional input is rate-limited by a short lock after each step; direct
//! jumps through [`CircularSelector::set_index`] are not. Every accepted
//! change yields a [`SelectionChanged`] whose `is_initial` flag is set on the
//! first one only.
//!
//! The lock is released by the caller (usually a timer) through
//! [`CircularSelector::release_lock`] with the token handed out when it was
//! taken, so a late timer from an earlier lock cannot clear a newer one.

pub mod input;
pub mod sizing;
pub mod slot;

pub use input::{ArrowSide, ClickTarget, GestureTracker, InputPolicy, SelectorInput};
pub use sizing::{fit_label_scale, LabelScale, LineLayout, TextMeasure};
pub use slot::{classify, relative_offset, Slot};

use crate::domain::error::SelectorError;
use std::time::Instant;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Notification produced after the selection was (re)announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub label: String,
    pub index: usize,
    /// `true` only for the first notification after construction.
    pub is_initial: bool,
}

/// Identifies one lock so its release can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockToken(u64);

/// Ring of labels with a current index.
#[derive(Debug, Clone)]
pub struct CircularSelector {
    items: Vec<String>,
    current_index: usize,
    lock: Option<LockToken>,
    next_token: u64,
    announced: bool,
    gestures: GestureTracker,
    policy: InputPolicy,
}

impl CircularSelector {
    /// Builds a selector starting at `initial_index` (clamped; default 0).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidConfiguration`] when `items` is empty.
    pub fn new(items: Vec<String>, initial_index: Option<usize>) -> Result<Self, SelectorError> {
        if items.is_empty() {
            return Err(SelectorError::InvalidConfiguration);
        }

        let current_index = initial_index.unwrap_or(0).min(items.len() - 1);

        Ok(Self {
            items,
            current_index,
            lock: None,
            next_token: 0,
            announced: false,
            gestures: GestureTracker::default(),
            policy: InputPolicy::default(),
        })
    }

    /// Replaces the input policy.
    #[must_use]
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a selector cannot be built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current label and index.
    #[must_use]
    pub fn current(&self) -> (&str, usize) {
        (&self.items[self.current_index], self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_label(&self) -> &str {
        &self.items[self.current_index]
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Token of the lock currently held, if any.
    #[must_use]
    pub fn lock_token(&self) -> Option<LockToken> {
        self.lock
    }

    /// Announces the current selection without changing it.
    ///
    /// Used when the control mounts so the owner learns the starting state.
    pub fn announce(&mut self) -> SelectionChanged {
        self.notification()
    }

    /// Moves one step in `direction`, wrapping around the ring.
    ///
    /// Returns `None` while locked. On success the selector locks until
    /// [`release_lock`](Self::release_lock) is called with the new token.
    pub fn navigate(&mut self, direction: Direction) -> Option<SelectionChanged> {
        if self.lock.is_some() {
            return None;
        }

        let len = self.items.len();
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % len,
            Direction::Backward => (self.current_index + len - 1) % len,
        };

        self.lock = Some(LockToken(self.next_token));
        self.next_token = self.next_token.wrapping_add(1);

        Some(self.notification())
    }

    /// Releases the lock if `token` matches the one held.
    ///
    /// Returns `true` when the lock was cleared.
    pub fn release_lock(&mut self, token: LockToken) -> bool {
        if self.lock == Some(token) {
            self.lock = None;
            true
        } else {
            false
        }
    }

    /// Jumps straight to `index` (clamped). Neither checks nor takes the lock.
    pub fn set_index(&mut self, index: usize) -> SelectionChanged {
        self.current_index = index.min(self.items.len() - 1);
        self.notification()
    }

    /// Feeds one raw input through the gesture tracker and navigates.
    pub fn handle_input(&mut self, input: SelectorInput, now: Instant) -> Option<SelectionChanged> {
        let direction = self.gestures.interpret(input, now, &self.policy)?;
        self.navigate(direction)
    }

    /// Slot of the item at `index` relative to the current selection.
    #[must_use]
    pub fn slot_of(&self, index: usize) -> Slot {
        classify(index, self.current_index, self.items.len())
    }

    /// Every item with its slot, in ring order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &str, Slot)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, label)| (index, label.as_str(), self.slot_of(index)))
    }

    /// The neighbour one step backward, if the ring has one distinct from the
    /// forward neighbour.
    #[must_use]
    pub fn previous_neighbour(&self) -> Option<(usize, &str)> {
        self.slots()
            .find(|(_, _, slot)| *slot == Slot::Previous)
            .map(|(index, label, _)| (index, label))
    }

    /// The neighbour one step forward, if any.
    #[must_use]
    pub fn next_neighbour(&self) -> Option<(usize, &str)> {
        let len = self.items.len();
        if len < 2 {
            return None;
        }
        let index = (self.current_index + 1) % len;
        Some((index, self.items[index].as_str()))
    }

    fn notification(&mut self) -> SelectionChanged {
        let is_initial = !self.announced;
        self.announced = true;
        SelectionChanged {
            label: self.items[self.current_index].clone(),
            index: self.current_index,
            is_initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn categories() -> Vec<String> {
        labels(&["Agentic AI", "Web Dev", "Stats", "ML Systems", "Research"])
    }

    /// Navigates and immediately releases the lock, as an expired timer would.
    fn step(selector: &mut CircularSelector, direction: Direction) -> Option<SelectionChanged> {
        let changed = selector.navigate(direction);
        if let Some(token) = selector.lock_token() {
            selector.release_lock(token);
        }
        changed
    }

    #[test]
    fn empty_items_are_rejected() {
        let err = CircularSelector::new(Vec::new(), None).unwrap_err();
        assert_eq!(err, SelectorError::InvalidConfiguration);
    }

    #[test]
    fn construct_reports_initial_index() {
        for n in 1..=7 {
            let items: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
            for initial in 0..n {
                let selector = CircularSelector::new(items.clone(), Some(initial)).unwrap();
                let (label, index) = selector.current();
                assert_eq!(index, initial);
                assert_eq!(label, items[initial]);
            }
        }
    }

    #[test]
    fn initial_index_defaults_to_zero_and_clamps() {
        let selector = CircularSelector::new(categories(), None).unwrap();
        assert_eq!(selector.current(), ("Agentic AI", 0));

        let clamped = CircularSelector::new(categories(), Some(99)).unwrap();
        assert_eq!(clamped.current(), ("Research", 4));
    }

    #[test]
    fn forward_wraps_from_last_to_first() {
        let mut selector = CircularSelector::new(categories(), Some(4)).unwrap();
        step(&mut selector, Direction::Forward);
        assert_eq!(selector.current_index(), 0);
    }

    #[test]
    fn backward_wraps_from_first_to_last() {
        let mut selector = CircularSelector::new(categories(), Some(0)).unwrap();
        step(&mut selector, Direction::Backward);
        assert_eq!(selector.current_index(), 4);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=6 {
            let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            for start in 0..n {
                let mut selector = CircularSelector::new(items.clone(), Some(start)).unwrap();
                for _ in 0..n {
                    assert!(step(&mut selector, Direction::Forward).is_some());
                }
                assert_eq!(selector.current_index(), start);
            }
        }
    }

    #[test]
    fn backward_undoes_forward() {
        for start in 0..5 {
            let mut selector = CircularSelector::new(categories(), Some(start)).unwrap();
            step(&mut selector, Direction::Forward);
            step(&mut selector, Direction::Backward);
            assert_eq!(selector.current_index(), start);
        }
    }

    #[test]
    fn navigation_inside_lock_window_is_dropped() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        assert!(selector.navigate(Direction::Forward).is_some());
        assert!(selector.is_locked());
        assert!(selector.navigate(Direction::Forward).is_none());
        assert_eq!(selector.current_index(), 1);
    }

    #[test]
    fn stale_lock_token_does_not_release() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        selector.navigate(Direction::Forward);
        let first = selector.lock_token().unwrap();
        assert!(selector.release_lock(first));

        selector.navigate(Direction::Forward);
        assert!(!selector.release_lock(first));
        assert!(selector.is_locked());
    }

    #[test]
    fn set_index_bypasses_lock() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        selector.navigate(Direction::Forward);
        assert!(selector.is_locked());

        let changed = selector.set_index(3);
        assert_eq!(changed.index, 3);
        assert_eq!(changed.label, "ML Systems");
        assert_eq!(selector.current_index(), 3);
    }

    #[test]
    fn set_index_does_not_lock() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        selector.set_index(2);
        assert!(!selector.is_locked());
        assert!(selector.navigate(Direction::Forward).is_some());
    }

    #[test]
    fn set_index_clamps_out_of_range() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        assert_eq!(selector.set_index(42).index, 4);
    }

    #[test]
    fn initial_flag_fires_exactly_once() {
        let mut selector = CircularSelector::new(categories(), Some(2)).unwrap();
        let first = selector.announce();
        assert!(first.is_initial);
        assert_eq!(first.index, 2);

        let second = step(&mut selector, Direction::Forward).unwrap();
        assert!(!second.is_initial);
        assert!(!selector.set_index(0).is_initial);
        assert!(!selector.announce().is_initial);
    }

    #[test]
    fn first_navigation_is_initial_without_announce() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        let first = step(&mut selector, Direction::Forward).unwrap();
        assert!(first.is_initial);
        assert!(!step(&mut selector, Direction::Forward).unwrap().is_initial);
    }

    #[test]
    fn scenario_walks_the_whole_ring() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        assert_eq!(selector.current(), ("Agentic AI", 0));

        step(&mut selector, Direction::Forward);
        assert_eq!(selector.current(), ("Web Dev", 1));

        for _ in 0..4 {
            step(&mut selector, Direction::Forward);
        }
        assert_eq!(selector.current(), ("Agentic AI", 0));
    }

    #[test]
    fn even_ring_antipode_classifies_next() {
        let items: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        let selector = CircularSelector::new(items, Some(0)).unwrap();
        assert_eq!(selector.slot_of(3), Slot::Next);
        assert_eq!(selector.slot_of(5), Slot::Previous);
        assert_eq!(selector.slot_of(2), Slot::Hidden);
    }

    #[test]
    fn neighbours_follow_the_ring() {
        let selector = CircularSelector::new(categories(), Some(0)).unwrap();
        assert_eq!(selector.previous_neighbour(), Some((4, "Research")));
        assert_eq!(selector.next_neighbour(), Some((1, "Web Dev")));

        let pair = CircularSelector::new(labels(&["A", "B"]), None).unwrap();
        assert_eq!(pair.previous_neighbour(), None);
        assert_eq!(pair.next_neighbour(), Some((1, "B")));

        let single = CircularSelector::new(labels(&["A"]), None).unwrap();
        assert_eq!(single.previous_neighbour(), None);
        assert_eq!(single.next_neighbour(), None);
    }

    #[test]
    fn wheel_burst_yields_one_step() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        let t0 = Instant::now();
        let mut steps = 0;
        for i in 0..20u64 {
            let now = t0 + Duration::from_millis(i * 10);
            if selector
                .handle_input(SelectorInput::Wheel { delta_y: 1.0 }, now)
                .is_some()
            {
                steps += 1;
            }
            if let Some(token) = selector.lock_token() {
                selector.release_lock(token);
            }
        }
        assert_eq!(steps, 1);
        assert_eq!(selector.current_index(), 1);
    }

    #[test]
    fn drag_inside_lock_window_coalesces() {
        let mut selector = CircularSelector::new(categories(), None).unwrap();
        let now = Instant::now();
        selector.handle_input(SelectorInput::PointerDown { x: 200.0, y: 0.0 }, now);
        assert!(selector
            .handle_input(SelectorInput::PointerMoved { x: 170.0, y: 0.0 }, now)
            .is_some());
        // Lock still held: the second crossing is swallowed.
        assert!(selector
            .handle_input(SelectorInput::PointerMoved { x: 140.0, y: 0.0 }, now)
            .is_none());
        assert_eq!(selector.current_index(), 1);
    }

    #[test]
    fn custom_policy_is_applied() {
        use crate::domain::ui::WheelCooldown;

        let policy = InputPolicy {
            wheel_cooldown: WheelCooldown::new(200),
            ..InputPolicy::default()
        };
        let mut selector = CircularSelector::new(categories(), None)
            .unwrap()
            .with_policy(policy);
        let t0 = Instant::now();
        selector.handle_input(SelectorInput::Wheel { delta_y: 1.0 }, t0);
        selector.release_lock(selector.lock_token().unwrap());
        assert!(selector
            .handle_input(
                SelectorInput::Wheel { delta_y: 1.0 },
                t0 + Duration::from_millis(250)
            )
            .is_some());
        assert_eq!(selector.current_index(), 2);
    }
}
