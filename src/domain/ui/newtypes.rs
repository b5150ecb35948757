// SPDX-License-Identifier: MPL-2.0
//! Selector tuning newtypes.
//!
//! Each wrapper clamps its value on construction so user configuration can
//! never push the selector into a nonsensical regime (a zero-length wheel
//! cooldown, a lock that outlives the wheel gate, a label shrunk to nothing).

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Wheel cooldown bounds in milliseconds.
pub mod wheel_bounds {
    /// Minimum cooldown between accepted wheel events.
    pub const MIN_MS: u64 = 100;
    /// Maximum cooldown between accepted wheel events.
    pub const MAX_MS: u64 = 2_000;
    /// Default cooldown between accepted wheel events.
    pub const DEFAULT_MS: u64 = 750;
}

/// Navigation lock bounds in milliseconds.
pub mod lock_bounds {
    /// Minimum lock window after a navigation step.
    pub const MIN_MS: u64 = 10;
    /// Maximum lock window after a navigation step.
    pub const MAX_MS: u64 = 250;
    /// Default lock window after a navigation step.
    pub const DEFAULT_MS: u64 = 50;
}

/// Drag threshold bounds in logical pixels.
pub mod drag_bounds {
    /// Minimum horizontal travel before a drag fires a step.
    pub const MIN_PX: f32 = 8.0;
    /// Maximum horizontal travel before a drag fires a step.
    pub const MAX_PX: f32 = 200.0;
    /// Default horizontal travel before a drag fires a step.
    pub const DEFAULT_PX: f32 = 24.0;
}

/// Label scale floor bounds (fraction of full size).
pub mod scale_bounds {
    /// Smallest floor a user may configure.
    pub const MIN: f32 = 0.5;
    /// Full size.
    pub const MAX: f32 = 1.0;
    /// Default floor.
    pub const DEFAULT: f32 = 0.6;
}

// =============================================================================
// WheelCooldown
// =============================================================================

/// Minimum spacing between two accepted wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelCooldown(u64);

impl WheelCooldown {
    /// Creates a new cooldown, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(wheel_bounds::MIN_MS, wheel_bounds::MAX_MS))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for WheelCooldown {
    fn default() -> Self {
        Self(wheel_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// LockDuration
// =============================================================================

/// How long the selector ignores directional input after a step.
///
/// Kept well below the wheel cooldown: it only coalesces the burst of pointer
/// moves a single drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDuration(u64);

impl LockDuration {
    /// Creates a new lock duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(lock_bounds::MIN_MS, lock_bounds::MAX_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for LockDuration {
    fn default() -> Self {
        Self(lock_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Horizontal travel in pixels a drag must exceed to fire a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(pixels.clamp(drag_bounds::MIN_PX, drag_bounds::MAX_PX))
    }

    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// ScaleFloor
// =============================================================================

/// Smallest scale the centred label may shrink to when it overflows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFloor(f32);

impl ScaleFloor {
    /// Creates a new floor, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScaleFloor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}
