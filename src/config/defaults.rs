// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! Selector bounds live with their newtypes in [`crate::domain::ui::newtypes`];
//! this module re-exports the defaults and adds the portfolio ones.

use crate::domain::ui::newtypes::{drag_bounds, lock_bounds, scale_bounds, wheel_bounds};

// ==========================================================================
// Selector Defaults
// ==========================================================================

/// Default minimum spacing between accepted wheel events (ms).
pub const DEFAULT_WHEEL_COOLDOWN_MS: u64 = wheel_bounds::DEFAULT_MS;

/// Default navigation lock after a step (ms).
pub const DEFAULT_LOCK_MS: u64 = lock_bounds::DEFAULT_MS;

/// Default horizontal drag distance that fires a step (px).
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = drag_bounds::DEFAULT_PX;

/// Default floor for the centred label scale.
pub const DEFAULT_MIN_LABEL_SCALE: f32 = scale_bounds::DEFAULT;

// ==========================================================================
// Portfolio Defaults
// ==========================================================================

/// Category order used when the config does not list one.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Agentic AI & RL",
    "Web Dev & Cloud",
    "NLP & Deep Learning",
    "Applied ML",
    "Statistical ML",
    "Data Viz & Analytics",
];

/// Query parameter carrying the selected category slug.
pub const CATEGORY_QUERY_KEY: &str = "category";

/// Path of the portfolio page.
pub const PORTFOLIO_PATH: &str = "/portfolio";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_categories_are_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(DEFAULT_CATEGORIES.iter().all(|c| seen.insert(*c)));
    }

    #[test]
    fn lock_is_shorter_than_wheel_cooldown() {
        assert!(DEFAULT_LOCK_MS < DEFAULT_WHEEL_COOLDOWN_MS);
    }
}
