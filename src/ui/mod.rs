// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message`, an `Event` reported to its parent, and a `view`.
//!
//! # Screens
//!
//! - [`portfolio`] - Portfolio page with the category selector and project cards
//!
//! # Components
//!
//! - [`selector`] - Circular category selector widget
//! - [`navbar`] - History buttons and location field
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod selector;
pub mod styles;
pub mod theming;
