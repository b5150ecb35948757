// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core selector logic with ZERO external dependencies.
//!
//! Everything here is plain `std`: the selector state machine, its input
//! normalization, location handling and the tuning value objects. The Iced
//! adapter in [`crate::ui`] is the only place toolkit types appear.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`SelectorError`](error::SelectorError))
//! - [`location`]: Slugs, [`Location`](location::Location) and
//!   [`History`](location::History)
//! - [`selector`]: [`CircularSelector`](selector::CircularSelector), slots,
//!   input normalization and label sizing
//! - [`ui`]: Tuning value objects ([`WheelCooldown`](ui::newtypes::WheelCooldown),
//!   [`LockDuration`](ui::newtypes::LockDuration), [`ScaleFloor`](ui::newtypes::ScaleFloor))

pub mod error;
pub mod location;
pub mod selector;
pub mod ui;
