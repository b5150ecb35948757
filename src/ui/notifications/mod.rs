// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load warnings and user feedback.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - Toast rendering
//!
//! # Usage
//!
//! ```ignore
//! manager.push(Notification::warning("notification-config-load-error"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
