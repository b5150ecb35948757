// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is picked from the `--lang` flag, then `[general] language` in the
//! config, then the operating system, falling back to `en-US`.

pub mod fluent;
