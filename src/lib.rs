// SPDX-License-Identifier: MPL-2.0
//! `folio_wheel` is a portfolio browser built with the Iced GUI framework.
//!
//! Projects are grouped by category and picked with a circular selector that
//! accepts wheel, drag, click and arrow input. The selected category is kept
//! in an in-app location so history navigation and the next launch restore it.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod portfolio;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
