// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised while building a selector.
///
/// Everything else the selector encounters (out-of-range indices, rapid
/// input, missing measurements) degrades silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector was given no labels to choose from.
    InvalidConfiguration,
}

impl SelectorError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectorError::InvalidConfiguration => "error-selector-no-categories",
        }
    }
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::InvalidConfiguration => {
                write!(f, "selector needs at least one item")
            }
        }
    }
}

impl std::error::Error for SelectorError {}
