// SPDX-License-Identifier: MPL-2.0
//! Serde model of `portfolio.json`.
//!
//! Keys are snake_case; the camelCase spellings produced by web tooling are
//! accepted as aliases.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// `"YYYY-MM"` or `"YYYY"`.
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "githubUrl", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(
        default,
        alias = "designSpecUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub design_spec_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A past employer shown next to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub name: String,
    /// Fragment of the entry on the resume page.
    pub anchor: String,
}

/// Whole `portfolio.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Related experience keyed by category label.
    #[serde(default)]
    pub experience: HashMap<String, Vec<Experience>>,
}
