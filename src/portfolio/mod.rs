// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: loading, category derivation and display helpers.
//!
//! Content comes from a user-supplied JSON file when one is configured, and
//! from the demo document embedded in the binary otherwise.

pub mod model;

pub use model::{Experience, Meta, Portfolio, Project};

use crate::error::{Error, Result};
use chrono::NaiveDate;
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct DataAsset;

const DEMO_FILE: &str = "portfolio.json";

/// Reads and parses a portfolio document.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let content = fs::read_to_string(path)?;
    let portfolio: Portfolio = serde_json::from_str(&content)?;
    Ok(portfolio)
}

/// Parses the demo document bundled with the application.
pub fn load_embedded() -> Result<Portfolio> {
    let file = DataAsset::get(DEMO_FILE)
        .ok_or_else(|| Error::Data(format!("embedded {DEMO_FILE} is missing")))?;
    let portfolio: Portfolio = serde_json::from_slice(file.data.as_ref())?;
    Ok(portfolio)
}

/// Loads `path` if given, falling back to the embedded demo.
///
/// Returns a warning key when the user file could not be used.
pub fn load(path: Option<&Path>) -> (Portfolio, Option<String>) {
    let mut warning = None;

    if let Some(path) = path {
        match load_from_path(path) {
            Ok(portfolio) => {
                tracing::info!(
                    path = %path.display(),
                    projects = portfolio.projects.len(),
                    "portfolio loaded"
                );
                return (portfolio, None);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "using embedded portfolio");
                warning = Some("notification-portfolio-load-error".to_string());
            }
        }
    }

    match load_embedded() {
        Ok(portfolio) => (portfolio, warning),
        Err(err) => {
            tracing::error!(%err, "embedded portfolio is unusable");
            (
                Portfolio::default(),
                Some("notification-portfolio-load-error".to_string()),
            )
        }
    }
}

impl Portfolio {
    /// Distinct project categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in &self.projects {
            if !project.category.is_empty() && !seen.contains(&project.category) {
                seen.push(project.category.clone());
            }
        }
        seen
    }

    /// Projects in `category`, newest first.
    #[must_use]
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.category == category)
            .collect();
        // "YYYY-MM" sorts correctly as a string.
        projects.sort_by(|a, b| b.date.cmp(&a.date));
        projects
    }

    /// Experience entries related to `category`.
    #[must_use]
    pub fn related_experience(&self, category: &str) -> &[Experience] {
        self.experience
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Formats `"2024-03"` as `"Mar 2024"`. Year-only and unparsable dates are
/// returned unchanged.
#[must_use]
pub fn format_project_date(date: &str) -> String {
    let Some((year, month)) = date.split_once('-') else {
        return date.to_string();
    };

    let parsed = year
        .parse::<i32>()
        .ok()
        .zip(month.parse::<u32>().ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));

    match parsed {
        Some(day) => day.format("%b %Y").to_string(),
        None => date.to_string(),
    }
}

/// Separator drawn after the name at `index` in a list of `len` names.
#[must_use]
pub fn separator_after(index: usize, len: usize) -> Option<&'static str> {
    if index + 1 >= len {
        None
    } else if index + 2 == len {
        Some(" & ")
    } else {
        Some(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn project(title: &str, date: &str, category: &str) -> Project {
        Project {
            title: title.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            description: String::new(),
            github_url: None,
            design_spec_url: None,
            tags: Vec::new(),
            featured: false,
            image: None,
        }
    }

    fn sample() -> Portfolio {
        Portfolio {
            projects: vec![
                project("Old", "2022-01", "Applied ML"),
                project("Agent", "2024-06", "Agentic AI & RL"),
                project("New", "2024-11", "Applied ML"),
                project("Mid", "2023", "Applied ML"),
            ],
            ..Portfolio::default()
        }
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        assert_eq!(
            sample().categories(),
            vec!["Applied ML".to_string(), "Agentic AI & RL".to_string()]
        );
    }

    #[test]
    fn projects_in_sorts_newest_first() {
        let portfolio = sample();
        let titles: Vec<&str> = portfolio
            .projects_in("Applied ML")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
        assert!(portfolio.projects_in("Statistical ML").is_empty());
    }

    #[test]
    fn format_project_date_uses_short_month() {
        assert_eq!(format_project_date("2024-03"), "Mar 2024");
        assert_eq!(format_project_date("2023-11"), "Nov 2023");
        assert_eq!(format_project_date("2021"), "2021");
        assert_eq!(format_project_date("2021-13"), "2021-13");
    }

    #[test]
    fn separators_use_ampersand_before_last() {
        assert_eq!(separator_after(0, 1), None);
        assert_eq!(separator_after(0, 2), Some(" & "));
        assert_eq!(separator_after(0, 3), Some(", "));
        assert_eq!(separator_after(1, 3), Some(" & "));
        assert_eq!(separator_after(2, 3), None);
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let json = r#"{
            "projects": [{
                "title": "Spec",
                "date": "2024-02",
                "category": "Web Dev & Cloud",
                "description": "d",
                "githubUrl": "https://example.com/repo",
                "designSpecUrl": "https://example.com/spec",
                "tags": ["rust"]
            }],
            "meta": { "updatedAt": "2024-05-01" }
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).expect("parse");
        let project = &portfolio.projects[0];
        assert_eq!(project.github_url.as_deref(), Some("https://example.com/repo"));
        assert_eq!(
            project.design_spec_url.as_deref(),
            Some("https://example.com/spec")
        );
        assert!(!project.featured);
        assert_eq!(
            portfolio.meta.and_then(|m| m.updated_at).as_deref(),
            Some("2024-05-01")
        );
    }

    #[test]
    fn related_experience_defaults_to_empty() {
        let mut portfolio = sample();
        portfolio.experience.insert(
            "Applied ML".to_string(),
            vec![Experience {
                name: "UPL Limited".to_string(),
                anchor: "exp-upl-limited".to_string(),
            }],
        );
        assert_eq!(portfolio.related_experience("Applied ML").len(), 1);
        assert!(portfolio.related_experience("Statistical ML").is_empty());
    }

    #[test]
    fn embedded_demo_parses() {
        let portfolio = load_embedded().expect("embedded demo should parse");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.categories().is_empty());
    }

    #[test]
    fn load_falls_back_with_warning() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");

        let (portfolio, warning) = load(Some(file.path()));
        assert!(!portfolio.projects.is_empty());
        assert_eq!(
            warning.as_deref(),
            Some("notification-portfolio-load-error")
        );
    }

    #[test]
    fn load_reads_user_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"projects":[{{"title":"T","date":"2020-01","category":"C"}}]}}"#
        )
        .expect("write");

        let (portfolio, warning) = load(Some(file.path()));
        assert!(warning.is_none());
        assert_eq!(portfolio.categories(), vec!["C".to_string()]);
    }
}
