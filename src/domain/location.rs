// SPDX-License-Identifier: MPL-2.0
//! In-app location and history.
//!
//! A [`Location`] is a path plus an ordered query string. [`History`] keeps a
//! browser-style stack of locations with back/forward navigation and in-place
//! replacement, which is how the portfolio page keeps its `category`
//! parameter in sync without piling up entries.

use std::fmt;

/// Converts a label to its URL slug.
///
/// Lowercases, drops `&`, collapses whitespace, `-` and `_` runs into a single
/// `-`, and trims leading and trailing separators.
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .replace('&', "")
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Finds the position of the label whose slug equals `slug`.
#[must_use]
pub fn find_by_slug<S: AsRef<str>>(labels: &[S], slug: &str) -> Option<usize> {
    let wanted = slugify(slug);
    if wanted.is_empty() {
        return None;
    }
    labels
        .iter()
        .position(|label| slugify(label.as_ref()) == wanted)
}

/// Path and query parameters of one in-app page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parses `"/path?key=value&other=1"`. Parameters without `=` get an
    /// empty value; empty pairs are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let query = query
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((key, value)) => (key.to_string(), value.to_string()),
                        None => (pair.to_string(), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            query,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for `key`, if present.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a copy with `key` set to `value`, keeping parameter order.
    #[must_use]
    pub fn with_query_param(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        match next.query.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => next.query.push((key.to_string(), value.to_string())),
        }
        next
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Stack of visited locations with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Adds a new entry after the cursor, discarding any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrites the current entry without adding one.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.cursor] = location;
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Moves one entry back and returns the new current location.
    pub fn back(&mut self) -> Option<&Location> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Moves one entry forward and returns the new current location.
    pub fn forward(&mut self) -> Option<&Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; history starts with one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
