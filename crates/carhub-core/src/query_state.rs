//! Navigation state kept in the location query string.
//!
//! Both helpers are pure: they read a [`Location`] and return the new
//! `path?query` string for the caller to navigate to.

use url::{form_urlencoded, Url};

/// The current navigation location: path plus query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pathname: String,
    /// Query string without the leading `?`.
    search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: &str) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.strip_prefix('?').unwrap_or(search).to_string(),
        }
    }

    /// Parses an absolute href (`https://host/path?q`) or a relative `path?query#frag`.
    /// The fragment is dropped; an empty path becomes `/`.
    pub fn parse(input: &str) -> Self {
        if let Ok(url) = Url::parse(input) {
            return Self::new(url.path(), url.query().unwrap_or(""));
        }
        let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self::new(path, query)
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`.
    pub fn search(&self) -> &str {
        &self.search
    }

    fn params(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.search.as_bytes())
            .into_owned()
            .collect()
    }

    fn with_params(&self, params: &[(String, String)]) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        format!("{}?{}", self.pathname, query)
    }
}

/// Sets `key` to `value` in the location's query and returns `path?query`.
///
/// The first existing `key` keeps its position and takes the new value; any
/// later duplicates are dropped. A missing key is appended.
pub fn update_search_params(location: &Location, key: &str, value: &str) -> String {
    let mut params = location.params();
    let mut found = false;
    params.retain_mut(|(name, current)| {
        if name != key {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *current = value.to_string();
        true
    });
    if !found {
        params.push((key.to_string(), value.to_string()));
    }
    location.with_params(&params)
}

/// Removes every parameter named `key` (lower-cased) and returns `path?query`.
pub fn delete_search_params(location: &Location, key: &str) -> String {
    let key = key.to_lowercase();
    let mut params = location.params();
    params.retain(|(name, _)| *name != key);
    location.with_params(&params)
}
