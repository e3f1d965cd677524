//! Search keyword validation and dispatch formatting.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// A keyword that passed presence and minimum-length validation.
///
/// Safe to forward to the search route. The keyword is kept exactly as
/// the user typed it; the core does not trim or encode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
}

impl SearchQuery {
    /// The validated keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Format the navigation command that executes this search.
    pub fn navigate_command(&self) -> NavigateCommand {
        NavigateCommand {
            path: format!("/search?keyword={}", self.keyword),
        }
    }
}

/// A "navigate to this path" instruction for the external router.
///
/// The core only produces these; issuing them is the shell's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateCommand {
    path: String,
}

impl NavigateCommand {
    /// The target path, including any query string.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for NavigateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Validate a raw search field value.
///
/// The keyword must be non-empty and at least `min_len` characters
/// long (counted in characters, not bytes). No side effects; safe to
/// call repeatedly. On rejection the caller must not dispatch.
pub fn validate(keyword: &str, min_len: usize) -> Result<SearchQuery> {
    if keyword.is_empty() {
        debug!("search submit rejected: missing keyword");
        return Err(Error::MissingKeyword);
    }
    if keyword.chars().count() < min_len {
        debug!(keyword, min_len, "search submit rejected: keyword too short");
        return Err(Error::KeywordTooShort {
            keyword: keyword.to_string(),
            min: min_len,
        });
    }
    Ok(SearchQuery {
        keyword: keyword.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
