use regex::Regex;

use crate::error::{Result, SplitError};

/// One chapter heading occurrence inside the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'t> {
    pub heading: &'t str,
    pub start: usize,
}

/// Strategy that locates chapter headings in a document.
///
/// Implementations must return boundaries in left-to-right order with
/// strictly increasing, non-overlapping start offsets.
pub trait BoundaryRule {
    fn find_boundaries<'t>(&self, text: &'t str) -> Vec<Boundary<'t>>;

    /// Human readable form used in messages and reports.
    fn describe(&self) -> &str;
}

/// Boundary rule backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
}

impl RegexRule {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| SplitError::InvalidBoundaryRule {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl BoundaryRule for RegexRule {
    fn find_boundaries<'t>(&self, text: &'t str) -> Vec<Boundary<'t>> {
        self.regex
            .find_iter(text)
            .map(|m| Boundary {
                heading: m.as_str(),
                start: m.start(),
            })
            .collect()
    }

    fn describe(&self) -> &str {
        self.regex.as_str()
    }
}
