use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// First run of digits in a chapter heading, or `"0"` when there is none.
pub fn extract_label(heading: &str) -> &str {
    DIGITS.find(heading).map_or("0", |m| m.as_str())
}
