//! Message mini-parsers.
//!
//! Several linters embed a machine-usable fragment in their human-readable message. Each parser
//! here is a pure function returning `None` when the fragment is missing, so callers can report
//! [`Miss::MalformedMessage`](crate::Miss::MalformedMessage) instead of failing.

use regex::Regex;
use std::sync::LazyLock;

static SHOULD_BE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)`?([A-Za-z_][A-Za-z0-9_]*)`? should be `?([A-Za-z_][A-Za-z0-9_]*)`?$")
        .expect("valid naming regex")
});

/// The word after the last space, with surrounding backticks removed.
///
/// `"ineffectual assignment to `err`"` yields `"err"`;
/// `"`r` can be `io.Reader`"` yields `"io.Reader"`.
pub fn last_word(message: &str) -> Option<&str> {
    let word = match message.rfind(' ') {
        Some(space) => &message[space + 1..],
        None => message,
    };
    let word = word.trim_matches('`');
    (!word.is_empty()).then_some(word)
}

/// The text after the first `": "`.
pub fn after_first_colon(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once(':')?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest).trim_end();
    (!rest.is_empty()).then_some(rest)
}

/// Case labels listed after the first colon, e.g.
/// `"missing cases in switch of type Color: Blue, Green"` yields `["Blue", "Green"]`.
pub fn case_labels(message: &str) -> Option<Vec<&str>> {
    let labels = after_first_colon(message)?
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>();
    (!labels.is_empty()).then_some(labels)
}

/// A rename suggested by a naming linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSuggestion<'a> {
    /// The current name.
    pub from: &'a str,
    /// The suggested name.
    pub to: &'a str,
}

/// Parse `"... <old> should be <new>"`, as emitted by golint and stylecheck.
pub fn naming_suggestion(message: &str) -> Option<NameSuggestion<'_>> {
    let captures = SHOULD_BE.captures(message.trim_end())?;
    let from = captures.get(1)?.as_str();
    let to = captures.get(2)?.as_str();
    (from != to).then_some(NameSuggestion { from, to })
}
