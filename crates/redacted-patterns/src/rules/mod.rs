pub mod dates;
pub mod entities;
pub mod keywords;
pub mod numeric;

use redacted_core::{EntityKind, Span};
use regex::Regex;
use std::sync::LazyLock;

/// A compiled matcher contributing candidate spans of one entity kind.
pub struct PatternRule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub kind: EntityKind,
}

macro_rules! rule_regex {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}
pub(crate) use rule_regex;

/// Run one rule over the text, appending candidate spans.
///
/// A rule whose regex failed to compile produces no matches; that
/// condition is reported separately via `failed_patterns()`.
pub fn collect_matches(text: &str, rule: &PatternRule, out: &mut Vec<Span>) {
    let Some(re) = rule.regex.as_ref() else { return };
    for m in re.find_iter(text) {
        if m.start() < m.end() {
            out.push(Span::new(m.start(), m.end(), rule.kind));
        }
    }
}
