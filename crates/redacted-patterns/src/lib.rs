//! # redacted-patterns
//!
//! Per-language rule sets for sensitive-span matching.
//!
//! All tables are `static` and compiled lazily on first use; after
//! that the library is immutable and shared read-only across threads.
//! Regexes that fail to compile surface through [`failed_patterns`] so
//! a deployment with a broken table fails at startup, not per request.

pub mod rules;

use redacted_core::Language;

use rules::entities::EntityRule;
use rules::PatternRule;

/// The bundle of matchers used to find spans for one language.
///
/// `entities` is `None` for the language-agnostic fallback set, where
/// named-entity and generic-token matching degrade to no-ops.
pub struct RuleSet {
    pub language: Language,
    pub numbers: &'static [PatternRule],
    pub dates: &'static [PatternRule],
    pub entities: Option<&'static EntityRule>,
    pub tokens: &'static [PatternRule],
}

static EN_RULESET: RuleSet = RuleSet {
    language: Language::En,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::ENGLISH,
    entities: Some(&rules::entities::ENGLISH),
    tokens: &rules::keywords::ENGLISH,
};

static FR_RULESET: RuleSet = RuleSet {
    language: Language::Fr,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::FRENCH,
    entities: Some(&rules::entities::FRENCH),
    tokens: &rules::keywords::FRENCH,
};

static DE_RULESET: RuleSet = RuleSet {
    language: Language::De,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::GERMAN,
    entities: Some(&rules::entities::GERMAN),
    tokens: &rules::keywords::GERMAN,
};

static ES_RULESET: RuleSet = RuleSet {
    language: Language::Es,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::SPANISH,
    entities: Some(&rules::entities::SPANISH),
    tokens: &rules::keywords::SPANISH,
};

static IT_RULESET: RuleSet = RuleSet {
    language: Language::It,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::ITALIAN,
    entities: Some(&rules::entities::ITALIAN),
    tokens: &rules::keywords::ITALIAN,
};

/// Language-agnostic fallback: numeric and date patterns are largely
/// script-independent; entity and token matching are absent.
static DEFAULT_RULESET: RuleSet = RuleSet {
    language: Language::Unknown,
    numbers: &rules::numeric::ALL,
    dates: &rules::dates::AGNOSTIC,
    entities: None,
    tokens: &[],
};

/// Look up the rule set for a language.
///
/// Languages without a registered table (including `Unknown`, and
/// detected-but-unregistered languages such as `Pt`) fall back to the
/// language-agnostic default set.
pub fn rules_for(language: Language) -> &'static RuleSet {
    match language {
        Language::En => &EN_RULESET,
        Language::Fr => &FR_RULESET,
        Language::De => &DE_RULESET,
        Language::Es => &ES_RULESET,
        Language::It => &IT_RULESET,
        Language::Pt | Language::Unknown => &DEFAULT_RULESET,
    }
}

/// Every rule set that `rules_for` can return.
pub fn all_rulesets() -> Vec<&'static RuleSet> {
    vec![
        &EN_RULESET,
        &FR_RULESET,
        &DE_RULESET,
        &ES_RULESET,
        &IT_RULESET,
        &DEFAULT_RULESET,
    ]
}

/// Names of patterns whose regex failed to compile.
///
/// Empty in a healthy build; checked once at pipeline construction so
/// a corrupted table is fatal at startup rather than silently matching
/// nothing per request.
pub fn failed_patterns() -> Vec<&'static str> {
    let mut failed = Vec::new();
    for set in all_rulesets() {
        for rule in set
            .numbers
            .iter()
            .chain(set.dates.iter())
            .chain(set.tokens.iter())
        {
            if rule.regex.is_none() {
                failed.push(rule.name);
            }
        }
        if let Some(entity) = set.entities {
            if entity.honorifics.is_none() {
                failed.push(entity.name);
            }
        }
    }
    if rules::entities::RE_CAP_RUN.is_none() {
        failed.push("cap_run");
    }
    failed.sort_unstable();
    failed.dedup();
    failed
}
