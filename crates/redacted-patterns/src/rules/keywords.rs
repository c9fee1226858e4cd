use redacted_core::EntityKind;

use super::{rule_regex, PatternRule};

// Catch-all for identifier-shaped tokens mixing letters and digits
// (order references, account codes, license plates).
rule_regex!(
    RE_ALNUM_CODE,
    r"\b(?:[A-Za-z]+\d|\d+[A-Za-z])[A-Za-z\d\-]*\b"
);

// Sensitive keywords per language. The keyword itself is flagged, not
// its surroundings; overlapping higher-priority matches still win.
rule_regex!(
    RE_KEYWORDS_EN,
    r"(?i)\b(?:password|passcode|passphrase|username|confidential|classified|secret|ssn|iban|pin)\b"
);
rule_regex!(
    RE_KEYWORDS_FR,
    r"(?i)\b(?:mot de passe|confidentiel|secret|identifiant|iban)\b"
);
rule_regex!(
    RE_KEYWORDS_DE,
    r"(?i)\b(?:passwort|kennwort|vertraulich|geheim|benutzername|iban)\b"
);
rule_regex!(
    RE_KEYWORDS_ES,
    r"(?i)\b(?:contraseña|confidencial|secreto|usuario|iban)\b"
);
rule_regex!(
    RE_KEYWORDS_IT,
    r"(?i)\b(?:password|riservato|segreto|utente|iban)\b"
);

pub static ENGLISH: [PatternRule; 2] = [
    PatternRule {
        name: "alnum_code",
        regex: &RE_ALNUM_CODE,
        kind: EntityKind::GenericToken,
    },
    PatternRule {
        name: "en_keywords",
        regex: &RE_KEYWORDS_EN,
        kind: EntityKind::GenericToken,
    },
];

pub static FRENCH: [PatternRule; 2] = [
    PatternRule {
        name: "alnum_code",
        regex: &RE_ALNUM_CODE,
        kind: EntityKind::GenericToken,
    },
    PatternRule {
        name: "fr_keywords",
        regex: &RE_KEYWORDS_FR,
        kind: EntityKind::GenericToken,
    },
];

pub static GERMAN: [PatternRule; 2] = [
    PatternRule {
        name: "alnum_code",
        regex: &RE_ALNUM_CODE,
        kind: EntityKind::GenericToken,
    },
    PatternRule {
        name: "de_keywords",
        regex: &RE_KEYWORDS_DE,
        kind: EntityKind::GenericToken,
    },
];

pub static SPANISH: [PatternRule; 2] = [
    PatternRule {
        name: "alnum_code",
        regex: &RE_ALNUM_CODE,
        kind: EntityKind::GenericToken,
    },
    PatternRule {
        name: "es_keywords",
        regex: &RE_KEYWORDS_ES,
        kind: EntityKind::GenericToken,
    },
];

pub static ITALIAN: [PatternRule; 2] = [
    PatternRule {
        name: "alnum_code",
        regex: &RE_ALNUM_CODE,
        kind: EntityKind::GenericToken,
    },
    PatternRule {
        name: "it_keywords",
        regex: &RE_KEYWORDS_IT,
        kind: EntityKind::GenericToken,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find_all(re: &std::sync::LazyLock<Option<regex::Regex>>, text: &str) -> Vec<String> {
        re.as_ref()
            .unwrap()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn alnum_codes_need_both_letters_and_digits() {
        assert_eq!(find_all(&RE_ALNUM_CODE, "ref AB12CD done"), vec!["AB12CD"]);
        assert_eq!(find_all(&RE_ALNUM_CODE, "gate 7B opens"), vec!["7B"]);
        assert!(find_all(&RE_ALNUM_CODE, "only words here").is_empty());
        assert!(find_all(&RE_ALNUM_CODE, "only 12345 here").is_empty());
    }

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(
            find_all(&RE_KEYWORDS_EN, "my Password is not a secret"),
            vec!["Password", "secret"]
        );
        assert_eq!(
            find_all(&RE_KEYWORDS_FR, "le mot de passe est confidentiel"),
            vec!["mot de passe", "confidentiel"]
        );
    }
}
