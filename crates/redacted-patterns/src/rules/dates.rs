use redacted_core::EntityKind;

use super::{rule_regex, PatternRule};

// ── Script-independent numeric forms ──────────────────────────────────────

rule_regex!(RE_NUMERIC_DATE, r"\b\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}\b");
rule_regex!(RE_ISO_DATE, r"\b\d{4}-\d{2}-\d{2}\b");

// ── Month-name forms per language ─────────────────────────────────────────

rule_regex!(
    RE_EN_MONTH_DAY,
    r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?\b"
);

rule_regex!(
    RE_EN_DAY_MONTH,
    r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?(?:,?\s+\d{4})?\b"
);

rule_regex!(
    RE_FR_DATE,
    r"(?i)\b\d{1,2}(?:er)?\s+(?:janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)(?:\s+\d{4})?\b"
);

rule_regex!(
    RE_DE_DATE,
    r"(?i)\b\d{1,2}\.?\s+(?:januar|februar|märz|april|mai|juni|juli|august|september|oktober|november|dezember)(?:\s+\d{4})?\b"
);

rule_regex!(
    RE_ES_DATE,
    r"(?i)\b\d{1,2}\s+de\s+(?:enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)(?:\s+de\s+\d{4})?\b"
);

rule_regex!(
    RE_IT_DATE,
    r"(?i)\b\d{1,2}\s+(?:gennaio|febbraio|marzo|aprile|maggio|giugno|luglio|agosto|settembre|ottobre|novembre|dicembre)(?:\s+\d{4})?\b"
);

/// Date patterns usable for any language or script.
pub static AGNOSTIC: [PatternRule; 2] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
];

pub static ENGLISH: [PatternRule; 4] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "en_month_day",
        regex: &RE_EN_MONTH_DAY,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "en_day_month",
        regex: &RE_EN_DAY_MONTH,
        kind: EntityKind::Date,
    },
];

pub static FRENCH: [PatternRule; 3] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "fr_date",
        regex: &RE_FR_DATE,
        kind: EntityKind::Date,
    },
];

pub static GERMAN: [PatternRule; 3] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "de_date",
        regex: &RE_DE_DATE,
        kind: EntityKind::Date,
    },
];

pub static SPANISH: [PatternRule; 3] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "es_date",
        regex: &RE_ES_DATE,
        kind: EntityKind::Date,
    },
];

pub static ITALIAN: [PatternRule; 3] = [
    PatternRule {
        name: "numeric_date",
        regex: &RE_NUMERIC_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "iso_date",
        regex: &RE_ISO_DATE,
        kind: EntityKind::Date,
    },
    PatternRule {
        name: "it_date",
        regex: &RE_IT_DATE,
        kind: EntityKind::Date,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(re: &std::sync::LazyLock<Option<regex::Regex>>, text: &str) -> Vec<String> {
        re.as_ref()
            .unwrap()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn numeric_date_orderings_and_separators() {
        assert_eq!(matches(&RE_NUMERIC_DATE, "due 04/12/2023"), vec!["04/12/2023"]);
        assert_eq!(matches(&RE_NUMERIC_DATE, "am 24.12.23"), vec!["24.12.23"]);
        assert_eq!(matches(&RE_NUMERIC_DATE, "on 1-2-2022"), vec!["1-2-2022"]);
    }

    #[test]
    fn iso_date_matches() {
        assert_eq!(matches(&RE_ISO_DATE, "since 2023-04-12"), vec!["2023-04-12"]);
    }

    #[test]
    fn english_month_name_forms() {
        assert_eq!(
            matches(&RE_EN_MONTH_DAY, "met on April 12, 2023 there"),
            vec!["April 12, 2023"]
        );
        assert_eq!(
            matches(&RE_EN_DAY_MONTH, "met on 12 April 2023 there"),
            vec!["12 April 2023"]
        );
    }

    #[test]
    fn localized_month_name_forms() {
        assert_eq!(matches(&RE_FR_DATE, "le 14 juillet 1789"), vec!["14 juillet 1789"]);
        assert_eq!(matches(&RE_DE_DATE, "am 3. Oktober 1990"), vec!["3. Oktober 1990"]);
        assert_eq!(
            matches(&RE_ES_DATE, "el 12 de octubre de 1492"),
            vec!["12 de octubre de 1492"]
        );
        assert_eq!(matches(&RE_IT_DATE, "il 2 giugno 1946"), vec!["2 giugno 1946"]);
    }
}
