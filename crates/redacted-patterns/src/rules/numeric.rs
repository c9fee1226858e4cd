use redacted_core::EntityKind;

use super::{rule_regex, PatternRule};

// Digit runs with the separators typical of written numbers. The word
// boundaries keep digits embedded in alphanumeric codes (AB12CD) out;
// those belong to the generic-token rules.
rule_regex!(RE_NUMBER, r"\b\d+(?:[.,\-]\d+)*\b");

/// Numeric patterns shared by every rule set.
pub static ALL: [PatternRule; 1] = [PatternRule {
    name: "number",
    regex: &RE_NUMBER,
    kind: EntityKind::Number,
}];

#[cfg(test)]
mod tests {
    use super::*;

    fn find_all(text: &str) -> Vec<&str> {
        RE_NUMBER
            .as_ref()
            .unwrap()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect()
    }

    #[test]
    fn matches_plain_and_separated_digit_runs() {
        assert_eq!(find_all("call 5551234"), vec!["5551234"]);
        assert_eq!(find_all("total 1,234.56 due"), vec!["1,234.56"]);
        assert_eq!(find_all("ref 555-1234"), vec!["555-1234"]);
    }

    #[test]
    fn skips_digits_inside_alphanumeric_codes() {
        assert!(find_all("code AB12CD").is_empty());
    }
}
