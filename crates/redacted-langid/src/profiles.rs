//! Static per-language reference profiles.
//!
//! Each profile is a list of the language's most frequent character
//! trigrams, most frequent first. Trigrams are taken over lowercased
//! words padded with a single space on each side, so entries beginning
//! or ending with a space mark word boundaries. Rank order matters:
//! the classifier scores by rank displacement, not set membership.

use redacted_core::Language;

pub const ENGLISH: &[&str] = &[
    " th", "the", "he ", " an", "and", "nd ", " of", "of ", " to", "to ", " in", "in ", "ing",
    "ng ", "ed ", " it", "it ", " is", "is ", "on ", "er ", "at ", "es ", " re", "en ", "ion",
    "tio", "ati", " be", " wa", "was", " he", "hat", " no", "not", "ere", "her", " wi", "ith",
    "wit", "his", " as", "as ", "ter", " al", "all", "oul", "uld", " wo", "ver",
];

pub const FRENCH: &[&str] = &[
    " de", "de ", " le", "le ", "es ", "ent", " la", "la ", " et", "et ", "les", "nt ", " pa",
    "par", "re ", " qu", "que", "ue ", "ion", " co", "on ", " un", "un ", "ne ", " da", "dan",
    "ans", "ns ", " so", "son", "ont", " av", "ave", "vec", "ec ", " es", "est", " pr", "our",
    "eur", "ait", " ch", "cha", "ens", "gen", "ill", "lle", " vi", "vie", "ais",
];

pub const GERMAN: &[&str] = &[
    " de", "der", "er ", "die", "ie ", " di", "und", " un", "nd ", "en ", "ein", " ei", "ich",
    "ch ", "sch", " sc", "che", "cht", "ht ", " da", "das", "as ", " mi", "mit", "it ", "ung",
    " ge", "gen", " zu", "zu ", " is", "ist", "st ", "ten", "nen", " au", "auf", "ber", " be",
    "ver", " ve", "eit", " ni", "nic", " in", "in ", "te ", " st", "sta", "rn ",
];

pub const SPANISH: &[&str] = &[
    " de", "de ", " la", "la ", "os ", "el ", " el", " en", "en ", "as ", "que", " qu", "ue ",
    " co", "con", "on ", " es", "es ", "ión", "ció", "aci", " un", "una", "na ", " se", "se ",
    "ent", "nte", " po", "por", "or ", " pa", "par", "ara", "ra ", "ar ", "los", " lo", " y ",
    "ado", "sta", " su", "del", "ida", "dad", " no", "no ", " pe", "per", "nas",
];

pub const ITALIAN: &[&str] = &[
    " di", "di ", " ch", "che", "he ", " e ", "re ", " la", "la ", "to ", " il", "il ", "no ",
    " co", "con", "on ", "one", "ion", "zio", " pe", "per", "er ", " un", "una", "ta ", "ent",
    "nte", "te ", " so", "son", "ono", " al", "all", "lla", "lle", "ell", "del", "nel", " ne",
    "gli", "are", "ere", "ato", " no", "non", "ita", " ca", "ant", "ia ", "na ",
];

pub const PORTUGUESE: &[&str] = &[
    " de", "de ", " qu", "que", "ue ", " a ", " o ", "os ", "as ", " co", "com", "om ", " do",
    "do ", " da", "da ", "ão ", "ção", "açã", " pa", "par", "ara", "ra ", " se", "se ", "ent",
    "nte", " po", "por", "or ", " um", "uma", "ma ", " es", "est", "sta", " na", "na ", "nas",
    "das", "dos", "ada", "ado", " e ", " em", "em ", "oas", "ida", "ade",
];

/// The reference profile for a language, or `None` for `Unknown`.
pub fn reference_profile(language: Language) -> Option<&'static [&'static str]> {
    match language {
        Language::En => Some(ENGLISH),
        Language::Fr => Some(FRENCH),
        Language::De => Some(GERMAN),
        Language::Es => Some(SPANISH),
        Language::It => Some(ITALIAN),
        Language::Pt => Some(PORTUGUESE),
        Language::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_supported_language_has_a_profile() {
        for lang in Language::supported() {
            let profile = reference_profile(*lang).unwrap();
            assert!(profile.len() >= 40, "profile for {lang} is too small");
        }
    }

    #[test]
    fn profiles_contain_no_duplicates() {
        for lang in Language::supported() {
            let profile = reference_profile(*lang).unwrap();
            let unique: HashSet<_> = profile.iter().collect();
            assert_eq!(
                unique.len(),
                profile.len(),
                "duplicate trigram in {lang} profile"
            );
        }
    }

    #[test]
    fn profile_entries_are_three_chars() {
        for lang in Language::supported() {
            for tri in reference_profile(*lang).unwrap() {
                assert_eq!(tri.chars().count(), 3, "bad entry {tri:?} in {lang} profile");
            }
        }
    }
}
