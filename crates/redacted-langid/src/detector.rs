use std::collections::HashMap;

use redacted_core::constants::MIN_SAMPLE_CHARS;
use redacted_core::traits::ILanguageDetector;
use redacted_core::Language;

use crate::profiles;

/// Maximum number of ranked trigrams kept in a text signature.
const SIGNATURE_MAX: usize = 100;

/// Trigram-profile language detector.
///
/// Stateless; the reference tables live in [`profiles`]. One value can
/// be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Identify the dominant language of `text`.
    ///
    /// Fixed short-input policy: samples with fewer than
    /// `MIN_SAMPLE_CHARS` alphabetic characters (including empty and
    /// whitespace-only input) return `Language::Unknown` without
    /// running the classifier. A sample whose signature shares no
    /// trigram with any reference profile also returns `Unknown`.
    pub fn detect(&self, text: &str) -> Language {
        let alpha_count = text.chars().filter(|c| c.is_alphabetic()).count();
        if alpha_count < MIN_SAMPLE_CHARS {
            return Language::Unknown;
        }

        let signature = build_signature(text);
        if signature.is_empty() {
            return Language::Unknown;
        }

        let mut best = Language::Unknown;
        let mut best_distance = usize::MAX;

        for lang in Language::supported() {
            // supported() only yields languages with a profile
            let Some(profile) = profiles::reference_profile(*lang) else {
                continue;
            };
            let distance = out_of_place_distance(&signature, profile);
            // A distance at the theoretical maximum means zero profile
            // overlap; such a language is never a candidate, so a text
            // matching no profile at all stays Unknown.
            if distance < signature.len() * profile.len() && distance < best_distance {
                best_distance = distance;
                best = *lang;
            }
        }

        best
    }
}

impl ILanguageDetector for LanguageDetector {
    fn detect(&self, text: &str) -> Language {
        LanguageDetector::detect(self, text)
    }
}

/// Build the ranked trigram signature of `text`.
///
/// Words are lowercased alphabetic runs padded with one space on each
/// side; trigrams are counted per word, then ranked by descending
/// count with a lexicographic tie-break for determinism.
fn build_signature(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    let lowered = text.to_lowercase();
    for word in lowered.split(|c: char| !c.is_alphabetic()) {
        if word.is_empty() {
            continue;
        }
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        for window in padded.windows(3) {
            let tri: String = window.iter().collect();
            *counts.entry(tri).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(SIGNATURE_MAX);
    ranked.into_iter().map(|(tri, _)| tri).collect()
}

/// Cavnar–Trenkle out-of-place distance between a text signature and a
/// reference profile. Trigrams absent from the profile cost the full
/// profile length.
fn out_of_place_distance(signature: &[String], profile: &[&str]) -> usize {
    signature
        .iter()
        .enumerate()
        .map(|(text_rank, tri)| {
            match profile.iter().position(|p| p == tri) {
                Some(ref_rank) => text_rank.abs_diff(ref_rank),
                None => profile.len(),
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_is_unknown() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(""), Language::Unknown);
        assert_eq!(detector.detect("   \t\n  "), Language::Unknown);
    }

    #[test]
    fn short_input_is_unknown() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("hello"), Language::Unknown);
        assert_eq!(detector.detect("Call me on 04/12/2023"), Language::Unknown);
    }

    #[test]
    fn numeric_input_is_unknown() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("123 456 789 000 111 222 333 444"), Language::Unknown);
    }

    #[test]
    fn signature_ranks_by_frequency_then_lexicographic() {
        let sig = build_signature("aaa aaa bbb");
        // "aaa"-derived trigrams occur twice, "bbb"-derived once.
        let aaa_rank = sig.iter().position(|t| t == "aaa").unwrap();
        let bbb_rank = sig.iter().position(|t| t == "bbb").unwrap();
        assert!(aaa_rank < bbb_rank);
    }

    #[test]
    fn distance_is_zero_for_identical_ranking() {
        let profile = &["abc", "bcd", "cde"];
        let signature = vec!["abc".to_string(), "bcd".to_string(), "cde".to_string()];
        assert_eq!(out_of_place_distance(&signature, profile), 0);
    }

    #[test]
    fn absent_trigrams_cost_full_profile_length() {
        let profile = &["abc"];
        let signature = vec!["zzz".to_string(), "yyy".to_string()];
        assert_eq!(out_of_place_distance(&signature, profile), 2);
    }
}
