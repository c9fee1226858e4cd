use redacted_core::{EntityKind, Span};

use super::rule_regex;

// Runs of capitalized words (two letters or more each). Whitespace
// only between words, so runs never cross sentence punctuation.
rule_regex!(
    RE_CAP_RUN,
    r"\p{Lu}[\p{L}'’\-]+(?:\s+\p{Lu}[\p{L}'’\-]+)*"
);

rule_regex!(
    RE_HONORIFIC_EN,
    r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+\p{Lu}[\p{L}\-]+(?:\s+\p{Lu}[\p{L}\-]+)*"
);
rule_regex!(
    RE_HONORIFIC_FR,
    r"\b(?:M|Mme|Mlle|Dr)\.?\s+\p{Lu}[\p{L}\-]+(?:\s+\p{Lu}[\p{L}\-]+)*"
);
rule_regex!(
    RE_HONORIFIC_DE,
    r"\b(?:Herr|Frau|Dr|Prof)\.?\s+\p{Lu}[\p{L}\-]+(?:\s+\p{Lu}[\p{L}\-]+)*"
);
rule_regex!(
    RE_HONORIFIC_ES,
    r"\b(?:Sr|Sra|Srta|Dr|Dra|Don|Doña)\.?\s+\p{Lu}[\p{L}\-]+(?:\s+\p{Lu}[\p{L}\-]+)*"
);
rule_regex!(
    RE_HONORIFIC_IT,
    r"\b(?:Sig|Sig\.ra|Dott|Dr)\.?\s+\p{Lu}[\p{L}\-]+(?:\s+\p{Lu}[\p{L}\-]+)*"
);

/// Named-entity matching policy for one language.
///
/// The capitalized-run heuristic needs per-orthography tuning: leading
/// function words (capitalized only by sentence position) are trimmed
/// away via `stopwords`, and `min_run_words` is 2 for German, whose
/// noun capitalization would otherwise flag every noun in the text.
pub struct EntityRule {
    pub name: &'static str,
    pub honorifics: &'static std::sync::LazyLock<Option<regex::Regex>>,
    pub stopwords: &'static [&'static str],
    pub min_run_words: usize,
}

pub static ENGLISH: EntityRule = EntityRule {
    name: "en_entities",
    honorifics: &RE_HONORIFIC_EN,
    stopwords: &[
        "the", "a", "an", "this", "that", "these", "those", "my", "his", "her", "our", "your",
        "their", "its", "some", "any", "no", "every", "each", "all", "both", "what", "which",
        "who", "when", "where", "why", "how", "if", "in", "on", "at", "of", "to", "and", "or",
        "but", "so", "as", "is", "are", "was", "were", "it", "he", "she", "we", "they", "you",
        "not", "with", "for", "from", "by",
    ],
    min_run_words: 1,
};

pub static FRENCH: EntityRule = EntityRule {
    name: "fr_entities",
    honorifics: &RE_HONORIFIC_FR,
    stopwords: &[
        "le", "la", "les", "un", "une", "des", "du", "de", "ce", "cette", "ces", "mon", "ma",
        "mes", "son", "sa", "ses", "notre", "nos", "votre", "vos", "leur", "leurs", "il", "elle",
        "ils", "elles", "nous", "vous", "je", "tu", "on", "et", "ou", "mais", "si", "dans",
        "sur", "avec", "pour", "par", "au", "aux", "quand", "que", "qui", "ne", "pas",
    ],
    min_run_words: 1,
};

pub static GERMAN: EntityRule = EntityRule {
    name: "de_entities",
    honorifics: &RE_HONORIFIC_DE,
    stopwords: &[
        "der", "die", "das", "ein", "eine", "einen", "einem", "einer", "und", "oder", "aber",
        "wenn", "als", "mit", "von", "zu", "im", "in", "am", "an", "auf", "für", "ist", "sind",
        "war", "waren", "ich", "du", "er", "sie", "es", "wir", "ihr", "mein", "dein", "sein",
        "ihre", "unser", "nicht", "kein", "keine",
    ],
    min_run_words: 2,
};

pub static SPANISH: EntityRule = EntityRule {
    name: "es_entities",
    honorifics: &RE_HONORIFIC_ES,
    stopwords: &[
        "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "y", "o",
        "pero", "si", "en", "con", "por", "para", "que", "quien", "cuando", "donde", "como",
        "mi", "mis", "tu", "tus", "su", "sus", "nuestro", "nuestra", "yo", "no", "es", "son",
        "era", "eran", "este", "esta", "estos", "estas", "ese", "esa",
    ],
    min_run_words: 1,
};

pub static ITALIAN: EntityRule = EntityRule {
    name: "it_entities",
    honorifics: &RE_HONORIFIC_IT,
    stopwords: &[
        "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "di", "del", "della", "dei",
        "delle", "e", "o", "ma", "se", "in", "con", "su", "per", "tra", "fra", "che", "chi",
        "quando", "dove", "come", "mio", "mia", "tuo", "tua", "suo", "sua", "nostro", "loro",
        "io", "non", "sono", "era", "erano", "questo", "questa", "quello", "quella",
    ],
    min_run_words: 1,
};

/// Find named-entity candidate spans for one language.
///
/// Honorific-anchored names are always candidates. Capitalized runs go
/// through the policy filter: leading stopwords trimmed, runs below
/// the language's minimum length dropped, and a single-word run at a
/// sentence start dropped (indistinguishable from sentence case).
pub fn entity_spans(text: &str, rule: &EntityRule) -> Vec<Span> {
    let mut out = Vec::new();

    if let Some(re) = rule.honorifics.as_ref() {
        for m in re.find_iter(text) {
            out.push(Span::new(m.start(), m.end(), EntityKind::NamedEntity));
        }
    }

    let Some(re) = RE_CAP_RUN.as_ref() else {
        return out;
    };
    for m in re.find_iter(text) {
        if let Some(span) = filter_run(text, m.start(), m.as_str(), rule) {
            out.push(span);
        }
    }
    out
}

fn filter_run(text: &str, base: usize, run: &str, rule: &EntityRule) -> Option<Span> {
    // Word offsets within the run.
    let mut words: Vec<(usize, &str)> = Vec::new();
    let mut cursor = 0;
    for word in run.split_whitespace() {
        let rel = run[cursor..].find(word)? + cursor;
        words.push((rel, word));
        cursor = rel + word.len();
    }

    // Trim leading function words capitalized only by position.
    let mut first = 0;
    while first < words.len() && is_stopword(words[first].1, rule.stopwords) {
        first += 1;
    }
    let kept = &words[first..];
    let (first_rel, _) = *kept.first()?;
    if kept.len() < rule.min_run_words {
        return None;
    }
    let start = base + first_rel;
    if kept.len() == 1 && at_sentence_start(text, start) {
        return None;
    }
    let (last_rel, last_word) = kept[kept.len() - 1];
    Some(Span::new(
        start,
        base + last_rel + last_word.len(),
        EntityKind::NamedEntity,
    ))
}

fn is_stopword(word: &str, stopwords: &[&str]) -> bool {
    let lowered = word.to_lowercase();
    stopwords.iter().any(|s| *s == lowered)
}

fn at_sentence_start(text: &str, start: usize) -> bool {
    match text[..start].trim_end().chars().last() {
        None => true,
        Some(c) => matches!(c, '.' | '!' | '?'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_sentence_capitalized_word_is_a_candidate() {
        let text = "yesterday i spoke with Alice about the plan";
        let spans = entity_spans(text, &ENGLISH);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Alice");
    }

    #[test]
    fn sentence_initial_single_word_is_dropped() {
        let spans = entity_spans("Yesterday we talked about the plan", &ENGLISH);
        assert!(spans.is_empty());
    }

    #[test]
    fn leading_article_is_trimmed_from_a_run() {
        let text = "we saw The Rolling Stones live";
        let spans = entity_spans(text, &ENGLISH);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Rolling Stones");
    }

    #[test]
    fn multi_word_run_survives_at_sentence_start() {
        let text = "Maria Rossi arrived before anyone else did";
        let spans = entity_spans(text, &ENGLISH);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Maria Rossi");
    }

    #[test]
    fn honorific_names_are_candidates() {
        let text = "please ask Dr. Garcia about it";
        let spans = entity_spans(text, &ENGLISH);
        assert!(spans
            .iter()
            .any(|s| &text[s.start..s.end] == "Dr. Garcia"));
    }

    #[test]
    fn german_requires_multi_word_runs() {
        // Every noun is capitalized in German; single nouns are not entities.
        let spans = entity_spans("wir haben die Katze im Garten gesehen", &GERMAN);
        assert!(spans.is_empty());

        let text = "wir haben Angela Merkel im Garten gesehen";
        let spans = entity_spans(text, &GERMAN);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Angela Merkel");
    }
}
