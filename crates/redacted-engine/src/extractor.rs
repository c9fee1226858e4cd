use redacted_core::constants::MIN_SPAN_LEN;
use redacted_core::{Language, Span};
use redacted_patterns::rules::{collect_matches, entities};

/// Extract the sensitive spans of `text` under the rules for `language`.
///
/// The result is sorted ascending by start, pairwise non-overlapping,
/// entirely within `[0, text.len()]`, and touching spans of the same
/// kind are coalesced into one.
pub fn extract(text: &str, language: Language) -> Vec<Span> {
    let rules = redacted_patterns::rules_for(language);

    let mut candidates = Vec::new();
    for rule in rules.dates {
        collect_matches(text, rule, &mut candidates);
    }
    for rule in rules.numbers {
        collect_matches(text, rule, &mut candidates);
    }
    if let Some(entity_rule) = rules.entities {
        candidates.extend(entities::entity_spans(text, entity_rule));
    }
    for rule in rules.tokens {
        collect_matches(text, rule, &mut candidates);
    }

    let mut spans = resolve_overlaps(candidates);
    coalesce_touching(&mut spans);
    spans
}

/// Resolve overlapping candidates by kind priority
/// (`Date > Number > NamedEntity > GenericToken`).
///
/// Candidates are admitted best-first; a loser is trimmed to whatever
/// parts fall outside already-admitted spans. Every admitted segment,
/// trimmed or not, must be at least `MIN_SPAN_LEN` bytes; shorter ones
/// are dropped rather than re-added, which keeps a second pass over
/// redacted output from finding leftovers the first pass skipped. The
/// flip side is deliberate: a lone single-digit match falls under the
/// floor and stays in the clear.
/// Equal-priority conflicts go to the earlier, then longer, span.
fn resolve_overlaps(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by(|a, b| {
        b.kind
            .priority()
            .cmp(&a.kind.priority())
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| b.len().cmp(&a.len()))
    });

    let mut accepted: Vec<Span> = Vec::new();
    for candidate in candidates {
        for segment in subtract(candidate, &accepted) {
            if segment.len() >= MIN_SPAN_LEN {
                accepted.push(segment);
            }
        }
    }

    accepted.sort_by_key(|s| s.start);
    accepted
}

/// The parts of `span` not covered by any accepted span.
///
/// Cut points are offsets of previously admitted regex matches, so
/// they always land on character boundaries.
fn subtract(span: Span, accepted: &[Span]) -> Vec<Span> {
    let mut segments = vec![span];
    for winner in accepted {
        let mut next = Vec::new();
        for seg in segments {
            if !seg.overlaps(winner) {
                next.push(seg);
                continue;
            }
            if seg.start < winner.start {
                next.push(Span::new(seg.start, winner.start, seg.kind));
            }
            if winner.end < seg.end {
                next.push(Span::new(winner.end, seg.end, seg.kind));
            }
        }
        segments = next;
        if segments.is_empty() {
            break;
        }
    }
    segments
}

/// Merge touching spans of the same kind so adjacent matches produce a
/// single placeholder.
fn coalesce_touching(spans: &mut Vec<Span>) {
    spans.dedup_by(|next, prev| {
        if prev.end == next.start && prev.kind == next.kind {
            prev.end = next.end;
            true
        } else {
            false
        }
    });
}
