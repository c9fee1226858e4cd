use redacted_core::Span;

/// Substitute the fixed placeholder for each span of `text`.
///
/// `spans` must be sorted ascending, non-overlapping, and in range —
/// exactly what [`crate::extract`] produces. Walks the text once:
/// untouched prefix, placeholder, untouched tail. Output is fully
/// determined by `(text, spans)`; no positional metadata survives.
pub fn redact_spans(text: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in spans {
        debug_assert!(cursor <= span.start && span.end <= text.len());
        out.push_str(&text[cursor..span.start]);
        out.push_str(span.kind.placeholder());
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use redacted_core::constants::{DATE_PLACEHOLDER, NUMBER_PLACEHOLDER};
    use redacted_core::EntityKind;

    #[test]
    fn empty_span_list_returns_input_unchanged() {
        assert_eq!(redact_spans("hello world", &[]), "hello world");
        assert_eq!(redact_spans("", &[]), "");
    }

    #[test]
    fn surrounding_text_is_conserved() {
        let text = "Call me on 04/12/2023 please";
        let spans = [Span::new(11, 21, EntityKind::Date)];
        let out = redact_spans(text, &spans);
        assert_eq!(out, format!("Call me on {DATE_PLACEHOLDER} please"));
    }

    #[test]
    fn placeholders_are_not_length_matched() {
        let text = "x 123456789012345 y";
        let spans = [Span::new(2, 17, EntityKind::Number)];
        let out = redact_spans(text, &spans);
        assert_eq!(out, format!("x {NUMBER_PLACEHOLDER} y"));
        assert_ne!(out.len(), text.len());
    }

    #[test]
    fn substitution_is_idempotent_for_fixed_spans() {
        let text = "order 482 shipped 01/02/2022";
        let spans = [
            Span::new(6, 9, EntityKind::Number),
            Span::new(18, 28, EntityKind::Date),
        ];
        assert_eq!(redact_spans(text, &spans), redact_spans(text, &spans));
    }

    #[test]
    fn span_covering_whole_text_leaves_only_the_placeholder() {
        let out = redact_spans("20230412", &[Span::new(0, 8, EntityKind::Number)]);
        assert_eq!(out, NUMBER_PLACEHOLDER);
    }
}
