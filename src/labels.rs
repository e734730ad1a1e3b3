use itertools::Itertools;

use crate::model::LabelItem;

/// Split a `;` separated label string into label items.
///
/// Segments are trimmed and empty ones dropped, so `"a; b ;; c"` gives three
/// labels. Blank input gives none.
pub fn parse_labels(text: &str) -> Vec<LabelItem> {
    if text.trim().is_empty() {
        return vec![];
    }
    text.split(';')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(LabelItem::new)
        .collect()
}

/// Render labels back into the raw form kept in `labelsString`.
pub fn format_labels(labels: &[LabelItem]) -> String {
    labels.iter().map(|l| l.text.as_str()).join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[LabelItem]) -> Vec<&str> {
        labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn blank_input_gives_no_labels() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels("   ").is_empty());
        assert!(parse_labels(" ; ;; ").is_empty());
    }

    #[test]
    fn drops_empty_segments_and_trims() {
        assert_eq!(texts(&parse_labels("a; b ;; c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_order_and_inner_whitespace() {
        assert_eq!(
            texts(&parse_labels("  second label;first\t;third ")),
            vec!["second label", "first", "third"]
        );
    }

    #[test]
    fn no_item_is_empty_or_padded() {
        let inputs = ["x", ";x;", " a ;\tb\n; ", ";;;", "one;two;  ;three  "];
        for input in inputs.iter() {
            for label in parse_labels(input) {
                assert!(!label.text.is_empty(), "empty label from {:?}", input);
                assert_eq!(label.text.trim(), label.text, "padded label from {:?}", input);
            }
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(parse_labels("a;b"), parse_labels("a;b"));
    }

    #[test]
    fn format_then_parse_keeps_labels() {
        let labels = parse_labels("a; b ;; c");
        assert_eq!(format_labels(&labels), "a; b; c");
        assert_eq!(parse_labels(&format_labels(&labels)), labels);
        assert_eq!(format_labels(&[]), "");
    }
}
