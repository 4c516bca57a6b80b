//! Icon glyphs shown next to each correction

use revisor_domain::OperationKind;

/// Glyph for any kind/type pair without a mapping
pub const DEFAULT_ICON: &str = "📝";

const TOPIC_ICONS: &[(&str, &str)] = &[
    ("remove", "🗑️"),
    ("add", "➕"),
    ("merge", "🔀"),
    ("reclassify", "🏷️"),
];

const DISPOSITIVO_ICONS: &[(&str, &str)] = &[
    ("add", "➕"),
    ("modify", "✏️"),
    ("remove", "🗑️"),
];

const REVIEW_ICONS: &[(&str, &str)] = &[
    ("false_positive", "❌"),
    ("missed", "⚠️"),
    ("improve", "💡"),
];

const FACTS_ICONS: &[(&str, &str)] = &[
    ("add_row", "➕"),
    ("fix_row", "🔧"),
    ("remove_row", "🗑️"),
    ("add_fato", "📌"),
];

/// Icon for a correction `type` under `kind`
pub fn icon(kind: OperationKind, type_name: &str) -> &'static str {
    let table = match kind {
        OperationKind::TopicExtraction => TOPIC_ICONS,
        OperationKind::Dispositivo => DISPOSITIVO_ICONS,
        OperationKind::FactsComparison => FACTS_ICONS,
        OperationKind::SentenceReview
        | OperationKind::ProofAnalysis
        | OperationKind::QuickPrompt => REVIEW_ICONS,
    };
    table
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(icon(OperationKind::TopicExtraction, "merge"), "🔀");
        assert_eq!(icon(OperationKind::FactsComparison, "add_fato"), "📌");
        assert_eq!(icon(OperationKind::QuickPrompt, "missed"), "⚠️");
    }

    #[test]
    fn test_type_is_looked_up_per_kind() {
        assert_eq!(icon(OperationKind::Dispositivo, "modify"), "✏️");
        assert_eq!(icon(OperationKind::TopicExtraction, "modify"), DEFAULT_ICON);
        assert_eq!(icon(OperationKind::FactsComparison, "add"), DEFAULT_ICON);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        for kind in OperationKind::ALL {
            assert_eq!(icon(kind, ""), DEFAULT_ICON);
            assert_eq!(icon(kind, "definitely_not_a_type"), DEFAULT_ICON);
        }
    }
}
