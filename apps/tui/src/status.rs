//! Well status normalization and classification.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::domain::StatusCategory;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Canonicalizes a free-text label for accent, case and whitespace
/// insensitive comparison. Absent input stays absent; blank input yields
/// an empty string.
pub fn normalize(value: Option<&str>) -> Option<String> {
    value.map(normalize_str)
}

pub fn normalize_str(value: &str) -> String {
    let stripped: String = value
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();
    stripped.trim_matches(is_trimmable).to_lowercase()
}

/// Whitespace as browsers trim it: BOM included, NEL kept.
fn is_trimmable(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Raw status phrases known for each category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTables {
    pub active: Vec<String>,
    pub stopped: Vec<String>,
    pub inactive: Vec<String>,
    pub not_reported: Vec<String>,
}

impl Default for StatusTables {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(ToString::to_string).collect()
        }

        Self {
            active: owned(&[
                "Extracción Efectiva",
                "En Inyección Efectiva",
                "Otras Situación Activo",
                "Mantenimiento de Presión",
            ]),
            stopped: owned(&[
                "En Estudio",
                "Parado Alta Relación Agua/Petróleo",
                "En Espera de Reparación",
                "En Reserva de Gas",
                "Parado Transitoriamente",
                "En Reparación",
                "En Reserva para Recup. Sec./Asist.",
                "Parado Alta Relación Gas/Petróleo",
            ]),
            inactive: owned(&[
                "Abandonado",
                "Abandono Temporario",
                "A Abandonar",
                "Otras Situación Inactivo",
            ]),
            not_reported: owned(&["No Informado"]),
        }
    }
}

/// Outcome of inspecting a raw label before it is folded into a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No label, or a label that is blank after normalization.
    Absent,
    Matched(StatusCategory),
    Unmatched,
}

impl Classification {
    pub const fn category(self) -> StatusCategory {
        match self {
            Self::Absent => StatusCategory::NotReported,
            Self::Matched(category) => category,
            Self::Unmatched => StatusCategory::Unknown,
        }
    }
}

/// Immutable lookup built once from [`StatusTables`]. Membership is tested
/// in priority order: active, stopped, inactive, not reported.
#[derive(Debug, Clone)]
pub struct StatusClassifier {
    sets: [(StatusCategory, HashSet<String>); 4],
}

impl StatusClassifier {
    pub fn new(tables: &StatusTables) -> Self {
        Self {
            sets: [
                (StatusCategory::Active, normalized_set(&tables.active)),
                (StatusCategory::Stopped, normalized_set(&tables.stopped)),
                (StatusCategory::Inactive, normalized_set(&tables.inactive)),
                (StatusCategory::NotReported, normalized_set(&tables.not_reported)),
            ],
        }
    }

    pub fn inspect(&self, raw: Option<&str>) -> Classification {
        let Some(key) = normalize(raw) else {
            return Classification::Absent;
        };
        if key.is_empty() {
            return Classification::Absent;
        }

        self.sets
            .iter()
            .find(|(_, set)| set.contains(&key))
            .map_or(Classification::Unmatched, |(category, _)| {
                Classification::Matched(*category)
            })
    }

    pub fn classify(&self, raw: Option<&str>) -> StatusCategory {
        self.inspect(raw).category()
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(&StatusTables::default())
    }
}

fn normalized_set(values: &[String]) -> HashSet<String> {
    values
        .iter()
        .map(|value| normalize_str(value))
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_absent_absent() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("   ")), Some(String::new()));
    }

    #[test]
    fn normalize_strips_accents_case_and_whitespace() {
        assert_eq!(normalize_str("Á"), "a");
        assert_eq!(normalize_str("ACTIVO"), normalize_str("activo"));
        assert_eq!(normalize_str("  Activo  "), "activo");
        assert_eq!(
            normalize_str("Extracción Efectiva"),
            "extraccion efectiva"
        );
        assert_eq!(normalize_str("Agua/Petróleo"), "agua/petroleo");
        assert_ne!(normalize_str("Á"), normalize_str("e"));
    }

    #[test]
    fn normalize_handles_precomposed_and_decomposed_forms() {
        let precomposed = "Reparaci\u{00F3}n";
        let decomposed = "Reparacio\u{0301}n";
        assert_eq!(normalize_str(precomposed), normalize_str(decomposed));
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "  ",
            "Extracción Efectiva",
            "EN REPARACIÓN",
            "İstanbul",
            "Ñandú ",
            "Straße",
            "ΟΔΟΣ",
            "\tNo Informado\n",
            "Parado Alta Relación Gas/Petróleo",
        ];
        for sample in samples {
            let once = normalize_str(sample);
            assert_eq!(normalize_str(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn trims_byte_order_mark_but_not_next_line() {
        let classifier = StatusClassifier::default();
        assert_eq!(
            normalize_str("\u{FEFF}Extracción Efectiva"),
            "extraccion efectiva"
        );
        assert_eq!(
            classifier.classify(Some("\u{FEFF}Extracción Efectiva")),
            StatusCategory::Active
        );
        assert_eq!(normalize_str("Abandonado\u{0085}"), "abandonado\u{0085}");
        assert_eq!(
            classifier.classify(Some("Abandonado\u{0085}")),
            StatusCategory::Unknown
        );
    }

    #[test]
    fn absent_and_blank_labels_are_not_reported() {
        let classifier = StatusClassifier::default();
        assert_eq!(classifier.classify(None), StatusCategory::NotReported);
        assert_eq!(classifier.classify(Some("")), StatusCategory::NotReported);
        assert_eq!(classifier.classify(Some("  \t")), StatusCategory::NotReported);
        assert_eq!(classifier.inspect(None), Classification::Absent);
        assert_eq!(classifier.inspect(Some(" ")), Classification::Absent);
    }

    #[test]
    fn known_labels_map_to_their_category() {
        let classifier = StatusClassifier::default();
        assert_eq!(
            classifier.classify(Some("Extracción Efectiva")),
            StatusCategory::Active
        );
        assert_eq!(
            classifier.classify(Some("extraccion efectiva")),
            StatusCategory::Active
        );
        assert_eq!(
            classifier.classify(Some("En Reparación")),
            StatusCategory::Stopped
        );
        assert_eq!(
            classifier.classify(Some("Abandonado")),
            StatusCategory::Inactive
        );
        assert_eq!(
            classifier.classify(Some("No Informado")),
            StatusCategory::NotReported
        );
        assert_eq!(
            classifier.inspect(Some("no informado")),
            Classification::Matched(StatusCategory::NotReported)
        );
    }

    #[test]
    fn every_default_phrase_is_recognized() {
        let classifier = StatusClassifier::default();
        let tables = StatusTables::default();
        let expectations = [
            (&tables.active, StatusCategory::Active),
            (&tables.stopped, StatusCategory::Stopped),
            (&tables.inactive, StatusCategory::Inactive),
            (&tables.not_reported, StatusCategory::NotReported),
        ];
        for (phrases, expected) in expectations {
            for phrase in phrases {
                assert_eq!(classifier.classify(Some(phrase)), expected, "{phrase}");
                assert_eq!(
                    classifier.classify(Some(&phrase.to_uppercase())),
                    expected,
                    "{phrase}"
                );
            }
        }
    }

    #[test]
    fn unrecognized_labels_are_unknown() {
        let classifier = StatusClassifier::default();
        assert_eq!(
            classifier.classify(Some("Foo Bar Unknown Status")),
            StatusCategory::Unknown
        );
        assert_eq!(
            classifier.inspect(Some("Foo Bar Unknown Status")),
            Classification::Unmatched
        );
        assert_eq!(
            classifier.inspect(Some("a abandonar")),
            Classification::Matched(StatusCategory::Inactive)
        );
    }

    #[test]
    fn earlier_category_wins_on_collision() {
        let tables = StatusTables {
            active: vec!["Compartido".to_string()],
            stopped: vec!["compartido".to_string(), "Solo Parado".to_string()],
            inactive: vec!["COMPARTIDO".to_string(), "Solo Parado".to_string()],
            not_reported: vec!["Compartído".to_string(), "Solo Parado".to_string()],
        };
        let classifier = StatusClassifier::new(&tables);
        assert_eq!(
            classifier.classify(Some("compartido")),
            StatusCategory::Active
        );
        assert_eq!(
            classifier.classify(Some("solo parado")),
            StatusCategory::Stopped
        );
    }

    #[test]
    fn blank_table_entries_are_ignored() {
        let tables = StatusTables {
            active: vec![String::new(), "  ".to_string()],
            stopped: Vec::new(),
            inactive: Vec::new(),
            not_reported: Vec::new(),
        };
        let classifier = StatusClassifier::new(&tables);
        assert_eq!(classifier.classify(Some(" ")), StatusCategory::NotReported);
        assert_eq!(classifier.classify(Some("x")), StatusCategory::Unknown);
    }
}
