use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::api::models::PozoDetail;
use crate::domain::StatusCategory;
use crate::status::{Classification, StatusClassifier};

/// Summary printed by the headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellsReport {
    pub total_wells: usize,
    pub mapped_wells: usize,
    pub by_category: Vec<(StatusCategory, usize)>,
    pub by_province: Vec<(String, usize)>,
    pub top_companies: Vec<(String, usize)>,
    /// Present labels that none of the status tables recognize.
    pub unrecognized_statuses: Vec<String>,
}

pub fn build_report(
    wells: &[PozoDetail],
    classifier: &StatusClassifier,
    top: usize,
) -> WellsReport {
    let mut by_category: HashMap<StatusCategory, usize> = HashMap::new();
    let mut by_province: HashMap<String, usize> = HashMap::new();
    let mut by_company: HashMap<String, usize> = HashMap::new();
    let mut unrecognized = BTreeSet::new();
    let mut mapped_wells = 0;

    for well in wells {
        let classification = classifier.inspect(well.status.as_deref());
        *by_category.entry(classification.category()).or_default() += 1;
        if classification == Classification::Unmatched {
            if let Some(status) = &well.status {
                unrecognized.insert(status.trim().to_string());
            }
        }

        *by_province.entry(label_or_placeholder(&well.province)).or_default() += 1;
        *by_company.entry(label_or_placeholder(&well.company)).or_default() += 1;

        if well.coordinates().is_some() {
            mapped_wells += 1;
        }
    }

    WellsReport {
        total_wells: wells.len(),
        mapped_wells,
        by_category: StatusCategory::ALL
            .iter()
            .map(|category| (*category, by_category.get(category).copied().unwrap_or(0)))
            .collect(),
        by_province: sorted_counts(by_province, usize::MAX),
        top_companies: sorted_counts(by_company, top),
        unrecognized_statuses: unrecognized.into_iter().collect(),
    }
}

fn label_or_placeholder(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "(sin dato)".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Highest count first, ties broken alphabetically.
fn sorted_counts(counts: HashMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}
