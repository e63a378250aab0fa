use crate::config::Vocabulary;
use crate::record::ProjectRecord;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub key: String,
    pub count: usize,
}

/// One entry per status in vocabulary order, zero counts included.
pub fn status_counts(records: &[ProjectRecord], vocabulary: &Vocabulary) -> Vec<FacetCount> {
    let counts = tally(records.iter().filter_map(ProjectRecord::status));
    vocabulary
        .statuses
        .iter()
        .map(|status| FacetCount {
            key: status.clone(),
            count: counts.get(status.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Categories (matched on `department`) that occur at least once, in
/// vocabulary order.
pub fn category_counts(records: &[ProjectRecord], vocabulary: &Vocabulary) -> Vec<FacetCount> {
    let counts = tally(records.iter().filter_map(ProjectRecord::department));
    vocabulary
        .categories
        .iter()
        .filter_map(|category| {
            let count = counts.get(category.as_str()).copied()?;
            Some(FacetCount {
                key: category.clone(),
                count,
            })
        })
        .collect()
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

/// Facet counts over the whole store, plus the header figures shown next to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub statuses: Vec<FacetCount>,
    pub categories: Vec<FacetCount>,
    /// Records whose status is absent or outside the vocabulary.
    pub unclassified_status: usize,
    pub category_vocabulary_size: usize,
}

impl DashboardSummary {
    pub fn summarize(records: &[ProjectRecord], vocabulary: &Vocabulary) -> Self {
        let statuses = status_counts(records, vocabulary);
        let classified: usize = statuses.iter().map(|facet| facet.count).sum();
        Self {
            total: records.len(),
            categories: category_counts(records, vocabulary),
            unclassified_status: records.len().saturating_sub(classified),
            category_vocabulary_size: vocabulary.categories.len(),
            statuses,
        }
    }

    /// The first `limit` non-empty categories, still in vocabulary order.
    pub fn top_categories(&self, limit: usize) -> &[FacetCount] {
        &self.categories[..self.categories.len().min(limit)]
    }
}
