use crate::config::Vocabulary;
use crate::query::FacetFilter;
use crate::query::QueryState;
use crate::record::ProjectRecord;

/// Returns the records that satisfy every active predicate of `query`, in
/// store order. With no active filter this is the whole store.
///
/// A categorical selection outside the vocabulary matches nothing, even if
/// some record carries the same out-of-vocabulary value.
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    query: &QueryState,
    vocabulary: &Vocabulary,
) -> Vec<&'a ProjectRecord> {
    let filters = FilterSet::new(query, vocabulary);
    records
        .iter()
        .filter(|record| filters.matches(record))
        .collect()
}

/// Single-record form of [`filter_projects`].
pub fn project_matches(
    record: &ProjectRecord,
    query: &QueryState,
    vocabulary: &Vocabulary,
) -> bool {
    FilterSet::new(query, vocabulary).matches(record)
}

enum Selection<'q> {
    Any,
    Exactly(&'q str),
    Nothing,
}

impl<'q> Selection<'q> {
    fn new(filter: &'q FacetFilter, known: impl Fn(&str) -> bool) -> Self {
        match filter.selected() {
            None => Selection::Any,
            Some(value) if known(value) => Selection::Exactly(value),
            Some(_) => Selection::Nothing,
        }
    }

    fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Selection::Any => true,
            Selection::Exactly(wanted) => value == Some(*wanted),
            Selection::Nothing => false,
        }
    }
}

struct FilterSet<'q> {
    needle: Option<String>,
    category: Selection<'q>,
    status: Selection<'q>,
    year: Selection<'q>,
}

impl<'q> FilterSet<'q> {
    fn new(query: &'q QueryState, vocabulary: &Vocabulary) -> Self {
        let needle = if query.search_text.is_empty() {
            None
        } else {
            Some(query.search_text.to_lowercase())
        };
        Self {
            needle,
            category: Selection::new(&query.category_filter, |value| {
                vocabulary.has_category(value)
            }),
            status: Selection::new(&query.status_filter, |value| vocabulary.has_status(value)),
            year: Selection::new(&query.year_filter, |value| {
                vocabulary.has_academic_year(value)
            }),
        }
    }

    fn matches(&self, record: &ProjectRecord) -> bool {
        if let Some(needle) = &self.needle
            && !matches_search(record, needle)
        {
            return false;
        }
        self.category.admits(record.department())
            && self.status.admits(record.status())
            && self.year.admits(record.academic_year())
    }
}

fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    let hit = |haystack: &str| haystack.to_lowercase().contains(needle);
    hit(record.title())
        || hit(record.description())
        || hit(record.abstract_text())
        || record.contributor_terms().any(hit)
        || record
            .technologies_used
            .iter()
            .any(|tech| hit(tech.as_str()))
}
