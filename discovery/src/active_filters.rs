use crate::query::FacetFilter;
use crate::query::QueryState;
use serde::Deserialize;
use serde::Serialize;

/// The query fields that count as filters, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Search,
    Category,
    Status,
    Year,
}

impl FilterKind {
    pub const ORDER: [FilterKind; 4] = [
        FilterKind::Search,
        FilterKind::Category,
        FilterKind::Status,
        FilterKind::Year,
    ];

    pub fn is_active(self, query: &QueryState) -> bool {
        match self {
            FilterKind::Search => !query.search_text.is_empty(),
            FilterKind::Category => !query.category_filter.is_all(),
            FilterKind::Status => !query.status_filter.is_all(),
            FilterKind::Year => !query.year_filter.is_all(),
        }
    }

    fn label(self, query: &QueryState) -> String {
        match self {
            FilterKind::Search => format!("Search: \"{}\"", query.search_text),
            FilterKind::Category => format!("Category: {}", query.category_filter),
            FilterKind::Status => format!("Status: {}", query.status_filter),
            FilterKind::Year => format!("Year: {}", query.year_filter),
        }
    }

    /// Resets the field this kind was derived from, leaving the rest untouched.
    pub fn clear(self, query: &QueryState) -> QueryState {
        let mut next = query.clone();
        match self {
            FilterKind::Search => next.search_text.clear(),
            FilterKind::Category => next.category_filter = FacetFilter::All,
            FilterKind::Status => next.status_filter = FacetFilter::All,
            FilterKind::Year => next.year_filter = FacetFilter::All,
        }
        next
    }
}

/// A removable, display-ready description of one applied filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterToken {
    pub kind: FilterKind,
    pub label: String,
}

/// One token per active filter, ordered search, category, status, year.
pub fn describe(query: &QueryState) -> Vec<ActiveFilterToken> {
    FilterKind::ORDER
        .into_iter()
        .filter(|kind| kind.is_active(query))
        .map(|kind| ActiveFilterToken {
            kind,
            label: kind.label(query),
        })
        .collect()
}

pub fn remove_token(token: &ActiveFilterToken, query: &QueryState) -> QueryState {
    token.kind.clear(query)
}

/// Resets every filter field. Sort key and view mode are kept.
pub fn clear_all(query: &QueryState) -> QueryState {
    QueryState {
        sort_key: query.sort_key,
        view_mode: query.view_mode,
        ..QueryState::default()
    }
}
