use crate::config::ALL_SENTINEL;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A categorical filter selection: the `"all"` sentinel or one value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            FacetFilter::All => None,
            FacetFilter::Only(value) => Some(value.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.selected().unwrap_or(ALL_SENTINEL)
    }
}

impl From<String> for FacetFilter {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            FacetFilter::All
        } else {
            FacetFilter::Only(value)
        }
    }
}

impl From<&str> for FacetFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FacetFilter> for String {
    fn from(filter: FacetFilter) -> Self {
        match filter {
            FacetFilter::All => ALL_SENTINEL.to_string(),
            FacetFilter::Only(value) => value,
        }
    }
}

impl fmt::Display for FacetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering. Any unrecognised spelling decodes to [`SortKey::Unsorted`],
/// which keeps filter order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    Unsorted,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
            SortKey::Unsorted => "unsorted",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "titleAsc" | "title-asc" => SortKey::TitleAsc,
            "titleDesc" | "title-desc" => SortKey::TitleDesc,
            _ => SortKey::Unsorted,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation hint carried with the query; never affects filtering or order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl From<String> for ViewMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

impl From<ViewMode> for String {
    fn from(mode: ViewMode) -> Self {
        mode.as_str().to_string()
    }
}

/// The user-selected browse parameters for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    pub search_text: String,
    pub category_filter: FacetFilter,
    pub status_filter: FacetFilter,
    pub year_filter: FacetFilter,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
}

impl QueryState {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<FacetFilter>) -> Self {
        self.category_filter = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<FacetFilter>) -> Self {
        self.status_filter = status.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<FacetFilter>) -> Self {
        self.year_filter = year.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_view(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// True when at least one filter token would be shown.
    pub fn has_active_filters(&self) -> bool {
        crate::active_filters::FilterKind::ORDER
            .iter()
            .any(|kind| kind.is_active(self))
    }
}
