/*!
# Showcase Discovery

Faceted discovery over student project records:
- **Filter**: case-insensitive substring search plus exact category, status and year selections
- **Sort**: newest, oldest, or locale-aware title order, always stable
- **Active filters**: removable tokens describing the current query
- **Facets**: per-status and per-category counts over the whole store

## Architecture

```text
Records + QueryState
  ├─> filter_projects
  │     └─> sort_projects
  │           └─> BrowseView (projects, tokens, headline)
  └─> describe ──> ActiveFilterToken[] ──> remove_token / clear_all ──> QueryState

Records ──> DashboardSummary (status_counts, category_counts)
```

## Example

```rust,no_run
use showcase_discovery::{DiscoveryConfig, DiscoveryEngine, ProjectRecord, QueryState, SortKey};

fn main() -> anyhow::Result<()> {
    let engine = DiscoveryEngine::new(DiscoveryConfig::default())?;
    let body = std::fs::read_to_string("projects.json")?;
    let records: Vec<ProjectRecord> = serde_json::from_str(&body)?;

    let query = QueryState::default()
        .with_search("solar")
        .with_status("Ongoing")
        .with_sort(SortKey::TitleAsc);
    let view = engine.browse(&records, &query);

    println!("{}", view.headline());
    for project in &view.projects {
        println!("{}", project.title());
    }
    Ok(())
}
```

None of the pipeline stages fail: malformed records fall back to defaults and
unknown filter values simply match nothing. Only configuration is validated.
*/

pub mod active_filters;
pub mod config;
pub mod engine;
pub mod error;
pub mod facets;
pub mod filter;
pub mod query;
pub mod record;
pub mod sort;

pub use active_filters::ActiveFilterToken;
pub use active_filters::FilterKind;
pub use active_filters::clear_all;
pub use active_filters::describe;
pub use active_filters::remove_token;
pub use config::ALL_SENTINEL;
pub use config::DiscoveryConfig;
pub use config::Vocabulary;
pub use engine::BrowseView;
pub use engine::DiscoveryEngine;
pub use error::DiscoveryError;
pub use error::Result;
pub use facets::DashboardSummary;
pub use facets::FacetCount;
pub use facets::category_counts;
pub use facets::status_counts;
pub use filter::filter_projects;
pub use filter::project_matches;
pub use query::FacetFilter;
pub use query::QueryState;
pub use query::SortKey;
pub use query::ViewMode;
pub use record::Contributor;
pub use record::ContributorProfile;
pub use record::ProjectRecord;
pub use sort::TitleCollator;
pub use sort::sort_projects;
