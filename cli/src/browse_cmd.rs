use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use showcase_discovery::DiscoveryEngine;
use showcase_discovery::QueryState;
use showcase_discovery::SortKey;
use showcase_discovery::ViewMode;

use crate::SourceArgs;
use crate::config::AppConfig;
use crate::load_records;
use crate::print_json;
use crate::render::Renderer;

#[derive(Debug, Parser)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against titles, descriptions,
    /// contributors and technologies
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Category (department) to keep, or "all"
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    pub category: String,

    /// Status to keep, or "all"
    #[arg(long, value_name = "STATUS", default_value = "all")]
    pub status: String,

    /// Academic year to keep, or "all"
    #[arg(short, long, value_name = "YEAR", default_value = "all")]
    pub year: String,

    /// newest, oldest, title-asc or title-desc
    #[arg(long, value_name = "ORDER", default_value = "newest")]
    pub sort: String,

    /// grid (one line per project) or list (detailed)
    #[arg(long, value_name = "MODE", default_value = "grid")]
    pub view: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl BrowseArgs {
    pub fn query(&self) -> QueryState {
        QueryState::default()
            .with_search(self.search.as_str())
            .with_category(self.category.as_str())
            .with_status(self.status.as_str())
            .with_year(self.year.as_str())
            .with_sort(SortKey::parse(&self.sort))
            .with_view(ViewMode::from(self.view.clone()))
    }
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Number of categories to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_browse(config: &AppConfig, args: BrowseArgs) -> Result<()> {
    let engine = DiscoveryEngine::new(config.discovery.clone()).context("build discovery engine")?;
    let records = load_records(config, &args.source).await?;
    let query = args.query();
    let view = engine.browse(&records, &query);
    if args.json {
        return print_json(&view);
    }
    print!("{}", Renderer::for_stdout().browse(&view));
    Ok(())
}

pub async fn run_stats(config: &AppConfig, args: StatsArgs) -> Result<()> {
    let engine = DiscoveryEngine::new(config.discovery.clone()).context("build discovery engine")?;
    let records = load_records(config, &args.source).await?;
    let summary = engine.dashboard(&records);
    if args.json {
        return print_json(&summary);
    }
    print!("{}", Renderer::for_stdout().dashboard(&summary, args.top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use showcase_discovery::FacetFilter;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        browse: BrowseArgs,
    }

    #[test]
    fn flags_build_query_state() {
        let harness = Harness::parse_from([
            "browse",
            "--search",
            "Solar",
            "--status",
            "Ongoing",
            "--sort",
            "title-desc",
            "--view",
            "list",
        ]);
        let query = harness.browse.query();
        assert_eq!(query.search_text, "Solar");
        assert_eq!(query.status_filter, FacetFilter::only("Ongoing"));
        assert!(query.category_filter.is_all());
        assert_eq!(query.sort_key, SortKey::TitleDesc);
        assert_eq!(query.view_mode, ViewMode::List);
    }

    #[test]
    fn defaults_are_the_default_query() {
        let harness = Harness::parse_from(["browse"]);
        assert_eq!(harness.browse.query(), QueryState::default());
    }
}
