use crate::active_filters::ActiveFilterToken;
use crate::active_filters::describe;
use crate::config::DiscoveryConfig;
use crate::config::Vocabulary;
use crate::error::Result;
use crate::facets::DashboardSummary;
use crate::filter::filter_projects;
use crate::query::QueryState;
use crate::query::ViewMode;
use crate::record::ProjectRecord;
use crate::sort::TitleCollator;
use crate::sort::sort_projects;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Runs the filter, sort and describe stages against a caller-owned record
/// snapshot. Holds only configuration; every call recomputes from scratch.
#[derive(Debug)]
pub struct DiscoveryEngine {
    config: DiscoveryConfig,
    collator: TitleCollator,
}

impl DiscoveryEngine {
    pub fn new(config: DiscoveryConfig) -> Result<Self> {
        config.validate()?;
        let collator = TitleCollator::for_locale(&config.parsed_locale()?);
        Ok(Self { config, collator })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.config.vocabulary
    }

    pub fn filter<'a>(
        &self,
        records: &'a [ProjectRecord],
        query: &QueryState,
    ) -> Vec<&'a ProjectRecord> {
        filter_projects(records, query, self.vocabulary())
    }

    pub fn sort<'a>(
        &self,
        subset: &[&'a ProjectRecord],
        query: &QueryState,
    ) -> Vec<&'a ProjectRecord> {
        sort_projects(subset, query.sort_key, &self.collator)
    }

    pub fn browse<'a>(&self, records: &'a [ProjectRecord], query: &QueryState) -> BrowseView<'a> {
        let start = Instant::now();
        let subset = self.filter(records, query);
        let projects = self.sort(&subset, query);
        let view = BrowseView {
            projects,
            active_filters: describe(query),
            total: records.len(),
            view_mode: query.view_mode,
        };
        debug!(
            total = view.total,
            matched = view.matched(),
            sort = %query.sort_key,
            elapsed_us = start.elapsed().as_micros() as u64,
            "browse"
        );
        view
    }

    pub fn dashboard(&self, records: &[ProjectRecord]) -> DashboardSummary {
        DashboardSummary::summarize(records, self.vocabulary())
    }
}

/// Everything a listing page needs for one query.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView<'a> {
    pub projects: Vec<&'a ProjectRecord>,
    pub active_filters: Vec<ActiveFilterToken>,
    pub total: usize,
    pub view_mode: ViewMode,
}

impl BrowseView<'_> {
    pub fn matched(&self) -> usize {
        self.projects.len()
    }

    pub fn is_filtered(&self) -> bool {
        !self.active_filters.is_empty()
    }

    pub fn headline(&self) -> String {
        match self.matched() {
            1 => "1 Project Found".to_string(),
            n => format!("{n} Projects Found"),
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.is_filtered() {
            "Filtered results"
        } else {
            "Showing all projects"
        }
    }
}
