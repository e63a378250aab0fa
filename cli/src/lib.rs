pub mod browse_cmd;
pub mod config;
pub mod logging;
pub mod project_cmd;
pub mod render;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use showcase_client::FileProjectSource;
use showcase_client::HttpProjectSource;
use showcase_client::ProjectSource;
use showcase_client::RecordStore;
use showcase_discovery::ProjectRecord;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::browse_cmd::BrowseArgs;
use crate::browse_cmd::StatsArgs;
use crate::config::API_URL_ENV;
use crate::config::AppConfig;
use crate::project_cmd::DeleteArgs;
use crate::project_cmd::MineArgs;
use crate::project_cmd::ShowArgs;

/// Browse and summarize student showcase projects.
#[derive(Debug, Parser)]
#[command(name = "showcase", version)]
pub struct Cli {
    /// Path to a TOML config with [discovery] and [client] tables
    #[arg(long, global = true, env = "SHOWCASE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding client.base_url
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter and sort projects
    Browse(BrowseArgs),

    /// Status and category counts over every project
    Stats(StatsArgs),

    /// Show one project
    Show(ShowArgs),

    /// List the projects created by a user
    Mine(MineArgs),

    /// Delete a project, then reload the list
    Delete(DeleteArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::resolve(self.config.as_deref(), self.api_url)?;
        match self.command {
            Command::Browse(args) => browse_cmd::run_browse(&config, args).await,
            Command::Stats(args) => browse_cmd::run_stats(&config, args).await,
            Command::Show(args) => project_cmd::run_show(&config, args).await,
            Command::Mine(args) => project_cmd::run_mine(&config, args).await,
            Command::Delete(args) => project_cmd::run_delete(&config, args).await,
        }
    }
}

/// Where to read projects from when a command can work offline.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Read projects from a saved `getall` JSON response instead of the API
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

/// Loads the full record snapshot from the chosen source.
pub(crate) async fn load_records(
    config: &AppConfig,
    source: &SourceArgs,
) -> Result<Arc<[ProjectRecord]>> {
    match &source.from_file {
        Some(path) => refresh_store(FileProjectSource::new(path))
            .await
            .with_context(|| format!("load projects from {}", path.display())),
        None => {
            let http = HttpProjectSource::new(&config.client)?;
            let base_url = http.base_url().to_string();
            refresh_store(http)
                .await
                .with_context(|| format!("fetch projects from {base_url}"))
        }
    }
}

async fn refresh_store<S: ProjectSource>(source: S) -> Result<Arc<[ProjectRecord]>> {
    let store = RecordStore::new(source);
    store.refresh().await?;
    let records = store.records().await;
    debug!(records = records.len(), "loaded project snapshot");
    Ok(records)
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
