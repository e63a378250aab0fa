use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use showcase_client::FileProjectSource;
use showcase_client::HttpProjectSource;
use showcase_client::ProjectSource;
use showcase_client::RecordStore;
use showcase_client::RefreshOutcome;
use showcase_client::Session;
use showcase_discovery::ProjectRecord;

use crate::SourceArgs;
use crate::config::AppConfig;
use crate::print_json;
use crate::render::Renderer;

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Project id
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct SessionArgs {
    /// Signed-in user id
    #[arg(long, value_name = "USER_ID")]
    pub user: String,

    /// Bearer token for the backend
    #[arg(long, env = "SHOWCASE_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl SessionArgs {
    pub fn session(&self) -> Session {
        let session = Session::new(self.user.as_str());
        match &self.token {
            Some(token) => session.with_token(token.as_str()),
            None => session,
        }
    }
}

#[derive(Debug, Parser)]
pub struct MineArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Project id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Bearer token for the backend; the request carries no user id
    #[arg(long, env = "SHOWCASE_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl DeleteArgs {
    fn session(&self) -> Option<Session> {
        let token = self.token.as_deref()?;
        Some(Session::new(String::new()).with_token(token))
    }
}

pub async fn run_show(config: &AppConfig, args: ShowArgs) -> Result<()> {
    let found = match &args.source.from_file {
        Some(path) => FileProjectSource::new(path).fetch_by_id(&args.id).await,
        None => HttpProjectSource::new(&config.client)?.fetch_by_id(&args.id).await,
    }
    .with_context(|| format!("fetch project {}", args.id))?;
    let Some(project) = found else {
        bail!("project {} not found", args.id);
    };
    if args.json {
        return print_json(&project);
    }
    print!("{}", Renderer::for_stdout().project(&project));
    Ok(())
}

pub async fn run_mine(config: &AppConfig, args: MineArgs) -> Result<()> {
    let session = args.session.session();
    let projects: Vec<ProjectRecord> = match &args.source.from_file {
        Some(path) => FileProjectSource::new(path).fetch_for_session(&session).await,
        None => {
            HttpProjectSource::new(&config.client)?
                .with_session(session.clone())
                .fetch_for_session(&session)
                .await
        }
    }
    .with_context(|| format!("fetch projects for user {}", session.user_id))?;
    if args.json {
        return print_json(&projects);
    }
    print!("{}", Renderer::for_stdout().project_list(&projects));
    Ok(())
}

pub async fn run_delete(config: &AppConfig, args: DeleteArgs) -> Result<()> {
    let mut source = HttpProjectSource::new(&config.client)?;
    if let Some(session) = args.session() {
        source = source.with_session(session);
    }
    let store = RecordStore::new(source);
    let outcome = store
        .delete_and_refresh(&args.id)
        .await
        .with_context(|| format!("delete project {}", args.id))?;
    match outcome {
        RefreshOutcome::Replaced { records, .. } => {
            println!("Deleted {}; {records} projects remain", args.id);
        }
        RefreshOutcome::AlreadyInFlight => println!("Deleted {}", args.id),
    }
    Ok(())
}
