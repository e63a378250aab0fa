use clap::Parser;
use showcase_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    showcase_cli::logging::init();
    Cli::parse().run().await
}
