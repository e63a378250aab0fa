use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHOWCASE_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs a stderr subscriber filtered by `SHOWCASE_LOG`, then `RUST_LOG`,
/// then `warn`. Unparseable directives fall through to the next source.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn env_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(DEFAULT_DIRECTIVE)
}
