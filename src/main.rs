use anyhow::Result;
use innkeep::commands::Cli;

fn main() -> Result<()> {
    // Route messages through tracing when debug output is requested
    if std::env::var("INNKEEP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }

    Cli::menu()
}
