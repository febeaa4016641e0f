//! rumo - terminal vocational-profile questionnaire
//!
//! Presents the six-block RIASEC questionnaire, submits the complete
//! answer vector to the configured scoring service and renders the
//! resulting career profile.

use anyhow::Result;
use clap::Parser;
use rumo_cli::config;
use rumo_cli::scoring::ScoringClient;
use rumo_cli::session::{run_session, SessionEnd};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "rumo", version, about = "Questionário de perfil vocacional (RIASEC)")]
struct Cli {
    /// Scoring service base URL (overrides RUMO_SCORING_URL and the TOML config)
    #[arg(long)]
    scoring_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr at warn level by default so they never interleave
    // with the questionnaire views on stdout; RUST_LOG overrides.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    info!("Starting rumo questionnaire");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let toml_path = config::default_config_path();
    let scoring_url = config::resolve_scoring_url(cli.scoring_url.as_deref(), toml_path.as_deref());
    info!(%scoring_url, "Scoring service configured");

    let client = ScoringClient::new(scoring_url)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match run_session(&client, &mut input, &mut output).await? {
        SessionEnd::Completed(result) => {
            info!(profile = %result.profile, "Session completed");
        }
        SessionEnd::Quit => {
            info!("Session ended before completion");
        }
    }

    Ok(())
}
