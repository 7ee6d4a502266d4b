//! Reviewfold CLI entrypoint: list or minimize pull request reviews.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewfold::cli::Operation;
use reviewfold::{OctocrabGraphQlClient, PersonalAccessToken, ReviewError, ReviewfoldConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    let operation = Operation::from_config(&config)?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;

    let client = OctocrabGraphQlClient::for_token(&token, operation.api_base())?;
    operation.run(&client, &mut io::stdout()).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewfoldConfig, ReviewError> {
    ReviewfoldConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
