use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use prebuilt_fetch::ReqwestClient;
use prebuilt_install::{EnvSnapshot, Outcome, Pipeline, Settings, fallback};
use prebuilt_platform::TokioRunner;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    let app = cli::App::parse();

    let default_level = if app.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(app) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: cli::App) -> Result<ExitCode> {
    let working_dir = std::env::current_dir().context("failed to read the working directory")?;
    let settings = app.into_settings(working_dir);
    let env = EnvSnapshot::capture();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(install(&settings, &env))
}

async fn install(settings: &Settings, env: &EnvSnapshot) -> Result<ExitCode> {
    let client = match ReqwestClient::new() {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "no HTTP client, building locally");
            return Ok(exit_with(
                fallback::build(&settings.working_dir, &TokioRunner).await,
            ));
        }
    };

    let pipeline = Pipeline::new(client, TokioRunner);
    let result = pipeline.run(settings, env).await.map(|outcome| match outcome {
        Outcome::Installed { codec, path } => {
            info!(%codec, path = %path.display(), "prebuilt artifact installed");
        }
        Outcome::BuiltLocally { reason } => {
            info!(%reason, "artifact built locally");
        }
    });
    Ok(exit_with(result))
}

fn exit_with(result: Result<(), prebuilt_install::BuildError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
