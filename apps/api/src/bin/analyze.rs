//! Command-line client for the Analysis API.
//!
//! Reads a resume from a file (or stdin), submits it, and prints the result JSON.
//! Ctrl-C aborts the in-flight request.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_analyzer::client::{AnalysisClient, ClientError};

#[derive(Parser)]
#[command(name = "analyze", about = "Audit, score and rewrite a resume for ATS pipelines")]
struct Cli {
    /// Resume text file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Analysis service root URL
    #[arg(long, env = "ANALYZER_URL", default_value = "http://localhost:8080")]
    server: String,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resume from {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read resume from stdin")?;
            Ok(text)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let resume_text = read_input(cli.input.as_deref()).await?;
    let client = AnalysisClient::new(&cli.server)?;

    let cancel = async {
        // If the handler can't be installed, never cancel.
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let result = client.analyze_with_cancel(&resume_text, cancel).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            match e.downcast_ref::<ClientError>() {
                Some(ClientError::Cancelled) => ExitCode::from(130),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
