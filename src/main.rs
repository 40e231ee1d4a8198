mod cli;

use anyhow::Result;
use bedrock_probe::{ProbeConfig, runner};
use clap::Parser;
use cli::Cli;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut editor = DefaultEditor::new()?;
    let access_key_id = prompt_missing(&mut editor, cli.access_key_id, "AWS Access Key ID: ")?;
    let secret_access_key =
        prompt_missing(&mut editor, cli.secret_access_key, "AWS Secret Access Key: ")?;
    let region = prompt_missing(&mut editor, cli.region, "AWS Region (e.g. us-east-1): ")?;

    let mut config = ProbeConfig::new(region, access_key_id, secret_access_key);
    if let Some(endpoint_url) = cli.endpoint_url {
        config = config.with_endpoint_url(endpoint_url);
    }

    runner::run(config).await?;
    Ok(())
}

/// Use the flag/env value when present, otherwise prompt interactively.
fn prompt_missing(editor: &mut DefaultEditor, value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Ok(editor.readline(prompt)?.trim().to_string()),
    }
}
