use anyhow;
use chrono;
use clap::{Parser, Subcommand};
use env_logger::fmt::Formatter;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, Record};
use sentiment_console::client::prediction_client::PredictionClient;
use sentiment_console::config::ClientConfig;
use sentiment_console::page::health_handler::HealthOutcome;
use sentiment_console::page::{Page, UiTargets};
use sentiment_console::ui::terminal::{TerminalNotifier, TerminalPanel, TerminalStatus};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEFAULT_TEXT: &str = "This is great.";
const HEALTH_COMMAND: &str = ":health";
const QUIT_COMMAND: &str = ":quit";

/// Terminal front end for a sentiment prediction server
#[derive(Parser, Debug)]
#[command(
    name = "sentiment-console",
    version,
    about = "Send reviews to a sentiment prediction server and check its health",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// base url of the prediction server.
    /// Falls back to SENTIMENT_SERVER_URL, then http://127.0.0.1:8000
    #[arg(short, long, global = true)]
    server_url: Option<String>,

    /// request timeout in seconds. The HTTP client default applies when omitted
    #[arg(short, long, global = true)]
    timeout_secs: Option<u64>,

    /// ignore predictions that resolve after a newer submission
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    latest_only: bool,

    /// JSON config file. Flags take precedence over its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single text
    Predict {
        /// words of the text, joined with single spaces
        text: Vec<String>,
    },

    /// Check whether the server is up
    Health,

    /// Read texts line by line from stdin.
    /// `:health` checks the server, `:quit` ends the session
    Interactive,
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match cli.config.as_ref() {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(server_url) = cli.server_url.as_ref() {
        config.server_url = server_url.to_string();
    }
    if cli.timeout_secs.is_some() {
        config.timeout_secs = cli.timeout_secs;
    }
    if cli.latest_only {
        config.latest_only = true;
    }
    Ok(config)
}

fn spinner(message: &str) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    progress_bar.set_message(message.to_string());
    Ok(progress_bar)
}

async fn run_interactive(page: &Page) -> anyhow::Result<()> {
    info!("type a review and press enter; {HEALTH_COMMAND} checks the server, {QUIT_COMMAND} exits");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut submissions = Vec::new();
    let mut health_checks = Vec::new();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            QUIT_COMMAND => break,
            HEALTH_COMMAND => health_checks.push(page.spawn_health_check()),
            _ => submissions.push(page.spawn_submit(line)),
        }
    }

    debug!(
        "waiting for {} submission(s) and {} health check(s) in flight",
        submissions.len(),
        health_checks.len()
    );
    for outcome in futures::future::join_all(submissions).await {
        outcome?;
    }
    for outcome in futures::future::join_all(health_checks).await {
        outcome?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format(|buf: &mut Formatter, record: &Record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                record.level(),
                record.args()
            )
        })
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let client = PredictionClient::new(&config)?;
    debug!("using prediction server at {}", client.base_url());

    let notifier = Arc::new(TerminalNotifier::new());
    let page = Page::init(
        Arc::new(client),
        UiTargets {
            panel: Arc::new(TerminalPanel::stdout()),
            status: Arc::new(TerminalStatus::stdout()),
            notifier: notifier.clone(),
        },
        config.latest_only,
    );

    match &cli.command {
        Commands::Predict { text } => {
            let joined = if text.is_empty() {
                DEFAULT_TEXT.to_string()
            } else {
                text.join(" ")
            };
            let progress_bar = spinner("Predicting...")?;
            page.submit(&joined).await;
            progress_bar.finish_and_clear();
        }

        Commands::Health => {
            let progress_bar = spinner("Checking health...")?;
            let outcome = page.check_health().await;
            progress_bar.finish_and_clear();
            if outcome == HealthOutcome::Down {
                return Err(anyhow::anyhow!(
                    "prediction server at {} is down",
                    config.server_url
                ));
            }
        }

        Commands::Interactive => {
            run_interactive(&page).await?;
        }
    }

    if notifier.raised() > 0 {
        return Err(anyhow::anyhow!(
            "{} prediction(s) failed",
            notifier.raised()
        ));
    }

    Ok(())
}
