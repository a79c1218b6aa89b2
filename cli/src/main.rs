mod http;
mod terminal;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use widget::{ChatWidget, SubmitOutcome, Surfaces, WidgetConfig};

use crate::http::HttpBackend;
use crate::terminal::{LineInput, OutputFormat, StatusTrigger, TerminalTranscript};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("message is empty")]
    EmptyMessage,
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("transcript encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chat-cli", about = "Terminal front end for the chat widget")]
struct Cli {
    #[arg(long, env = "CHAT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, default_value = widget::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, default_value_t = false, help = "Print bubbles as the markup the browser would hold")]
    html: bool,

    #[arg(long, default_value_t = false, conflicts_with = "html", help = "Print the transcript as JSON when the session ends")]
    json: bool,

    #[arg(long, help = "Report round trips slower than this many milliseconds on stderr")]
    slow_ms: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the host's `/healthz`.
    Ping,
    /// Send one message and print the exchange.
    Send { message: String },
    /// Read messages from stdin, one per line, until EOF or `/quit`.
    Repl,
}

const QUIT: &str = "/quit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Send { ref message } => {
            let (widget, _) = build_widget(&cli)?;
            let outcome = widget.submit(message).await;
            report_slow(outcome);
            finish(&cli, &widget)?;
            match outcome {
                SubmitOutcome::Ignored => Err(CliError::EmptyMessage),
                SubmitOutcome::Failed(_) => Ok(ExitCode::FAILURE),
                SubmitOutcome::Replied(_) | SubmitOutcome::Busy => Ok(ExitCode::SUCCESS),
            }
        }
        Command::Repl => {
            let (widget, line) = build_widget(&cli)?;
            run_repl(&widget, &line).await?;
            finish(&cli, &widget)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn output_format(cli: &Cli) -> OutputFormat {
    if cli.json {
        OutputFormat::Json
    } else if cli.html {
        OutputFormat::Html
    } else {
        OutputFormat::Text
    }
}

fn widget_config(cli: &Cli) -> WidgetConfig {
    let mut config = WidgetConfig { endpoint: cli.endpoint.clone(), ..WidgetConfig::default() };
    if let Some(ms) = cli.slow_ms {
        config.slow_response_ms = ms;
    }
    config
}

fn build_widget(cli: &Cli) -> Result<(ChatWidget, Rc<RefCell<String>>), CliError> {
    let url = http::endpoint_url(&cli.base_url, &cli.endpoint).ok_or_else(|| CliError::InvalidBaseUrl(cli.base_url.clone()))?;
    let backend = HttpBackend::new(url)?;

    let line = Rc::new(RefCell::new(String::new()));
    let surfaces = Surfaces {
        transcript: Box::new(TerminalTranscript::new(std::io::stdout(), output_format(cli))),
        input: Box::new(LineInput::new(Rc::clone(&line))),
        trigger: Box::new(StatusTrigger),
    };
    Ok((ChatWidget::new(widget_config(cli), Box::new(backend), surfaces), line))
}

fn report_slow(outcome: SubmitOutcome) {
    if let Some(notice) = terminal::slow_notice(outcome) {
        eprintln!("{notice}");
    }
}

/// Emit anything deferred to the end of the session.
fn finish(cli: &Cli, widget: &ChatWidget) -> Result<(), CliError> {
    if cli.json {
        println!("{}", terminal::transcript_json(&widget.transcript())?);
    }
    Ok(())
}

async fn run_repl(widget: &ChatWidget, line: &Rc<RefCell<String>>) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(next) = lines.next_line().await? {
        if next.trim() == QUIT {
            break;
        }
        *line.borrow_mut() = next;
        report_slow(widget.submit_from_input().await);
    }
    Ok(())
}

async fn run_ping(base_url: &str) -> Result<ExitCode, CliError> {
    let url = http::endpoint_url(base_url, "/healthz").ok_or_else(|| CliError::InvalidBaseUrl(base_url.to_owned()))?;
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(ExitCode::SUCCESS)
}
