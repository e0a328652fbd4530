//! Summarize a research paper from the terminal.
//!
//! Run with: cargo run -p papersum-cli -- --file paper.pdf --style short --format mla

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use papersum_cli::client::{HandlerClient, DEFAULT_SERVER};
use papersum_cli::input::InputCollector;
use papersum_cli::render::{
    classify, copy_to_clipboard, input_toast, render_summary, render_toast, CopyIndicator,
    ToastKind,
};
use papersum_cli::session::Session;
use papersum_common::{CitationFormat, SummarizeRequest, SummaryStyle};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "papersum",
    version,
    about = "AI summary, keywords and citation for a research paper"
)]
struct Cli {
    /// Paper as a PDF file (read as raw text). Wins over --text.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Paper text; "-" reads stdin.
    #[arg(short, long)]
    text: Option<String>,

    /// Summary length preset.
    #[arg(
        short,
        long,
        default_value = "detailed",
        value_parser = ["short", "detailed", "comprehensive"]
    )]
    style: String,

    /// Citation format (apa, ieee, mla, or any other style name).
    #[arg(short = 'c', long = "format", default_value = "apa")]
    format: String,

    /// Base URL of the summarization server.
    #[arg(long, env = "PAPERSUM_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Copy the citation to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Print the result envelope as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut collector = InputCollector::new();
    if let Some(text) = &cli.text {
        let text = if text == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            text.clone()
        };
        collector = collector.with_text(text);
    }
    if let Some(path) = &cli.file {
        collector = collector.with_file(path);
    }

    let mut session = Session::new();
    if !session.can_submit(collector.has_input()) {
        eprintln!("{}", render_toast(&ToastKind::NoInput.toast()));
        return Ok(ExitCode::FAILURE);
    }

    let input = match collector.collect() {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("Error reading paper: {e}");
            eprintln!("{}", render_toast(&input_toast(&e).toast()));
            return Ok(ExitCode::FAILURE);
        }
    };

    session.begin()?;
    let request = SummarizeRequest::new(
        input.content,
        SummaryStyle::from_label(&cli.style),
        &CitationFormat::from_label(&cli.format),
    );
    let client = HandlerClient::new(&cli.server);
    eprintln!("Processing paper...");

    match client.summarize(&request).await {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let mut indicator = CopyIndicator::default();
                let copy_label = if cli.copy {
                    match copy_to_clipboard(&result.citation) {
                        Ok(()) => {
                            indicator.mark_copied(Instant::now());
                            Some(indicator.label(Instant::now()))
                        }
                        Err(e) => {
                            tracing::warn!("Could not copy citation: {e}");
                            None
                        }
                    }
                } else {
                    None
                };
                println!("{}", render_summary(&result, copy_label));
            }
            session.succeed(result);
            eprintln!("{}", render_toast(&ToastKind::Success.toast()));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("Error processing paper: {e}");
            let kind = classify(&e);
            session.fail(kind);
            eprintln!("{}", render_toast(&kind.toast()));
            Ok(ExitCode::FAILURE)
        }
    }
}
