use ai_image_generator::config::{parse_timeout_secs, Config};
use ai_image_generator::controller::{PromptController, SubmitOutcome};
use ai_image_generator::generator::GeneratorClient;
use ai_image_generator::notify::ConsoleNotifier;
use ai_image_generator::page;
use anyhow::Result;
use clap::Parser;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Parser)]
#[command(name = "ai-image-generator")]
#[command(about = "Turn text prompts into AI-generated images")]
struct CliArgs {
    /// Base URL of the image generation API (overrides GENERATOR_BASE_URL).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides GENERATOR_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS", value_parser = parse_timeout_arg)]
    timeout_secs: Option<Duration>,

    /// Env file to load instead of `.env` in the working directory.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Submit a single prompt, print the image URL and exit.
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,
}

fn parse_timeout_arg(input: &str) -> std::result::Result<Duration, String> {
    parse_timeout_secs(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_image_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    if args.timeout_secs.is_some() {
        config = config.with_timeout(args.timeout_secs);
    }

    info!("Using image generation endpoint {}", config.generate_url());

    let controller = PromptController::new(
        Box::new(GeneratorClient::new(&config)?),
        Box::new(ConsoleNotifier::stderr()),
    );

    match args.prompt {
        Some(prompt) => match drive(&controller, controller.submit(&prompt)).await {
            SubmitOutcome::Generated(url) => {
                println!("{}", url);
                Ok(())
            }
            SubmitOutcome::Failed(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        None => run_interactive(&controller).await,
    }
}

/// Read prompts line by line until stdin closes, rendering the page after
/// every submission.
async fn run_interactive(controller: &PromptController) -> Result<()> {
    print_page(controller)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        controller.set_prompt(line);
        drive(controller, controller.submit_current()).await;
        print_page(controller)?;
    }

    info!("Input closed, exiting");
    Ok(())
}

/// Poll a submission to completion, animating the spinner while busy.
async fn drive<F>(controller: &PromptController, submission: F) -> SubmitOutcome
where
    F: Future<Output = SubmitOutcome>,
{
    tokio::pin!(submission);
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
    let mut frame = 0usize;

    loop {
        tokio::select! {
            outcome = &mut submission => {
                eprint!("\r\x1b[2K");
                return outcome;
            }
            _ = ticker.tick() => {
                let state = controller.state();
                if state.busy {
                    eprint!(
                        "\r{} {}",
                        page::render_output(&state, frame),
                        page::button_label(&state)
                    );
                    frame = frame.wrapping_add(1);
                }
            }
        }
    }
}

fn print_page(controller: &PromptController) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", page::render(&controller.state(), 0))?;
    stdout.flush()?;
    Ok(())
}
