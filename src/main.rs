/*!
# journal-genai

Command-line front end for the journal summarization service. It turns a day's
journal snippets into a first-person summary, a second-person analysis and four
structured insights by delegating to a remote chat-completion API.

Results and health documents are printed to stdout as JSON. Logs go to stderr.

## Usage

```text
journal-genai [OPTIONS] <COMMAND>

Commands:
  full      Summary, analysis and insights for the given snippets
  summary   First-person summary only
  insights  Analysis and insights only
  health    Report service health
  status    Print a plain status line
  debug     Print configuration details for troubleshooting
```

## Configuration

- `GENAI_API_URL`: chat-completions endpoint
- `GENAI_API_KEY`: bearer credential
- `PORT`: port reported in health documents
- `LOG_FORMAT`: `json` (default) or `text`
- `LOG_LEVEL` / `RUST_LOG`: log filtering
*/

use clap::Parser;
use journal_genai::ai::{ChatCompletionClient, RequestedView};
use journal_genai::cli::{CliArgs, Command};
use journal_genai::config::Config;
use journal_genai::constants::{LOG_FORMAT_JSON, SERVICE_NAME};
use journal_genai::errors::AppResult;
use journal_genai::ops;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Exit code for failures caused by the caller's input.
const EXIT_CLIENT_ERROR: u8 = 2;

fn init_logging(config: &Config, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if config.log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: CliArgs, config: Config) -> AppResult<()> {
    let client = ChatCompletionClient::from_config(&config);

    let (view, snippet_args) = match &args.command {
        Command::Full(snippet_args) => (RequestedView::Full, snippet_args),
        Command::Summary(snippet_args) => (RequestedView::SummaryOnly, snippet_args),
        Command::Insights(snippet_args) => (RequestedView::InsightsOnly, snippet_args),
        Command::Health { detailed: false } => return print_json(&ops::basic_health(&config)),
        Command::Health { detailed: true } => {
            return print_json(&ops::detailed_health(&config, &client))
        }
        Command::Status => return print_json(&ops::health::STATUS_OK),
        Command::Debug => return print_json(&ops::debug_info(&config)),
    };

    let snippets = snippet_args.collect()?;
    debug!("Collected {} snippets", snippets.len());
    let result = ops::generate(&client, snippets, view)?;
    print_json(&result)
}

/// Loads configuration, applies CLI overrides and validates the result.
fn load_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;
    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.api_key = Some(api_key.clone()).filter(|key| !key.is_empty());
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config, args.verbose);
    info!("Starting {}", SERVICE_NAME);
    debug!("Configuration: {:?}", config);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            if e.is_client_error() {
                ExitCode::from(EXIT_CLIENT_ERROR)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

