//! Command-line interface for the summarization service.
//!
//! Snippets are given either as positional arguments or as a JSON request
//! document `{"snippetContents": [...]}` read from a file or from stdin (`-`).

use crate::constants::{APP_DESCRIPTION, ENV_VAR_API_KEY, ENV_VAR_API_URL};
use crate::errors::AppResult;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// LLM summarization service for journal snippets
#[derive(Parser, Debug)]
#[command(name = "journal-genai", about = APP_DESCRIPTION, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Override the chat-completions endpoint
    #[arg(long, global = true, env = ENV_VAR_API_URL)]
    pub api_url: Option<String>,

    /// Override the bearer credential sent upstream
    #[arg(long, global = true, env = ENV_VAR_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Summary, analysis and insights for the given snippets
    Full(SnippetArgs),
    /// First-person summary only
    Summary(SnippetArgs),
    /// Analysis and insights only
    Insights(SnippetArgs),
    /// Report service health
    Health {
        /// Probe the upstream API and include dependency details
        #[arg(long)]
        detailed: bool,
    },
    /// Print a plain status line
    Status,
    /// Print configuration details for troubleshooting
    Debug,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SnippetArgs {
    /// Journal snippets, in the order they were recorded
    #[arg(conflicts_with = "file")]
    pub snippets: Vec<String>,

    /// Read a JSON request ({"snippetContents": [...]}) from a file, or "-" for stdin
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// JSON request document accepted on stdin or from a file.
#[derive(Debug, Deserialize, PartialEq)]
pub struct SnippetRequest {
    #[serde(rename = "snippetContents")]
    pub snippet_contents: Vec<String>,
}

impl SnippetArgs {
    /// Collects the snippets from arguments or from the request document.
    ///
    /// An empty result is returned as-is; rejecting it is the core's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request document cannot be read or is not valid JSON.
    pub fn collect(&self) -> AppResult<Vec<String>> {
        let Some(path) = &self.file else {
            return Ok(self.snippets.clone());
        };

        let raw = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(path)?
        };

        parse_request(&raw)
    }
}

/// Parses a `{"snippetContents": [...]}` document.
pub fn parse_request(raw: &str) -> AppResult<Vec<String>> {
    let request: SnippetRequest = serde_json::from_str(raw)?;
    Ok(request.snippet_contents)
}
