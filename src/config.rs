// src/config.rs
use crate::constants::{DEFAULT_CONTENT_DIR, DEFAULT_STRAPI_URL, STRAPI_URL_ENV};
use crate::error::AppError;
use crate::types::ValidatedUrl;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Strapi base URL (falls back to $STRAPI_URL, then http://localhost:1337)
    #[arg(long, global = true)]
    pub strapi_url: Option<String>,

    /// Directory collection entries are written into
    #[arg(short = 'd', long, global = true)]
    pub content_dir: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the global single type and print it as JSON
    Global,
    /// Fetch the landing-page envelope and print it as JSON
    Landing,
    /// Load the posts and pages collections into the content directory
    Sync,
    /// Check every populate definition against the model types and schemas
    Audit,
    /// Emit the backend schema declarations as Strapi schema.json files
    Schema {
        /// Write files under this directory instead of printing them
        #[arg(short, long)]
        out_dir: Option<String>,
    },
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub command: Command,
    pub strapi_url: ValidatedUrl,
    pub content_dir: PathBuf,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let from_env = std::env::var(STRAPI_URL_ENV).ok();
        Self::resolve_with(cli, from_env)
    }

    /// Resolution with the environment value passed in.
    ///
    /// Precedence: `--strapi-url`, then `STRAPI_URL`, then the default.
    pub fn resolve_with(cli: CommandLineInput, env_url: Option<String>) -> Result<Self, AppError> {
        let raw_url = cli
            .strapi_url
            .or_else(|| env_url.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_STRAPI_URL.to_string());
        let strapi_url = ValidatedUrl::parse(raw_url.trim())?;

        let content_dir = cli
            .content_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));

        Ok(SiteConfig {
            command: cli.command,
            strapi_url,
            content_dir,
            verbose: cli.verbose,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            command: Command::Audit,
            strapi_url: ValidatedUrl::parse(DEFAULT_STRAPI_URL)
                .expect("Default Strapi URL should be valid"),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            verbose: false,
        }
    }
}
