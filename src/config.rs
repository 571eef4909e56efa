// src/config.rs
use crate::api::ClientOptions;
use crate::constants::CONTENTFUL_API_BASE_URL;
use crate::error::AppError;
use crate::types::{AccessToken, EntryId, SpaceId, ValidatedUrl};
use clap::Parser;
use std::time::Duration;

/// Environment variable holding the Content Management API token.
pub const ACCESS_TOKEN_ENV: &str = "CONTENTFUL_ACCESS_TOKEN";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Contentful entry ID of the article
    pub article_id: String,

    /// Contentful space that owns the article
    #[arg(short, long, env = "CONTENTFUL_SPACE_ID")]
    pub space_id: Option<String>,

    /// Content Management API base URL
    #[arg(long, env = "CONTENTFUL_API_URL", default_value = CONTENTFUL_API_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON result
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated and ready to drive a fetch.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub article_id: EntryId,
    pub space_id: SpaceId,
    pub access_token: AccessToken,
    pub api_url: ValidatedUrl,
    pub timeout: Option<Duration>,
    pub pretty: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(ACCESS_TOKEN_ENV).map_err(|_| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                ACCESS_TOKEN_ENV
            ))
        })?;
        Self::from_parts(cli, token)
    }

    /// Builds the configuration once the access token is known.
    pub fn from_parts(cli: CommandLineInput, access_token: String) -> Result<Self, AppError> {
        let space_id = cli.space_id.ok_or_else(|| {
            AppError::MissingConfiguration(
                "space ID not given (use --space-id or CONTENTFUL_SPACE_ID)".to_string(),
            )
        })?;

        Ok(AppConfig {
            article_id: EntryId::parse(&cli.article_id)?,
            space_id: SpaceId::parse(&space_id)?,
            access_token: AccessToken::new(access_token)?,
            api_url: ValidatedUrl::parse(&cli.api_url)?,
            timeout: cli.timeout.map(Duration::from_secs),
            pretty: cli.pretty,
            verbose: cli.verbose,
        })
    }

    /// Transport settings for the HTTP client.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: Some(self.api_url.clone()),
            timeout: self.timeout,
        }
    }
}
