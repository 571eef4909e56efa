// src/main.rs

use article_attribute::{AppConfig, AppError, ArticleAttributeFetcher, CommandLineInput};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout carries only the JSON record.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("article_attribute.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Connects, fetches the article once and prints its attributes as JSON.
async fn run(config: &AppConfig) -> Result<String, Box<dyn std::error::Error>> {
    log::info!(
        "Fetching article {} from space {} ({})",
        config.article_id,
        config.space_id,
        config.api_url
    );

    let mut fetcher = ArticleAttributeFetcher::connect(
        config.article_id.clone(),
        &config.access_token,
        &config.space_id,
        &config.client_options(),
    )
    .await?;

    let attributes = fetcher.get().await.inspect_err(|err: &AppError| {
        if err.is_not_found() {
            log::warn!("{}", err);
        }
    })?;

    let rendered = if config.pretty {
        serde_json::to_string_pretty(attributes)?
    } else {
        serde_json::to_string(attributes)?
    };
    Ok(rendered)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = AppConfig::resolve(cli)?;

    let rendered = run(&config).await?;
    println!("{}", rendered);

    Ok(())
}
