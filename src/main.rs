// src/main.rs

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
use std::path::Path;
use std::sync::Arc;
use strapi_blocks::analytics::{measure_collections, measure_content};
use strapi_blocks::output::{deliver, plan_schema, plan_stdout, OutputReport};
use strapi_blocks::pipeline::{self, DirectoryStore};
use strapi_blocks::{
    audit_all, AppError, Command, CommandLineInput, ContentFetcher, SiteConfig, StrapiHttpClient,
};

/// Sets up logging configuration.
///
/// Console output goes to stderr so `global`/`landing`/`schema` JSON on
/// stdout stays pipeable.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("strapi_blocks.log");
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

/// Dispatches one subcommand.
struct SiteCommand<'a> {
    config: &'a SiteConfig,
}

impl<'a> SiteCommand<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    fn fetcher(&self) -> Result<ContentFetcher, AppError> {
        log::info!("Using Strapi at {}", self.config.strapi_url);
        let client = StrapiHttpClient::new(self.config.strapi_url.clone())?;
        Ok(ContentFetcher::new(Arc::new(client)))
    }

    async fn run(&self) -> Result<(), AppError> {
        match &self.config.command {
            Command::Global => {
                let global = self.fetcher()?.get_global_page_data().await?;
                deliver(plan_stdout(&global)?)?.into_result()?;
            }
            Command::Landing => {
                let envelope = self.fetcher()?.get_landing_page_data().await?;
                deliver(plan_stdout(&envelope)?)?.into_result()?;
            }
            Command::Sync => self.sync().await?,
            Command::Audit => self.audit()?,
            Command::Schema { out_dir } => self.schema(out_dir.as_deref())?,
        }
        Ok(())
    }

    async fn sync(&self) -> Result<(), AppError> {
        let fetcher = self.fetcher()?;
        let store = DirectoryStore::new(&self.config.content_dir);
        let (collections, report) = pipeline::sync(&fetcher, &store).await?;

        let summary = measure_content(&collections);
        println!(
            "📄 Loaded {} post(s) and {} page(s) from Strapi.",
            summary.posts, summary.pages
        );
        log::info!("{}", measure_collections(&collections));
        self.report_writes(&report);
        Ok(())
    }

    fn audit(&self) -> Result<(), AppError> {
        let report = audit_all().into_result()?;
        for entry in &report.entries {
            println!("✓ {} populate covers its type and schema", entry.content_type);
        }
        Ok(())
    }

    fn schema(&self, out_dir: Option<&str>) -> Result<(), AppError> {
        match out_dir {
            Some(dir) => {
                let report = deliver(plan_schema(Path::new(dir))?)?.into_result()?;
                self.report_writes(&report);
            }
            None => {
                let schemas = serde_json::json!({
                    "components": strapi_blocks::schema::COMPONENTS
                        .iter()
                        .map(|c| (c.uid.to_string(), c.to_json()))
                        .collect::<serde_json::Map<_, _>>(),
                    "contentTypes": strapi_blocks::schema::CONTENT_TYPES
                        .iter()
                        .map(|c| (c.uid.to_string(), c.to_json()))
                        .collect::<serde_json::Map<_, _>>(),
                });
                deliver(plan_stdout(&schemas)?)?.into_result()?;
            }
        }
        Ok(())
    }

    fn report_writes(&self, report: &OutputReport) {
        println!(
            "✓ Wrote {} file(s), {} bytes",
            report.written.len(),
            report.bytes_written
        );
        if !report.removed.is_empty() {
            println!("🗑 Removed {} stale entr(ies)", report.removed.len());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    SiteCommand::new(&config).run().await?;

    Ok(())
}
