// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use caption_seek::app_config::{Config, LogLevel, RetrievalConfig};
use caption_seek::captions::{
    CaptionEntry, InPageTrackSource, RemoteManifestSource, TranscriptSource, format_timestamp, normalize_text, search,
};
use caption_seek::errors::{AppError, CaptionError};
use caption_seek::fetch::http::HttpFetcher;
use caption_seek::identifier::resolve_video_id;
use caption_seek::language_utils;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Where captions come from
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Video id or watch-page URL
    #[arg(value_name = "VIDEO")]
    page: Option<String>,

    /// Preferred caption language (e.g. 'en', 'es', 'pt-BR')
    #[arg(short = 'L', long)]
    lang: Option<String>,

    /// JSON snapshot of the page's <track> elements; read instead of the network
    #[arg(short, long, value_name = "SNAPSHOT")]
    tracks: Option<PathBuf>,

    /// With --tracks, fetch from the network when the snapshot yields no captions
    #[arg(long, requires = "tracks")]
    fallback_to_network: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the captions of a video for a phrase
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Text to look for (case-insensitive)
        #[arg(short, long)]
        query: String,
    },

    /// Print every caption entry of a video
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for caption-seek
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// caption-seek - search inside a video's spoken captions
#[derive(Parser, Debug)]
#[command(name = "caption-seek")]
#[command(version)]
#[command(about = "Search the captions of a video and jump to the matching moment")]
#[command(long_about = "caption-seek reads the captions of a video watch page and lists the moments
where a phrase is spoken, each with a link that starts playback there.

EXAMPLES:
    caption-seek search dQw4w9WgXcQ -q 'never gonna'
    caption-seek search 'https://www.youtube.com/watch?v=dQw4w9WgXcQ' -q give -L en
    caption-seek search -t tracks.json -q hello
    caption-seek search dQw4w9WgXcQ -t tracks.json --fallback-to-network -q hello
    caption-seek list dQw4w9WgXcQ --json
    caption-seek completions bash > caption-seek.bash

CONFIGURATION:
    Configuration is stored in caption-seek.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "caption-seek.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation; filtering follows log::max_level()
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at warn; the config or CLI level is applied once known
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "caption-seek", &mut std::io::stdout());
        }
        Commands::Search { source, query } => {
            let config = load_config(&cli.config_path, cli.log_level, &source)?;
            run_search(&config, &source, &query).await?;
        }
        Commands::List { source, json } => {
            let config = load_config(&cli.config_path, cli.log_level, &source)?;
            run_list(&config, &source, json).await?;
        }
    }

    Ok(())
}

// Load or create the config file, then apply CLI overrides and the log level
fn load_config(path: &Path, log_level: Option<CliLogLevel>, source: &SourceArgs) -> Result<Config> {
    let mut config = Config::load_or_create(path)?;

    if let Some(lang) = &source.lang {
        config.retrieval.lang = Some(lang.clone());
    }
    if let Some(level) = log_level {
        config.log_level = level.into();
    }

    log::set_max_level((&config.log_level).into());

    config.validate()
        .map_err(|e| AppError::Config(format!("{:#}", e)))
        .context("Configuration validation failed")?;

    if let Some(lang) = config.retrieval.lang() {
        if let Ok(name) = language_utils::get_language_name(lang) {
            debug!("Caption language preference: {} ({})", lang, name);
        }
    }

    Ok(config)
}

// Run the configured transcript source(s)
//
// With a snapshot the in-page source is used; the network path is only taken
// when no snapshot is given, or when the snapshot is empty and fallback is on.
async fn fetch_entries(config: &RetrievalConfig, source: &SourceArgs) -> Result<Vec<CaptionEntry>, AppError> {
    if let Some(path) = &source.tracks {
        let snapshot = std::fs::read_to_string(path)?;
        let in_page = InPageTrackSource::from_json(&snapshot)?;
        let entries = run_source(&in_page, config).await?;

        if !entries.is_empty() || !source.fallback_to_network {
            return Ok(entries);
        }
        info!("No captions in track snapshot, falling back to network");
    }

    let page = source
        .page
        .as_deref()
        .ok_or_else(|| AppError::Config("A video id or URL is required".to_string()))?;

    let remote = RemoteManifestSource::for_page(HttpFetcher::from_config(config), page)?;
    Ok(run_source(&remote, config).await?)
}

async fn run_source(source: &dyn TranscriptSource, config: &RetrievalConfig) -> Result<Vec<CaptionEntry>, CaptionError> {
    debug!("Reading captions from {} source", source.name());
    source.fetch_captions(config).await
}

async fn run_search(config: &Config, source: &SourceArgs, query: &str) -> Result<(), AppError> {
    let entries = match fetch_entries(&config.retrieval, source).await {
        Ok(entries) => entries,
        Err(e) => {
            // Any failure reads as "no results" to the user; the kind goes to the log
            match &e {
                AppError::Caption(caption_error) => error!("[{}] {}", caption_error.kind(), caption_error),
                other => error!("{}", other),
            }
            println!("No matches found.");
            return Ok(());
        }
    };

    let matches = search(&entries, query);
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    let watch_url = source
        .page
        .as_deref()
        .and_then(|page| resolve_video_id(page).ok())
        .and_then(|id| id.watch_url(&config.retrieval.watch_url).ok());

    for found in &matches {
        match &watch_url {
            Some(url) => println!("{}  {}&t={}s", found, url, found.start().floor() as u64),
            None => println!("{}", found),
        }
    }

    Ok(())
}

async fn run_list(config: &Config, source: &SourceArgs, json: bool) -> Result<(), AppError> {
    let entries = fetch_entries(&config.retrieval, source).await?;

    if json {
        let out = serde_json::to_string_pretty(&entries).map_err(|e| anyhow!("Failed to serialize captions: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for entry in &entries {
        println!("{} - {}", format_timestamp(entry.start), normalize_text(&entry.text));
    }

    Ok(())
}
