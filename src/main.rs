// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;

use lipi::app_config::{self, Config};
use lipi::errors::AppError;
use lipi::{ResolverContext, TranslateOptions, TranslationMode};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for TranslationMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMode {
    Auto,
    Translate,
    Convert,
}

impl From<CliMode> for TranslationMode {
    fn from(cli_mode: CliMode) -> Self {
        match cli_mode {
            CliMode::Auto => TranslationMode::Auto,
            CliMode::Translate => TranslationMode::Translate,
            CliMode::Convert => TranslationMode::Convert,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a message, or convert it to native script
    Translate {
        /// Message text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language (name, alias or ISO code)
        #[arg(short, long)]
        target_language: String,

        /// Source language; detected when omitted
        #[arg(short, long)]
        source_language: Option<String>,

        /// Resolution mode
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: CliMode,
    },

    /// Convert romanized text into a language's native script
    Convert {
        /// Romanized text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language (name, alias or ISO code)
        #[arg(short, long)]
        target_language: String,
    },

    /// Detect the language of a message
    Detect {
        /// Message text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language to favour for ambiguous romanized input
        #[arg(long)]
        hint: Option<String>,
    },

    /// Generate shell completions for lipi
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lipi - script conversion and translation for chat messages
#[derive(Parser, Debug)]
#[command(name = "lipi")]
#[command(version)]
#[command(about = "Script conversion and translation for chat messages")]
#[command(long_about = "lipi detects the language of a chat message, converts romanized input into native script and translates it through offline dictionaries and an optional Ollama backend.

EXAMPLES:
    lipi translate \"thank you\" -t hindi          # Dictionary translation
    lipi translate \"namaste\" -t hi               # Romanized Hindi to Devanagari
    lipi translate \"good night\" -t te -m translate
    lipi convert \"emi chesthunnavu\" -t telugu    # Script conversion only
    lipi detect \"Wie geht es dir?\"               # Language detection
    lipi completions bash > lipi.bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => "",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Everything up to trace is let through; the max level filters
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "lipi", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_or_create_config(&cli.config_path, cli.log_level.clone())?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let context = ResolverContext::from_config(&config)?;

    match cli.command {
        Commands::Translate { text, target_language, source_language, mode } => {
            let mut options = TranslateOptions::to(target_language).mode(mode.into());
            if let Some(source) = source_language {
                options = options.source(source);
            }

            let result = context.translate(&text, &options).await;
            debug!("Resolved with mode {:?}, translated: {}", result.mode, result.is_translated);
            print_json(&result)?;
        }
        Commands::Convert { text, target_language } => {
            println!("{}", context.convert_to_native_script(&text, &target_language));
        }
        Commands::Detect { text, hint } => {
            let hint = hint.or_else(|| config.detection.mother_tongue.clone());
            let detection = context.detect_language(&text, hint.as_deref());
            print_json(&detection)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Load the configuration file, writing a default one when it does not exist
fn load_or_create_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }

    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))
        .context("Configuration validation failed")?;

    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
