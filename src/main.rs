// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use wordcue::app_config::{self, Config, EmptyEntryPolicy};
use wordcue::{AppError, Controller};

const DEFAULT_CONFIG_PATH: &str = "conf.json";

const USAGE: &str = "wordcue --input <INPUT_FILE> --output <OUTPUT_FILE>";

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

/// CLI Wrapper for EmptyEntryPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliEmptyEntryPolicy {
    Skip,
    Fail,
}

impl From<CliEmptyEntryPolicy> for EmptyEntryPolicy {
    fn from(cli_policy: CliEmptyEntryPolicy) -> Self {
        match cli_policy {
            CliEmptyEntryPolicy::Skip => EmptyEntryPolicy::Skip,
            CliEmptyEntryPolicy::Fail => EmptyEntryPolicy::Fail,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for wordcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// wordcue - split SRT subtitles into one cue per word
///
/// Every dialogue line becomes one cue per word. The words share the
/// original time span evenly, and cues are renumbered from 1.
#[derive(Parser, Debug)]
#[command(name = "wordcue")]
#[command(version)]
#[command(about = "Split SRT subtitles into one cue per word")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "wordcue rewrites an SRT file so that each word gets its own cue.

EXAMPLES:
    wordcue -i movie.srt -o movie.words.srt             # Convert with defaults
    wordcue -i movie.srt -o out.srt --empty-entries fail # Abort on entries without text
    wordcue -i movie.srt -o out.srt -l debug            # Verbose logging
    wordcue completions bash > wordcue.bash             # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json in the working directory when present,
    or from the file given with --config. Command line options take precedence.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input SRT file
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Output SRT file (created or truncated)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "CONFIG_FILE")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// What to do with entries that have no words
    #[arg(long, value_enum)]
    empty_entries: Option<CliEmptyEntryPolicy>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering follows log::max_level, which the CLI and config adjust later
        let logger = Box::new(CustomLogger);
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
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
            let (emoji, colour) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Info until the configuration says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            println!("{}", e.to_string().trim_end());
            return ExitCode::from(AppError::Usage(String::new()).exit_code());
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "wordcue", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run_convert(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_convert(options: CommandLineOptions) -> Result<(), AppError> {
    let (Some(input), Some(output)) = (options.input, options.output) else {
        return Err(AppError::Usage(format!(
            "both --input and --output are required\nUsage: {}",
            USAGE
        )));
    };

    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &options.log_level {
        let log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(log_level.to_level_filter());
    }

    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path),
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    }
    .map_err(|e| AppError::Config(format!("{:#}", e)))?;

    // Override config with CLI options if provided
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if let Some(policy) = options.empty_entries {
        config.splitting.empty_entries = policy.into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!(
        "Empty entry policy: {}, log level: {:?}",
        config.splitting.empty_entries, config.log_level
    );

    let controller = Controller::with_config(config);
    controller.convert_file(&input, &output)?;

    Ok(())
}
