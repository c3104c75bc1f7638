// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use keylight::app_config::{self, Config};
use keylight::app_controller::Controller;
use keylight::editor::{Editor, MemoryEditor, MemorySurface};
use keylight::file_utils::FileManager;
use keylight::highlight::segment;
use keylight::providers::analysis::AnalysisClient;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a document and write highlighted output files
    Analyze(AnalyzeArgs),

    /// Print the sentences of a document, one per line
    Segment {
        /// Text file to split
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Generate shell completions for keylight
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Plain text or markdown document to analyze
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Rendered markup to highlight (defaults to the input text itself)
    #[arg(long, value_name = "HTML_PATH")]
    html: Option<PathBuf>,

    /// Directory for output files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Analysis service base URL
    #[arg(short, long, env = "KEYLIGHT_ENDPOINT")]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// keylight - highlight important sentences and keywords
#[derive(Parser, Debug)]
#[command(name = "keylight")]
#[command(version)]
#[command(about = "Highlight important sentences and keywords using an analysis service")]
#[command(long_about = "keylight sends a document to an analysis service and highlights the important sentences and words it reports.

EXAMPLES:
    keylight analyze notes.md                          # Analyze using default config
    keylight analyze notes.md --html notes.html        # Highlight existing rendered markup
    keylight analyze -e http://localhost:5000 notes.md # Use a specific analysis service
    keylight segment notes.md                          # Print sentences, one per line
    keylight completions bash > keylight.bash          # Generate bash completions

OUTPUT:
    <stem>.highlighted.html  rendered markup with marked sentences and bold keywords
    <stem>.bold.md           document text with keywords wrapped in **
    <stem>.preview.html      preview of the bold document

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
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
            let (color, label) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start permissive; the effective level is applied once config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "keylight", &mut std::io::stdout());
            Ok(())
        }
        Commands::Segment { input_path } => {
            let text = FileManager::read_to_string(&input_path)?;
            for sentence in segment(&text) {
                println!("{}", sentence);
            }
            Ok(())
        }
        Commands::Analyze(args) => run_analyze(args).await,
    }
}

/// Load config, apply CLI overrides and validate
fn load_config(options: &AnalyzeArgs) -> Result<Config> {
    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(endpoint) = &options.endpoint {
        config.analysis.endpoint = endpoint.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

async fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    if !FileManager::file_exists(&options.input_path) {
        return Err(anyhow!("Input file does not exist: {:?}", options.input_path));
    }

    let output_dir = options.output_dir.clone().unwrap_or_else(|| {
        options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
    });
    let highlighted_path = FileManager::generate_output_path(&options.input_path, &output_dir, "highlighted.html");
    let bold_path = FileManager::generate_output_path(&options.input_path, &output_dir, "bold.md");
    let preview_path = FileManager::generate_output_path(&options.input_path, &output_dir, "preview.html");

    let existing = [&highlighted_path, &bold_path, &preview_path]
        .into_iter()
        .any(|path| path.exists());
    if existing && !options.force_overwrite {
        warn!("Skipping file, output already exists (use -f to force overwrite)");
        return Ok(());
    }

    let text = FileManager::read_to_string(&options.input_path)?;
    let html = match &options.html {
        Some(path) => FileManager::read_to_string(path)?,
        None => text.clone(),
    };

    let analyzer = Arc::new(AnalysisClient::from_config(&config.analysis));
    info!("Using analysis service at {}", analyzer.analyze_url());

    let controller = Controller::with_config(config, analyzer, MemorySurface::new(html));
    controller.attach_editor(MemoryEditor::new(text));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing document...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = controller.run_analysis().await;
    spinner.finish_and_clear();
    let result = outcome.map_err(|e| anyhow!("Analysis failed: {}", e))?;

    let (editor, surface) = controller.into_parts();
    if let Some(content) = surface.content {
        FileManager::write_to_file(&highlighted_path, &content)?;
    }
    if let Some(editor) = editor {
        FileManager::write_to_file(&bold_path, &editor.get_value())?;
    }
    if let Some(preview) = surface.preview {
        FileManager::write_to_file(&preview_path, &preview)?;
    }

    info!(
        "Success: {} sentence(s), {} keyword(s) -> {:?}",
        result.sentences.len(),
        result.words.len(),
        output_dir
    );
    Ok(())
}
