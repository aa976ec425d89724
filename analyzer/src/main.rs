//! Agent log failure analyzer.
//!
//! Reads a recorded agent run (`agent_data.json` style logs), classifies
//! strategic confusion, execution errors, and repeated-command loops, and
//! reports them to stdout, a file, or the structured log.

use std::path::{Path, PathBuf};

use analyzer::analyze::{AnalyzeOptions, run_analyze, run_extract};
use analyzer::exit_codes;
use analyzer::io::config::{DEFAULT_CONFIG_FILE, ReportFormat, load_config};
use analyzer::io::remediation::{CommandRemediator, Remediator};
use analyzer::io::report::{Sink, summary_line};
use analyzer::logging;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "analyzer",
    version,
    about = "Classify failures in recorded autonomous-agent runs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect failures in a log and report them.
    Analyze {
        /// Path to the JSON log.
        log: PathBuf,
        /// Report format (overrides `report.format` in the config).
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        /// Write the report to this file instead of stdout.
        #[arg(short, long, conflicts_with = "log_sink")]
        output: Option<PathBuf>,
        /// Emit failures as `warn` events on the diagnostic log instead of stdout.
        #[arg(long)]
        log_sink: bool,
        /// Ask the configured remediation command for a next command per failure.
        #[arg(long)]
        suggest: bool,
        /// Append every extracted model response to this file.
        #[arg(long)]
        dump_responses: Option<PathBuf>,
        /// Config file (defaults to `analyzer.toml` in the working directory).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the responses count and command list the extractor finds.
    Extract {
        /// Path to the JSON log.
        log: PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            log,
            format,
            output,
            log_sink,
            suggest,
            dump_responses,
            config,
        } => {
            let sink = match (output, log_sink) {
                (Some(path), _) => Sink::File(path),
                (None, true) => Sink::Log,
                (None, false) => Sink::Stdout,
            };
            cmd_analyze(
                log,
                format,
                sink,
                suggest,
                dump_responses,
                config.as_deref(),
            )
        }
        Command::Extract { log } => cmd_extract(&log),
    }
}

fn cmd_analyze(
    log_path: PathBuf,
    format: Option<ReportFormat>,
    sink: Sink,
    suggest: bool,
    dump_responses: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let config = load_config(config_path).context("load config")?;
    debug!(config = %config_path.display(), "config loaded");

    let remediator = if suggest {
        match CommandRemediator::from_config(&config.remediation) {
            Some(remediator) => Some(remediator),
            None => bail!(
                "--suggest requires remediation.command in {}",
                config_path.display()
            ),
        }
    } else {
        None
    };

    let options = AnalyzeOptions {
        log_path,
        format: format.unwrap_or(config.report.format),
        sink,
        dump_responses,
    };
    let outcome = run_analyze(
        &options,
        remediator.as_ref().map(|remediator| remediator as &dyn Remediator),
    )?;
    eprintln!("{}", summary_line(&outcome.summary));
    Ok(())
}

fn cmd_extract(log_path: &Path) -> Result<()> {
    let summary = run_extract(log_path)?;
    let rendered = serde_json::to_string_pretty(&summary).context("serialize extraction")?;
    println!("{rendered}");
    Ok(())
}
