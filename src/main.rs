use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use hash_replicable::config::Config;
use hash_replicable::hash::{
    ensure_min_size, measure, throughput_mib_per_sec, HashComputer, HashResult, ReportWriter,
};

/// Environment variable holding the log level when `--log` is not given
const LOG_ENV: &str = "HASH_REPLICABLE_LOG";

/// Input name that reads standard input
const STDIN_ARG: &str = "-";

/// Reproducible block-chained file checksum.
///
/// The digest is a stable fingerprint for comparing files, not a
/// cryptographic hash: collisions are easy to construct.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Files to hash; `-` reads standard input
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Configuration file (defaults to the per-user config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the hash reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Refuse files smaller than this many bytes (0 accepts everything)
    #[arg(long, value_name = "BYTES")]
    min_size: Option<u64>,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Do not write report files
    #[arg(long)]
    no_save: bool,

    /// Print one JSON object per input instead of text
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log", value_name = "LEVEL")]
    log_level: Option<String>,
}

/// One `--json` output line
#[derive(Serialize)]
struct Record<'a> {
    #[serde(flatten)]
    result: &'a HashResult,
    report: Option<String>,
    elapsed_secs: f64,
}

/// What happens to one input besides hashing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plan {
    check_size: bool,
    save_report: bool,
}

impl Plan {
    /// Standard input has no size to check and no file name to report under
    fn for_input(path: &Path, config: &Config) -> Self {
        let is_stdin = path == Path::new(STDIN_ARG);
        Self {
            check_size: !is_stdin,
            save_report: config.save_report && !is_stdin,
        }
    }
}

fn init_logger(cli_level: Option<&str>) -> Result<()> {
    let level = match cli_level {
        Some(level) => Some(level.to_string()),
        None => std::env::var(LOG_ENV).ok(),
    };
    let level = match level {
        Some(level) => LevelFilter::from_str(&level)
            .map_err(|_| anyhow::anyhow!("invalid log level: {}", level))?,
        None => LevelFilter::Warn,
    };

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to install logger")
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(min) = cli.min_size {
        config.min_file_size = min;
    }
    if cli.no_progress {
        config.show_progress = false;
    }
    if cli.no_save {
        config.save_report = false;
    }
    config
}

/// Hash one input and print the outcome
fn process(
    path: &Path,
    config: &Config,
    computer: &HashComputer,
    writer: &ReportWriter,
    json: bool,
) -> Result<()> {
    let plan = Plan::for_input(path, config);
    if plan.check_size {
        ensure_min_size(path, config.min_file_size)?;
    }

    let timed = measure(|| {
        if plan.check_size {
            computer.compute_hash_with_progress(path, config.show_progress)
        } else {
            computer.compute_hash_stdin()
        }
    })
    .transpose()?;
    let result = &timed.value;

    let report = if plan.save_report {
        Some(writer.write(result)?)
    } else {
        None
    };

    let elapsed = timed.elapsed.as_secs_f64();
    log::debug!(
        "{}: {:.1} MiB/s",
        path.display(),
        throughput_mib_per_sec(result.size, timed.elapsed)
    );

    if json {
        let record = Record {
            result,
            report: report.as_deref().map(|p| p.to_string_lossy().into_owned()),
            elapsed_secs: elapsed,
        };
        let line = serde_json::to_string(&record).context("failed to serialize result")?;
        println!("{}", line);
    } else {
        println!("{} {}", "File:".bold(), result.file_path.display());
        println!("{} {}", "Hash:".bold(), result.hash.green());
        if let Some(report) = &report {
            println!("{} {}", "Saved to:".bold(), report.display());
        }
        println!("{} {:.4} s", "Elapsed:".bold(), elapsed);
    }

    Ok(())
}

/// Hash every input named on the command line
///
/// Every input is attempted; the run fails if any of them failed.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let config = apply_overrides(config, cli);
    log::debug!("{:?}", config);

    let computer = HashComputer::new();
    let writer = ReportWriter::new(&config.output_dir);

    let mut failures = 0;
    for path in &cli.files {
        if let Err(e) = process(path, &config, &computer, &writer, cli.json) {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} inputs could not be hashed", failures, cli.files.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref())?;
    run(&cli)
}
