mod audit;
mod cli;
mod config;
mod engine;
mod error;
mod report;
mod snapshot;
mod types;
mod validate;

use crate::error::TallyError;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, TallyError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Results(cmd) => {
            let snapshot = snapshot::load(&cmd.path)?;
            if !matches!(snapshot.festival.status.as_str(), "" | "en-revision" | "finalizado") {
                tracing::warn!(
                    status = %snapshot.festival.status,
                    "festival is not in a review phase; results may be partial"
                );
            }
            let cfg = config::load_config(&cmd.path)?.unwrap_or_default();

            let bundle = engine::aggregate(
                &snapshot.rubric,
                &snapshot.festival.entrants,
                &snapshot.votes,
                &snapshot.penalties,
            );

            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let options = report::RenderOptions {
                decimals: cfg.output.decimals,
                full_ranking: cmd.full || cfg.output.full_ranking,
            };
            let rendered = report::render(&snapshot, &bundle, format, &options)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Audit(cmd) => {
            let snapshot = snapshot::load(&cmd.path)?;
            let report = audit::audit(&snapshot);

            if report.findings.is_empty() {
                println!("audit: all assigned votes present and complete");
                return Ok(exit_code::SUCCESS);
            }
            for finding in &report.findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.body);
            }
            if report.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let snapshot = snapshot::load(&cmd.path)?;
            let findings = validate::validate(&snapshot);

            if findings.is_empty() {
                println!("validate: rubric and penalties are consistent");
                return Ok(exit_code::SUCCESS);
            }
            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }
            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
