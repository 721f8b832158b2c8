use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Festival scoring CLI: aggregates judge votes into weighted rankings"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Results(ResultsCommand),
    Audit(AuditCommand),
    Validate(ValidateCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ResultsCommand {
    /// Snapshot file, or directory with festival.json, rubric.json, votes/, penalties/
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Include the full ranked list alongside the podium
    #[arg(long)]
    pub full: bool,
}

#[derive(Args)]
pub struct AuditCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
}
