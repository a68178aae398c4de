use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "advising",
    version,
    about = "First-year schedule risk advising CLI"
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
    /// Assess the risk of a proposed schedule for one student
    Assess(AssessCommand),
    /// Show the strength score breakdown for one student
    Strength(StrengthCommand),
    /// List catalog courses with pass and DFW rates
    Catalog(CatalogCommand),
}

#[derive(Args)]
pub struct DataArgs {
    /// Directory holding advising.toml and the CSV data files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

#[derive(Args)]
pub struct AssessCommand {
    #[arg(long)]
    pub student: String,
    /// Course to schedule (repeat for each course, up to 8)
    #[arg(long = "course", required = true)]
    pub courses: Vec<String>,
    /// Scheduled course with confirmed tutoring support
    #[arg(long = "tutor")]
    pub tutored: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct StrengthCommand {
    #[arg(long)]
    pub student: String,
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
