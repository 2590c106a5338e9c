//! [Command-line interface](Cli) (CLI) of the main binary.

use crate::report::{ReportArgs, SummaryArgs};
use crate::run::ClassifyArgs;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};


// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
/// ---
/// The CLI is parsed from [`std::env::args`] in the main function.
/// ```rust
/// use clap::Parser;
/// let input = ["tblin", "classify", "markers.tsv", "SRR1.tsv", "SRR1", "--output-dir", "out"];
/// let args = tblin::Cli::parse_from(input);
/// serde_json::to_string_pretty(&args)?;
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
#[derive(Debug, Deserialize, Parser, Serialize)]
#[clap(name = "tblin", author, version)]
#[clap(about = "tblin assigns Mycobacterium tuberculosis complex lineages from lineage-informative SNPs.")]
pub struct Cli {
    #[clap(subcommand)]
    /// Pass CLI arguments to a particular [Command].
    #[clap(help = "Set the command.")]
    pub command: Command,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(hide_possible_values = false)]
    #[clap(global = true)]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

/// CLI [commands](#variants).
#[derive(Debug, Deserialize, Serialize, Subcommand)]
pub enum Command {
    #[clap(about = "Classify a sample and write its verdict and narrative.")]
    Classify(ClassifyArgs),
    #[clap(about = "Rebuild a verdict table from a narrative file.")]
    Report(ReportArgs),
    #[clap(about = "Summarize the lineage of a sample in a verdict table.")]
    Summary(SummaryArgs),
}

// -----------------------------------------------------------------------------
// Verbosity
// -----------------------------------------------------------------------------

/// The output verbosity level.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ValueEnum)]
pub enum Verbosity {
    #[default]
    Info,
    Warn,
    Debug,
    Error,
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // lowercase for RUST_LOG
        let lowercase = format!("{:?}", self).to_lowercase();
        write!(f, "{lowercase}")
    }
}
