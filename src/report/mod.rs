//! Rebuild a verdict table from a narrative, and summarize verdict tables for reports.

use crate::export::{verdict_table, VERDICT_HEADERS};
use crate::resolve::{Outcome, Verdict, INDETERMINATE, NO_INFORMATIVE_MARKERS};

#[cfg(feature = "cli")]
use clap::Parser;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tblin_table::Table;

#[cfg(test)]
mod tests;

/// Summary of a sample without a usable lineage.
pub const NO_RESULT: &str = "NoResult";

// ----------------------------------------------------------------------------
// Report
// ----------------------------------------------------------------------------

/// Rebuild the verdict table of a sample from its narrative file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
pub struct ReportArgs {
    /// Narrative file (<sample>_Lineage.txt).
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub narrative: PathBuf,

    /// Output verdict table.
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub output: PathBuf,

    /// Sample ID, defaults to the narrative file name up to the first '_'.
    #[cfg_attr(feature = "cli", clap(short = 's', long))]
    pub sample: Option<String>,
}

/// Returns the [`Outcome`] stated by a narrative.
///
/// The last final statement in the narrative wins.
///
/// ```rust
/// use tblin::report::outcome_from_narrative;
/// use tblin::resolve::Outcome;
///
/// let narrative = "SNP 8624 suggests M. bovis-BCG\nLineage: Bovis-BCG\n";
/// assert_eq!(outcome_from_narrative(narrative)?, Outcome::Animal(tblin::lineage::Animal::BovisBcg));
/// assert!(outcome_from_narrative("SNP 1 suggests lineage: 4\n").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn outcome_from_narrative(narrative: &str) -> Result<Outcome, Report> {
    narrative
        .lines()
        .filter_map(Outcome::from_statement)
        .last()
        .ok_or_else(|| eyre!("No lineage statement found in narrative."))
        .suggestion("The narrative must contain a line such as 'Lineage: 4 Euro-American'.")
}

/// Rebuild and write the verdict table of a narrative file.
pub fn report(args: &ReportArgs) -> Result<Table<String>, Report> {
    info!("Reading narrative: {:?}", args.narrative);
    let narrative = std::fs::read_to_string(&args.narrative)
        .wrap_err_with(|| format!("Failed to read narrative: {:?}", args.narrative))?;
    let outcome = outcome_from_narrative(&narrative)
        .wrap_err_with(|| format!("Failed to parse narrative: {:?}", args.narrative))?;

    let sample_id = match &args.sample {
        Some(sample) => sample.clone(),
        None => tblin_utils::file_name_prefix(&args.narrative, '_')?,
    };

    let table = verdict_table(&Verdict::new(&sample_id, outcome))?;
    tblin_utils::create_parent_dir(&args.output)?;
    table.write(&args.output, Some('\t'))?;
    info!("Wrote verdict: {:?}", args.output);

    Ok(table)
}

// ----------------------------------------------------------------------------
// Summary
// ----------------------------------------------------------------------------

/// Summarize the lineage of one sample in a verdict table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
pub struct SummaryArgs {
    /// Verdict table (<sample>.lineage_report.txt).
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub table: PathBuf,

    /// The sample ID.
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub sample: String,
}

/// Returns the one-line summary of a verdict row.
///
/// ```rust
/// use tblin::report::summarize;
///
/// assert_eq!(summarize("4", "Euro-American"), "Euro-American (L4)");
/// assert_eq!(summarize("mixed lineage(s)", "mixed lineage(s)"), "NoResult");
/// ```
pub fn summarize(lineage: &str, lineage_name: &str) -> String {
    match lineage_name {
        INDETERMINATE | NO_INFORMATIVE_MARKERS => NO_RESULT.to_string(),
        _ => format!("{lineage_name} (L{lineage})"),
    }
}

/// Look up a sample in a verdict table and summarize its lineage.
pub fn summary(args: &SummaryArgs) -> Result<String, Report> {
    let table = Table::read(&args.table, Some('\t'))?;
    let [sample_h, lineage_h, name_h] = VERDICT_HEADERS.map(String::from);

    let row = table
        .get_column(&sample_h)?
        .into_iter()
        .position(|sample| sample == &args.sample)
        .ok_or_else(|| eyre!("Sample {:?} was not found in: {:?}", args.sample, args.table))?;

    let lineage = table.get(&lineage_h, row)?;
    let lineage_name = table.get(&name_h, row)?;
    Ok(summarize(lineage, lineage_name))
}
