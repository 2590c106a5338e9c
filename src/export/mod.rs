//! Write the [`Verdict`] table and the [`EvidenceLog`](crate::resolve::EvidenceLog) narrative.

use crate::resolve::{Classification, Verdict};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use log::{debug, info};
use std::fmt::Debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tblin_table::Table;
use tempfile::NamedTempFile;


/// Headers of the verdict table.
pub const VERDICT_HEADERS: [&str; 3] = ["Sample ID", "Lineage", "Lineage Name"];

/// Returns the 3-column verdict [`Table`] of a [`Verdict`].
///
/// ```rust
/// use tblin::export::verdict_table;
/// use tblin::resolve::{Outcome, Verdict};
///
/// let table = verdict_table(&Verdict::new("S1", Outcome::Indeterminate))?;
/// assert_eq!(table.rows, [["S1", "mixed lineage(s)", "mixed lineage(s)"]]);
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn verdict_table(verdict: &Verdict) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = VERDICT_HEADERS.map(String::from).to_vec();
    table.add_row([
        verdict.sample_id.clone(),
        verdict.lineage.to_string(),
        verdict.lineage_name.to_string(),
    ])?;
    Ok(table)
}

/// Returns the verdict as a table for the terminal.
#[cfg(feature = "cli")]
pub fn verdict_display(verdict: &Verdict) -> tabled::Table {
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(VERDICT_HEADERS);
    builder.push_record([verdict.sample_id.as_str(), verdict.lineage, verdict.lineage_name]);
    builder.build()
}

/// Paths of the two per-sample output files.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outputs {
    /// Verdict table: `<sample>.lineage_report.txt`
    pub verdict: PathBuf,
    /// Narrative: `<sample>_Lineage.txt`
    pub narrative: PathBuf,
}

impl Outputs {
    pub fn new<P>(output_dir: &P, sample_id: &str) -> Self
    where
        P: AsRef<Path>,
    {
        let output_dir = output_dir.as_ref();
        Outputs {
            verdict: output_dir.join(format!("{sample_id}.lineage_report.txt")),
            narrative: output_dir.join(format!("{sample_id}_Lineage.txt")),
        }
    }
}

/// Write `contents` to a temporary file next to the final output.
fn stage<P, F>(dir: &P, write: F) -> Result<NamedTempFile, Report>
where
    P: AsRef<Path> + Debug,
    F: FnOnce(&mut NamedTempFile) -> Result<(), Report>,
{
    let mut file = NamedTempFile::new_in(dir)
        .wrap_err_with(|| eyre!("Failed to create temporary file in: {dir:?}"))?;
    write(&mut file)?;
    file.flush().wrap_err("Failed to flush temporary file.")?;
    Ok(file)
}

/// Remove both output files after a failed commit.
///
/// `error` stays the cause, failed removals are attached as notes.
fn rollback(outputs: &Outputs, error: Report) -> Report {
    [&outputs.verdict, &outputs.narrative]
        .into_iter()
        .filter(|path| path.is_file())
        .fold(error, |error, path| match std::fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed after failed commit: {path:?}");
                error
            }
            Err(e) => error.with_note(|| format!("Failed to remove {path:?}: {e}")),
        })
}

/// Write both output files of a [`Classification`] into `output_dir`.
///
/// Both files are staged first and then moved into place. If the second move
/// fails, both final paths are cleared so no half-written result remains.
pub fn write<P>(classification: &Classification, output_dir: &P) -> Result<Outputs, Report>
where
    P: AsRef<Path> + Debug,
{
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        info!("Creating output directory: {output_dir:?}");
        std::fs::create_dir_all(output_dir)
            .wrap_err_with(|| eyre!("Failed to create output directory: {output_dir:?}"))?;
    }
    let outputs = Outputs::new(&output_dir, &classification.verdict.sample_id);

    let table = verdict_table(&classification.verdict)?;
    let verdict_file = stage(&output_dir, |file| table.write_to(file, '\t'))?;
    let narrative_file = stage(&output_dir, |file| {
        file.write_all(classification.log.to_string().as_bytes())
            .wrap_err("Failed to write narrative.")
    })?;

    debug!("Committing outputs: {outputs:?}");
    verdict_file
        .persist(&outputs.verdict)
        .map_err(|e| e.error)
        .wrap_err_with(|| eyre!("Failed to write verdict: {:?}", outputs.verdict))?;
    if let Err(e) = narrative_file.persist(&outputs.narrative) {
        let report = Report::new(e.error)
            .wrap_err(format!("Failed to write narrative: {:?}", outputs.narrative));
        return Err(rollback(&outputs, report));
    }

    info!("Wrote verdict: {:?}", outputs.verdict);
    info!("Wrote narrative: {:?}", outputs.narrative);
    Ok(outputs)
}
