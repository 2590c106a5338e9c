//! Small path and file helpers shared by the `tblin` crates.

use color_eyre::eyre::{eyre, ContextCompat, Report, Result, WrapErr};
use color_eyre::Help;
use log::debug;
use std::fmt::Debug;
use std::path::Path;

/// Get delimiter based on file extension.
///
/// ## Arguments
///
/// - `path` - File path.
///
/// ## Examples
///
/// - `.tsv` => `\t`
/// - `.txt` => `\t`
/// - `.csv` => `,`
///
/// Note that `.txt` is assumed to be tab-delimited!
///
/// ```rust
/// use tblin_utils::get_delimiter;
///
/// assert_eq!(get_delimiter(&"file.tsv")?, '\t');
/// assert_eq!(get_delimiter(&"file.csv")?, ',');
/// assert_eq!(get_delimiter(&"file.txt")?, '\t');
/// assert!(get_delimiter(&"file").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn get_delimiter<P>(path: &P) -> Result<char, Report>
where
    P: AsRef<Path> + Debug,
{
    let ext = path
        .as_ref()
        .extension()
        .wrap_err_with(|| format!("Failed to get file extension: {path:?}"))?
        .to_str()
        .wrap_err_with(|| format!("Failed to convert file extension to str: {path:?}"))?;
    // convert extension to the expected delimiter
    match ext {
        "tsv" | "txt" => Ok('\t'),
        "csv" => Ok(','),
        _ext => {
            Err(eyre!("Unknown file extension: {_ext:?}").suggestion("Options: tsv, csv, or txt"))
        }
    }
}

/// Create the parent directory of a file path, if it does not exist yet.
///
/// ```rust
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("a").join("b").join("report.txt");
/// tblin_utils::create_parent_dir(&path)?;
/// assert!(dir.path().join("a").join("b").exists());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn create_parent_dir<P>(path: &P) -> Result<(), Report>
where
    P: AsRef<Path> + Debug,
{
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory: {parent:?}");
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directory: {parent:?}"))?;
        }
    }
    Ok(())
}

/// Returns the part of a file name before the first `separator`.
///
/// Per-sample files are named `<sample>_<suffix>`, so this recovers the sample.
///
/// ```rust
/// use tblin_utils::file_name_prefix;
///
/// assert_eq!(file_name_prefix(&"out/SRR123_Lineage.txt", '_')?, "SRR123");
/// assert_eq!(file_name_prefix(&"SRR123.txt", '_')?, "SRR123.txt");
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn file_name_prefix<P>(path: &P, separator: char) -> Result<String, Report>
where
    P: AsRef<Path> + Debug,
{
    let name = path
        .as_ref()
        .file_name()
        .wrap_err_with(|| format!("Failed to get file name: {path:?}"))?
        .to_str()
        .wrap_err_with(|| format!("Failed to convert file name to str: {path:?}"))?;
    let prefix = name.split(separator).next().unwrap_or(name);
    Ok(prefix.to_string())
}
