//! Classify one sample: load inputs, extract evidence, resolve, and write the outputs.

use crate::evidence::Evidence;
use crate::export::{self, Outputs};
use crate::input::{read_variants, MarkerColumns, MarkerPanel, VariantColumns};
use crate::resolve::{resolve, Classification};

#[cfg(feature = "cli")]
use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};


// ----------------------------------------------------------------------------
// ClassifyArgs
// ----------------------------------------------------------------------------

/// Assign a lineage to a sample from its variant calls.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
pub struct ClassifyArgs {
    /// Table of known lineage markers.
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub markers: PathBuf,

    /// Table of annotated variants for this sample.
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub variants: PathBuf,

    /// The sample ID.
    #[cfg_attr(feature = "cli", arg(required = true))]
    pub sample: String,

    /// Output directory.
    ///
    /// If the directory does not exist, it will be created.
    #[cfg_attr(feature = "cli", clap(short = 'o', long, default_value_os_t = ClassifyArgs::default().output_dir))]
    pub output_dir: PathBuf,

    #[cfg_attr(feature = "cli", command(flatten))]
    pub marker_columns: MarkerColumns,

    #[cfg_attr(feature = "cli", command(flatten))]
    pub variant_columns: VariantColumns,

    /// Print the verdict as JSON instead of a table.
    #[cfg_attr(feature = "cli", arg(long))]
    #[serde(skip)]
    pub json: bool,
}

impl Default for ClassifyArgs {
    fn default() -> Self {
        ClassifyArgs {
            markers: PathBuf::new(),
            variants: PathBuf::new(),
            sample: String::new(),
            output_dir: PathBuf::from("."),
            marker_columns: MarkerColumns::default(),
            variant_columns: VariantColumns::default(),
            json: false,
        }
    }
}

impl ClassifyArgs {
    /// Returns new [`ClassifyArgs`] for the given inputs, with default columns.
    pub fn new<P>(markers: &P, variants: &P, sample: &str) -> Self
    where
        P: AsRef<Path>,
    {
        ClassifyArgs {
            markers: markers.as_ref().to_path_buf(),
            variants: variants.as_ref().to_path_buf(),
            sample: sample.to_string(),
            ..Default::default()
        }
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Classify a sample without writing any output.
///
/// Both tables are read completely before any evidence is extracted.
pub fn classify(args: &ClassifyArgs) -> Result<Classification, Report> {
    debug!(
        "Classify arguments: {}",
        serde_json::to_string(args).wrap_err("Failed to serialize classify arguments.")?
    );

    let panel = MarkerPanel::read(&args.markers, &args.marker_columns)?;
    let variants = read_variants(&args.variants, &args.variant_columns)?;
    info!("Loaded {} markers and {} variants.", panel.len(), variants.len());

    let evidence = Evidence::extract(&panel, &variants);
    let classification = resolve(&args.sample, &evidence);
    info!(
        "Sample {}: {} {}",
        args.sample, classification.verdict.lineage, classification.verdict.lineage_name
    );

    Ok(classification)
}

/// Classify a sample and write its verdict table and narrative.
pub fn run(args: &ClassifyArgs) -> Result<(Classification, Outputs), Report> {
    let classification = classify(args)?;
    let outputs = export::write(&classification, &args.output_dir)?;
    Ok((classification, outputs))
}
