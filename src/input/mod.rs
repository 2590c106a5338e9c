//! Load the marker reference panel and the sample variant calls.

use crate::error::TableError;
use crate::lineage::Label;

#[cfg(feature = "cli")]
use clap::Args as ClapArgs;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use tblin_table::Table;

#[cfg(test)]
mod tests;

/// Input tables are always tab-delimited, whatever their extension.
pub const INPUT_DELIMITER: char = '\t';

/// Returns the index of a required column.
///
/// Leading `#` characters and surrounding whitespace are ignored on the
/// table headers, so `##Lineage` matches the column `Lineage`.
fn column_index(table: &Table<String>, column: &str, kind: &'static str) -> Result<usize, TableError> {
    table
        .headers
        .iter()
        .position(|header| header.trim().trim_start_matches('#').trim() == column)
        .ok_or_else(|| TableError::MissingColumn {
            kind,
            column: column.to_string(),
            path: table.path.clone(),
        })
}

// ----------------------------------------------------------------------------
// Markers
// ----------------------------------------------------------------------------

/// Column names of the marker reference table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "cli", derive(ClapArgs))]
pub struct MarkerColumns {
    /// Marker table column with the genomic position.
    #[cfg_attr(feature = "cli", arg(id = "marker_position_column", long = "marker-position-column", default_value_t = MarkerColumns::default().position))]
    pub position: String,

    /// Marker table column with the dot-separated lineage label.
    #[cfg_attr(feature = "cli", arg(id = "marker_lineage_column", long = "marker-lineage-column", default_value_t = MarkerColumns::default().lineage))]
    pub lineage: String,

    /// Marker table column with the expected alternate allele.
    #[cfg_attr(feature = "cli", arg(id = "marker_allele_column", long = "marker-allele-column", default_value_t = MarkerColumns::default().allele))]
    pub allele: String,
}

impl Default for MarkerColumns {
    fn default() -> Self {
        MarkerColumns {
            position: "Position".to_string(),
            lineage: "Lineage".to_string(),
            allele: "Alt".to_string(),
        }
    }
}

/// One row of the marker reference panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerRecord {
    pub position: String,
    /// [`None`] for markers that carry no lineage label, these never produce evidence.
    pub label: Option<Label>,
    /// Expected alternate allele.
    pub allele: String,
}

/// The marker reference panel, keyed by genomic position.
#[derive(Clone, Debug, Default)]
pub struct MarkerPanel {
    markers: HashMap<String, MarkerRecord>,
}

impl MarkerPanel {
    /// Read the marker panel from a tab-delimited file.
    pub fn read<P>(path: &P, columns: &MarkerColumns) -> Result<MarkerPanel, Report>
    where
        P: AsRef<Path> + Debug,
    {
        info!("Reading markers: {path:?}");
        let table = Table::read(path, Some(INPUT_DELIMITER))?;
        let panel = MarkerPanel::from_table(&table, columns)
            .wrap_err_with(|| format!("Failed to load markers: {path:?}"))?;
        Ok(panel)
    }

    /// Build the marker panel from an already parsed [`Table`].
    ///
    /// When a position appears more than once, the last row wins.
    ///
    /// ```rust
    /// use tblin::input::{MarkerColumns, MarkerPanel};
    /// use tblin_table::Table;
    ///
    /// let mut table = Table::new();
    /// table.headers = ["Position", "Lineage", "Alt"].map(String::from).to_vec();
    /// table.add_row(["1", "4.3", "A"].map(String::from))?;
    /// table.add_row(["1", "2", "G"].map(String::from))?;
    ///
    /// let panel = MarkerPanel::from_table(&table, &MarkerColumns::default())?;
    /// assert_eq!(panel.len(), 1);
    /// assert_eq!(panel.get("1").map(|m| m.allele.as_str()), Some("G"));
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn from_table(table: &Table<String>, columns: &MarkerColumns) -> Result<MarkerPanel, TableError> {
        let position_i = column_index(table, &columns.position, "marker")?;
        let lineage_i = column_index(table, &columns.lineage, "marker")?;
        let allele_i = column_index(table, &columns.allele, "marker")?;

        let mut markers = HashMap::new();
        for (i, row) in table.rows.iter().enumerate() {
            let position = row[position_i].trim().to_string();
            if position.is_empty() {
                return Err(TableError::EmptyPosition { kind: "marker", row: i + 1, path: table.path.clone() });
            }

            let label = match row[lineage_i].trim() {
                "" => None,
                text => Some(text.parse::<Label>().map_err(|source| TableError::MalformedLabel {
                    position: position.clone(),
                    source,
                })?),
            };
            let allele = row[allele_i].trim().to_string();

            let marker = MarkerRecord { position: position.clone(), label, allele };
            if let Some(previous) = markers.insert(position, marker) {
                warn!("Duplicate marker position {}, keeping the last row.", previous.position);
            }
        }

        debug!("Loaded {} markers from {} rows.", markers.len(), table.rows.len());
        Ok(MarkerPanel { markers })
    }

    /// Returns the marker at a genomic position.
    pub fn get(&self, position: &str) -> Option<&MarkerRecord> {
        self.markers.get(position)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Variants
// ----------------------------------------------------------------------------

/// Column names of the sample variant table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "cli", derive(ClapArgs))]
pub struct VariantColumns {
    /// Variant table column with the genomic position.
    #[cfg_attr(feature = "cli", arg(id = "variant_position_column", long = "variant-position-column", default_value_t = VariantColumns::default().position))]
    pub position: String,

    /// Variant table column with the observed alternate allele.
    #[cfg_attr(feature = "cli", arg(id = "variant_allele_column", long = "variant-allele-column", default_value_t = VariantColumns::default().allele))]
    pub allele: String,
}

impl Default for VariantColumns {
    fn default() -> Self {
        VariantColumns { position: "POS".to_string(), allele: "ALT".to_string() }
    }
}

/// One observed variant of the sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariantCall {
    pub position: String,
    /// Observed alternate allele.
    pub allele: String,
}

impl VariantCall {
    pub fn new(position: &str, allele: &str) -> Self {
        VariantCall { position: position.to_string(), allele: allele.to_string() }
    }
}

/// Read the sample variant calls from a tab-delimited file, in file order.
pub fn read_variants<P>(path: &P, columns: &VariantColumns) -> Result<Vec<VariantCall>, Report>
where
    P: AsRef<Path> + Debug,
{
    info!("Reading variants: {path:?}");
    let table = Table::read(path, Some(INPUT_DELIMITER))?;
    let variants = variants_from_table(&table, columns)
        .wrap_err_with(|| format!("Failed to load variants: {path:?}"))?;
    Ok(variants)
}

/// Build the sample variant calls from an already parsed [`Table`].
pub fn variants_from_table(
    table: &Table<String>,
    columns: &VariantColumns,
) -> Result<Vec<VariantCall>, TableError> {
    let position_i = column_index(table, &columns.position, "variant")?;
    let allele_i = column_index(table, &columns.allele, "variant")?;

    let variants = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let position = row[position_i].trim();
            if position.is_empty() {
                return Err(TableError::EmptyPosition { kind: "variant", row: i + 1, path: table.path.clone() });
            }
            Ok(VariantCall::new(position, row[allele_i].trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} variants.", variants.len());
    Ok(variants)
}
