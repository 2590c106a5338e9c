//! Match observed variants against the marker panel and the special tags.

use crate::input::{MarkerPanel, VariantCall};
use crate::lineage::{Animal, Label, SpecialTag};
use log::debug;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

#[cfg(test)]
mod tests;

/// Everything a sample's variants say about its lineage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evidence {
    /// Single-level labels with a matching marker, in variant order.
    pub lineages: Vec<Label>,
    /// Multi-level labels with a matching marker, in variant order.
    pub sublineages: Vec<Label>,
    /// Special tags whose position was observed.
    pub tags: BTreeSet<SpecialTag>,
    /// Narrative lines, in the order the evidence was found.
    pub narrative: Vec<String>,
}

impl Evidence {
    /// Collect the [`Evidence`] of `variants` against the marker `panel`.
    ///
    /// A variant is evidence only if its position is a labelled marker and its
    /// allele equals the marker allele. Special tags are detected by position alone.
    ///
    /// ```rust
    /// use tblin::evidence::Evidence;
    /// use tblin::input::{MarkerColumns, MarkerPanel, VariantCall};
    /// use tblin_table::Table;
    ///
    /// let mut table = Table::new();
    /// table.headers = ["Position", "Lineage", "Alt"].map(String::from).to_vec();
    /// table.add_row(["1487796", "4.3.3", "G"].map(String::from))?;
    /// let panel = MarkerPanel::from_table(&table, &MarkerColumns::default())?;
    ///
    /// let evidence = Evidence::extract(&panel, &[VariantCall::new("1487796", "G")]);
    /// assert_eq!(evidence.narrative, ["SNP 1487796 suggests sub-lineage: 4.3.3"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn extract(panel: &MarkerPanel, variants: &[VariantCall]) -> Evidence {
        let mut evidence = Evidence {
            tags: variants.iter().filter_map(|v| SpecialTag::from_position(&v.position)).collect(),
            ..Default::default()
        };

        // animal strains are announced up front, in priority order
        let animal_lines = evidence
            .animals()
            .map(|animal| format!("SNP {} suggests {}", animal.tag().position(), animal.species()))
            .collect::<Vec<_>>();
        evidence.narrative.extend(animal_lines);

        for variant in variants {
            let Some(marker) = panel.get(&variant.position) else {
                continue;
            };
            let Some(label) = &marker.label else {
                continue;
            };
            if marker.allele != variant.allele {
                debug!(
                    "Marker {} expects allele {}, observed {}.",
                    marker.position, marker.allele, variant.allele
                );
                continue;
            }

            debug!("Marker {} matches lineage {label}.", marker.position);
            if label.is_sublineage() {
                evidence.narrative.push(format!("SNP {} suggests sub-lineage: {label}", variant.position));
                evidence.sublineages.push(label.clone());
            } else {
                evidence.narrative.push(format!("SNP {} suggests lineage: {label}", variant.position));
                evidence.lineages.push(label.clone());
            }
        }

        evidence
    }

    /// The most specific sub-lineage: the longest label, the first one on ties.
    pub fn deepest_sublineage(&self) -> Option<&Label> {
        self.sublineages.iter().fold(None, |deepest: Option<&Label>, label| match deepest {
            Some(d) if d.as_str().len() >= label.as_str().len() => Some(d),
            _ => Some(label),
        })
    }

    pub fn has_tag(&self, tag: SpecialTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Observed animal strains, in reporting priority order.
    pub fn animals(&self) -> impl Iterator<Item = Animal> + '_ {
        Animal::iter().filter(|animal| self.has_tag(animal.tag()))
    }

    pub fn has_animal(&self) -> bool {
        self.animals().next().is_some()
    }
}
