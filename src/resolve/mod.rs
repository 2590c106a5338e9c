//! Resolve [`Evidence`] into a single lineage [`Verdict`] and its [`EvidenceLog`].
//!
//! Precedence, from most to least trusted:
//!
//! 1. A single top-level lineage label, unless sub-lineage evidence is seen
//!    together with an animal strain.
//! 2. Sub-lineage labels, if they agree with each other and no animal strain was seen.
//! 3. Lineage 4 inferred from the absence of SNP 931123.
//! 4. Animal strains, when there is no lineage evidence at all.

use crate::evidence::Evidence;
use crate::lineage::{Animal, Label, SpecialTag, Tribe};
use color_eyre::eyre::{Report, Result, WrapErr};
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};


/// Lineage and lineage name of an [`Outcome::Indeterminate`] verdict.
pub const INDETERMINATE: &str = "mixed lineage(s)";
/// Lineage and lineage name of an [`Outcome::NoInformativeMarkers`] verdict.
pub const NO_INFORMATIVE_MARKERS: &str = "No Informative SNPs detected";
/// Final narrative statement of an [`Outcome::Indeterminate`] verdict.
pub const INDETERMINATE_STATEMENT: &str = "no precise lineage inferred";
/// Narrative line when top-level lineage labels disagree.
pub const NO_CONCORDANCE: &str = "no concordance between predicted lineage and sublineage(s)";

// ----------------------------------------------------------------------------
// Outcome
// ----------------------------------------------------------------------------

/// The classification outcome of a sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// One of the numbered lineages.
    Lineage(Tribe),
    /// An animal-adapted strain.
    Animal(Animal),
    /// No marker or tag evidence of any kind.
    NoInformativeMarkers,
    /// Conflicting or contaminated evidence.
    Indeterminate,
}

impl Outcome {
    /// Value of the `Lineage` column.
    pub fn lineage(&self) -> &'static str {
        match self {
            Outcome::Lineage(tribe) => tribe.number(),
            Outcome::Animal(animal) => animal.short_name(),
            Outcome::NoInformativeMarkers => NO_INFORMATIVE_MARKERS,
            Outcome::Indeterminate => INDETERMINATE,
        }
    }

    /// Value of the `Lineage Name` column.
    pub fn lineage_name(&self) -> &'static str {
        match self {
            Outcome::Lineage(tribe) => tribe.name(),
            Outcome::Animal(animal) => animal.species(),
            Outcome::NoInformativeMarkers => NO_INFORMATIVE_MARKERS,
            Outcome::Indeterminate => INDETERMINATE,
        }
    }

    /// The final statement of the [`EvidenceLog`].
    ///
    /// ```rust
    /// use tblin::lineage::Tribe;
    /// use tblin::resolve::Outcome;
    ///
    /// assert_eq!(Outcome::Lineage(Tribe::EuroAmerican).statement(), "Lineage: 4 Euro-American");
    /// assert_eq!(Outcome::Indeterminate.statement(), "no precise lineage inferred");
    /// ```
    pub fn statement(&self) -> String {
        match self {
            Outcome::Lineage(tribe) => format!("Lineage: {tribe}"),
            Outcome::Animal(animal) => format!("Lineage: {animal}"),
            Outcome::NoInformativeMarkers => NO_INFORMATIVE_MARKERS.to_string(),
            Outcome::Indeterminate => INDETERMINATE_STATEMENT.to_string(),
        }
    }

    /// Parse a final statement back into an [`Outcome`].
    ///
    /// Returns [`None`] if the line is not a final statement.
    ///
    /// ```rust
    /// use tblin::lineage::{Animal, Tribe};
    /// use tblin::resolve::Outcome;
    ///
    /// assert_eq!(Outcome::from_statement("Lineage: 2 East-Asian"), Some(Outcome::Lineage(Tribe::EastAsian)));
    /// assert_eq!(Outcome::from_statement("Lineage: Bovis"), Some(Outcome::Animal(Animal::Bovis)));
    /// assert_eq!(Outcome::from_statement("SNP 10 suggests lineage: 2"), None);
    /// ```
    pub fn from_statement(line: &str) -> Option<Outcome> {
        let line = line.trim();
        if line.contains(INDETERMINATE_STATEMENT) {
            return Some(Outcome::Indeterminate);
        }
        if line.contains(NO_INFORMATIVE_MARKERS) {
            return Some(Outcome::NoInformativeMarkers);
        }
        let lineage = line.strip_prefix("Lineage:")?.split_whitespace().next()?;
        Tribe::from_number(lineage)
            .map(Outcome::Lineage)
            .or_else(|| Animal::from_short_name(lineage).map(Outcome::Animal))
    }
}

// ----------------------------------------------------------------------------
// Verdict
// ----------------------------------------------------------------------------

/// The single classification of one sample.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Verdict {
    pub sample_id: String,
    pub lineage: &'static str,
    pub lineage_name: &'static str,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn new(sample_id: &str, outcome: Outcome) -> Self {
        Verdict {
            sample_id: sample_id.to_string(),
            lineage: outcome.lineage(),
            lineage_name: outcome.lineage_name(),
            outcome,
        }
    }

    /// Serialize the [`Verdict`] as pretty JSON.
    pub fn to_json(&self) -> Result<String, Report> {
        serde_json::to_string_pretty(self)
            .wrap_err_with(|| format!("Failed to serialize verdict: {self:?}"))
    }
}

// ----------------------------------------------------------------------------
// Evidence Log
// ----------------------------------------------------------------------------

/// Narrative lines behind a [`Verdict`], ending with the final statement.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EvidenceLog {
    pub lines: Vec<String>,
}

impl EvidenceLog {
    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }
}

impl Display for EvidenceLog {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.lines.join("\n"))
    }
}

/// A [`Verdict`] together with the [`EvidenceLog`] that explains it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    pub verdict: Verdict,
    pub log: EvidenceLog,
}

// ----------------------------------------------------------------------------
// Resolution
// ----------------------------------------------------------------------------

/// The shape of the evidence, which selects exactly one resolution branch.
#[derive(Debug)]
enum Shape<'e> {
    /// No lineage label, at least one sub-lineage label.
    SublineageOnly { deepest: &'e Label },
    /// No labels at all and SNP 931123 not observed.
    AbsenceInference,
    /// No labels at all and SNP 931123 observed.
    TagsOnly,
    /// Exactly one lineage label.
    SingleLineage { lineage: &'e Label, deepest: Option<&'e Label> },
    /// Two or more lineage labels.
    MultipleLineages { lineages: &'e [Label] },
}

impl<'e> Shape<'e> {
    fn of(evidence: &'e Evidence) -> Shape<'e> {
        let deepest = evidence.deepest_sublineage();
        match (evidence.lineages.as_slice(), deepest) {
            ([], Some(deepest)) => Shape::SublineageOnly { deepest },
            ([], None) => match evidence.has_tag(SpecialTag::LineageFour) {
                false => Shape::AbsenceInference,
                true => Shape::TagsOnly,
            },
            ([lineage], deepest) => Shape::SingleLineage { lineage, deepest },
            (lineages @ [_, _, ..], _) => Shape::MultipleLineages { lineages },
        }
    }
}

/// Resolve the [`Evidence`] of one sample into its [`Classification`].
///
/// ```rust
/// use tblin::evidence::Evidence;
/// use tblin::resolve::{resolve, Outcome, NO_INFORMATIVE_MARKERS};
///
/// // SNP 931123 observed, but nothing else
/// let mut evidence = Evidence::default();
/// evidence.tags.insert(tblin::lineage::SpecialTag::LineageFour);
///
/// let classification = resolve("S1", &evidence);
/// assert_eq!(classification.verdict.outcome, Outcome::NoInformativeMarkers);
/// assert_eq!(classification.log.lines, [NO_INFORMATIVE_MARKERS]);
/// ```
pub fn resolve(sample_id: &str, evidence: &Evidence) -> Classification {
    let mut log = EvidenceLog { lines: evidence.narrative.clone() };
    let shape = Shape::of(evidence);
    debug!("Evidence shape: {shape:?}");

    let outcome = match shape {
        Shape::SublineageOnly { deepest } => {
            let discordant = evidence.sublineages.iter().any(|label| !label.is_concordant(deepest));
            if discordant || evidence.has_animal() {
                Outcome::Indeterminate
            } else {
                Outcome::Lineage(deepest.tribe())
            }
        }
        Shape::AbsenceInference => {
            if evidence.has_animal() {
                Outcome::Indeterminate
            } else {
                log.push(format!(
                    "Absence of SNP {} suggests lineage 4",
                    SpecialTag::LineageFour.position()
                ));
                if !evidence.has_tag(SpecialTag::SublineageFourNine) {
                    log.push(format!(
                        "Absence of SNP {} suggests sublineage 4.9",
                        SpecialTag::SublineageFourNine.position()
                    ));
                }
                Outcome::Lineage(Tribe::EuroAmerican)
            }
        }
        Shape::TagsOnly => match evidence.animals().next() {
            Some(animal) => Outcome::Animal(animal),
            None => Outcome::NoInformativeMarkers,
        },
        Shape::SingleLineage { lineage, deepest: None } => Outcome::Lineage(lineage.tribe()),
        Shape::SingleLineage { lineage, deepest: Some(deepest) } => {
            let discordant = evidence
                .sublineages
                .iter()
                .any(|label| label.root() != lineage.root() || label.root() != deepest.root());
            if discordant {
                log.push(format!("sub-lineage evidence is discordant with lineage {lineage}"));
            }
            // sub-lineage discordance alone keeps the lineage, an animal strain does not
            match evidence.has_animal() {
                true => Outcome::Indeterminate,
                false => Outcome::Lineage(lineage.tribe()),
            }
        }
        Shape::MultipleLineages { lineages } => {
            if lineages.iter().all(|label| label == &lineages[0]) {
                Outcome::Lineage(lineages[0].tribe())
            } else {
                log.push(NO_CONCORDANCE);
                Outcome::Indeterminate
            }
        }
    };

    log.push(outcome.statement());
    let verdict = Verdict::new(sample_id, outcome);
    debug!("Verdict: {verdict:?}");

    Classification { verdict, log }
}
