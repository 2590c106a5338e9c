//! Lineage names, hierarchical lineage [`Label`]s, and the fixed [`SpecialTag`] positions.

mod tag;

#[doc(inline)]
pub use tag::{Animal, SpecialTag};

use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Separator between the levels of a lineage [`Label`].
pub const LABEL_DELIMITER: char = '.';

// ----------------------------------------------------------------------------
// Tribe
// ----------------------------------------------------------------------------

/// The seven numbered top-level lineages, in lineage-number order.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Tribe {
    IndoOceanic,
    EastAsian,
    EastAfricanIndian,
    EuroAmerican,
    WestAfrica1,
    WestAfrica2,
    Ethiopian,
}

impl Tribe {
    /// Returns the lineage number used as the root of a [`Label`] (ex. "4").
    pub fn number(&self) -> &'static str {
        match self {
            Tribe::IndoOceanic => "1",
            Tribe::EastAsian => "2",
            Tribe::EastAfricanIndian => "3",
            Tribe::EuroAmerican => "4",
            Tribe::WestAfrica1 => "5",
            Tribe::WestAfrica2 => "6",
            Tribe::Ethiopian => "7",
        }
    }

    /// Returns the display name of the lineage.
    pub fn name(&self) -> &'static str {
        match self {
            Tribe::IndoOceanic => "Indo-Oceanic",
            Tribe::EastAsian => "East-Asian",
            Tribe::EastAfricanIndian => "East-African-Indian",
            Tribe::EuroAmerican => "Euro-American",
            Tribe::WestAfrica1 => "West-Africa 1",
            Tribe::WestAfrica2 => "West-Africa 2",
            Tribe::Ethiopian => "Ethiopian",
        }
    }

    /// Returns the [`Tribe`] with this lineage number, if there is one.
    ///
    /// ```rust
    /// use tblin::lineage::Tribe;
    ///
    /// assert_eq!(Tribe::from_number("4"), Some(Tribe::EuroAmerican));
    /// assert_eq!(Tribe::from_number("8"), None);
    /// ```
    pub fn from_number(number: &str) -> Option<Tribe> {
        Tribe::iter().find(|tribe| tribe.number() == number)
    }
}

impl Display for Tribe {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number(), self.name())
    }
}

// ----------------------------------------------------------------------------
// Label
// ----------------------------------------------------------------------------

/// Reasons a lineage label cannot be parsed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LabelError {
    #[error("label is empty")]
    Empty,
    #[error("label {0:?} has an empty hierarchy level")]
    EmptyLevel(String),
    #[error("label {0:?} contains whitespace")]
    Whitespace(String),
    #[error("label {label:?} does not start with a known lineage number (1-7), found {root:?}")]
    UnknownLineage { label: String, root: String },
}

/// A dot-separated hierarchical lineage label (ex. "4", "4.3.3").
///
/// The first level is always the number of a known [`Tribe`].
///
/// ```rust
/// use tblin::lineage::{Label, Tribe};
///
/// let label: Label = "4.3.3".parse()?;
/// assert_eq!(label.depth(), 3);
/// assert_eq!(label.root(), "4");
/// assert_eq!(label.tribe(), Tribe::EuroAmerican);
/// assert!(label.is_sublineage());
/// assert!("4..3".parse::<Label>().is_err());
/// # Ok::<(), tblin::lineage::LabelError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Label {
    text: String,
    tribe: Tribe,
}

impl Label {
    /// Returns the hierarchy levels of the label.
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.text.split(LABEL_DELIMITER)
    }

    /// Returns the number of hierarchy levels.
    pub fn depth(&self) -> usize {
        self.levels().count()
    }

    /// Returns the top-level lineage number.
    pub fn root(&self) -> &str {
        self.tribe.number()
    }

    pub fn tribe(&self) -> Tribe {
        self.tribe
    }

    /// True if the label has more than one hierarchy level.
    pub fn is_sublineage(&self) -> bool {
        self.depth() > 1
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if the first two hierarchy levels of both labels agree.
    ///
    /// ```rust
    /// use tblin::lineage::Label;
    ///
    /// let a: Label = "4.3.1".parse()?;
    /// assert!(a.is_concordant(&"4.3.2".parse()?));
    /// assert!(!a.is_concordant(&"4.2.1".parse()?));
    /// # Ok::<(), tblin::lineage::LabelError>(())
    /// ```
    pub fn is_concordant(&self, other: &Label) -> bool {
        self.levels().take(2).eq(other.levels().take(2))
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(text: &str) -> Result<Self, LabelError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LabelError::Empty);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(LabelError::Whitespace(text.to_string()));
        }
        let levels = text.split(LABEL_DELIMITER).collect_vec();
        if levels.iter().any(|level| level.is_empty()) {
            return Err(LabelError::EmptyLevel(text.to_string()));
        }
        let root = levels[0];
        let tribe = Tribe::from_number(root).ok_or_else(|| LabelError::UnknownLineage {
            label: text.to_string(),
            root: root.to_string(),
        })?;

        Ok(Label { text: text.to_string(), tribe })
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
