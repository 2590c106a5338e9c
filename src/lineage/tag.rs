use serde::Serialize;
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

// ----------------------------------------------------------------------------
// Special Tag
// ----------------------------------------------------------------------------

/// Diagnostic positions whose mere presence in the variant table is informative.
///
/// Presence is a position-membership test only, the observed allele is not compared.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum SpecialTag {
    /// Absent in lineage 4 samples.
    LineageFour,
    /// Absent in sub-lineage 4.9 samples.
    SublineageFourNine,
    Bcg,
    Bovis,
    Orygis,
    Caprae,
}

impl SpecialTag {
    /// Returns the genomic position of the tag.
    pub fn position(&self) -> &'static str {
        match self {
            SpecialTag::LineageFour => "931123",
            SpecialTag::SublineageFourNine => "1759252",
            SpecialTag::Bcg => "8624",
            SpecialTag::Bovis => "2289073",
            SpecialTag::Orygis => "2726378",
            SpecialTag::Caprae => "2831482",
        }
    }

    /// Returns the tag at a genomic position, if there is one.
    ///
    /// ```rust
    /// use tblin::lineage::SpecialTag;
    ///
    /// assert_eq!(SpecialTag::from_position("931123"), Some(SpecialTag::LineageFour));
    /// assert_eq!(SpecialTag::from_position("1"), None);
    /// ```
    pub fn from_position(position: &str) -> Option<SpecialTag> {
        SpecialTag::iter().find(|tag| tag.position() == position)
    }

    /// Returns the [`Animal`] strain signalled by this tag, if any.
    pub fn animal(&self) -> Option<Animal> {
        Animal::iter().find(|animal| animal.tag() == *self)
    }
}

// ----------------------------------------------------------------------------
// Animal
// ----------------------------------------------------------------------------

/// Animal-adapted (non-target) strains, in reporting priority order.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Animal {
    BovisBcg,
    Bovis,
    Orygis,
    Caprae,
}

impl Animal {
    /// The [`SpecialTag`] that signals this strain.
    pub fn tag(&self) -> SpecialTag {
        match self {
            Animal::BovisBcg => SpecialTag::Bcg,
            Animal::Bovis => SpecialTag::Bovis,
            Animal::Orygis => SpecialTag::Orygis,
            Animal::Caprae => SpecialTag::Caprae,
        }
    }

    /// Short name, reported in the lineage column.
    pub fn short_name(&self) -> &'static str {
        match self {
            Animal::BovisBcg => "Bovis-BCG",
            Animal::Bovis => "Bovis",
            Animal::Orygis => "Oryx",
            Animal::Caprae => "Caprae",
        }
    }

    /// Species name, reported in the lineage name column.
    pub fn species(&self) -> &'static str {
        match self {
            Animal::BovisBcg => "M. bovis-BCG",
            Animal::Bovis => "M. bovis",
            Animal::Orygis => "M. orygis",
            Animal::Caprae => "M. caprae",
        }
    }

    /// Returns the strain with this short name, if there is one.
    pub fn from_short_name(name: &str) -> Option<Animal> {
        Animal::iter().find(|animal| animal.short_name() == name)
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
