//! `tblin` assigns **T**u**B**erculosis **LIN**eages from lineage-informative SNPs.
//!
//! Given a reference panel of lineage markers and the annotated variant calls of
//! one sample, `tblin`:
//!
//! 1. Collects [evidence](evidence::Evidence) from every variant that matches a
//!    labelled marker, plus the special tag positions for lineage 4 and the
//!    animal-adapted strains.
//! 1. [Resolves](resolve::resolve) the evidence into exactly one
//!    [verdict](resolve::Verdict): one of lineages 1-7, an animal strain,
//!    `No Informative SNPs detected`, or `mixed lineage(s)`.
//! 1. [Writes](export::write) a 3-column verdict table and a narrative of the
//!    evidence, both or neither.
//!
//! ```rust
//! use tblin::evidence::Evidence;
//! use tblin::input::{MarkerColumns, MarkerPanel, VariantCall};
//! use tblin_table::Table;
//!
//! let mut markers = Table::new();
//! markers.headers = ["Position", "Lineage", "Alt"].map(String::from).to_vec();
//! markers.add_row(["615938", "1", "A"].map(String::from))?;
//!
//! let panel = MarkerPanel::from_table(&markers, &MarkerColumns::default())?;
//! let evidence = Evidence::extract(&panel, &[VariantCall::new("615938", "A")]);
//! let classification = tblin::resolve::resolve("S1", &evidence);
//! assert_eq!(classification.verdict.lineage_name, "Indo-Oceanic");
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod evidence;
pub mod export;
pub mod input;
pub mod lineage;
pub mod report;
pub mod resolve;
pub mod run;

#[doc(inline)]
#[cfg(feature = "cli")]
pub use crate::cli::{Cli, Verbosity};
#[doc(inline)]
pub use crate::error::TableError;
#[doc(inline)]
pub use crate::run::{classify, run, ClassifyArgs};
