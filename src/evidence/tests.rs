use crate::evidence::Evidence;
use crate::input::{MarkerColumns, MarkerPanel, VariantCall};
use crate::lineage::{Animal, SpecialTag};
use color_eyre::eyre::{Report, Result};
use tblin_table::Table;

fn panel(rows: &[[&str; 3]]) -> Result<MarkerPanel, Report> {
    let mut table = Table::new();
    table.headers = ["Position", "Lineage", "Alt"].map(String::from).to_vec();
    for row in rows {
        table.add_row(row.iter().map(|s| s.to_string()))?;
    }
    Ok(MarkerPanel::from_table(&table, &MarkerColumns::default())?)
}

fn labels(labels: &[crate::lineage::Label]) -> Vec<&str> {
    labels.iter().map(|l| l.as_str()).collect()
}

#[test]
fn lineage_and_sublineage_evidence() -> Result<(), Report> {
    let panel = panel(&[["10", "3", "A"], ["20", "3.1.2", "T"], ["30", "4", "G"]])?;
    let variants = [
        VariantCall::new("20", "T"),
        VariantCall::new("5", "C"),
        VariantCall::new("10", "A"),
        VariantCall::new("30", "C"),
    ];

    let evidence = Evidence::extract(&panel, &variants);
    assert_eq!(labels(&evidence.lineages), ["3"]);
    assert_eq!(labels(&evidence.sublineages), ["3.1.2"]);
    assert!(evidence.tags.is_empty());
    assert_eq!(
        evidence.narrative,
        ["SNP 20 suggests sub-lineage: 3.1.2", "SNP 10 suggests lineage: 3"]
    );
    Ok(())
}

#[test]
fn allele_mismatch_is_not_evidence() -> Result<(), Report> {
    let panel = panel(&[["10", "2", "A"]])?;
    let evidence = Evidence::extract(&panel, &[VariantCall::new("10", "T")]);
    assert_eq!(evidence, Evidence::default());
    Ok(())
}

#[test]
fn unlabelled_marker_is_not_evidence() -> Result<(), Report> {
    let panel = panel(&[["931123", "", "C"]])?;
    let evidence = Evidence::extract(&panel, &[VariantCall::new("931123", "C")]);
    assert!(evidence.lineages.is_empty());
    assert!(evidence.sublineages.is_empty());
    assert!(evidence.narrative.is_empty());
    assert!(evidence.has_tag(SpecialTag::LineageFour));
    Ok(())
}

#[test]
fn tags_ignore_alleles_and_marker_panel() -> Result<(), Report> {
    let panel = panel(&[])?;
    let variants = [
        VariantCall::new("2831482", "A"),
        VariantCall::new("1759252", "N"),
        VariantCall::new("8624", "G"),
    ];

    let evidence = Evidence::extract(&panel, &variants);
    assert!(evidence.has_tag(SpecialTag::Caprae));
    assert!(evidence.has_tag(SpecialTag::SublineageFourNine));
    assert!(!evidence.has_tag(SpecialTag::LineageFour));
    assert_eq!(evidence.animals().collect::<Vec<_>>(), [Animal::BovisBcg, Animal::Caprae]);
    // animal lines follow priority order, not variant order
    assert_eq!(
        evidence.narrative,
        ["SNP 8624 suggests M. bovis-BCG", "SNP 2831482 suggests M. caprae"]
    );
    Ok(())
}

#[test]
fn animal_lines_come_first() -> Result<(), Report> {
    let panel = panel(&[["10", "4.1", "A"]])?;
    let variants = [VariantCall::new("10", "A"), VariantCall::new("2289073", "T")];

    let evidence = Evidence::extract(&panel, &variants);
    assert_eq!(
        evidence.narrative,
        ["SNP 2289073 suggests M. bovis", "SNP 10 suggests sub-lineage: 4.1"]
    );
    Ok(())
}

#[test]
fn deepest_sublineage_first_longest_wins() -> Result<(), Report> {
    let panel = panel(&[
        ["1", "4.3", "A"],
        ["2", "4.3.4", "A"],
        ["3", "4.3.3", "A"],
        ["4", "4.1", "A"],
    ])?;
    let variants = ["1", "2", "3", "4"].map(|p| VariantCall::new(p, "A"));

    let evidence = Evidence::extract(&panel, &variants);
    assert_eq!(evidence.deepest_sublineage().map(|l| l.as_str()), Some("4.3.4"));
    assert_eq!(Evidence::default().deepest_sublineage(), None);
    Ok(())
}

#[test]
fn repeated_variants_repeat_evidence() -> Result<(), Report> {
    let panel = panel(&[["10", "2", "A"]])?;
    let variants = [VariantCall::new("10", "A"), VariantCall::new("10", "A")];

    let evidence = Evidence::extract(&panel, &variants);
    assert_eq!(labels(&evidence.lineages), ["2", "2"]);
    Ok(())
}
