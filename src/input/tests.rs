use crate::error::TableError;
use crate::input::{read_variants, MarkerColumns, MarkerPanel, VariantCall, VariantColumns};
use crate::lineage::LabelError;
use color_eyre::eyre::{Report, Result};
use indoc::writedoc;
use std::io::Write;
use tempfile::NamedTempFile;

fn tsv() -> Result<NamedTempFile, Report> {
    Ok(tempfile::Builder::new().suffix(".tsv").tempfile()?)
}

#[test]
fn read_markers() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        Position\t##Lineage\tAlt
        931123\t\tC
        615938\t1\tA
        1487796\t4.3.3\tG
        "
    )?;

    let panel = MarkerPanel::read(&file.path(), &MarkerColumns::default())?;
    assert_eq!(panel.len(), 3);
    assert_eq!(panel.get("931123").and_then(|m| m.label.as_ref()), None);
    assert_eq!(panel.get("615938").and_then(|m| m.label.as_ref()).map(|l| l.as_str()), Some("1"));
    assert_eq!(panel.get("1487796").map(|m| m.allele.as_str()), Some("G"));
    assert!(panel.get("1").is_none());
    Ok(())
}

#[test]
fn duplicate_marker_last_row_wins() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        Position\tLineage\tAlt
        100\t2\tA
        100\t4.1\tT
        "
    )?;

    let panel = MarkerPanel::read(&file.path(), &MarkerColumns::default())?;
    assert_eq!(panel.len(), 1);
    let marker = panel.get("100").expect("marker 100");
    assert_eq!(marker.allele, "T");
    assert_eq!(marker.label.as_ref().map(|l| l.as_str()), Some("4.1"));
    Ok(())
}

#[test]
fn missing_marker_column() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        Position\tAlt
        100\tA
        "
    )?;

    let report = MarkerPanel::read(&file.path(), &MarkerColumns::default()).unwrap_err();
    let error = report.downcast_ref::<TableError>().expect("a table error");
    assert!(matches!(error, TableError::MissingColumn { column, .. } if column == "Lineage"));
    Ok(())
}

#[test]
fn malformed_marker_label() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        Position\tLineage\tAlt
        100\t4..1\tA
        "
    )?;

    let report = MarkerPanel::read(&file.path(), &MarkerColumns::default()).unwrap_err();
    match report.downcast_ref::<TableError>() {
        Some(TableError::MalformedLabel { position, source }) => {
            assert_eq!(position, "100");
            assert_eq!(source, &LabelError::EmptyLevel("4..1".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn custom_marker_columns() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        pos\tlineage\tallele
        100\t3\tA
        "
    )?;

    let columns = MarkerColumns {
        position: "pos".to_string(),
        lineage: "lineage".to_string(),
        allele: "allele".to_string(),
    };
    let panel = MarkerPanel::read(&file.path(), &columns)?;
    assert_eq!(panel.len(), 1);
    Ok(())
}

#[test]
fn read_variants_in_file_order() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        POS\tREF\tALT\tGene
        1487796\tA\tG\tRv1318c
        8624\tC\tT\t
        1487796\tA\tG\tRv1318c
        "
    )?;

    let variants = read_variants(&file.path(), &VariantColumns::default())?;
    let expected = [
        VariantCall::new("1487796", "G"),
        VariantCall::new("8624", "T"),
        VariantCall::new("1487796", "G"),
    ];
    assert_eq!(variants, expected);
    Ok(())
}

#[test]
fn missing_variant_column() -> Result<(), Report> {
    let mut file = tsv()?;
    writedoc!(
        file,
        "
        POS\tREF
        100\tA
        "
    )?;

    let report = read_variants(&file.path(), &VariantColumns::default()).unwrap_err();
    let error = report.downcast_ref::<TableError>().expect("a table error");
    assert!(matches!(error, TableError::MissingColumn { kind: "variant", .. }));
    Ok(())
}
