use crate::lineage::{Animal, Tribe};
use crate::report::{outcome_from_narrative, report, summary, ReportArgs, SummaryArgs, NO_RESULT};
use crate::resolve::Outcome;
use color_eyre::eyre::{Report, Result};
use indoc::writedoc;
use std::fs::File;
use std::io::Write;

#[test]
fn last_statement_wins() -> Result<(), Report> {
    let narrative = "Lineage: 2 East-Asian\nSNP 1 suggests lineage: 4\nLineage: 4 Euro-American\n";
    assert_eq!(outcome_from_narrative(narrative)?, Outcome::Lineage(Tribe::EuroAmerican));
    Ok(())
}

#[test]
fn narrative_statements() -> Result<(), Report> {
    assert_eq!(
        outcome_from_narrative("no concordance between predicted lineage and sublineage(s)\nno precise lineage inferred\n")?,
        Outcome::Indeterminate
    );
    assert_eq!(
        outcome_from_narrative("No Informative SNPs detected\n")?,
        Outcome::NoInformativeMarkers
    );
    assert_eq!(outcome_from_narrative("Lineage: Caprae\n")?, Outcome::Animal(Animal::Caprae));
    assert!(outcome_from_narrative("").is_err());
    Ok(())
}

#[test]
fn report_sample_from_file_name() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let narrative = dir.path().join("SRR42_Lineage.txt");
    let mut file = File::create(&narrative)?;
    writedoc!(
        file,
        "
        SNP 497491 suggests lineage: 2
        SNP 1 suggests sub-lineage: 2.2.1
        Lineage: 2 East-Asian
        "
    )?;

    let output = dir.path().join("out").join("SRR42.lineage_report.txt");
    let args = ReportArgs { narrative, output: output.clone(), sample: None };
    let table = report(&args)?;
    assert_eq!(table.rows, [["SRR42", "2", "East-Asian"]]);
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "Sample ID\tLineage\tLineage Name\nSRR42\t2\tEast-Asian\n"
    );
    Ok(())
}

#[test]
fn report_explicit_sample() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let narrative = dir.path().join("narrative.txt");
    std::fs::write(&narrative, "no precise lineage inferred\n")?;

    let args = ReportArgs {
        narrative,
        output: dir.path().join("report.txt"),
        sample: Some("S9".to_string()),
    };
    let table = report(&args)?;
    assert_eq!(table.rows, [["S9", "mixed lineage(s)", "mixed lineage(s)"]]);
    Ok(())
}

#[test]
fn report_without_statement() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let narrative = dir.path().join("S1_Lineage.txt");
    std::fs::write(&narrative, "SNP 1 suggests lineage: 4\n")?;

    let output = dir.path().join("report.txt");
    let args = ReportArgs { narrative, output: output.clone(), sample: None };
    assert!(report(&args).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn summary_lookup() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let table = dir.path().join("lineages.txt");
    let mut file = File::create(&table)?;
    writedoc!(
        file,
        "
        Sample ID\tLineage\tLineage Name
        S1\t4\tEuro-American
        S2\tmixed lineage(s)\tmixed lineage(s)
        S3\tNo Informative SNPs detected\tNo Informative SNPs detected
        S4\tBovis\tM. bovis
        "
    )?;

    let lookup = |sample: &str| summary(&SummaryArgs { table: table.clone(), sample: sample.to_string() });
    assert_eq!(lookup("S1")?, "Euro-American (L4)");
    assert_eq!(lookup("S2")?, NO_RESULT);
    assert_eq!(lookup("S3")?, NO_RESULT);
    assert_eq!(lookup("S4")?, "M. bovis (LBovis)");
    assert!(lookup("S5").is_err());
    Ok(())
}

#[test]
fn summary_without_sample_column() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let table = dir.path().join("lineages.txt");
    std::fs::write(&table, "Sample\tLineage\tLineage Name\nS1\t4\tEuro-American\n")?;

    let args = SummaryArgs { table, sample: "S1".to_string() };
    assert!(summary(&args).is_err());
    Ok(())
}
