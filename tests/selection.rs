use genoreport::data_structs::GenomicRecord;
use genoreport::io::load;
use genoreport::tools::{
    select_significant,
    SignificanceRule,
};
use rstest::*;
use serde_json::json;

mod common;
use common::DemoReportBuilder;

fn record(
    gene: &str,
    genotype: &str,
    methylation: &str,
) -> GenomicRecord {
    GenomicRecord::new(gene)
        .with_genotype(genotype)
        .with_methylation_status(methylation)
}

#[test]
fn test_selection_is_idempotent() {
    let records = vec![
        record("FTO", "AT", "-"),
        record("COMT", "GG", "Methylated"),
        record("BDNF", "CC", "-"),
    ];
    assert_eq!(select_significant(&records), select_significant(&records));
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    let records = vec![
        GenomicRecord::new("A").with_genotype("CT"),
        GenomicRecord::new("B").with_genotype("CC"),
        GenomicRecord::new("A").with_genotype("TT"),
    ];
    assert_eq!(select_significant(&records), vec!["A"]);
}

#[test]
fn test_order_of_first_occurrence() {
    let records = vec![
        record("C", "CC", "Methylated"),
        record("A", "TT", "-"),
        record("C", "CT", "-"),
        record("B", "GT", "-"),
        record("A", "CC", "Methylated"),
    ];
    assert_eq!(select_significant(&records), vec!["C", "A", "B"]);
}

#[rstest]
#[case::methylation_only(record("X", "CC", "Methylated"), true)]
#[case::default_dash_excludes(record("Y", "CC", "-"), false)]
#[case::lowercase_t(record("Z", "ct", "-"), false)]
#[case::t_anywhere(record("W", "AGT", "-"), true)]
#[case::empty_methylation(record("V", "CC", ""), true)]
#[case::spaced_dash(record("U", "CC", " - "), true)]
fn test_single_record(
    #[case] rec: GenomicRecord,
    #[case] significant: bool,
) {
    let gene = rec.gene().unwrap().to_string();
    let selected = select_significant(&[rec]);
    assert_eq!(selected.contains(&gene), significant);
}

#[test]
fn test_empty_input() {
    assert!(select_significant(&[]).is_empty());
}

#[test]
fn test_absent_fields_do_not_raise() {
    let records = vec![
        GenomicRecord::new("A"),
        GenomicRecord::new("B").with_column("Genotype", json!(null)),
        GenomicRecord::new("C").with_column("Methylation_Status", json!(null)),
        GenomicRecord::new("D")
            .with_column("Genotype", json!(null))
            .with_methylation_status("Methylated"),
    ];
    assert_eq!(select_significant(&records), vec!["D"]);
}

#[test]
fn test_selection_from_loaded_document() -> anyhow::Result<()> {
    let doc = load(&DemoReportBuilder::default().build_bytes())?;
    assert_eq!(select_significant(doc.genomic_results()), vec![
        "FTO", "BDNF", "OPRD1"
    ]);
    Ok(())
}

#[test]
fn test_no_match_is_valid_empty_result() -> anyhow::Result<()> {
    let doc = load(
        &DemoReportBuilder::default()
            .with(
                "genomic_results",
                json!([
                    {"Gene": "COMT", "Genotype": "GG", "Methylation_Status": "-"},
                    {"Gene": "BDNF", "Genotype": "CC", "Methylation_Status": "-"}
                ]),
            )
            .build_bytes(),
    )?;
    assert!(select_significant(doc.genomic_results()).is_empty());
    Ok(())
}

#[test]
fn test_default_rule_matches_free_function() {
    let records = vec![
        record("FTO", "AT", "-"),
        record("COMT", "GG", "Methylated"),
    ];
    assert_eq!(
        SignificanceRule::default().select(&records),
        select_significant(&records)
    );
}
