use std::collections::HashMap;

use anyhow::Result;
use sps_order_processor::domain::{CanonicalSize, StyleInfo, ValidationStatus};
use sps_order_processor::error::PipelineError;
use sps_order_processor::report::Report;
use sps_order_processor::{export, pipeline};

#[test]
fn test_end_to_end_single_style_summary() -> Result<()> {
    // Three rows for one style: two spellings of S, and a junk-prefixed
    // size whose composite key still ends in a recoverable L
    let csv = "Vendor Style,Size,Quantity\n\
               TEE-101,Small,2\n\
               TEE-101,S,3\n\
               TEE-101,Slim-L,1\n";

    let run = pipeline::run_sources(vec![csv.as_bytes()], None)?;

    assert_eq!(run.stats.total_rows, 3);
    assert_eq!(run.stats.ok_count, 3);
    assert_eq!(run.stats.review_count, 0);

    assert_eq!(run.summaries.len(), 1);
    let summary = &run.summaries[0];
    assert_eq!(summary.style, "TEE-101");
    assert_eq!(summary.description, "");
    assert_eq!(summary.ink_color, "");
    assert_eq!(summary.quantity(CanonicalSize::S), 5);
    assert_eq!(summary.quantity(CanonicalSize::L), 1);
    for size in [
        CanonicalSize::Xs,
        CanonicalSize::M,
        CanonicalSize::Xl,
        CanonicalSize::TwoXl,
        CanonicalSize::ThreeXl,
        CanonicalSize::FourXl,
    ] {
        assert_eq!(summary.quantity(size), 0);
    }

    let mut buffer = Vec::new();
    export::write_summary_csv(&mut buffer, &run.summaries)?;
    let output = String::from_utf8(buffer)?;
    assert_eq!(
        output,
        "SKU,Description,Ink Color,XS,S,M,L,XL,2XL,3XL,4XL\n\
         TEE-101,,,0,5,0,1,0,0,0,0\n"
    );

    Ok(())
}

#[test]
fn test_end_to_end_review_rows_survive_to_report() -> Result<()> {
    let csv = "Vendor Style,Size,Quantity\n\
               TEE-101,M,3\n\
               TEE-101,purple,abc\n\
               HOOD-330,2 XL,4\n";

    let run = pipeline::run_sources(vec![csv.as_bytes()], None)?;

    assert_eq!(run.stats.ok_count, 2);
    assert_eq!(run.stats.review_count, 1);

    // The flagged key is still present in the aggregate stream
    let review = run
        .aggregated
        .iter()
        .find(|record| record.status == ValidationStatus::Review)
        .expect("review aggregate present");
    assert_eq!(review.composite_key, "TEE-101-purple");
    assert_eq!(review.total_quantity, 0);

    // And in the serialized report, original text intact
    let report = Report::from_run(&run);
    assert_eq!(report.review_count, 1);
    assert_eq!(report.flagged[0].original_size, "purple");
    let json = report.to_json()?;
    assert!(json.contains("TEE-101-purple"));

    // The wide table keeps the style row but never grows a purple column
    let mut buffer = Vec::new();
    export::write_summary_csv(&mut buffer, &run.summaries)?;
    let output = String::from_utf8(buffer)?;
    assert!(output.contains("HOOD-330,,,0,0,0,0,0,4,0,0"));
    assert!(output.contains("TEE-101,,,0,0,3,0,0,0,0,0"));

    Ok(())
}

#[test]
fn test_end_to_end_multiple_sources_with_style_info() -> Result<()> {
    let monday = "Vendor Style,Size,Quantity\nTEE-101,M,3\n";
    let tuesday = "Vendor Style,Size,Quantity\nTEE-101,Medium,5\n";

    let mut style_info = HashMap::new();
    style_info.insert(
        "TEE-101".to_string(),
        StyleInfo {
            description: "T-Shirt V-Neck".to_string(),
            ink_color: "Black".to_string(),
        },
    );

    let run = pipeline::run_sources(
        vec![monday.as_bytes(), tuesday.as_bytes()],
        Some(&style_info),
    )?;

    // Spelling variants of the same size collapse into one bucket
    assert_eq!(run.aggregated.len(), 1);
    assert_eq!(run.aggregated[0].composite_key, "TEE-101-M");
    assert_eq!(run.aggregated[0].total_quantity, 8);

    assert_eq!(run.summaries[0].description, "T-Shirt V-Neck");
    assert_eq!(run.summaries[0].ink_color, "Black");
    assert_eq!(run.summaries[0].quantity(CanonicalSize::M), 8);

    Ok(())
}

#[test]
fn test_missing_column_aborts_the_whole_batch() {
    let good = "Vendor Style,Size,Quantity\nTEE-101,M,3\n";
    let bad = "Style,Size,Quantity\nTEE-202,L,1\n";

    let err = pipeline::run_sources(vec![good.as_bytes(), bad.as_bytes()], None).unwrap_err();
    match err {
        PipelineError::MissingColumn(column) => assert_eq!(column, "Vendor Style"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_empty_batch_is_fatal() {
    let csv = "Vendor Style,Size,Quantity\n";
    let err = pipeline::run_sources(vec![csv.as_bytes()], None).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyBatch));
}
