use camino::Utf8Path;

use skycat::{
    CatalogPipeline, JsonFileSink, NoProgress, PipelineState, RecordSink, SkycatError,
};

mod common;
use common::{write_catalog, RecordingProgress};

#[test]
fn test_two_row_catalog() {
    let mut pipeline = CatalogPipeline::new(Utf8Path::new("tests/data/two_rows.csv"));
    let mut progress = RecordingProgress::default();
    let records = pipeline.run(&mut progress).unwrap();

    assert_eq!(pipeline.state(), PipelineState::Done);
    assert_eq!(records.len(), 2);

    // Row 1: a complete Messier galaxy entry. The Messier cross reference takes
    // precedence and the NGC number is recovered from the row's own name.
    let m31 = &records[0];
    assert_eq!(m31.object_type, "G");
    assert_eq!(m31.right_ascension, 0.7123138888888888);
    assert_eq!(m31.declination, 41.26875);
    assert_eq!(m31.constellation, "And");
    assert_eq!(m31.messier.as_slice(), &[31]);
    assert_eq!(m31.ngc.as_slice(), &[224]);
    assert!(m31.ic.is_empty());
    assert_eq!(m31.v_magnitude, 3.44);
    assert!(m31.j_magnitude.is_nan());
    assert_eq!(m31.radial_velocity, -300.0);
    assert_eq!(
        m31.identifiers,
        vec!["2MASX J00424433+4116074".to_string(), "UGC 454".to_string()]
    );
    assert!(m31.common_names.en.contains(&"Andromeda Galaxy".to_string()));
    assert!(m31
        .common_names
        .fr
        .contains(&"Galaxie d'Andromède".to_string()));
    assert!(m31.keywords.contains(&"m31".to_string()));
    assert!(m31.keywords.contains(&"ngc224".to_string()));
    assert!(m31.keywords.contains(&"andromedagalaxy".to_string()));
    assert_eq!(m31.sources["right_ascension"], 1);
    assert_eq!(m31.sources["b_magnitude"], 3);
    assert_eq!(m31.sources.len(), 3);

    // Row 2: every optional field empty. Numerics become NaN, list fields become
    // empty sets, the constellation gets the explicit sentinel, and the run
    // completes instead of aborting.
    let empty = &records[1];
    assert_eq!(empty.object_type, "Neb");
    assert!(empty.right_ascension.is_nan());
    assert!(empty.declination.is_nan());
    assert_eq!(empty.constellation, "NONE");
    assert!(empty.right_ascension.is_nan());
    assert!(empty.major_axis.is_nan());
    assert!(empty.redshift.is_nan());
    assert!(empty.messier.is_empty());
    assert_eq!(empty.ic.as_slice(), &[5146]);
    assert!(empty.identifiers.is_empty());
    assert!(empty.central_star_names.is_empty());
    assert!(empty.common_names.en.is_empty());
    assert!(empty.common_names.fr.is_empty());
    assert!(empty.sources.is_empty());

    // Event protocol: start with the pre-scan total, one event per row, one
    // success with the final count, no failure.
    assert_eq!(progress.started_with, Some(2));
    assert_eq!(progress.rows, vec![(1, 2), (2, 2)]);
    assert_eq!(progress.succeeded_with, Some(2));
    assert!(progress.failures.is_empty());
}

#[test]
fn test_missing_file_is_a_precondition_failure() {
    let mut pipeline = CatalogPipeline::new(Utf8Path::new("tests/data/no_such_file.csv"));
    let mut progress = RecordingProgress::default();
    let err = pipeline.run(&mut progress).unwrap_err();

    assert!(matches!(err, SkycatError::InputUnavailable(_)));
    assert_eq!(pipeline.state(), PipelineState::Failed);
    // The run never reached the counting pass.
    assert_eq!(progress.started_with, None);
    assert!(progress.rows.is_empty());
    assert_eq!(progress.failures.len(), 1);
}

#[test]
fn test_malformed_row_aborts_the_batch() {
    // Second data row is structurally short: the whole batch fails, carrying the
    // 1-based row index; no partial output is returned.
    let (_guard, path) = write_catalog(&[
        "IC5146;Neb;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;",
        "NGC0224;G;broken",
    ]);
    let mut pipeline = CatalogPipeline::new(&path);
    let mut progress = RecordingProgress::default();
    let err = pipeline.run(&mut progress).unwrap_err();

    match err {
        SkycatError::MalformedRow { row, .. } => assert_eq!(row, 2),
        other => panic!("expected MalformedRow, got {other:?}"),
    }
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(progress.started_with, Some(2));
    assert_eq!(progress.rows, vec![(1, 2)]);
    assert_eq!(progress.succeeded_with, None);
    assert_eq!(progress.failures.len(), 1);
}

#[test]
fn test_output_order_follows_input_order() {
    let (_guard, path) = write_catalog(&[
        "NGC7000;HII;20:59:17.14;+44:31:43.6;Cyg;;;;;;;;;;;;;;;;;;;;;;;;North America Nebula;;;",
        "IC1396;Cl+N;21:39:06.61;+57:29:48.9;Cep;;;;;;;;;;;;;;;;;;;;;;;;;;;",
        "NGC6992;SNR;20:56:19.07;+31:44:34.5;Cyg;;;;;;;;;;;;;;;;;;;;;;;;Eastern Veil Nebula;;;",
    ]);
    let mut pipeline = CatalogPipeline::new(&path);
    let records = pipeline.run(&mut NoProgress).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].ngc.as_slice(), &[7000]);
    assert_eq!(records[1].ic.as_slice(), &[1396]);
    assert_eq!(records[2].ngc.as_slice(), &[6992]);
}

#[test]
fn test_serpens_constellation_folding() {
    let (_guard, path) = write_catalog(&[
        "IC4756;OCl;18:38:31.21;+05:26:16.0;Se2;;;;;;;;;;;;;;;;;;;;;;;;;;;",
    ]);
    let records = CatalogPipeline::new(&path).run(&mut NoProgress).unwrap();
    assert_eq!(records[0].constellation, "Ser");
}

#[test]
fn test_json_sink_round_trip() {
    let mut pipeline = CatalogPipeline::new(Utf8Path::new("tests/data/two_rows.csv"));
    let records = pipeline.run(&mut NoProgress).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let out = camino::Utf8PathBuf::from_path_buf(dir.path().join("out/parsed.json")).unwrap();
    JsonFileSink::new(&out).persist(&records).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let array = written.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["type"], "G");
    assert_eq!(array[0]["messier"][0], 31);
    // NaN sentinels serialize as null.
    assert!(array[1]["right_ascension"].is_null());
    assert_eq!(array[1]["constellation"], "NONE");
}
