//! File-to-query round trips through the full pipeline.

use std::io::Write;

use spicevault::{
    Extractor, ExtractorConfig, ModelFilter, ModelStore, ParameterRange, SubcircuitFilter,
};

const LIBRARY: &str = "\
* 180nm starter library
.model nch_1v8 NMOS vth=0.55 l=0.18u w=1u cgso=1p
.model pch_1v8 PMOS vth=-0.55 l=0.18u w=2u
.model broken NMOS l='0.18u + 0.02u' w=1u
.subckt inv in out vdd vss
mp out in vdd vdd pch_1v8
mn out in vss vss nch_1v8
.ends
.model dclamp diode is=1e-14 n=1.05
";

fn extractor_with(dir: &tempfile::TempDir) -> Extractor {
    let store = ModelStore::open(dir.path().join("models.db")).unwrap();
    let config = ExtractorConfig {
        log_path: Some(dir.path().join("anomalies.log")),
    };
    Extractor::new(store, &config).unwrap()
}

#[test]
fn test_extract_file_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let netlist = dir.path().join("lib.sp");
    std::fs::File::create(&netlist)
        .unwrap()
        .write_all(LIBRARY.as_bytes())
        .unwrap();

    let mut extractor = extractor_with(&dir);
    let stats = extractor.extract_file(&netlist).unwrap();
    assert_eq!(stats.models, 3); // broken is rejected
    assert_eq!(stats.subcircuits, 1);

    let store = extractor.into_store();

    // range lookup on the scaled value, raw text in the result
    let filter = ModelFilter::new("nmos")
        .with_range(ParameterRange::new("l", Some(1e-7), Some(2e-7)));
    let hits = store.query_models(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits["nch_1v8"].parameters["l"], "0.18u");
    assert_eq!(hits["nch_1v8"].parameters["cgso"], "1p");

    // widening the minimum past the scaled value excludes the model
    let filter = ModelFilter::new("nmos")
        .with_range(ParameterRange::new("l", Some(2e-7), Some(3e-7)));
    assert!(store.query_models(&filter).unwrap().is_empty());

    let subs = store.search_subcircuits(&SubcircuitFilter::new()).unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs["inv"].content.lines().count(), 4);

    // the rejected model left a trace in the anomaly log
    let log = std::fs::read_to_string(dir.path().join("anomalies.log")).unwrap();
    assert!(log.contains("broken"));
}

#[test]
fn test_same_model_from_two_files_yields_two_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut extractor = extractor_with(&dir);

    let text = ".model nch nmos l=0.18u\n";
    extractor.extract_source(text, "first.lib").unwrap();
    extractor.extract_source(text, "second.lib").unwrap();

    let store = extractor.into_store();
    assert_eq!(store.model_count().unwrap(), 2);

    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits["nch"].source_file, "second.lib");
}

#[test]
fn test_unreadable_file_aborts_only_itself() {
    let dir = tempfile::tempdir().unwrap();
    let mut extractor = extractor_with(&dir);

    extractor
        .extract_source(".model ok nmos vth=0.7\n", "good.lib")
        .unwrap();
    let missing = dir.path().join("does-not-exist.sp");
    assert!(extractor.extract_file(&missing).is_err());

    // earlier results are untouched
    let store = extractor.into_store();
    assert_eq!(store.model_count().unwrap(), 1);
}

#[test]
fn test_subcircuit_body_keeps_original_case() {
    let dir = tempfile::tempdir().unwrap();
    let mut extractor = extractor_with(&dir);

    extractor
        .extract_source(".SUBCKT OpAmp InP InN Out\nR1 InP InN 10k\n.ENDS\n", "amp.lib")
        .unwrap();

    let store = extractor.into_store();
    let subs = store.search_subcircuits(&SubcircuitFilter::new()).unwrap();
    assert_eq!(
        subs["opamp"].content,
        ".SUBCKT OpAmp InP InN Out\nR1 InP InN 10k\n.ENDS"
    );
}
