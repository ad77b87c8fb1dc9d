//! Store schema and query behavior.

use spicevault_core::{
    ModelFilter, ModelRecord, ParameterRange, SubcircuitFilter, SubcircuitRecord, classify,
};
use spicevault_store::ModelStore;

fn model(name: &str, model_type: &str, file: &str, params: &[(&str, &str)]) -> ModelRecord {
    ModelRecord {
        name: name.into(),
        model_type: model_type.into(),
        source_file: file.into(),
        line_number: 1,
        parameters: params
            .iter()
            .map(|(k, v)| (k.to_string(), classify(v)))
            .collect(),
    }
}

fn subcircuit(name: &str, content: &str) -> SubcircuitRecord {
    SubcircuitRecord {
        name: name.into(),
        content: content.into(),
        source_file: "subs.lib".into(),
        line_number: 1,
    }
}

fn seeded_store() -> ModelStore {
    let mut store = ModelStore::open_in_memory().unwrap();
    store
        .insert_model(&model(
            "nch_018",
            "nmos",
            "a.lib",
            &[("l", "0.18u"), ("w", "1u"), ("vth", "0.7")],
        ))
        .unwrap();
    store
        .insert_model(&model(
            "nch_025",
            "nmos",
            "a.lib",
            &[("l", "0.25u"), ("w", "2u"), ("vth", "0.6")],
        ))
        .unwrap();
    store
        .insert_model(&model(
            "pch_018",
            "pmos",
            "a.lib",
            &[("l", "0.18u"), ("vth", "-0.7")],
        ))
        .unwrap();
    store
        .insert_model(&model("d1", "diode", "b.lib", &[("variant", "fast")]))
        .unwrap();
    store
        .insert_model(&model("bare", "nmos", "b.lib", &[]))
        .unwrap();
    store
}

#[test]
fn test_query_by_type() {
    let store = seeded_store();
    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits.contains_key("nch_018"));
    assert!(hits.contains_key("nch_025"));
    assert!(hits.contains_key("bare"));
}

#[test]
fn test_type_matching_is_case_insensitive() {
    let store = seeded_store();
    let lower = store.query_models(&ModelFilter::new("nmos")).unwrap();
    let upper = store.query_models(&ModelFilter::new("NMOS")).unwrap();
    let mixed = store.query_models(&ModelFilter::new("nMoS")).unwrap();

    let names = |m: &std::collections::BTreeMap<String, _>| {
        m.keys().cloned().collect::<Vec<_>>()
    };
    assert_eq!(names(&lower), names(&upper));
    assert_eq!(names(&lower), names(&mixed));
}

#[test]
fn test_name_pattern() {
    let store = seeded_store();
    let filter = ModelFilter::new("nmos").with_name_pattern("nch%");
    let hits = store.query_models(&filter).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(!hits.contains_key("bare"));

    // LIKE is case-insensitive too
    let filter = ModelFilter::new("nmos").with_name_pattern("NCH%");
    assert_eq!(store.query_models(&filter).unwrap().len(), 2);
}

#[test]
fn test_range_predicate() {
    let store = seeded_store();

    // l = 0.18u scaled to 1.8e-7 sits inside [1e-7, 2e-7]
    let filter = ModelFilter::new("nmos")
        .with_range(ParameterRange::new("l", Some(1e-7), Some(2e-7)));
    let hits = store.query_models(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits.contains_key("nch_018"));

    // raising the minimum past 1.8e-7 excludes it
    let filter = ModelFilter::new("nmos")
        .with_range(ParameterRange::new("l", Some(2e-7), None));
    let hits = store.query_models(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits.contains_key("nch_025"));
}

#[test]
fn test_multiple_ranges_all_apply() {
    let store = seeded_store();
    let filter = ModelFilter::new("nmos")
        .with_range(ParameterRange::new("l", Some(1e-7), Some(3e-7)))
        .with_range(ParameterRange::new("w", Some(1.5e-6), None));
    let hits = store.query_models(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits.contains_key("nch_025"));
}

#[test]
fn test_string_parameters_never_match_ranges() {
    let store = seeded_store();
    let filter = ModelFilter::new("diode")
        .with_range(ParameterRange::new("variant", None, None));
    assert!(store.query_models(&filter).unwrap().is_empty());
}

#[test]
fn test_result_values_are_raw_text() {
    let store = seeded_store();
    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert_eq!(hits["nch_018"].parameters["l"], "0.18u");
    assert_eq!(hits["nch_018"].parameters["vth"], "0.7");
}

#[test]
fn test_zero_parameter_model_still_surfaces() {
    let store = seeded_store();
    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert!(hits["bare"].parameters.is_empty());
}

#[test]
fn test_max_results_caps_models() {
    let store = seeded_store();
    let filter = ModelFilter::new("nmos").with_max_results(2);
    let hits = store.query_models(&filter).unwrap();
    assert!(hits.len() <= 2);
}

#[test]
fn test_duplicate_names_across_files_are_distinct_rows() {
    let mut store = seeded_store();
    store
        .insert_model(&model("nch_018", "nmos", "c.lib", &[("l", "0.18u")]))
        .unwrap();

    assert_eq!(store.model_count().unwrap(), 6);
    // the result map collapses by name; the newer row wins
    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert_eq!(hits["nch_018"].source_file, "c.lib");
}

#[test]
fn test_parameters_insert_with_their_model() {
    let store = seeded_store();
    // 3 + 3 + 2 + 1 + 0 parameter rows across the five models
    assert_eq!(store.parameter_count().unwrap(), 9);
}

#[test]
fn test_subcircuit_search() {
    let mut store = seeded_store();
    store
        .insert_subcircuit(&subcircuit("inv", ".subckt inv in out\n.ends"))
        .unwrap();
    store
        .insert_subcircuit(&subcircuit("nand2", ".subckt nand2 a b y\n.ends"))
        .unwrap();

    let all = store.search_subcircuits(&SubcircuitFilter::new()).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all["inv"].content.starts_with(".subckt inv"));

    let filter = SubcircuitFilter::new().with_name_pattern("nand%");
    let hits = store.search_subcircuits(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits.contains_key("nand2"));

    let filter = SubcircuitFilter::new().with_max_results(1);
    assert_eq!(store.search_subcircuits(&filter).unwrap().len(), 1);
}

#[test]
fn test_stats() {
    let mut store = seeded_store();
    store
        .insert_subcircuit(&subcircuit("inv", ".subckt inv\n.ends"))
        .unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.models_by_type["nmos"], 3);
    assert_eq!(stats.models_by_type["pmos"], 1);
    assert_eq!(stats.models_by_type["diode"], 1);
    assert_eq!(stats.subcircuit_count, 1);
}

#[test]
fn test_clear_empties_everything() {
    let mut store = seeded_store();
    store
        .insert_subcircuit(&subcircuit("inv", ".subckt inv\n.ends"))
        .unwrap();

    store.clear().unwrap();
    assert_eq!(store.model_count().unwrap(), 0);
    assert_eq!(store.parameter_count().unwrap(), 0);
    assert_eq!(store.subcircuit_count().unwrap(), 0);
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.db");

    let mut store = ModelStore::open(&path).unwrap();
    store
        .insert_model(&model("nch", "nmos", "a.lib", &[("l", "0.18u")]))
        .unwrap();
    drop(store);

    let store = ModelStore::open(&path).unwrap();
    assert_eq!(store.model_count().unwrap(), 1);
    let hits = store.query_models(&ModelFilter::new("nmos")).unwrap();
    assert_eq!(hits["nch"].parameters["l"], "0.18u");
}
