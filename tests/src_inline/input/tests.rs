use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::Value;

use super::*;
use crate::fixtures::{default_experiment, make_temp_dir, record};
use crate::input::source::parse_payload;

fn two_records() -> String {
    Value::Array(vec![
        record("SysA", &[0.0, 0.5, 1.0], &[1.0, 0.4, 0.0], &[0.0, 0.6, 1.0]),
        record("SysB", &[0.0, 0.5, 1.0], &[1.0, 0.3, 0.0], &[0.0, 0.7, 1.0]),
    ])
    .to_string()
}

#[test]
fn test_parse_plain_array() {
    let bundle = parse_results(&two_records()).unwrap();
    assert_eq!(bundle.set.len(), 2);
    assert_eq!(bundle.records.len(), 2);
    assert_eq!(bundle.set.labels(), &[0.0, 0.5, 1.0]);
}

#[test]
fn test_parse_data_object_and_script_forms() {
    let wrapped = format!("{{\"data\": {}}}", two_records());
    assert_eq!(parse_results(&wrapped).unwrap().set.len(), 2);

    let script = format!("var data = {};\n", two_records());
    let bundle = parse_results(&script).unwrap();
    assert_eq!(
        bundle.set.names().collect::<Vec<_>>(),
        vec!["SysA", "SysB"]
    );
}

#[test]
fn test_parse_payload() {
    assert_eq!(parse_payload("\u{feff}  [1]  ").unwrap(), serde_json::json!([1]));
    assert_eq!(parse_payload("const data = [1];").unwrap(), serde_json::json!([1]));
    assert_eq!(parse_payload("var data = [1]").unwrap(), serde_json::json!([1]));
    assert!(parse_payload("hello").is_err());
    assert!(parse_payload("var data = ;").is_err());
    assert!(parse_payload("var data = ").is_err());
    assert!(parse_payload("[1] trailing").is_err());
}

#[test]
fn test_script_with_trailing_statements() {
    let commented = format!("var data = {};\n// generated\n", two_records());
    assert_eq!(parse_results(&commented).unwrap().set.len(), 2);

    let two_vars = format!(
        "var data = {};\nvar generated = \"2024-01-01\";\n",
        two_records()
    );
    assert_eq!(parse_results(&two_vars).unwrap().set.len(), 2);

    let no_semicolon = format!("data = {}\n", two_records());
    assert_eq!(parse_results(&no_semicolon).unwrap().set.len(), 2);
}

#[test]
fn test_records_keep_field_order() {
    let bundle = parse_results(&two_records()).unwrap();
    let keys = bundle.records[0].keys().take(4).cloned().collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec!["experiment", "samples", "fnmr_samples", "tpr_samples"]
    );
}

#[test]
fn test_empty_results_rejected() {
    let err = parse_results("[]").unwrap_err();
    assert!(matches!(err, InputError::Empty));
}

#[test]
fn test_missing_field_names_record() {
    let mut value = record("SysA", &[0.0], &[1.0], &[0.0]);
    value.as_object_mut().unwrap().remove("EER");
    let err = parse_results(&Value::Array(vec![value]).to_string()).unwrap_err();
    match err {
        InputError::Record {
            index, experiment, ..
        } => {
            assert_eq!(index, 0);
            assert_eq!(experiment, "SysA");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_object_record_rejected() {
    let err = parse_results("[1, 2]").unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_length_mismatch_rejected() {
    let text = Value::Array(vec![record("SysA", &[0.0, 1.0], &[1.0], &[0.0, 1.0])]).to_string();
    match parse_results(&text).unwrap_err() {
        InputError::LengthMismatch {
            experiment,
            field,
            expected,
            found,
        } => {
            assert_eq!(experiment, "SysA");
            assert_eq!(field, "fnmr_samples");
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_differing_sampling_rejected() {
    let text = Value::Array(vec![
        record("SysA", &[0.0, 0.5, 1.0], &[1.0, 0.4, 0.0], &[0.0, 0.6, 1.0]),
        record("SysB", &[0.0, 1.0], &[1.0, 0.0], &[0.0, 1.0]),
    ])
    .to_string();
    match parse_results(&text).unwrap_err() {
        InputError::SamplingMismatch {
            experiment,
            reference,
        } => {
            assert_eq!(experiment, "SysB");
            assert_eq!(reference, "SysA");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_names_rejected() {
    let err = validate::validate_experiments(vec![
        default_experiment("SysA"),
        default_experiment("SysA"),
    ])
    .unwrap_err();
    assert!(matches!(err, InputError::DuplicateExperiment(name) if name == "SysA"));
}

#[test]
fn test_load_plain_and_gz_files() {
    let dir = make_temp_dir();
    let plain = dir.join("results.json");
    fs::write(&plain, two_records()).unwrap();
    assert_eq!(load_results(&plain).unwrap().set.len(), 2);

    let gz = dir.join("data.js.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(format!("var data = {};", two_records()).as_bytes())
        .unwrap();
    fs::write(&gz, enc.finish().unwrap()).unwrap();
    assert_eq!(load_results(&gz).unwrap().set.len(), 2);
}

#[test]
fn test_missing_file_reported() {
    let dir = make_temp_dir();
    let err = load_results(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_load_grid_states() {
    let dir = make_temp_dir();
    let path = dir.join("state.json");
    fs::write(
        &path,
        r#"{"errors": {"columns": ["EER", "AUC"], "filters": [{"op": "between", "field": "EER", "max": 0.06}]}}"#,
    )
    .unwrap();
    let states = load_grid_states(&path).unwrap();
    assert_eq!(states.general.columns, None);
    assert_eq!(
        states.errors.columns,
        Some(vec!["EER".to_string(), "AUC".to_string()])
    );
    assert_eq!(states.errors.filters.len(), 1);
}
