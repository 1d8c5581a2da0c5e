//! Workspace-level integration tests: the parsed record as the downstream
//! form layer consumes it: serialized, merged into a payload, and read
//! back.

use approx::assert_relative_eq;
use takeoff_parse::{ParsedProjectDescription, ProjectParser};

#[test]
fn record_roundtrips_through_json() {
    let parser = ProjectParser::builtin();
    let record = parser.parse(
        "Renovate 12 story luxury hotel with conference rooms and parking in Chicago",
    );

    let json = serde_json::to_string_pretty(&record).unwrap();
    let back: ParsedProjectDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn serialized_record_omits_absent_fields() {
    let parser = ProjectParser::builtin();

    let empty = serde_json::to_value(parser.parse("")).unwrap();
    let object = empty.as_object().unwrap();
    assert!(!object.contains_key("building_type"));
    assert!(!object.contains_key("building_mix"));
    assert_eq!(object["confidence"], 0);

    let full = serde_json::to_value(parser.parse("40000 sf warehouse (50%) and office (50%)"))
        .unwrap();
    assert!(full.as_object().unwrap().contains_key("building_mix"));
}

#[test]
fn mixed_use_payload_fields() {
    let parser = ProjectParser::builtin();
    let record = parser.parse("150x300 warehouse (70%) + office(30%) in California");

    assert_eq!(record.building_type.as_deref(), Some("mixed_use"));
    assert_eq!(record.square_footage, Some(45_000));

    let mix = record.building_mix.as_ref().unwrap();
    assert_relative_eq!(mix.values().sum::<f64>(), 1.0);
    assert_eq!(
        record.mix_summary.as_deref(),
        Some("warehouse (70%), office (30%)")
    );
}

#[test]
fn repeated_parses_serialize_identically() {
    let parser = ProjectParser::builtin();
    let text = "new 4000 sf full-service restaurant with bar in Nashville";

    let a = serde_json::to_string(&parser.parse(text)).unwrap();
    let b = serde_json::to_string(&parser.parse(text)).unwrap();
    assert_eq!(a, b);
}
