use medphys_core::models::common::CommonInfo;
use medphys_core::models::request::{ModalityInput, WriteupRequest};
use medphys_core::models::srs::SrsInput;
use medphys_core::models::tbi::TbiInput;
use medphys_writeup::error::WriteupError;
use medphys_writeup::{generate, generate_json, generate_request, list_reference_data};

const TBI_REQUEST: &str = r#"{
    "common_info": {
        "physician": { "name": "Alvarez" },
        "physicist": { "name": "Chen" }
    },
    "tbi_data": {
        "prescription_dose": 12,
        "fractions": 6,
        "setup": "AP/PA",
        "lung_blocks": "none",
        "energy": "15 MV",
        "dose_rate_range": "10-15 cGy/min",
        "machine_dose_rate": 200
    }
}"#;

fn tbi_input() -> TbiInput {
    TbiInput {
        prescription_dose: 12.0,
        fractions: 6,
        setup: "AP/PA".to_string(),
        lung_blocks: "none".to_string(),
        energy: "15 MV".to_string(),
        dose_rate_range: "10-15 cGy/min".to_string(),
        machine_dose_rate: 200.0,
    }
}

#[test]
fn json_request_matches_typed_request() {
    let from_json = generate_json(TBI_REQUEST).unwrap();
    let typed = generate(&CommonInfo::new("Alvarez", "Chen"), &ModalityInput::Tbi(tbi_input())).unwrap();
    assert_eq!(from_json, typed);
    assert!(from_json.text.contains("two AP/PA"));
}

#[test]
fn repeated_generation_is_byte_identical() {
    let first = generate_json(TBI_REQUEST).unwrap();
    let second = generate_json(TBI_REQUEST).unwrap();
    assert_eq!(first.text, second.text);
}

#[test]
fn unknown_fields_are_rejected() {
    let json = TBI_REQUEST.replace("\"fractions\": 6,", "\"fractions\": 6, \"gantry\": 90,");
    let err = generate_json(&json).unwrap_err();
    assert!(matches!(err, WriteupError::Serialization(_)));
    assert!(err.to_string().contains("gantry"));
}

#[test]
fn missing_required_field_is_rejected() {
    let json = TBI_REQUEST.replace("\"setup\": \"AP/PA\",", "");
    let err = generate_json(&json).unwrap_err();
    assert!(matches!(err, WriteupError::Serialization(_)));
    assert!(err.to_string().contains("setup"));
}

#[test]
fn request_with_two_payloads_is_rejected() {
    let mut request = WriteupRequest::new(CommonInfo::new("Alvarez", "Chen"), ModalityInput::Tbi(tbi_input()));
    request.srs_data = Some(SrsInput { lesions: vec![] });
    let err = generate_request(request).unwrap_err();
    let WriteupError::Validation(e) = err else {
        panic!("expected a validation error, got {err}");
    };
    assert_eq!(e.field, "modality");
    assert!(e.message.contains("srs_data, tbi_data"));
}

#[test]
fn request_without_common_info_is_rejected() {
    let request = WriteupRequest {
        tbi_data: Some(tbi_input()),
        ..Default::default()
    };
    let err = generate_request(request).unwrap_err();
    assert!(err.to_string().contains("common_info"));
}

#[test]
fn unknown_modality_reference_data() {
    assert!(list_reference_data("tbi").is_ok());
    let err = list_reference_data("proton").unwrap_err();
    assert!(matches!(err, WriteupError::Catalog(_)));
}
