use medphys_core::models::common::CommonInfo;
use medphys_core::models::tbi::TbiInput;
use medphys_writeup::error::WriteupError;
use medphys_writeup::generators::tbi;

fn common() -> CommonInfo {
    CommonInfo::new("Alvarez", "Chen")
}

fn input(fractions: u32, setup: &str, lung_blocks: &str) -> TbiInput {
    TbiInput {
        prescription_dose: 12.0,
        fractions,
        setup: setup.to_string(),
        lung_blocks: lung_blocks.to_string(),
        energy: "15 MV".to_string(),
        dose_rate_range: "10-15 cGy/min".to_string(),
        machine_dose_rate: 200.0,
    }
}

#[test]
fn ap_pa_without_lung_blocks() {
    let writeup = tbi::generate(&common(), &input(6, "AP/PA", "none")).unwrap();
    assert!(writeup.text.contains("two AP/PA"));
    assert!(writeup.text.contains("12 Gy in 6 fractions (2 Gy per fraction)"));
    assert!(writeup.text.contains("A beam spoiler and custom compensators were fabricated"));
    assert!(!writeup.text.contains("lung blocks were fabricated"));
}

#[test]
fn lateral_with_lung_blocks() {
    let writeup = tbi::generate(&common(), &input(8, "Lateral", "2 HVL")).unwrap();
    assert!(writeup.text.contains("two lateral"));
    assert!(writeup.text.contains("(1.5 Gy per fraction)"));
    assert!(writeup.text.contains("2 HVL lung blocks were fabricated to limit the dose to the lungs"));
}

#[test]
fn writeup_has_three_paragraphs_addressed_to_the_team() {
    let writeup = tbi::generate(&common(), &input(6, "AP/PA", "none")).unwrap();
    let paragraphs: Vec<_> = writeup.text.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 3);
    assert!(paragraphs[0].starts_with("Dr. Alvarez requested a medical physics consultation for ---"));
    assert!(paragraphs[2].starts_with("Dr. Chen, medical physicist,"));
}

#[test]
fn unknown_setup_is_rejected_with_allowed_values() {
    let err = tbi::validate(&input(6, "ap/pa", "none")).unwrap_err();
    assert_eq!(err.field, "tbi_data.setup");
    assert!(err.message.contains("AP/PA, Lateral"));
}

#[test]
fn dose_above_range_is_rejected() {
    let mut tbi_input = input(6, "AP/PA", "none");
    tbi_input.prescription_dose = 20.5;
    let err = tbi::generate(&common(), &tbi_input).unwrap_err();
    match err {
        WriteupError::Validation(e) => assert_eq!(e.field, "tbi_data.prescription_dose"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generation_is_deterministic() {
    let a = tbi::generate(&common(), &input(8, "Lateral", "1 HVL")).unwrap();
    let b = tbi::generate(&common(), &input(8, "Lateral", "1 HVL")).unwrap();
    assert_eq!(a, b);
}
