use medphys_core::format::{format_number, round_to, strip_trailing_zeros};

#[test]
fn whole_numbers_drop_the_decimal_point() {
    assert_eq!(format_number(40.0), "40");
    assert_eq!(format_number(12.0), "12");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn fractional_values_keep_significant_digits() {
    assert_eq!(format_number(40.50), "40.5");
    assert_eq!(format_number(40.55), "40.55");
    assert_eq!(format_number(13.2), "13.2");
    assert_eq!(format_number(42.56), "42.56");
}

#[test]
fn stripping_is_idempotent() {
    for input in ["40", "40.5", "40.55", "0.01", "100"] {
        assert_eq!(strip_trailing_zeros(input), input);
        assert_eq!(strip_trailing_zeros(strip_trailing_zeros(input)), input);
    }
}

#[test]
fn stripping_truncates_zeros_without_rounding() {
    assert_eq!(strip_trailing_zeros("40.500"), "40.5");
    assert_eq!(strip_trailing_zeros("40.000"), "40");
    assert_eq!(strip_trailing_zeros("1.0550"), "1.055");
    assert_eq!(strip_trailing_zeros("100"), "100");
}

#[test]
fn round_to_two_places() {
    assert_eq!(round_to(12.0 / 7.0, 2), 1.71);
    assert_eq!(round_to(1.5, 2), 1.5);
    assert_eq!(format_number(round_to(100.0 / 3.0, 2)), "33.33");
}
