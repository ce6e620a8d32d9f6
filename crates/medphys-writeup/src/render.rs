//! Paragraph assembly and the phrasing helpers every generator shares.

use medphys_core::format::{format_number, round_to};
use medphys_core::models::common::{GeneratedWriteup, Person};

/// Patient identity never enters the generator; the write-up carries this
/// placeholder for the clinician to fill in.
pub const PATIENT_PLACEHOLDER: &str = "---";

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Join paragraphs in order with a blank line between them.
pub fn assemble(paragraphs: &[String]) -> GeneratedWriteup {
    GeneratedWriteup {
        text: paragraphs.join(PARAGRAPH_SEPARATOR),
    }
}

/// `Dr. <name>`, name used verbatim.
pub fn doctor(person: &Person) -> String {
    format!("Dr. {}", person.name)
}

/// `1 fraction` / `5 fractions`
pub fn fractions(count: u32) -> String {
    if count == 1 {
        "1 fraction".to_string()
    } else {
        format!("{count} fractions")
    }
}

/// An input quantity, printed as given.
pub fn quantity(value: f64) -> String {
    format_number(value)
}

/// A computed quantity, rounded to 2 decimal places.
pub fn derived(value: f64) -> String {
    format_number(round_to(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_count_agrees_in_number() {
        assert_eq!(fractions(1), "1 fraction");
        assert_eq!(fractions(8), "8 fractions");
    }

    #[test]
    fn paragraphs_are_separated_by_a_blank_line() {
        let writeup = assemble(&["One.".to_string(), "Two.".to_string()]);
        assert_eq!(writeup.text, "One.\n\nTwo.");
    }

    #[test]
    fn derived_values_are_rounded_before_stripping() {
        assert_eq!(derived(12.0 / 7.0), "1.71");
        assert_eq!(derived(40.05 + 10.0), "50.05");
        assert_eq!(quantity(40.05), "40.05");
    }
}
