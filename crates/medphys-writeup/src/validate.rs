//! Field checks shared by the generators.
//!
//! Each check either hands back the normalized value or a
//! [`ValidationError`] naming the field path and the broken constraint.

use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::CommonInfo;
use medphys_core::range::FieldRange;

/// `payload.field`, e.g. `tbi_data.setup`.
pub fn path(payload: &str, field: &str) -> String {
    format!("{payload}.{field}")
}

pub fn number(field: &str, value: f64, range: FieldRange) -> Result<f64, ValidationError> {
    if range.contains(value) {
        Ok(value)
    } else {
        Err(ValidationError::range(field, value, range))
    }
}

pub fn count(field: &str, value: u32, range: FieldRange) -> Result<u32, ValidationError> {
    number(field, f64::from(value), range).map(|_| value)
}

/// Match a wire label against the closed set of `T`.
pub fn choice<T: ChoiceValue>(field: &str, value: &str) -> Result<T, ValidationError> {
    T::from_label(value).ok_or_else(|| ValidationError::one_of(field, value, &T::labels()))
}

pub fn non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::non_empty(field))
    } else {
        Ok(value)
    }
}

pub fn non_empty<'a, T>(field: &str, items: &'a [T]) -> Result<&'a [T], ValidationError> {
    if items.is_empty() {
        Err(ValidationError::non_empty(field))
    } else {
        Ok(items)
    }
}

/// Why a companion field must be present, and why it must not be.
#[derive(Debug, Clone, Copy)]
pub struct Companion<'a> {
    pub required_when: &'a str,
    pub absent_when: &'a str,
}

/// A numeric field that accompanies a flag: present and in range when
/// `required`, otherwise absent or zero.
pub fn companion_number(
    field: &str,
    value: Option<f64>,
    required: bool,
    rule: Companion<'_>,
    range: FieldRange,
) -> Result<Option<f64>, ValidationError> {
    match (required, value) {
        (true, Some(v)) => number(field, v, range).map(Some),
        (true, None) => Err(ValidationError::required(field, rule.required_when)),
        (false, None) => Ok(None),
        (false, Some(v)) if v == 0.0 => Ok(None),
        (false, Some(_)) => Err(ValidationError::absent(field, rule.absent_when)),
    }
}

/// Integer counterpart of [`companion_number`].
pub fn companion_count(
    field: &str,
    value: Option<u32>,
    required: bool,
    rule: Companion<'_>,
    range: FieldRange,
) -> Result<Option<u32>, ValidationError> {
    companion_number(field, value.map(f64::from), required, rule, range)
        .map(|v| v.and(value))
}

pub fn common_info(common: &CommonInfo) -> Result<(), ValidationError> {
    non_blank("common_info.physician.name", &common.physician.name)?;
    non_blank("common_info.physicist.name", &common.physicist.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOST: FieldRange = FieldRange::positive_up_to(30.0);
    const RULE: Companion<'static> = Companion {
        required_when: "has_boost is true",
        absent_when: "has_boost is false",
    };

    #[test]
    fn companion_required_when_flag_set() {
        let err = companion_number("dibh_data.boost_dose", None, true, RULE, BOOST).unwrap_err();
        assert_eq!(err.field, "dibh_data.boost_dose");
        assert_eq!(err.message, "required when has_boost is true");
    }

    #[test]
    fn companion_zero_counts_as_absent() {
        let value = companion_number("dibh_data.boost_dose", Some(0.0), false, RULE, BOOST).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn companion_rejected_without_flag() {
        let err =
            companion_number("dibh_data.boost_dose", Some(10.0), false, RULE, BOOST).unwrap_err();
        assert_eq!(err.message, "must be absent when has_boost is false");
    }

    #[test]
    fn companion_count_keeps_integer_value() {
        let range = FieldRange::closed(1.0, 15.0);
        let value = companion_count("dibh_data.boost_fractions", Some(5), true, RULE, range).unwrap();
        assert_eq!(value, Some(5));
    }

    #[test]
    fn blank_names_are_rejected() {
        let common = CommonInfo::new("Smith", "   ");
        let err = common_info(&common).unwrap_err();
        assert_eq!(err.field, "common_info.physicist.name");
    }
}
