use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Defines the valid range for a numeric input field.
///
/// `max` of `None` means the field is only bounded below. The lower bound
/// is inclusive unless `min_exclusive` is set, which is how "strictly
/// positive" quantities such as dose and volume are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: Option<f64>,
    pub min_exclusive: bool,
}

impl FieldRange {
    /// `[min, max]`
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            min_exclusive: false,
        }
    }

    /// `(0, max]`
    pub const fn positive_up_to(max: f64) -> Self {
        Self {
            min: 0.0,
            max: Some(max),
            min_exclusive: true,
        }
    }

    /// `(0, ∞)`
    pub const fn positive() -> Self {
        Self {
            min: 0.0,
            max: None,
            min_exclusive: true,
        }
    }

    /// `[min, ∞)`
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: None,
            min_exclusive: false,
        }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        let below_max = match self.max {
            Some(max) => value <= max,
            None => value.is_finite(),
        };
        above_min && below_max
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_exclusive { '(' } else { '[' };
        match self.max {
            Some(max) => write!(f, "{open}{}, {}]", self.min, max),
            None => write!(f, "{open}{}, ∞)", self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_minimum_rejects_zero() {
        let range = FieldRange::positive_up_to(20.0);
        assert!(!range.contains(0.0));
        assert!(range.contains(0.01));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
    }

    #[test]
    fn unbounded_range_rejects_nan_and_infinity() {
        let range = FieldRange::positive();
        assert!(range.contains(1e6));
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
    }

    #[test]
    fn display_marks_open_and_closed_ends() {
        assert_eq!(FieldRange::closed(50.0, 100.0).to_string(), "[50, 100]");
        assert_eq!(FieldRange::positive_up_to(20.0).to_string(), "(0, 20]");
        assert_eq!(FieldRange::positive().to_string(), "(0, ∞)");
        assert_eq!(FieldRange::at_least(1.0).to_string(), "[1, ∞)");
    }

    #[test]
    fn lower_bound_only_includes_minimum() {
        let range = FieldRange::at_least(1.0);
        assert!(range.contains(1.0));
        assert!(range.contains(500.0));
        assert!(!range.contains(0.5));
    }
}
