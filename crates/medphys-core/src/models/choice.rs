/// A closed enumeration whose values arrive on the wire as fixed labels.
///
/// `ALL` is the canonical order, used both for matching incoming strings and
/// for listing the options in reference data.
pub trait ChoiceValue: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    /// The exact wire label, e.g. `"AP/PA"`.
    fn label(self) -> &'static str;

    /// Longer descriptive phrase, where the label alone is not what the
    /// write-up prints.
    fn description(self) -> Option<&'static str> {
        None
    }

    /// Exact, case-sensitive match against the labels in `ALL`.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}
