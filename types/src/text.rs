//! Small pure text helpers.

/// Case transformation applied by [`normalize_case`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Case {
    /// Leave the input untouched.
    #[default]
    Preserve,
    /// Unicode default uppercase mapping.
    Upper,
}

impl From<bool> for Case {
    fn from(uppercase: bool) -> Self {
        if uppercase { Case::Upper } else { Case::Preserve }
    }
}

/// Apply `case` to `value`.
///
/// Total over all input; the uppercase mapping may change the length
/// (`ß` becomes `SS`).
#[must_use]
pub fn normalize_case(value: &str, case: impl Into<Case>) -> String {
    match case.into() {
        Case::Preserve => value.to_string(),
        Case::Upper => value.to_uppercase(),
    }
}
