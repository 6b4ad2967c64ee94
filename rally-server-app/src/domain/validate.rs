//! Field grammar checks. Every function is total over its input; the
//! policy layer turns failures into field-name lists.

use validator::Validate;

use crate::domain::player::Handedness;

#[derive(Validate)]
struct NameInput {
    #[validate(length(min = 1, max = 64))]
    name: String,
}

fn within_name_bounds(raw: &str) -> bool {
    NameInput {
        name: raw.to_string(),
    }
    .validate()
    .is_ok()
}

/// Letters only, at least one.
pub fn is_valid_name(raw: &str) -> bool {
    within_name_bounds(raw) && raw.chars().all(|c| c.is_ascii_alphabetic())
}

/// Last names may also be empty.
pub fn is_valid_last_name(raw: &str) -> bool {
    raw.is_empty() || is_valid_name(raw)
}

pub fn is_valid_handedness(raw: &str) -> bool {
    Handedness::parse(raw).is_some()
}

/// Digit string parsing to a strictly positive amount of cents.
/// Leading zeros are tolerated ("007" is 7 cents).
pub fn parse_currency(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(v) if v > 0 => Some(v),
        _ => None,
    }
}

/// Digit string with no leading zero, strictly positive.
pub fn parse_point_value(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if raw.starts_with('0') {
        return None;
    }
    raw.parse::<u32>().ok().filter(|v| *v > 0)
}

/// Tri-state activity filter for list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityFilter {
    All,
    Only(bool),
}

impl ActivityFilter {
    /// Player lists: absent or `*` means no filter, anything else maps to
    /// a boolean via membership in {"true"}.
    pub fn from_player_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("*") => ActivityFilter::All,
            Some(value) => ActivityFilter::Only(value.eq_ignore_ascii_case("true")),
        }
    }

    /// Match lists default to active-only when the parameter is absent.
    pub fn from_match_param(raw: Option<&str>) -> Self {
        match raw {
            None => ActivityFilter::Only(true),
            Some("*") => ActivityFilter::All,
            Some(value) => ActivityFilter::Only(value.eq_ignore_ascii_case("true")),
        }
    }

    pub fn admits(&self, is_active: bool) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Only(wanted) => *wanted == is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_grammar() {
        assert!(is_valid_name("Ada"));
        assert!(is_valid_name("lovelace"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Ada Lovelace"));
        assert!(!is_valid_name("Ada1"));
        assert!(!is_valid_name("Ádá"));
        assert!(!is_valid_name(&"a".repeat(65)));

        assert!(is_valid_last_name(""));
        assert!(is_valid_last_name("Lovelace"));
        assert!(!is_valid_last_name("O'Brien"));
    }

    #[test]
    fn handedness_grammar() {
        assert!(is_valid_handedness("left"));
        assert!(is_valid_handedness("right"));
        assert!(is_valid_handedness("ambi"));
        assert!(!is_valid_handedness("Left"));
        assert!(!is_valid_handedness("both"));
    }

    #[test]
    fn currency_tolerates_leading_zeros_points_do_not() {
        assert_eq!(parse_currency("100"), Some(100));
        assert_eq!(parse_currency("007"), Some(7));
        assert_eq!(parse_currency("0"), None);
        assert_eq!(parse_currency("-5"), None);
        assert_eq!(parse_currency("1.5"), None);
        assert_eq!(parse_currency(""), None);

        assert_eq!(parse_point_value("12"), Some(12));
        assert_eq!(parse_point_value("012"), None);
        assert_eq!(parse_point_value("0"), None);
        assert_eq!(parse_point_value("three"), None);
    }

    #[test]
    fn player_filter_tri_state() {
        assert_eq!(
            ActivityFilter::from_player_param(None),
            ActivityFilter::All
        );
        assert_eq!(
            ActivityFilter::from_player_param(Some("*")),
            ActivityFilter::All
        );
        assert_eq!(
            ActivityFilter::from_player_param(Some("true")),
            ActivityFilter::Only(true)
        );
        assert_eq!(
            ActivityFilter::from_player_param(Some("TRUE")),
            ActivityFilter::Only(true)
        );
        assert_eq!(
            ActivityFilter::from_player_param(Some("false")),
            ActivityFilter::Only(false)
        );
        assert_eq!(
            ActivityFilter::from_player_param(Some("anything")),
            ActivityFilter::Only(false)
        );
    }

    #[test]
    fn match_filter_defaults_to_active_only() {
        assert_eq!(
            ActivityFilter::from_match_param(None),
            ActivityFilter::Only(true)
        );
        assert_eq!(
            ActivityFilter::from_match_param(Some("*")),
            ActivityFilter::All
        );
        assert_eq!(
            ActivityFilter::from_match_param(Some("false")),
            ActivityFilter::Only(false)
        );
    }
}
