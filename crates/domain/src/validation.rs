use log::debug;

use crate::{NameError, normalize};

/// Minimum number of characters of a trimmed name.
pub const MIN_LENGTH: usize = 3;
/// Maximum number of characters of a trimmed name.
pub const MAX_LENGTH: usize = 50;

/// Outcome of [`validate`], with the reason and an optional suggested fix for invalid names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        reason: String,
        suggestion: Option<String>,
    },
}

impl ValidationResult {
    #[must_use]
    pub fn from_error(error: &NameError, suggestion: Option<String>) -> Self {
        ValidationResult::Invalid {
            reason: error.to_string(),
            suggestion,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { reason, .. } => Some(reason),
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { suggestion, .. } => suggestion.as_deref(),
        }
    }
}

/// Checks a name against the formatting rules.
///
/// The rules are applied in a fixed order and the first one that fails determines the result.
/// Equipment is not required to come first, but abbreviated equipment is rejected.
#[must_use]
pub fn validate(raw: &str) -> ValidationResult {
    match check(raw) {
        Ok(_) => ValidationResult::Valid,
        Err(rejection) => {
            debug!("rejected exercise name {raw:?}: {}", rejection.error);
            ValidationResult::from_error(&rejection.error, rejection.suggestion)
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct Rejection {
    pub error: NameError,
    pub suggestion: Option<String>,
}

impl Rejection {
    fn new(error: NameError, suggestion: Option<String>) -> Self {
        Self { error, suggestion }
    }
}

pub(crate) fn check(raw: &str) -> Result<&str, Rejection> {
    let name = raw.trim();
    let len = name.chars().count();

    if len < MIN_LENGTH {
        return Err(Rejection::new(NameError::TooShort(len), None));
    }

    if len > MAX_LENGTH {
        return Err(Rejection::new(
            NameError::TooLong(len),
            Some(name.chars().take(MAX_LENGTH).collect()),
        ));
    }

    if !name.is_ascii() {
        return Err(Rejection::new(
            NameError::Emoji,
            Some(name.chars().filter(char::is_ascii).collect()),
        ));
    }

    if name.contains('-') {
        return Err(Rejection::new(
            NameError::Hyphen,
            Some(name.replace('-', " ")),
        ));
    }

    if name
        .split_whitespace()
        .any(|token| normalize::abbreviation(token).is_some())
    {
        return Err(Rejection::new(
            NameError::MalformedEquipment,
            Some(normalize::format_name(name)),
        ));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn invalid(reason: &str, suggestion: Option<&str>) -> ValidationResult {
        ValidationResult::Invalid {
            reason: reason.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    #[rstest]
    #[case::valid("Dumbbell Curl", ValidationResult::Valid)]
    #[case::valid_trimmed("  Barbell Row  ", ValidationResult::Valid)]
    #[case::equipment_not_first("Bench Press Barbell", ValidationResult::Valid)]
    #[case::no_equipment("Push Up", ValidationResult::Valid)]
    #[case::lower_case("dumbbell curl", ValidationResult::Valid)]
    #[case::plural("Dumbbell Curls", ValidationResult::Valid)]
    #[case::minimum_length("Row", ValidationResult::Valid)]
    #[case::empty(
        "",
        invalid("Exercise name must be at least 3 characters (0 < 3)", None)
    )]
    #[case::whitespace(
        "     ",
        invalid("Exercise name must be at least 3 characters (0 < 3)", None)
    )]
    #[case::too_short(
        " Ab ",
        invalid("Exercise name must be at least 3 characters (2 < 3)", None)
    )]
    #[case::too_long(
        "Single Arm Dumbbell Row With Pause At The Top Of The Movement",
        invalid(
            "Exercise name must be 50 characters or fewer (61 > 50)",
            Some("Single Arm Dumbbell Row With Pause At The Top Of T")
        )
    )]
    #[case::emoji(
        "Push Up 💪",
        invalid("Exercise name must not contain emojis", Some("Push Up "))
    )]
    #[case::emoji_inside(
        "Push 💪 Up",
        invalid("Exercise name must not contain emojis", Some("Push  Up"))
    )]
    #[case::hyphen(
        "Bicep-Curl",
        invalid("Use spaces instead of hyphens", Some("Bicep Curl"))
    )]
    #[case::hyphen_not_normalized(
        "bicep-curls db",
        invalid("Use spaces instead of hyphens", Some("bicep curls db"))
    )]
    #[case::abbreviation(
        "DB Curl",
        invalid("Equipment must be properly formatted", Some("Dumbbell Curl"))
    )]
    #[case::abbreviation_lower_case(
        "Curl db",
        invalid("Equipment must be properly formatted", Some("Curl Dumbbell"))
    )]
    #[case::abbreviation_ez(
        "EZ Bar Curl",
        invalid("Equipment must be properly formatted", Some("EZ Bar Bar Curl"))
    )]
    #[case::plural_abbreviation(
        "Row BBs",
        invalid("Equipment must be properly formatted", Some("Row Barbell"))
    )]
    fn test_validate(#[case] raw: &str, #[case] expected: ValidationResult) {
        assert_eq!(validate(raw), expected);
    }

    #[test]
    fn test_validate_too_long_suggestion_is_prefix() {
        let raw = format!("  {}  ", "Curl ".repeat(20));
        let trimmed = raw.trim();

        let result = validate(&raw);
        let suggestion = result.suggestion().unwrap();

        assert!(!result.is_valid());
        assert_eq!(suggestion.chars().count(), MAX_LENGTH);
        assert!(trimmed.starts_with(suggestion));
    }

    #[test]
    fn test_validate_too_short_never_suggests() {
        for raw in ["", " ", "a", "ab", "💪", " ab ", "\t\n"] {
            let result = validate(raw);

            assert!(
                result
                    .reason()
                    .is_some_and(|reason| reason.contains("at least"))
            );
            assert_eq!(result.suggestion(), None);
        }
    }

    #[test]
    fn test_validate_first_failing_rule_wins() {
        let result = validate("Bicep-Curl 💪");

        assert_eq!(
            result,
            invalid(
                "Exercise name must not contain emojis",
                Some("Bicep-Curl ")
            )
        );
    }

    #[rstest]
    #[case("Curl DBs")]
    #[case("Swing KBs")]
    #[case("Row BBs")]
    #[case("DB Curl")]
    fn test_validate_formatted_abbreviation(#[case] raw: &str) {
        assert_eq!(validate(&normalize::format_name(raw)), ValidationResult::Valid);
    }

    #[test]
    fn test_validate_deterministic() {
        for raw in ["DB Curl", "Push Up 💪", "Bench Press Barbell", "x"] {
            assert_eq!(validate(raw), validate(raw));
        }
    }

    #[test]
    fn test_validation_result_accessors() {
        assert!(ValidationResult::Valid.is_valid());
        assert_eq!(ValidationResult::Valid.reason(), None);
        assert_eq!(ValidationResult::Valid.suggestion(), None);

        let result = ValidationResult::from_error(&NameError::Hyphen, Some("Push Up".to_string()));

        assert!(!result.is_valid());
        assert_eq!(result.reason(), Some("Use spaces instead of hyphens"));
        assert_eq!(result.suggestion(), Some("Push Up"));
    }

    #[test]
    fn test_validation_result_equality() {
        assert_eq!(
            invalid("Use spaces instead of hyphens", Some("Push Up")),
            invalid("Use spaces instead of hyphens", Some("Push Up"))
        );
        assert_ne!(
            invalid("Use spaces instead of hyphens", Some("Push Up")),
            invalid("Use spaces instead of hyphens", None)
        );
        assert_ne!(
            invalid("Use spaces instead of hyphens", None),
            ValidationResult::Valid
        );
    }
}
