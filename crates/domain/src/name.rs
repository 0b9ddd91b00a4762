use derive_more::{AsRef, Display};

use crate::validation;

/// An exercise name that passed all formatting rules.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseName(String);

impl ExerciseName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        validation::check(name)
            .map(|name| ExerciseName(name.to_string()))
            .map_err(|rejection| rejection.error)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Exercise name must be at least 3 characters ({0} < 3)")]
    TooShort(usize),
    #[error("Exercise name must be 50 characters or fewer ({0} > 50)")]
    TooLong(usize),
    #[error("Exercise name must not contain emojis")]
    Emoji,
    #[error("Use spaces instead of hyphens")]
    Hyphen,
    #[error("Equipment must be properly formatted")]
    MalformedEquipment,
}
