#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Validation, normalization and decomposition of exercise names.
//!
//! All functions are pure and operate on static vocabulary tables, so they can be called from
//! any thread without coordination.

mod components;
mod name;
mod normalize;
mod suggestion;
mod validation;
pub mod vocabulary;

pub use components::{ExerciseNameComponents, extract_components};
pub use name::{ExerciseName, NameError};
pub use normalize::{format_name, singularize, title_case, tokenize};
pub use suggestion::suggest_correction;
pub use validation::{MAX_LENGTH, MIN_LENGTH, ValidationResult, validate};
pub use vocabulary::{Equipment, ExerciseCategory, MovementPattern, MuscleGroup, Property};
