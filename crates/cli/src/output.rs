use std::fmt::{self, Display};

use liftname_domain as domain;
use liftname_domain::Property;

use crate::settings::OutputFormat;

pub fn render<T: serde::Serialize + Display>(
    format: OutputFormat,
    records: &[T],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(records),
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub name: String,
    pub valid: bool,
    pub reason: Option<String>,
    pub suggestion: Option<String>,
}

impl Validation {
    pub fn new(name: &str, result: &domain::ValidationResult) -> Self {
        Self {
            name: name.to_string(),
            valid: result.is_valid(),
            reason: result.reason().map(str::to_string),
            suggestion: result.suggestion().map(str::to_string),
        }
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, &self.suggestion) {
            (None, _) => write!(f, "{}: valid", self.name),
            (Some(reason), None) => write!(f, "{}: invalid: {reason}", self.name),
            (Some(reason), Some(suggestion)) => write!(
                f,
                "{}: invalid: {reason} (suggestion: {suggestion:?})",
                self.name
            ),
        }
    }
}

/// A name together with its formatted or corrected version.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub name: String,
    pub result: String,
}

impl Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub name: String,
    pub equipment: Option<String>,
    pub muscle_group: Option<String>,
    pub movement: Option<String>,
    pub category: String,
    pub movement_pattern: Option<String>,
}

impl Components {
    pub fn new(name: &str, components: &domain::ExerciseNameComponents) -> Self {
        Self {
            name: name.to_string(),
            equipment: components.equipment.map(constant_name),
            muscle_group: components.muscle_group.map(constant_name),
            movement: components.movement.clone(),
            category: constant_name(components.category),
            movement_pattern: components.movement_pattern.map(constant_name),
        }
    }
}

impl Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{}: equipment={} muscle_group={} movement={} category={} movement_pattern={}",
            self.name,
            field(&self.equipment),
            field(&self.muscle_group),
            field(&self.movement),
            self.category,
            field(&self.movement_pattern),
        )
    }
}

/// Renders a property name like `Horizontal Push` as `HORIZONTAL_PUSH`.
fn constant_name(property: impl Property) -> String {
    property.name().to_uppercase().replace(' ', "_")
}
