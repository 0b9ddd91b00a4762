use log::debug;

use crate::{
    Equipment, Property,
    components::find_equipment,
    normalize::{self, singularize, title_case},
};

/// Produces a corrected version of an exercise name with the equipment as the first word.
///
/// Names without equipment are assumed to be bodyweight exercises. Correcting an already
/// corrected name does not change it, unless the name contains `EZ`, which is expanded again.
#[must_use]
pub fn suggest_correction(raw: &str) -> String {
    let name = normalize::format_name(raw);
    let mut words = normalize::tokenize(&name)
        .map(str::to_string)
        .collect::<Vec<_>>();

    if words.is_empty() {
        return String::new();
    }

    let lower = words
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>();

    match find_equipment(&lower) {
        None => {
            debug!("no equipment in {name:?}, assuming bodyweight");
            words.insert(0, Equipment::Bodyweight.name().to_string());
        }
        Some(term) if term.start > 0 => {
            debug!("moving {:?} to the front of {name:?}", term.value);
            words[..term.range().end].rotate_right(term.len);
        }
        Some(_) => {}
    }

    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }

    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}
