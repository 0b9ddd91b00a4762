use std::ops::Range;

use log::trace;

use crate::{
    Equipment, ExerciseCategory, MovementPattern, MuscleGroup, normalize,
    vocabulary::{
        self, HORIZONTAL_CUES, LEG_CUES, MOVEMENT_MODIFIERS, OVERHEAD_CUES, UPRIGHT_CUES,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseNameComponents {
    pub equipment: Option<Equipment>,
    pub muscle_group: Option<MuscleGroup>,
    pub movement: Option<String>,
    pub category: ExerciseCategory,
    pub movement_pattern: Option<MovementPattern>,
}

/// Identifies the equipment, muscle group and movement named in an exercise name.
///
/// The category follows from the muscle group and falls back to `FullBody`. The movement pattern
/// is inferred from the movement and the words around it and stays unset when it is ambiguous.
#[must_use]
pub fn extract_components(raw: &str) -> ExerciseNameComponents {
    let name = normalize::format_name(raw);
    let words = normalize::tokenize(&name)
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>();

    let equipment = find_equipment(&words);
    let consumed = equipment.as_ref().map_or(0..0, Term::range);
    let muscle_group = find_muscle_group(&words, &consumed);
    let movement = find_movement(&words).map(|term| term.value);
    let category = muscle_group
        .and_then(MuscleGroup::category)
        .unwrap_or_default();
    let movement_pattern = movement
        .as_deref()
        .and_then(|movement| movement_pattern(movement, &words, muscle_group));

    let components = ExerciseNameComponents {
        equipment: equipment.map(|term| term.value),
        muscle_group,
        movement,
        category,
        movement_pattern,
    };

    trace!("extracted {components:?} from {raw:?}");

    components
}

/// A vocabulary term found in a sequence of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Term<T> {
    pub start: usize,
    pub len: usize,
    pub value: T,
}

impl<T> Term<T> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Scans lower-case words from left to right, trying a two-word term before a one-word term at
/// each position.
fn find_term<T>(words: &[String], lookup: impl Fn(&str) -> Option<T>) -> Option<Term<T>> {
    (0..words.len()).find_map(|start| {
        words
            .get(start + 1)
            .and_then(|next| lookup(&format!("{} {next}", words[start])))
            .map(|value| Term {
                start,
                len: 2,
                value,
            })
            .or_else(|| {
                lookup(&words[start]).map(|value| Term {
                    start,
                    len: 1,
                    value,
                })
            })
    })
}

pub(crate) fn find_equipment(words: &[String]) -> Option<Term<Equipment>> {
    find_term(words, vocabulary::equipment)
}

fn find_muscle_group(words: &[String], consumed: &Range<usize>) -> Option<MuscleGroup> {
    words
        .iter()
        .enumerate()
        .filter(|(i, _)| !consumed.contains(i))
        .filter(|(i, word)| {
            !words.get(i + 1).is_some_and(|next| {
                MOVEMENT_MODIFIERS.contains(&(word.as_str(), next.as_str()))
            })
        })
        .find_map(|(_, word)| vocabulary::muscle_group(word))
}

fn find_movement(words: &[String]) -> Option<Term<String>> {
    find_term(words, |term| {
        let singular = match term.rsplit_once(' ') {
            Some((first, last)) => format!("{first} {}", normalize::singularize(last)),
            None => normalize::singularize(term),
        };
        vocabulary::is_movement(&singular).then_some(singular)
    })
}

fn movement_pattern(
    movement: &str,
    words: &[String],
    muscle_group: Option<MuscleGroup>,
) -> Option<MovementPattern> {
    let has_cue = |cues| contains_any(words, cues);

    match movement {
        "squat" => Some(MovementPattern::Squat),
        "deadlift" | "good morning" | "thrust" | "bridge" | "swing" => Some(MovementPattern::Hinge),
        "lunge" | "step up" => Some(MovementPattern::Lunge),
        "press" if has_cue(LEG_CUES) => Some(MovementPattern::Squat),
        "press" if has_cue(OVERHEAD_CUES) || muscle_group == Some(MuscleGroup::Shoulders) => {
            Some(MovementPattern::VerticalPush)
        }
        "press" if has_cue(HORIZONTAL_CUES) || muscle_group == Some(MuscleGroup::Chest) => {
            Some(MovementPattern::HorizontalPush)
        }
        "push up" | "pushup" => Some(MovementPattern::HorizontalPush),
        "dip" => Some(MovementPattern::VerticalPush),
        "row" if has_cue(UPRIGHT_CUES) => Some(MovementPattern::VerticalPull),
        "row" => Some(MovementPattern::HorizontalPull),
        "pull up" | "pullup" | "chin up" | "chinup" | "pulldown" | "pull down" => {
            Some(MovementPattern::VerticalPull)
        }
        _ => None,
    }
}

fn contains_any(words: &[String], cues: &[&str]) -> bool {
    words.iter().any(|word| cues.contains(&word.as_str()))
}
