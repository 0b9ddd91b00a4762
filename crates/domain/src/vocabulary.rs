use std::{collections::HashMap, slice::Iter, sync::LazyLock};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Cable,
    Machine,
    Kettlebell,
    Bodyweight,
    EzBar,
    TrapBar,
    SmithMachine,
    ResistanceBand,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 10] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Kettlebell,
            Equipment::Bodyweight,
            Equipment::EzBar,
            Equipment::TrapBar,
            Equipment::SmithMachine,
            Equipment::ResistanceBand,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::EzBar => "EZ Bar",
            Equipment::TrapBar => "Trap Bar",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::ResistanceBand => "Resistance Band",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    // Arms
    Biceps,
    Triceps,
    Forearms,
    // Torso
    Chest,
    Shoulders,
    Back,
    Lats,
    Traps,
    // Core
    Abs,
    Obliques,
    // Legs
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Legs,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 15] = [
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Lats,
            MuscleGroup::Traps,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Legs,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Back => "Back",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Legs => "Legs",
        }
    }
}

impl MuscleGroup {
    /// Leg muscle groups have no category of their own and resolve to `None`.
    #[must_use]
    pub fn category(self) -> Option<ExerciseCategory> {
        match self {
            MuscleGroup::Biceps | MuscleGroup::Triceps | MuscleGroup::Forearms => {
                Some(ExerciseCategory::Arms)
            }
            MuscleGroup::Chest => Some(ExerciseCategory::Chest),
            MuscleGroup::Shoulders => Some(ExerciseCategory::Shoulders),
            MuscleGroup::Back | MuscleGroup::Lats | MuscleGroup::Traps => {
                Some(ExerciseCategory::Back)
            }
            MuscleGroup::Abs | MuscleGroup::Obliques => Some(ExerciseCategory::Core),
            MuscleGroup::Quads
            | MuscleGroup::Hamstrings
            | MuscleGroup::Glutes
            | MuscleGroup::Calves
            | MuscleGroup::Legs => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExerciseCategory {
    Arms,
    Chest,
    Shoulders,
    Back,
    Core,
    #[default]
    FullBody,
}

impl Property for ExerciseCategory {
    fn iter() -> Iter<'static, ExerciseCategory> {
        static CATEGORIES: [ExerciseCategory; 6] = [
            ExerciseCategory::Arms,
            ExerciseCategory::Chest,
            ExerciseCategory::Shoulders,
            ExerciseCategory::Back,
            ExerciseCategory::Core,
            ExerciseCategory::FullBody,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseCategory::Arms => "Arms",
            ExerciseCategory::Chest => "Chest",
            ExerciseCategory::Shoulders => "Shoulders",
            ExerciseCategory::Back => "Back",
            ExerciseCategory::Core => "Core",
            ExerciseCategory::FullBody => "Full Body",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MovementPattern {
    Squat,
    Hinge,
    Lunge,
    HorizontalPush,
    VerticalPush,
    HorizontalPull,
    VerticalPull,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 7] = [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Lunge,
            MovementPattern::HorizontalPush,
            MovementPattern::VerticalPush,
            MovementPattern::HorizontalPull,
            MovementPattern::VerticalPull,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::Lunge => "Lunge",
            MovementPattern::HorizontalPush => "Horizontal Push",
            MovementPattern::VerticalPush => "Vertical Push",
            MovementPattern::HorizontalPull => "Horizontal Pull",
            MovementPattern::VerticalPull => "Vertical Pull",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// Abbreviations expanded token by token during normalization.
pub(crate) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("db", "Dumbbell"),
    ("bb", "Barbell"),
    ("kb", "Kettlebell"),
    ("ez", "EZ Bar"),
];

/// Tokens kept upper case by title-casing.
pub(crate) const ACRONYMS: &[&str] = &["EZ"];

/// Plural words that are not singularized.
pub(crate) const INVARIANT_PLURALS: &[&str] = &[
    "abs",
    "biceps",
    "triceps",
    "forearms",
    "lats",
    "traps",
    "delts",
    "pecs",
    "obliques",
    "quads",
    "hamstrings",
    "glutes",
    "calves",
];

const EQUIPMENT_TERMS: &[(&str, Equipment)] = &[
    ("barbell", Equipment::Barbell),
    ("dumbbell", Equipment::Dumbbell),
    ("cable", Equipment::Cable),
    ("machine", Equipment::Machine),
    ("kettlebell", Equipment::Kettlebell),
    ("bodyweight", Equipment::Bodyweight),
    ("body weight", Equipment::Bodyweight),
    ("ez bar", Equipment::EzBar),
    ("trap bar", Equipment::TrapBar),
    ("hex bar", Equipment::TrapBar),
    ("smith machine", Equipment::SmithMachine),
    ("resistance band", Equipment::ResistanceBand),
    ("band", Equipment::ResistanceBand),
];

const MUSCLE_GROUP_TERMS: &[(&str, MuscleGroup)] = &[
    ("bicep", MuscleGroup::Biceps),
    ("biceps", MuscleGroup::Biceps),
    ("tricep", MuscleGroup::Triceps),
    ("triceps", MuscleGroup::Triceps),
    ("forearm", MuscleGroup::Forearms),
    ("forearms", MuscleGroup::Forearms),
    ("wrist", MuscleGroup::Forearms),
    ("chest", MuscleGroup::Chest),
    ("pec", MuscleGroup::Chest),
    ("pecs", MuscleGroup::Chest),
    ("shoulder", MuscleGroup::Shoulders),
    ("shoulders", MuscleGroup::Shoulders),
    ("delt", MuscleGroup::Shoulders),
    ("delts", MuscleGroup::Shoulders),
    ("back", MuscleGroup::Back),
    ("lat", MuscleGroup::Lats),
    ("lats", MuscleGroup::Lats),
    ("trap", MuscleGroup::Traps),
    ("traps", MuscleGroup::Traps),
    ("ab", MuscleGroup::Abs),
    ("abs", MuscleGroup::Abs),
    ("core", MuscleGroup::Abs),
    ("oblique", MuscleGroup::Obliques),
    ("obliques", MuscleGroup::Obliques),
    ("quad", MuscleGroup::Quads),
    ("quads", MuscleGroup::Quads),
    ("hamstring", MuscleGroup::Hamstrings),
    ("hamstrings", MuscleGroup::Hamstrings),
    ("glute", MuscleGroup::Glutes),
    ("glutes", MuscleGroup::Glutes),
    ("calf", MuscleGroup::Calves),
    ("calves", MuscleGroup::Calves),
    ("leg", MuscleGroup::Legs),
    ("legs", MuscleGroup::Legs),
];

pub(crate) const MOVEMENT_TERMS: &[&str] = &[
    "press",
    "curl",
    "fly",
    "squat",
    "deadlift",
    "row",
    "raise",
    "pulldown",
    "pull down",
    "pull up",
    "pullup",
    "chin up",
    "chinup",
    "push up",
    "pushup",
    "dip",
    "lunge",
    "extension",
    "shrug",
    "crunch",
    "plank",
    "thrust",
    "bridge",
    "swing",
    "kickback",
    "pullover",
    "good morning",
    "step up",
];

/// Muscle terms that name a variant of the following movement instead.
pub(crate) const MOVEMENT_MODIFIERS: &[(&str, &str)] = &[("back", "squat")];

pub(crate) const OVERHEAD_CUES: &[&str] = &["overhead", "military", "shoulder", "arnold", "push"];
pub(crate) const HORIZONTAL_CUES: &[&str] = &["bench", "chest", "floor", "incline", "decline"];
pub(crate) const LEG_CUES: &[&str] = &["leg", "legs"];
pub(crate) const UPRIGHT_CUES: &[&str] = &["upright"];

static EQUIPMENT_LOOKUP: LazyLock<HashMap<&'static str, Equipment>> =
    LazyLock::new(|| EQUIPMENT_TERMS.iter().copied().collect());

static MUSCLE_GROUP_LOOKUP: LazyLock<HashMap<&'static str, MuscleGroup>> =
    LazyLock::new(|| MUSCLE_GROUP_TERMS.iter().copied().collect());

/// Looks up a lower-case equipment term of one or two words.
#[must_use]
pub fn equipment(term: &str) -> Option<Equipment> {
    EQUIPMENT_LOOKUP.get(term).copied()
}

/// Looks up a lower-case muscle group term.
#[must_use]
pub fn muscle_group(term: &str) -> Option<MuscleGroup> {
    MUSCLE_GROUP_LOOKUP.get(term).copied()
}

#[must_use]
pub fn is_movement(term: &str) -> bool {
    MOVEMENT_TERMS.contains(&term)
}

pub(crate) fn abbreviation(token: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| token.eq_ignore_ascii_case(abbreviation))
        .map(|(_, expansion)| *expansion)
}
