use log::trace;

use crate::vocabulary::{self, ACRONYMS, INVARIANT_PLURALS};

/// Cleans up a free-form exercise name.
///
/// Hyphens become spaces, characters other than ASCII letters, digits and spaces are removed,
/// abbreviations are expanded, the last word is singularized and every word is title-cased.
/// Abbreviations are expanded without looking at the following word, so `EZ Bar Curl` becomes
/// `EZ Bar Bar Curl`.
#[must_use]
pub fn format_name(raw: &str) -> String {
    let cleaned = raw
        .trim()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>();

    let mut words = tokenize(&cleaned).flat_map(expand).collect::<Vec<_>>();

    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }

    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a name into its non-empty, space-separated words.
pub fn tokenize(name: &str) -> impl Iterator<Item = &str> {
    name.split(' ').filter(|token| !token.is_empty())
}

/// Looks up an abbreviated equipment name, also in its plural form (`DBs`).
pub(crate) fn abbreviation(token: &str) -> Option<&'static str> {
    vocabulary::abbreviation(token).or_else(|| vocabulary::abbreviation(&singularize(token)))
}

fn expand(token: &str) -> Vec<String> {
    match abbreviation(token) {
        Some(expansion) => {
            trace!("expanding abbreviation {token:?} to {expansion:?}");
            tokenize(expansion).map(str::to_string).collect()
        }
        None => vec![token.to_string()],
    }
}

/// Turns a plural word into its singular form.
///
/// Muscle names like `Biceps`, words ending in `ss` and words of two letters or fewer are left
/// as they are. Applying the function twice gives the same result as applying it once.
#[must_use]
pub fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if lower.len() <= 2 || lower.ends_with("ss") || INVARIANT_PLURALS.contains(&lower.as_str()) {
        return word.to_string();
    }

    let len = word.len();

    if lower.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }

    if ["sses", "ches", "shes", "xes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return word[..len - 2].to_string();
    }

    if lower.ends_with('s') {
        return word[..len - 1].to_string();
    }

    word.to_string()
}

/// Upper-cases the first letter and lower-cases the rest, except for known acronyms.
#[must_use]
pub fn title_case(word: &str) -> String {
    let upper = word.to_ascii_uppercase();

    if ACRONYMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("Dumbbell Curl", "Dumbbell Curl")]
    #[case::collapse_spaces("Dumbbell   Curls", "Dumbbell Curl")]
    #[case::trim("  Barbell Row  ", "Barbell Row")]
    #[case::hyphen("bicep-curls", "Bicep Curl")]
    #[case::hyphen_and_abbreviation("bicep-curls db", "Bicep Curls Dumbbell")]
    #[case::abbreviation_db("DB Curl", "Dumbbell Curl")]
    #[case::abbreviation_lower_case("db curl", "Dumbbell Curl")]
    #[case::abbreviation_bb("BB Row", "Barbell Row")]
    #[case::abbreviation_kb("KB Swings", "Kettlebell Swing")]
    #[case::abbreviation_ez("EZ Curl", "EZ Bar Curl")]
    #[case::abbreviation_ez_duplication("EZ Bar Curl", "EZ Bar Bar Curl")]
    #[case::plural_abbreviation_db("Curl DBs", "Curl Dumbbell")]
    #[case::plural_abbreviation_kb("Swing KBs", "Swing Kettlebell")]
    #[case::plural_abbreviation_bb("Row BBs", "Row Barbell")]
    #[case::plural_abbreviation_first("dbs curl", "Dumbbell Curl")]
    #[case::mixed_case("dumbbell CuRl", "Dumbbell Curl")]
    #[case::upper_case("BARBELL BENCH PRESS", "Barbell Bench Press")]
    #[case::emoji("Push Up 💪", "Push Up")]
    #[case::emoji_inside("Push 💪 Up", "Push Up")]
    #[case::emoji_leading("💪 Push Up", "Push Up")]
    #[case::punctuation("Farmer's Walk!", "Farmers Walk")]
    #[case::tab("Cable\tFly", "Cable Fly")]
    #[case::digits("45 Degree Hyperextensions", "45 Degree Hyperextension")]
    #[case::flies("Dumbbell Flies", "Dumbbell Fly")]
    #[case::raises("Lateral Raises", "Lateral Raise")]
    #[case::presses("Bench Presses", "Bench Press")]
    #[case::crunches("Cable Crunches", "Cable Crunch")]
    #[case::only_last_word("Curls Dumbbell", "Curls Dumbbell")]
    #[case::push_ups("push ups", "Push Up")]
    #[case::empty("", "")]
    #[case::whitespace("   ", "")]
    #[case::only_emoji("💪🏋️", "")]
    fn test_format_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_name(raw), expected);
    }

    #[rstest]
    #[case("Curls", "Curl")]
    #[case("Flies", "Fly")]
    #[case("Raises", "Raise")]
    #[case("Presses", "Press")]
    #[case("Crunches", "Crunch")]
    #[case("Pushes", "Push")]
    #[case("Lunges", "Lunge")]
    #[case("Press", "Press")]
    #[case("Biceps", "Biceps")]
    #[case("calves", "calves")]
    #[case("Abs", "Abs")]
    #[case("Ups", "Up")]
    #[case("Us", "Us")]
    #[case("Curl", "Curl")]
    fn test_singularize(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(singularize(word), expected);
    }

    #[rstest]
    #[case("Curls")]
    #[case("Flies")]
    #[case("Presses")]
    #[case("Glasses")]
    #[case("Kisses")]
    #[case("Buses")]
    #[case("Boxes")]
    fn test_singularize_idempotent(#[case] word: &str) {
        let once = singularize(word);
        assert_eq!(singularize(&once), once);
    }

    #[rstest]
    #[case("curl", "Curl")]
    #[case("CuRl", "Curl")]
    #[case("EZ", "EZ")]
    #[case("ez", "EZ")]
    #[case("45", "45")]
    #[case("", "")]
    fn test_title_case(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(title_case(word), expected);
    }

    #[rstest]
    #[case("DB", Some("Dumbbell"))]
    #[case("dbs", Some("Dumbbell"))]
    #[case("KBs", Some("Kettlebell"))]
    #[case("EZs", Some("EZ Bar"))]
    #[case("Curls", None)]
    #[case("B", None)]
    fn test_abbreviation(#[case] token: &str, #[case] expected: Option<&str>) {
        assert_eq!(abbreviation(token), expected);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(" Barbell  Back Squat ").collect::<Vec<_>>(),
            vec!["Barbell", "Back", "Squat"]
        );
    }
}
