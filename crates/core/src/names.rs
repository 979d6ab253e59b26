//! Cosmetic author names and book titles.

use rand::seq::SliceRandom;
use rand::RngCore;

/// Source of plausible display strings for generated records.
pub trait NameSource {
    /// A plausible "First Last" person name.
    fn person_name(&mut self, rng: &mut dyn RngCore) -> String;

    /// A short title phrase.
    fn title(&mut self, rng: &mut dyn RngCore) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bennett", "Camila", "Dorian", "Elena", "Felix", "Greta", "Hugo", "Iris", "Jasper",
    "Keira", "Lucas", "Maya", "Nolan", "Olive", "Pablo", "Quinn", "Rosa", "Silas", "Tessa",
    "Umar", "Vera", "Wesley", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barrow", "Castillo", "Doyle", "Ellison", "Fairchild", "Garner", "Holloway",
    "Ingram", "Jennings", "Kowalski", "Lindqvist", "Mercer", "Nakamura", "Osei", "Pryce",
    "Quintero", "Rowan", "Sterling", "Thorne", "Underwood", "Vance", "Whitlock", "Young",
];

const TITLE_WORDS: &[&str] = &[
    "silent", "harbor", "winter", "empire", "shadow", "river", "glass", "crown", "forgotten",
    "garden", "storm", "letters", "midnight", "orchard", "iron", "tide", "ember", "north",
    "lantern", "hollow", "signal", "velvet", "frontier", "echo", "salt", "meridian", "wolf",
    "paper", "quiet", "kingdom",
];

/// Words per generated title.
pub const TITLE_WORD_COUNT: usize = 4;

/// Word-list backed [`NameSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListNames;

impl NameSource for WordListNames {
    fn person_name(&mut self, rng: &mut dyn RngCore) -> String {
        let first = FIRST_NAMES.choose(&mut *rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut *rng).copied().unwrap_or("Smith");
        format!("{first} {last}")
    }

    /// Sentence-case phrase ending in a period, e.g. "Silent harbor iron tide."
    fn title(&mut self, rng: &mut dyn RngCore) -> String {
        let words: Vec<&str> = (0..TITLE_WORD_COUNT)
            .filter_map(|_| TITLE_WORDS.choose(&mut *rng).copied())
            .collect();
        let sentence = words.join(" ");
        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

/// Always returns the same strings. Handy for fixtures that compare rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNames {
    pub author: String,
    pub title: String,
}

impl NameSource for FixedNames {
    fn person_name(&mut self, _rng: &mut dyn RngCore) -> String {
        self.author.clone()
    }

    fn title(&mut self, _rng: &mut dyn RngCore) -> String {
        self.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn person_name_has_first_and_last() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let name = WordListNames.person_name(&mut rng);
        let parts: Vec<_> = name.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(FIRST_NAMES.contains(&parts[0]));
        assert!(LAST_NAMES.contains(&parts[1]));
    }

    #[test]
    fn title_is_a_four_word_sentence() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let title = WordListNames.title(&mut rng);
            assert!(title.ends_with('.'));
            assert_eq!(title.split(' ').count(), TITLE_WORD_COUNT);
            assert!(title.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn same_seed_same_names() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(WordListNames.person_name(&mut a), WordListNames.person_name(&mut b));
        assert_eq!(WordListNames.title(&mut a), WordListNames.title(&mut b));
    }

    #[test]
    fn fixed_names_ignore_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut names = FixedNames {
            author: "Ada Quill".to_string(),
            title: "Fixture title.".to_string(),
        };
        assert_eq!(names.person_name(&mut rng), "Ada Quill");
        assert_eq!(names.title(&mut rng), "Fixture title.");
    }
}
