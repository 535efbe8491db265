use std::cmp::Ordering;
use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::error::NotFound;
use super::score::Score;

/// Authoritative mapping of raw name -> score
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    scores: HashMap<String, Score>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with the default score if it is not already present.
    /// Returns true if the name was inserted.
    pub fn upsert_default(&mut self, name: &str) -> bool {
        if self.scores.contains_key(name) {
            return false;
        }
        self.scores.insert(name.to_string(), Score::DEFAULT);
        true
    }

    pub fn get(&self, name: &str) -> Result<Score, NotFound> {
        self.scores
            .get(name)
            .copied()
            .ok_or_else(|| NotFound(name.to_string()))
    }

    /// Overwrite an existing entry. `score` is trusted to be clamped already.
    pub fn set(&mut self, name: &str, score: Score) -> Result<(), NotFound> {
        match self.scores.get_mut(name) {
            Some(slot) => {
                *slot = score;
                Ok(())
            }
            None => Err(NotFound(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Names in display order, recomputed on every call
    pub fn names(&self) -> Vec<String> {
        let mut keyed: Vec<(String, &String)> = self
            .scores
            .keys()
            .map(|name| (normalize_name(name), name))
            .collect();
        keyed.sort_by(|(norm_a, raw_a), (norm_b, raw_b)| {
            compare_normalized(norm_a, norm_b).then_with(|| raw_a.cmp(raw_b))
        });
        keyed.into_iter().map(|(_, raw)| raw.clone()).collect()
    }

    /// `(name, score)` pairs in display order
    pub fn entries(&self) -> Vec<(String, Score)> {
        self.names()
            .into_iter()
            .map(|name| {
                let score = self.scores[&name];
                (name, score)
            })
            .collect()
    }

    /// Set every entry to `score`
    pub fn fill(&mut self, score: Score) {
        for slot in self.scores.values_mut() {
            *slot = score;
        }
    }
}

/// Strip diacritics (NFD, drop combining marks) and surrounding whitespace
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Case-insensitive first so "alba" and "Bruno" sort as a reader expects
fn compare_normalized(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::score::clamp;

    #[test]
    fn test_upsert_default_inserts_ten() {
        let mut store = ScoreStore::new();
        assert!(store.upsert_default("Ana"));
        assert_eq!(store.get("Ana").unwrap(), Score::MAX);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_default_keeps_existing_score() {
        let mut store = ScoreStore::new();
        store.upsert_default("Ana");
        store.set("Ana", clamp(3.2)).unwrap();

        assert!(!store.upsert_default("Ana"));
        assert_eq!(store.get("Ana").unwrap().value(), 3.2);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = ScoreStore::new();
        let err = store.get("Nadie").unwrap_err();
        assert_eq!(err, NotFound("Nadie".to_string()));
    }

    #[test]
    fn test_set_missing_is_not_found() {
        let mut store = ScoreStore::new();
        assert!(store.set("Nadie", Score::MIN).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_normalize_strips_diacritics_and_trims() {
        assert_eq!(normalize_name("  Álvaro "), "Alvaro");
        assert_eq!(normalize_name("Núñez"), "Nunez");
        assert_eq!(normalize_name("Zoë"), "Zoe");
    }

    #[test]
    fn test_names_sorted_by_normalized_form() {
        let mut store = ScoreStore::new();
        for name in ["Óscar", "bruno", "Álvaro", "Carmen", "alba"] {
            store.upsert_default(name);
        }
        assert_eq!(
            store.names(),
            vec!["alba", "Álvaro", "bruno", "Carmen", "Óscar"]
        );
    }

    #[test]
    fn test_names_ties_broken_by_raw_name() {
        let mut store = ScoreStore::new();
        store.upsert_default("Jose");
        store.upsert_default("José");
        // Same normalized form; raw comparison puts the plain 'e' first
        assert_eq!(store.names(), vec!["Jose", "José"]);
        assert_eq!(store.names(), store.names());
    }

    #[test]
    fn test_entries_follow_name_order() {
        let mut store = ScoreStore::new();
        store.upsert_default("Berta");
        store.upsert_default("Ana");
        store.set("Berta", clamp(6.5)).unwrap();

        let entries = store.entries();
        assert_eq!(entries[0], ("Ana".to_string(), Score::MAX));
        assert_eq!(entries[1], ("Berta".to_string(), clamp(6.5)));
    }

    #[test]
    fn test_fill_sets_every_entry() {
        let mut store = ScoreStore::new();
        store.upsert_default("Ana");
        store.upsert_default("Berta");
        store.fill(Score::MID);
        assert!(store.entries().iter().all(|(_, s)| *s == Score::MID));
    }
}
