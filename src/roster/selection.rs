use std::collections::BTreeSet;

use super::store::ScoreStore;

/// Entity keys currently marked as batch-mutation targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` if absent, remove it otherwise (ctrl-click)
    pub fn toggle(&mut self, name: &str) {
        if !self.keys.remove(name) {
            self.keys.insert(name.to_string());
        }
    }

    /// Make `name` the only selected entity (plain click)
    pub fn replace_with(&mut self, name: &str) {
        self.keys.clear();
        self.keys.insert(name.to_string());
    }

    pub fn select_all<S: AsRef<str>>(&mut self, all_names: &[S]) {
        self.keys = all_names.iter().map(|n| n.as_ref().to_string()).collect();
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// True iff every entity is selected and there is at least one entity
    pub fn is_full<S: AsRef<str>>(&self, all_names: &[S]) -> bool {
        !all_names.is_empty()
            && self.keys.len() == all_names.len()
            && all_names.iter().all(|n| self.keys.contains(n.as_ref()))
    }

    /// Deselect everything when full, otherwise select everything
    pub fn toggle_all<S: AsRef<str>>(&mut self, all_names: &[S]) {
        if self.is_full(all_names) {
            self.clear();
        } else {
            self.select_all(all_names);
        }
    }

    /// Drop keys the store no longer holds
    pub fn retain_known(&mut self, store: &ScoreStore) {
        self.keys.retain(|k| store.contains(k));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }
}
