pub mod batch;
pub mod edit;
pub mod error;
pub mod score;
pub mod selection;
pub mod store;
pub mod view;

pub use batch::{Action, MutationReport};
pub use edit::EditState;
pub use error::NotFound;
pub use score::{clamp, Score, Tier};
pub use selection::SelectionSet;
pub use store::{normalize_name, ScoreStore};
pub use view::{NullView, ViewSync};

/// Counts reported after merging a name list into the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Names in the source list
    pub read: usize,
    /// Names that were not in the roster yet
    pub added: usize,
}

/// The roster state: scores plus the current selection.
///
/// All mutation goes through here so the selection never references a name
/// the store does not hold.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    store: ScoreStore,
    selection: SelectionSet,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Merge `names` into the roster (existing scores are kept) and redraw
    pub fn load_names<S: AsRef<str>>(&mut self, names: &[S], view: &mut dyn ViewSync) -> LoadSummary {
        let added = names
            .iter()
            .filter(|name| self.store.upsert_default(name.as_ref()))
            .count();
        self.selection.retain_known(&self.store);
        view.render_all(&self.store.entries());

        tracing::info!(read = names.len(), added, total = self.store.len(), "names loaded");
        LoadSummary {
            read: names.len(),
            added,
        }
    }

    /// Apply a user action through the batch mutator
    pub fn apply(&mut self, action: &Action, origin: Option<&str>, view: &mut dyn ViewSync) -> MutationReport {
        batch::apply(&mut self.store, &self.selection, action, origin, view)
    }

    /// Set every entity to `score`, ignoring the selection, and redraw
    pub fn reset_all(&mut self, score: Score, view: &mut dyn ViewSync) {
        self.store.fill(score);
        view.render_all(&self.store.entries());
        tracing::info!(%score, total = self.store.len(), "all scores reset");
    }

    pub fn toggle_selected(&mut self, name: &str) {
        if self.store.contains(name) {
            self.selection.toggle(name);
        }
    }

    pub fn select_only(&mut self, name: &str) {
        if self.store.contains(name) {
            self.selection.replace_with(name);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let names = self.store.names();
        self.selection.toggle_all(&names);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_fully_selected(&self) -> bool {
        self.selection.is_full(&self.store.names())
    }

    /// Label for the select-all control
    pub fn select_all_label(&self) -> &'static str {
        if self.is_fully_selected() {
            "Deselect all"
        } else {
            "Select all"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingView {
        full_renders: Vec<usize>,
        refreshes: usize,
    }

    impl ViewSync for CountingView {
        fn render_all(&mut self, entries: &[(String, Score)]) {
            self.full_renders.push(entries.len());
        }

        fn refresh_one(&mut self, _name: &str, _score: Score, _tier: Tier) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn test_load_is_additive_and_keeps_scores() {
        let mut roster = Roster::new();
        let mut view = CountingView::default();
        roster.load_names(&["Ana", "Berta"], &mut view);
        roster.apply(&Action::Decrement, Some("Ana"), &mut view);

        let summary = roster.load_names(&["Ana", "Carla"], &mut view);

        assert_eq!(summary, LoadSummary { read: 2, added: 1 });
        assert_eq!(roster.store().get("Ana").unwrap().value(), 9.9);
        assert_eq!(roster.store().get("Carla").unwrap(), Score::MAX);
        assert_eq!(view.full_renders, vec![2, 3]);
    }

    #[test]
    fn test_load_same_list_twice_changes_nothing() {
        let mut roster = Roster::new();
        roster.load_names(&["Ana"], &mut NullView);
        roster.apply(&Action::ResetTo(Score::MID), None, &mut NullView);
        let summary = roster.load_names(&["Ana"], &mut NullView);
        assert_eq!(summary.added, 0);
        assert_eq!(roster.store().get("Ana").unwrap(), Score::MID);
    }

    #[test]
    fn test_selection_ignores_unknown_names() {
        let mut roster = Roster::new();
        roster.load_names(&["Ana"], &mut NullView);
        roster.toggle_selected("Ghost");
        roster.select_only("Ghost");
        assert!(roster.selection().is_empty());
    }

    #[test]
    fn test_select_all_label_tracks_fullness() {
        let mut roster = Roster::new();
        assert_eq!(roster.select_all_label(), "Select all");
        roster.load_names(&["Ana", "Berta"], &mut NullView);
        roster.toggle_select_all();
        assert!(roster.is_fully_selected());
        assert_eq!(roster.select_all_label(), "Deselect all");
        roster.toggle_selected("Ana");
        assert_eq!(roster.select_all_label(), "Select all");
    }

    #[test]
    fn test_reset_all_ignores_selection_and_redraws() {
        let mut roster = Roster::new();
        let mut view = CountingView::default();
        roster.load_names(&["Ana", "Berta"], &mut view);
        roster.select_only("Ana");

        roster.reset_all(Score::MIN, &mut view);

        assert!(roster.store().entries().iter().all(|(_, s)| *s == Score::MIN));
        assert_eq!(view.full_renders.len(), 2);
        assert_eq!(view.refreshes, 0);
    }

    #[test]
    fn test_keyboard_decrement_with_no_selection_hits_everyone() {
        let mut roster = Roster::new();
        let mut view = CountingView::default();
        roster.load_names(&["A", "B", "C"], &mut view);

        let report = roster.apply(&Action::Decrement, None, &mut view);

        assert_eq!(report.applied.len(), 3);
        assert_eq!(view.refreshes, 3);
    }
}
