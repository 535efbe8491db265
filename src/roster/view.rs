use super::score::{Score, Tier};

/// Presentation boundary the roster signals after it changes.
///
/// `render_all` replaces everything shown (bulk load, bulk reset);
/// `refresh_one` updates a single entity in place after a targeted mutation.
pub trait ViewSync {
    fn render_all(&mut self, entries: &[(String, Score)]);

    fn refresh_one(&mut self, name: &str, score: Score, tier: Tier);
}

/// A view that records nothing, for callers with no display attached
#[derive(Debug, Default)]
pub struct NullView;

impl ViewSync for NullView {
    fn render_all(&mut self, _entries: &[(String, Score)]) {}

    fn refresh_one(&mut self, _name: &str, _score: Score, _tier: Tier) {}
}
