use std::time::{Duration, Instant};

use crate::roster::{Score, Tier, ViewSync};

/// How long a freshly changed score stays highlighted
pub const PULSE_DURATION: Duration = Duration::from_millis(160);

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub name: String,
    pub score: Score,
    pub tier: Tier,
    pub pulse_started: Option<Instant>,
}

impl RowView {
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_started
            .is_some_and(|started| now.saturating_duration_since(started) < PULSE_DURATION)
    }
}

/// What the table shows: one row per roster entry, in display order.
///
/// Kept in step with the roster through [`ViewSync`] rather than rebuilt on
/// every frame.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    rows: Vec<RowView>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RowView> {
        self.rows.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.name == name)
    }

    /// Clear pulses that have run their course
    pub fn expire_pulses(&mut self, now: Instant) {
        for row in &mut self.rows {
            if !row.is_pulsing(now) {
                row.pulse_started = None;
            }
        }
    }
}

impl ViewSync for RosterView {
    fn render_all(&mut self, entries: &[(String, Score)]) {
        self.rows = entries
            .iter()
            .map(|(name, score)| RowView {
                name: name.clone(),
                score: *score,
                tier: score.tier(),
                pulse_started: None,
            })
            .collect();
    }

    fn refresh_one(&mut self, name: &str, score: Score, tier: Tier) {
        match self.rows.iter_mut().find(|row| row.name == name) {
            Some(row) => {
                row.score = score;
                row.tier = tier;
                row.pulse_started = Some(Instant::now());
            }
            None => tracing::warn!(%name, "refresh for a row that is not displayed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::clamp;

    fn view_with(names: &[&str]) -> RosterView {
        let mut view = RosterView::new();
        let entries: Vec<_> = names.iter().map(|n| (n.to_string(), Score::MAX)).collect();
        view.render_all(&entries);
        view
    }

    #[test]
    fn test_render_all_replaces_rows_without_pulse() {
        let mut view = view_with(&["Ana", "Berta"]);
        assert_eq!(view.len(), 2);
        view.render_all(&[("Carla".to_string(), Score::MID)]);
        assert_eq!(view.len(), 1);
        let row = view.get(0).unwrap();
        assert_eq!(row.name, "Carla");
        assert_eq!(row.tier, Tier::Low);
        assert!(row.pulse_started.is_none());
    }

    #[test]
    fn test_refresh_one_updates_only_that_row_and_pulses() {
        let mut view = view_with(&["Ana", "Berta"]);
        view.refresh_one("Berta", clamp(6.0), Tier::Mid);

        let ana = view.get(0).unwrap();
        let berta = view.get(1).unwrap();
        assert_eq!(ana.score, Score::MAX);
        assert!(ana.pulse_started.is_none());
        assert_eq!(berta.score, clamp(6.0));
        assert_eq!(berta.tier, Tier::Mid);
        assert!(berta.is_pulsing(Instant::now()));
    }

    #[test]
    fn test_pulse_expires() {
        let mut view = view_with(&["Ana"]);
        view.refresh_one("Ana", clamp(9.9), Tier::High);

        let later = Instant::now() + PULSE_DURATION + Duration::from_millis(1);
        view.expire_pulses(later);

        assert!(view.get(0).unwrap().pulse_started.is_none());
    }

    #[test]
    fn test_refresh_unknown_row_is_ignored() {
        let mut view = view_with(&["Ana"]);
        view.refresh_one("Ghost", Score::MIN, Tier::Low);
        assert_eq!(view.len(), 1);
        assert_eq!(view.position("Ana"), Some(0));
        assert_eq!(view.position("Ghost"), None);
    }
}
