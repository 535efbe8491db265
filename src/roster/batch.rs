//! Selection-scoped batch mutation.
//!
//! Every mutating user action becomes an [`Action`]. [`resolve_targets`]
//! decides which entities it touches, and [`apply`] computes, clamps and
//! commits the new scores, then tells the view which rows changed.

use super::score::{clamp, Score};
use super::selection::SelectionSet;
use super::store::ScoreStore;
use super::view::ViewSync;

/// Step used by increment and decrement
pub const STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Increment,
    Decrement,
    ResetTo(Score),
    /// Inline edit of one entity; `raw` is the text the user typed
    DirectEdit { name: String, raw: String },
}

/// Outcome of one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationReport {
    pub applied: Vec<(String, Score)>,
    pub skipped: Vec<String>,
}

impl MutationReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.skipped.is_empty()
    }
}

/// Decide which entities `action` applies to.
///
/// Direct edits always target the edited entity. Otherwise a non-empty
/// selection wins, whether or not `origin` is part of it. With nothing
/// selected the origin row is the target, and with no origin every entity is.
pub fn resolve_targets(
    action: &Action,
    origin: Option<&str>,
    selection: &SelectionSet,
    store: &ScoreStore,
) -> Vec<String> {
    if let Action::DirectEdit { name, .. } = action {
        return vec![name.clone()];
    }
    if !selection.is_empty() {
        return selection.iter().cloned().collect();
    }
    match origin {
        Some(name) => vec![name.to_string()],
        None => store.names(),
    }
}

/// Compute the committed score for one entity currently at `current`
pub fn next_score(action: &Action, current: Score) -> Score {
    match action {
        Action::Increment => clamp(current.value() + STEP),
        Action::Decrement => clamp(current.value() - STEP),
        Action::ResetTo(value) => clamp(value.value()),
        Action::DirectEdit { raw, .. } => match parse_edit(raw) {
            Some(value) => clamp(value),
            None => current,
        },
    }
}

/// Parse inline-edit text. Accepts a decimal comma; rejects NaN and infinities.
fn parse_edit(raw: &str) -> Option<f64> {
    let text = raw.trim().replace(',', ".");
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolve targets, commit new scores and refresh exactly the mutated rows.
///
/// Targets missing from the store are skipped; the rest of the batch still
/// applies.
pub fn apply(
    store: &mut ScoreStore,
    selection: &SelectionSet,
    action: &Action,
    origin: Option<&str>,
    view: &mut dyn ViewSync,
) -> MutationReport {
    let targets = resolve_targets(action, origin, selection, store);
    let mut report = MutationReport::default();

    for name in targets {
        let current = match store.get(&name) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("skipping mutation target: {}", e);
                report.skipped.push(name);
                continue;
            }
        };
        let updated = next_score(action, current);
        if let Err(e) = store.set(&name, updated) {
            tracing::warn!("skipping mutation target: {}", e);
            report.skipped.push(name);
            continue;
        }
        view.refresh_one(&name, updated, updated.tier());
        report.applied.push((name, updated));
    }

    tracing::debug!(
        ?action,
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        "batch applied"
    );
    report
}
