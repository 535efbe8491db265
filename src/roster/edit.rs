use super::batch::Action;
use super::score::Score;

/// Inline edit state of the roster display.
///
/// At most one entity is edited at a time. The buffer holds the raw text;
/// parsing and clamping happen when the resulting [`Action::DirectEdit`] is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Display,
    Editing {
        name: String,
        buffer: String,
    },
}

impl EditState {
    /// Enter edit mode with the current value pre-filled
    pub fn begin(&mut self, name: &str, current: Score) {
        *self = EditState::Editing {
            name: name.to_string(),
            buffer: current.to_string(),
        };
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn editing_name(&self) -> Option<&str> {
        match self {
            EditState::Editing { name, .. } => Some(name),
            EditState::Display => None,
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Display => None,
        }
    }

    /// Append a character if it can be part of a number
    pub fn push(&mut self, c: char) {
        if let EditState::Editing { buffer, .. } = self {
            if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') {
                buffer.push(c);
            }
        }
    }

    pub fn pop(&mut self) {
        if let EditState::Editing { buffer, .. } = self {
            buffer.pop();
        }
    }

    /// Leave edit mode, producing the edit to apply
    pub fn commit(&mut self) -> Option<Action> {
        match std::mem::take(self) {
            EditState::Editing { name, buffer } => Some(Action::DirectEdit { name, raw: buffer }),
            EditState::Display => None,
        }
    }

    /// Leave edit mode without touching the score
    pub fn cancel(&mut self) {
        *self = EditState::Display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::score::clamp;

    #[test]
    fn test_begin_prefills_current_value() {
        let mut edit = EditState::default();
        edit.begin("Ana", clamp(7.0));
        assert_eq!(edit.editing_name(), Some("Ana"));
        assert_eq!(edit.buffer(), Some("7.0"));
    }

    #[test]
    fn test_push_filters_non_numeric_chars() {
        let mut edit = EditState::default();
        edit.begin("Ana", clamp(7.0));
        edit.pop();
        edit.pop();
        edit.pop();
        for c in "4x,5 ".chars() {
            edit.push(c);
        }
        assert_eq!(edit.buffer(), Some("4,5"));
    }

    #[test]
    fn test_commit_yields_direct_edit_and_returns_to_display() {
        let mut edit = EditState::default();
        edit.begin("Ana", clamp(7.0));
        edit.pop();
        edit.push('5');

        let action = edit.commit();
        assert_eq!(
            action,
            Some(Action::DirectEdit {
                name: "Ana".to_string(),
                raw: "7.5".to_string(),
            })
        );
        assert_eq!(edit, EditState::Display);
    }

    #[test]
    fn test_cancel_produces_nothing() {
        let mut edit = EditState::default();
        edit.begin("Ana", clamp(7.0));
        edit.cancel();
        assert!(!edit.is_editing());
        assert_eq!(edit.commit(), None);
    }

    #[test]
    fn test_push_ignored_outside_edit_mode() {
        let mut edit = EditState::default();
        edit.push('3');
        assert_eq!(edit, EditState::Display);
    }
}
