use super::text_surface::TextSurface;
use crate::input::TextInputAction;

/// Edit-in-place text bound to an externally controlled value.
///
/// While focused, external updates are recorded but never pushed into the
/// surface. Blur reads the surface back and reports a commit only when the
/// normalized draft differs from the current external value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineText {
    value: String,
    surface: TextSurface,
    focused: bool,
    edit_mode: bool,
    placeholder: String,
}

impl InlineText {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            surface: TextSurface::with_text(value.clone()),
            value,
            focused: false,
            edit_mode: true,
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn draft(&self) -> &str {
        self.surface.content()
    }

    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Leaving edit mode drops focus without committing.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
        if !edit_mode {
            self.focused = false;
            self.surface.set_content(self.value.clone());
        }
    }

    /// What a renderer should show right now.
    pub fn display_text(&self) -> &str {
        if self.focused {
            self.surface.content()
        } else if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Records a new external value. Returns whether the surface was refreshed.
    pub fn sync_external(&mut self, value: impl Into<String>) -> bool {
        self.value = value.into();
        if self.focused {
            tracing::trace!("external text update deferred until blur");
            return false;
        }
        self.surface.set_content(self.value.clone());
        true
    }

    pub fn focus(&mut self) -> bool {
        if !self.edit_mode || self.focused {
            return false;
        }
        self.focused = true;
        self.surface.move_cursor_to_end();
        true
    }

    /// Releases focus and returns the committed text, if it changed.
    pub fn blur(&mut self) -> Option<String> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        let committed = normalize_committed_text(self.surface.content());
        self.surface.set_content(committed.clone());
        if committed == self.value {
            return None;
        }
        tracing::debug!(chars = committed.chars().count(), "inline text committed");
        Some(committed)
    }

    /// Restores the surface to the external value and releases focus.
    pub fn cancel(&mut self) {
        self.surface.set_content(self.value.clone());
        self.focused = false;
    }

    pub fn submit(&mut self) -> Option<String> {
        self.blur()
    }

    /// Applies one editing gesture. Returns a commit when the gesture ended editing.
    pub fn apply(&mut self, action: TextInputAction) -> Option<String> {
        if !self.focused {
            return None;
        }
        let surface = &mut self.surface;
        match action {
            TextInputAction::Insert(c) => surface.insert_char(c),
            TextInputAction::InsertLineBreak => surface.insert_line_break(),
            TextInputAction::DeleteBackward => {
                surface.delete_backward();
            }
            TextInputAction::DeleteForward => {
                surface.delete_forward();
            }
            TextInputAction::MoveLeft => {
                surface.move_cursor_left();
            }
            TextInputAction::MoveRight => {
                surface.move_cursor_right();
            }
            TextInputAction::MoveUp => {
                surface.move_cursor_up();
            }
            TextInputAction::MoveDown => {
                surface.move_cursor_down();
            }
            TextInputAction::MoveToStart => surface.move_cursor_to_start(),
            TextInputAction::MoveToEnd => surface.move_cursor_to_end(),
            TextInputAction::Submit => return self.submit(),
            TextInputAction::Cancel => self.cancel(),
        }
        None
    }
}

/// Non-breaking spaces become spaces, runs of three or more newlines collapse
/// to two, and leading/trailing newlines are dropped.
pub fn normalize_committed_text(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut newline_run = 0_usize;
    for ch in raw.chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                normalized.push('\n');
            }
            continue;
        }
        newline_run = 0;
        normalized.push(if ch == '\u{a0}' { ' ' } else { ch });
    }
    normalized.trim_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(text: &mut InlineText, input: &str) {
        for c in input.chars() {
            text.apply(TextInputAction::Insert(c));
        }
    }

    #[test]
    fn external_updates_do_not_touch_a_focused_surface() {
        let mut text = InlineText::new("Hello");
        assert!(text.focus());
        type_text(&mut text, " world");

        assert!(!text.sync_external("Server value"));
        assert_eq!(text.draft(), "Hello world");
        assert_eq!(text.display_text(), "Hello world");

        assert_eq!(text.blur(), Some("Hello world".to_string()));
    }

    #[test]
    fn unfocused_surface_follows_external_value() {
        let mut text = InlineText::new("a");
        assert!(text.sync_external("b"));
        assert_eq!(text.draft(), "b");
    }

    #[test]
    fn blur_without_changes_commits_nothing() {
        let mut text = InlineText::new("Same");
        text.focus();
        assert_eq!(text.blur(), None);
        assert_eq!(text.blur(), None);
    }

    #[test]
    fn cancel_restores_the_external_value_and_releases_focus() {
        let mut text = InlineText::new("Original");
        text.focus();
        type_text(&mut text, " edited");
        text.apply(TextInputAction::Cancel);

        assert!(!text.is_focused());
        assert_eq!(text.draft(), "Original");
        assert_eq!(text.blur(), None);
    }

    #[test]
    fn submit_ends_editing_through_the_blur_path() {
        let mut text = InlineText::new("Tag");
        text.focus();
        text.apply(TextInputAction::DeleteBackward);
        let committed = text.apply(TextInputAction::Submit);
        assert_eq!(committed, Some("Ta".to_string()));
        assert!(!text.is_focused());
    }

    #[test]
    fn line_breaks_are_normalized_on_commit() {
        let mut text = InlineText::new("");
        text.focus();
        text.apply(TextInputAction::InsertLineBreak);
        type_text(&mut text, "one");
        for _ in 0..4 {
            text.apply(TextInputAction::InsertLineBreak);
        }
        type_text(&mut text, "two\u{a0}three");
        text.apply(TextInputAction::InsertLineBreak);

        assert_eq!(text.blur(), Some("one\n\ntwo three".to_string()));
        assert_eq!(text.draft(), "one\n\ntwo three");
    }

    #[test]
    fn focus_is_refused_outside_edit_mode() {
        let mut text = InlineText::new("").with_placeholder("Your name");
        text.set_edit_mode(false);
        assert!(!text.focus());
        assert_eq!(text.display_text(), "Your name");
        assert_eq!(text.apply(TextInputAction::Insert('x')), None);
    }

    #[test]
    fn normalize_keeps_inner_spacing() {
        assert_eq!(normalize_committed_text("\n\n a \n b \n"), " a \n b ");
        assert_eq!(normalize_committed_text("x\n\n\n\ny"), "x\n\ny");
    }
}
