use super::shortcut::{ShortcutKey, ShortcutModifiers};

/// Raw key input delivered to a focused text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputEvent {
    Character(char),
    Key(ShortcutKey),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    Insert(char),
    InsertLineBreak,
    DeleteBackward,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveToStart,
    MoveToEnd,
    Submit,
    Cancel,
}

pub fn resolve_text_input(
    event: TextInputEvent,
    modifiers: ShortcutModifiers,
) -> Option<TextInputAction> {
    match event {
        TextInputEvent::Character(c) if modifiers.primary => {
            tracing::trace!(%c, "primary-modified character ignored by text surface");
            None
        }
        TextInputEvent::Character(c) if c.is_control() && c != '\t' => None,
        TextInputEvent::Character(c) => Some(TextInputAction::Insert(c)),
        TextInputEvent::Key(ShortcutKey::Enter) if modifiers.primary => {
            Some(TextInputAction::Submit)
        }
        TextInputEvent::Key(ShortcutKey::Enter) => Some(TextInputAction::InsertLineBreak),
        TextInputEvent::Key(ShortcutKey::Escape) => Some(TextInputAction::Cancel),
        TextInputEvent::Key(ShortcutKey::Backspace) => Some(TextInputAction::DeleteBackward),
        TextInputEvent::Key(ShortcutKey::Delete) => Some(TextInputAction::DeleteForward),
        TextInputEvent::Key(ShortcutKey::Character(c)) => {
            resolve_text_input(TextInputEvent::Character(c), modifiers)
        }
        TextInputEvent::ArrowLeft => Some(TextInputAction::MoveLeft),
        TextInputEvent::ArrowRight => Some(TextInputAction::MoveRight),
        TextInputEvent::ArrowUp => Some(TextInputAction::MoveUp),
        TextInputEvent::ArrowDown => Some(TextInputAction::MoveDown),
        TextInputEvent::Home => Some(TextInputAction::MoveToStart),
        TextInputEvent::End => Some(TextInputAction::MoveToEnd),
    }
}
