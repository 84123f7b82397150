#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Character(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

/// `primary` is Ctrl on Linux/Windows and Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortcutModifiers {
    pub primary: bool,
    pub shift: bool,
}

impl ShortcutModifiers {
    pub const fn new(primary: bool, shift: bool) -> Self {
        Self { primary, shift }
    }

    pub const fn from_keys(ctrl: bool, meta: bool, shift: bool) -> Self {
        Self {
            primary: ctrl || meta,
            shift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub text_input_active: bool,
    pub crop_active: bool,
    pub in_editor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TextInsertLineBreak,
    TextSubmit,
    TextCancel,
    CropApply,
    CropCancel,
    CropZoomIn,
    CropZoomOut,
    EditorUndo,
    EditorRedo,
}

fn resolve_text_shortcut(key: ShortcutKey, modifiers: ShortcutModifiers) -> Option<ShortcutAction> {
    match (key, modifiers.primary) {
        (ShortcutKey::Enter, true) => Some(ShortcutAction::TextSubmit),
        (ShortcutKey::Enter, false) => Some(ShortcutAction::TextInsertLineBreak),
        (ShortcutKey::Escape, _) => Some(ShortcutAction::TextCancel),
        _ => None,
    }
}

fn resolve_crop_shortcut(key: ShortcutKey) -> Option<ShortcutAction> {
    match key {
        ShortcutKey::Enter => Some(ShortcutAction::CropApply),
        ShortcutKey::Escape => Some(ShortcutAction::CropCancel),
        ShortcutKey::Character('+') | ShortcutKey::Character('=') => {
            Some(ShortcutAction::CropZoomIn)
        }
        ShortcutKey::Character('-') => Some(ShortcutAction::CropZoomOut),
        _ => None,
    }
}

fn resolve_editor_shortcut(
    key: ShortcutKey,
    modifiers: ShortcutModifiers,
) -> Option<ShortcutAction> {
    match (key, modifiers.primary, modifiers.shift) {
        (ShortcutKey::Character('z' | 'Z'), true, false) => Some(ShortcutAction::EditorUndo),
        (ShortcutKey::Character('z' | 'Z'), true, true) => Some(ShortcutAction::EditorRedo),
        _ => None,
    }
}

/// Maps a key press to an action. The focused text surface wins over an open
/// crop session, which wins over document-level shortcuts.
pub fn resolve_shortcut(
    key: ShortcutKey,
    modifiers: ShortcutModifiers,
    context: InputContext,
) -> Option<ShortcutAction> {
    if context.text_input_active {
        return resolve_text_shortcut(key, modifiers);
    }

    if context.crop_active {
        return resolve_crop_shortcut(key);
    }

    if context.in_editor {
        return resolve_editor_shortcut(key, modifiers);
    }

    None
}
