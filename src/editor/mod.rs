//! Editing session over one portfolio document.

pub mod image_replace;
pub mod inline_text;
pub mod text_field;
pub mod text_surface;

use crate::config::AppConfig;
use crate::crop::RasterOptions;
use crate::document::{self, Document, DocumentResult, EditHistory, PartialDocument, TemplatePreset};
use crate::input::{resolve_shortcut, InputContext, ShortcutAction, ShortcutKey, ShortcutModifiers};

pub use image_replace::{ImageReplace, ImageSlot};
pub use inline_text::{normalize_committed_text, InlineText};
pub use text_field::TextField;
pub use text_surface::TextSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorHistoryAction {
    Undo,
    Redo,
}

impl EditorHistoryAction {
    const fn applied_message(self) -> &'static str {
        match self {
            Self::Undo => "undo applied",
            Self::Redo => "redo applied",
        }
    }

    const fn empty_message(self) -> &'static str {
        match self {
            Self::Undo => "undo stack empty",
            Self::Redo => "redo stack empty",
        }
    }
}

/// The document being edited, its undo history and the unsaved-changes flag.
#[derive(Debug, Clone)]
pub struct PortfolioEditor {
    history: EditHistory,
    history_limit: Option<usize>,
    raster_options: RasterOptions,
    has_changes: bool,
}

impl PortfolioEditor {
    pub fn new(document: Document) -> Self {
        Self::with_config(document, &AppConfig::default())
    }

    pub fn with_config(document: Document, config: &AppConfig) -> Self {
        Self {
            history: EditHistory::new(document).with_limit(config.history_limit),
            history_limit: config.history_limit,
            raster_options: config.raster_options(),
            has_changes: false,
        }
    }

    /// Starts from a named template; unknown names fall back to the default template.
    pub fn from_template_name(name: &str) -> Self {
        let preset = TemplatePreset::from_layout_style(name).unwrap_or_else(|| {
            tracing::warn!(name, "unknown template requested; using default");
            TemplatePreset::default()
        });
        Self::new(preset.document())
    }

    pub fn document(&self) -> &Document {
        self.history.document()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Template the document is currently laid out with, if it names a known one.
    pub fn preset(&self) -> TemplatePreset {
        TemplatePreset::from_layout_style(&self.document().appearance.layout_style)
            .unwrap_or_default()
    }

    pub fn raster_options(&self) -> RasterOptions {
        self.raster_options
    }

    /// Replaces the document and starts a fresh history; nothing is unsaved afterwards.
    pub fn load(&mut self, document: Document) {
        self.history = EditHistory::new(document).with_limit(self.history_limit);
        self.has_changes = false;
        tracing::info!("document loaded");
    }

    pub fn load_json(&mut self, json: &str) -> DocumentResult<()> {
        let document = document::load_json(json)?;
        self.load(document);
        Ok(())
    }

    pub fn apply(&mut self, partial: PartialDocument) -> &Document {
        if partial.is_empty() {
            return self.history.document();
        }
        self.has_changes = true;
        self.history.apply(partial)
    }

    pub fn undo(&mut self) -> Option<&Document> {
        self.step(EditorHistoryAction::Undo)
    }

    pub fn redo(&mut self) -> Option<&Document> {
        self.step(EditorHistoryAction::Redo)
    }

    fn step(&mut self, action: EditorHistoryAction) -> Option<&Document> {
        let moved = match action {
            EditorHistoryAction::Undo => self.history.undo().is_some(),
            EditorHistoryAction::Redo => self.history.redo().is_some(),
        };
        if !moved {
            tracing::debug!("{}", action.empty_message());
            return None;
        }
        self.has_changes = true;
        tracing::debug!("{}", action.applied_message());
        Some(self.history.document())
    }

    /// Called once the document has been persisted elsewhere.
    pub fn mark_saved(&mut self) {
        self.has_changes = false;
    }

    /// Handles document-level key presses. Returns the action taken, if any.
    pub fn handle_shortcut(
        &mut self,
        key: ShortcutKey,
        modifiers: ShortcutModifiers,
    ) -> Option<ShortcutAction> {
        let context = InputContext {
            in_editor: true,
            ..InputContext::default()
        };
        let action = resolve_shortcut(key, modifiers, context)?;
        match action {
            ShortcutAction::EditorUndo => {
                self.undo();
            }
            ShortcutAction::EditorRedo => {
                self.redo();
            }
            _ => return None,
        }
        Some(action)
    }

    /// Builds an inline text editor bound to `field`.
    pub fn inline_text(&self, field: &TextField) -> Option<InlineText> {
        field.read(self.document()).map(InlineText::new)
    }

    /// Writes a committed inline edit back into the document.
    pub fn commit_text(&mut self, field: &TextField, text: String) -> bool {
        match field.write(self.document(), text) {
            Some(partial) => {
                self.apply(partial);
                true
            }
            None => {
                tracing::warn!(?field, "text commit has no target in the document");
                false
            }
        }
    }

    pub fn begin_image_replace(&self, slot: ImageSlot) -> ImageReplace {
        ImageReplace::open(slot, self.preset(), self.raster_options)
    }

    /// Commits the crop and applies the resulting update. Extraction failures
    /// are returned without touching the document or its history.
    pub fn finish_image_replace<P>(
        &mut self,
        replace: &mut ImageReplace<P>,
    ) -> crate::crop::CropResult<bool>
    where
        P: crate::crop::PointerTracking,
    {
        match replace.commit(self.document())? {
            Some(partial) => {
                self.apply(partial);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for PortfolioEditor {
    fn default() -> Self {
        Self::new(TemplatePreset::default().document())
    }
}
