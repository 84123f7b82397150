use super::model::Document;
use super::patch::PartialDocument;
use super::store::DocumentStore;

/// Linear undo/redo over whole-document snapshots.
///
/// `entries[cursor]` always equals the store's current document. Applying an
/// update while the cursor is behind the tail discards the redo branch first.
#[derive(Debug, Clone)]
pub struct EditHistory {
    store: DocumentStore,
    entries: Vec<Document>,
    cursor: usize,
    limit: Option<usize>,
}

impl EditHistory {
    pub fn new(document: Document) -> Self {
        Self {
            entries: vec![document.clone()],
            store: DocumentStore::new(document),
            cursor: 0,
            limit: None,
        }
    }

    /// Keeps at most `limit` snapshots, evicting the oldest. `None` keeps every snapshot.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|limit| limit.max(1));
        self.enforce_limit();
        self
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn apply(&mut self, partial: PartialDocument) -> &Document {
        let snapshot = self.store.apply(partial).clone();
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
        tracing::debug!(
            cursor = self.cursor,
            entries = self.entries.len(),
            "history entry appended"
        );
        self.store.document()
    }

    /// Steps back one entry. Returns `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Document> {
        if !self.can_undo() {
            tracing::debug!("undo stack empty");
            return None;
        }
        self.move_cursor(self.cursor - 1);
        Some(self.store.document())
    }

    /// Steps forward one entry. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Document> {
        if !self.can_redo() {
            tracing::debug!("redo stack empty");
            return None;
        }
        self.move_cursor(self.cursor + 1);
        Some(self.store.document())
    }

    /// Drops every snapshot and starts over from `document`.
    pub fn reset(&mut self, document: Document) {
        self.entries.clear();
        self.entries.push(document.clone());
        self.store.replace(document);
        self.cursor = 0;
        tracing::debug!("history reset");
    }

    fn move_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.store.replace(self.entries[cursor].clone());
        tracing::debug!(cursor, entries = self.entries.len(), "history cursor moved");
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() <= limit {
            return;
        }
        // Oldest first, never past the cursor; then the redo tail.
        let overflow = self.entries.len() - limit;
        let evicted = overflow.min(self.cursor);
        self.entries.drain(..evicted);
        self.cursor -= evicted;
        self.entries.truncate(limit);
    }
}
