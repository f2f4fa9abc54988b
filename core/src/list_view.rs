//! The record list the user sees and selects from.
//!
//! Each row carries the id of the record it shows. Removal goes through
//! that key; the rendered text is for display only and is never parsed.

use crate::types::RecordId;

/// List-display capability the editor drives.
/// A GUI toolkit widget or a terminal view implements this.
pub trait ListView {
    fn append_row(&mut self, key: RecordId, text: String);

    /// Remove the row at `index`, returning its key.
    /// Out-of-range indices remove nothing.
    fn remove_row(&mut self, index: usize) -> Option<RecordId>;

    fn selected_row(&self) -> Option<usize>;

    fn set_selected_row(&mut self, row: Option<usize>);

    fn row_count(&self) -> usize;

    fn row_text(&self, index: usize) -> Option<&str>;

    fn row_key(&self, index: usize) -> Option<RecordId>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key:  RecordId,
    pub text: String,
}

/// In-memory list model. Used directly by the terminal front-end and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordList {
    rows:     Vec<ListRow>,
    selected: Option<usize>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }
}

impl ListView for RecordList {
    fn append_row(&mut self, key: RecordId, text: String) {
        self.rows.push(ListRow { key, text });
    }

    fn remove_row(&mut self, index: usize) -> Option<RecordId> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        self.selected = None;
        Some(row.key)
    }

    fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Selection is not bounds-checked here; a stale index is
    /// treated as "nothing selected" when acted on.
    fn set_selected_row(&mut self, row: Option<usize>) {
        self.selected = row;
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_text(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|r| r.text.as_str())
    }

    fn row_key(&self, index: usize) -> Option<RecordId> {
        self.rows.get(index).map(|r| r.key)
    }
}
