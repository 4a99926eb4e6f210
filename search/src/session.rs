use farebox_core::StationDirectory;
use std::collections::BTreeSet;

use crate::engine::SearchEngine;
use crate::snapshot::Snapshot;

/// Keypad-style driver pairing a [`SearchEngine`] with an undo stack.
///
/// The engine keeps no history of its own; the session captures a
/// [`Snapshot`] before every keypress, so backspace is a pop-and-restore
/// instead of a recomputation from scratch.
pub struct SearchSession {
    engine: SearchEngine,
    history: Vec<Snapshot>,
}

impl SearchSession {
    pub fn new(directory: StationDirectory) -> Self {
        Self {
            engine: SearchEngine::new(directory),
            history: Vec::new(),
        }
    }

    /// Appends one character to the search text.
    pub fn press(&mut self, ch: char) {
        let mut text = self.engine.search_text().to_owned();
        text.push(ch);
        self.history.push(self.engine.snapshot());
        self.engine.advance(&text);
    }

    /// Undoes the most recent keypress.
    ///
    /// Returns `false` when there is nothing left to undo; the search state
    /// is left untouched in that case.
    pub fn backspace(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.engine.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Clears the search text and the undo history.
    pub fn clear(&mut self) {
        self.history.clear();
        self.engine.reset();
    }

    pub fn search_text(&self) -> &str {
        self.engine.search_text()
    }

    pub fn location_results(&self) -> Vec<String> {
        self.engine.location_results()
    }

    pub fn char_options_results(&self) -> BTreeSet<char> {
        self.engine.char_options_results()
    }

    /// The underlying engine, for callers that manage history themselves.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}
