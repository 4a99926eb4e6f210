use farebox_core::StationDirectory;
use std::collections::BTreeSet;

use crate::snapshot::Snapshot;

/// Incremental prefix search over a fixed station directory.
///
/// All three state members stay in sync after every operation: `candidates`
/// is the subset of the directory starting with `search_text` (in directory
/// order), and `next_chars` the characters that extend `search_text` into at
/// least one candidate. A candidate equal to the search text is a full match
/// and contributes no next character.
///
/// One engine serves one interactive session and must be externally
/// serialized; snapshots taken from it are immutable and freely shareable.
#[derive(Debug)]
pub struct SearchEngine {
    directory: StationDirectory,
    search_text: String,
    candidates: Vec<String>,
    next_chars: BTreeSet<char>,
}

impl SearchEngine {
    pub fn new(directory: StationDirectory) -> Self {
        let mut engine = Self {
            candidates: directory.stations().to_vec(),
            directory,
            search_text: String::new(),
            next_chars: BTreeSet::new(),
        };
        engine.next_chars = engine.collect_next_chars();
        engine
    }

    /// Replaces the backing directory and resets the current search.
    pub fn set_directory(&mut self, directory: StationDirectory) {
        self.directory = directory;
        self.reset();
    }
}

/// Search operations.
impl SearchEngine {
    /// Sets the text searched so far and refilters the candidate set.
    ///
    /// Text that extends the current search narrows the live candidates in
    /// place. Any other text (shorter, equal-length but different, or
    /// unrelated) first restores the full directory, since a narrowed set
    /// cannot grow back. Either way the result is exactly the directory
    /// entries starting with `text`.
    pub fn advance(&mut self, text: &str) {
        if !text.starts_with(self.search_text.as_str()) {
            self.candidates = self.directory.stations().to_vec();
        }
        self.search_text = text.to_owned();

        let prefix = self.search_text.as_str();
        self.candidates.retain(|s| s.starts_with(prefix));
        self.next_chars = self.collect_next_chars();
    }

    /// Clears the search text and restores the full directory.
    pub fn reset(&mut self) {
        self.candidates = self.directory.stations().to_vec();
        self.search_text.clear();
        self.next_chars = self.collect_next_chars();
    }

    fn collect_next_chars(&self) -> BTreeSet<char> {
        // Every candidate starts with the search text, so its byte length
        // is a char boundary in each one. Full matches yield no character.
        let boundary = self.search_text.len();
        self.candidates
            .iter()
            .filter_map(|s| s[boundary..].chars().next())
            .collect()
    }
}

/// Result accessors.
impl SearchEngine {
    /// The text searched so far.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Owned copy of the stations matching the current search text, in
    /// directory order. Empty means no destination can match.
    pub fn location_results(&self) -> Vec<String> {
        self.candidates.clone()
    }

    /// Owned copy of the characters that can legally extend the current
    /// search text, in ascending order.
    pub fn char_options_results(&self) -> BTreeSet<char> {
        self.next_chars.clone()
    }
}

/// State capture for undo.
impl SearchEngine {
    /// Captures the current state as an independent value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            search_text: self.search_text.clone(),
            candidates: self.candidates.clone(),
            next_chars: self.next_chars.clone(),
        }
    }

    /// Replaces the current state with an independent copy of `snapshot`.
    ///
    /// The snapshot is not validated against the backing directory;
    /// restoring one taken over a different directory is the caller's
    /// responsibility. The snapshot stays usable afterwards: restoring it
    /// again yields the same state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.search_text = snapshot.search_text.clone();
        self.candidates = snapshot.candidates.clone();
        self.next_chars = snapshot.next_chars.clone();
    }
}
