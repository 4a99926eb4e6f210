use std::collections::BTreeSet;

/// Point-in-time capture of a [`SearchEngine`](crate::SearchEngine)'s state.
///
/// Holds independent copies of the search text, candidates, and
/// next-character options: later engine mutations never show through a held
/// snapshot, and restoring never leaves the engine aliasing the snapshot's
/// containers. Only `SearchEngine::snapshot` can create one, so every
/// snapshot is a coherent state by construction.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub(crate) search_text: String,
    pub(crate) candidates: Vec<String>,
    pub(crate) next_chars: BTreeSet<char>,
}

impl Snapshot {
    /// The search text at capture time.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}
