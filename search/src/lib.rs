//! Assisted destination search for type-ahead keypad entry.
//!
//! # Design
//!
//! - [`SearchEngine`] keeps a coherent triple of state: the text searched so
//!   far, the stations still matching it, and the characters that could
//!   legally be typed next.
//! - Searches are incremental: text that extends the current search narrows
//!   the live candidate set in place. Any other text falls back to a full
//!   refilter of the backing directory, so results are always exactly the
//!   directory entries starting with the current text.
//! - Matching is an exact ordinal prefix test. No fuzzy matching, no case
//!   folding, no ranking.
//! - [`Snapshot`] captures the triple by value for undo. The engine keeps no
//!   history of its own; callers stack snapshots, or use [`SearchSession`]
//!   which does so per keypress.
//!
//! # API
//!
//! - `advance()`: sets the text searched so far and refilters
//! - `location_results()`, `char_options_results()`: owned result copies
//! - `snapshot()` / `restore()`: point-in-time capture for backspace handling

mod engine;
mod session;
mod snapshot;

pub use engine::SearchEngine;
pub use session::SearchSession;
pub use snapshot::Snapshot;
