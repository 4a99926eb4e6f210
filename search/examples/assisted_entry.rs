//! Walks through an assisted destination entry at the keypad.
//!
//! Run with: `cargo run -q --example assisted_entry -p farebox_search`

use farebox_core::StationDirectory;
use farebox_search::{SearchEngine, SearchSession};

fn main() {
    let directory: StationDirectory = ["DARTFORD", "DARTMOUTH", "TOWER HILL", "DERBY"]
        .into_iter()
        .collect();

    println!("== keypad session with undo ==");
    let mut session = SearchSession::new(directory.clone());
    print_session(&session);

    for ch in ['D', 'A'] {
        println!("press '{ch}'");
        session.press(ch);
        print_session(&session);
    }

    while session.backspace() {
        println!("backspace");
        print_session(&session);
    }

    println!("== non-incremental jump on the bare engine ==");
    let mut engine = SearchEngine::new(directory);
    engine.advance("DA");
    print_engine(&engine);

    // Unrelated text refilters the whole directory.
    engine.advance("T");
    print_engine(&engine);
}

fn print_session(session: &SearchSession) {
    print_state(
        session.search_text(),
        &session.location_results(),
        &session.char_options_results().into_iter().collect::<Vec<_>>(),
    );
}

fn print_engine(engine: &SearchEngine) {
    print_state(
        engine.search_text(),
        &engine.location_results(),
        &engine.char_options_results().into_iter().collect::<Vec<_>>(),
    );
}

fn print_state(text: &str, stations: &[String], next_keys: &[char]) {
    println!("  searched:  {text:?}");
    println!("  stations:  {stations:?}");
    println!("  next keys: {next_keys:?}");
    println!("  ----");
}
