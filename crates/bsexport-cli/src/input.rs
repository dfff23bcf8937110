use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use std::io::{self, BufRead};
use tracing::debug;

/// Block until a key is pressed.
///
/// Falls back to waiting for Enter when the console cannot be put into raw
/// mode (e.g. stdin is redirected).
pub fn wait_for_keypress() {
    println!("Press any key to continue...");

    if let Err(e) = read_single_key() {
        debug!("Raw key read unavailable ({}), waiting for Enter", e);
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    }
}

fn read_single_key() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key_event)) if is_keypress(&key_event) => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}

/// Only presses count; the release of the Enter that answered the last
/// prompt can still be queued.
fn is_keypress(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
}
