use crossterm::event::{self, Event, KeyEventKind};
use std::io;

/// Block until one key press arrives; the key itself is discarded.
///
/// Non-key events (resize, focus, mouse) and key releases are drained and
/// ignored, so a single physical keypress ends the wait exactly once even on
/// terminals that report release events.
pub fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            log::debug!(
                "key event: {:?} with modifiers {:?}",
                key.code,
                key.modifiers
            );
            return Ok(());
        }
    }
}
