//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal lifecycle, the one composed frame,
//! and the blocking wait for a keypress. This is the only module that knows
//! about ratatui and crossterm.
//!
//! The terminal session is an acquire/work/restore sandwich in [`run`]:
//! `ratatui::init()` puts the terminal into raw mode on the alternate
//! screen, and `ratatui::restore()` runs on every path out, including the
//! layout-failure path where no panes were ever created. Panes are dropped
//! before the restore.

mod event;
pub mod ui;

use std::fmt;
use std::io;

use ratatui::DefaultTerminal;

use crate::layout::{LayoutError, SplitLayout};
use crate::pane::{LEFT_TITLE, Pane, RIGHT_TITLE};

#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Layout(LayoutError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(e) => write!(f, "terminal I/O error: {e}"),
            RunError::Layout(e) => write!(f, "failed to create panes: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

impl From<LayoutError> for RunError {
    fn from(e: LayoutError) -> Self {
        RunError::Layout(e)
    }
}

/// Show the split view until a key is pressed.
///
/// The terminal is restored before this returns, on success and on error
/// alike, so the caller may print to stderr afterwards.
pub fn run() -> Result<(), RunError> {
    let mut terminal = ratatui::init();
    let result = show_split(&mut terminal);
    ratatui::restore();

    match &result {
        Ok(()) => log::info!("terminal restored, exiting cleanly"),
        Err(e) => log::error!("terminal restored after failure: {e}"),
    }
    result
}

fn show_split(terminal: &mut DefaultTerminal) -> Result<(), RunError> {
    let size = terminal.size()?;
    log::info!("screen grid: {} rows, {} cols", size.height, size.width);

    let layout = SplitLayout::compute(size)?;
    log::debug!(
        "left pane {:?}, right pane {:?}, divider column {}",
        layout.left,
        layout.right,
        layout.divider_col
    );

    let mut left = Pane::new(layout.left);
    let mut right = Pane::new(layout.right);
    left.fill(LEFT_TITLE);
    right.fill(RIGHT_TITLE);

    terminal.draw(|frame| ui::render(frame, &layout, &left, &right))?;

    event::wait_for_key()?;
    log::info!("key received, shutting down");

    // Release the panes before run() restores the terminal.
    drop(left);
    drop(right);
    Ok(())
}
