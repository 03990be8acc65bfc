//! # Pane
//!
//! An owned rectangular character buffer for one half of the split view.
//!
//! A pane is written in pane-local coordinates (row 0 is the pane's own top
//! line, not the screen's) and knows where it sits on the screen, so it can
//! be copied onto the base grid as one rectangle. Writes clip at the pane's
//! edges; nothing a pane does can touch cells outside its own buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Title line of the left pane.
pub const LEFT_TITLE: &str = "LEFT TEST";
/// Title line of the right pane.
pub const RIGHT_TITLE: &str = "RIGHT TEST";
/// Filler text repeated on every pane row below the title.
pub const PLACEHOLDER: &str = "Lorem ipsum dolor sit amet.";

/// One half of the split view, backed by its own buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    area: Rect,
    buf: Buffer,
}

impl Pane {
    /// Allocate an empty pane placed at `area` on the screen grid.
    ///
    /// The backing buffer is addressed from (0, 0) regardless of where the
    /// pane sits on screen.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            buf: Buffer::empty(Rect::new(0, 0, area.width, area.height)),
        }
    }

    /// Write one line of text at the given pane-local row, left-aligned at
    /// column 0 and clipped to the pane width. Rows past the bottom edge are
    /// ignored.
    pub fn set_line(&mut self, row: u16, text: &str) {
        if row >= self.area.height {
            return;
        }
        self.buf
            .set_stringn(0, row, text, self.area.width as usize, Style::default());
    }

    /// Fill the pane: `title` on row 0, [`PLACEHOLDER`] on every row below
    /// it. Deterministic for a given geometry.
    pub fn fill(&mut self, title: &str) {
        self.set_line(0, title);
        for row in 1..self.area.height {
            self.set_line(row, PLACEHOLDER);
        }
    }

    /// Copy this pane's cells onto the screen buffer at the pane's position.
    ///
    /// The whole rectangle is copied, blank cells included, so the pane
    /// replaces whatever the base grid held under it. Cells falling outside
    /// the screen buffer are skipped.
    pub fn blit(&self, screen: &mut Buffer) {
        for y in 0..self.area.height {
            for x in 0..self.area.width {
                let Some(src) = self.buf.cell((x, y)) else {
                    continue;
                };
                if let Some(dst) = screen.cell_mut((self.area.x + x, self.area.y + y)) {
                    *dst = src.clone();
                }
            }
        }
    }
}
