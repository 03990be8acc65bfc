//! # Split Layout
//!
//! Pure geometry for the two-pane view: given the grid size discovered from
//! the terminal, compute the header row, the left and right pane rectangles,
//! and the divider column. This is the only fallible step in the program;
//! everything downstream assumes the rectangles it produces are non-empty.

use std::fmt;
use std::ops::Range;

use ratatui::layout::{Rect, Size};

/// Placement of every region on the screen grid.
///
/// Row 0 is reserved for the header line. The panes start on row 1 and run
/// to the bottom of the grid. Pane width is the floor of half the grid
/// width, so on odd-width grids the final column belongs to neither pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLayout {
    /// Full grid size the layout was computed for.
    pub screen: Size,
    /// Row 0, spanning the full width.
    pub header: Rect,
    /// Left pane: origin (row 1, col 0), size (H-1, W/2).
    pub left: Rect,
    /// Right pane: origin (row 1, col W/2), size (H-1, W/2).
    pub right: Rect,
    /// Column the vertical separator is drawn in: W/2 - 1.
    pub divider_col: u16,
}

impl SplitLayout {
    /// Compute the split for a grid of the given size.
    ///
    /// Fails with [`LayoutError::TooSmall`] when either pane would end up
    /// with zero rows or zero columns (a one-row or one-column terminal).
    pub fn compute(screen: Size) -> Result<Self, LayoutError> {
        let pane_height = screen.height.saturating_sub(1);
        let pane_width = screen.width / 2;

        if pane_height == 0 || pane_width == 0 {
            return Err(LayoutError::TooSmall {
                rows: screen.height,
                cols: screen.width,
            });
        }

        Ok(Self {
            screen,
            header: Rect::new(0, 0, screen.width, 1),
            left: Rect::new(0, 1, pane_width, pane_height),
            right: Rect::new(pane_width, 1, pane_width, pane_height),
            divider_col: pane_width - 1,
        })
    }

    /// Rows the divider glyph is drawn on: every row below the header.
    ///
    /// The upper bound is the grid height, not the panes' bottom edge.
    pub fn divider_rows(&self) -> Range<u16> {
        1..self.screen.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid has no room for both a header row and two non-empty panes.
    TooSmall { rows: u16, cols: u16 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooSmall { rows, cols } => write!(
                f,
                "terminal too small to split: {rows} rows x {cols} cols (need at least 2x2)"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
