use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::symbols;

use crate::layout::SplitLayout;
use crate::pane::Pane;

/// Compose one frame: base grid first, then the left pane, then the right.
///
/// The order is a fixed contract. Where rectangles overlap, the later layer
/// wins; in particular the divider column is the left pane's last column, so
/// inside pane rows the pane's cells replace the divider glyph.
pub fn render(frame: &mut Frame, layout: &SplitLayout, left: &Pane, right: &Pane) {
    let buf = frame.buffer_mut();
    draw_base(buf, layout);
    left.blit(buf);
    right.blit(buf);
}

/// Header text and the vertical divider, drawn directly on the base grid.
pub fn draw_base(buf: &mut Buffer, layout: &SplitLayout) {
    let header = format!(
        "Screen: {} rows, {} cols",
        layout.screen.height, layout.screen.width
    );
    buf.set_stringn(
        layout.header.x,
        layout.header.y,
        &header,
        layout.header.width as usize,
        Style::default(),
    );

    for row in layout.divider_rows() {
        if let Some(cell) = buf.cell_mut((layout.divider_col, row)) {
            cell.set_symbol(symbols::line::VERTICAL);
        }
    }
}
