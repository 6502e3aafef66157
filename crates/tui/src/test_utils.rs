//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to one line of text per row.
///
/// Trailing spaces are trimmed from each line so assertions and inline
/// snapshots do not depend on the buffer width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let start = result.len();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let kept = result[start..].trim_end_matches(' ').len();
        result.truncate(start + kept);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn rows_are_trimmed_independently() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        buf.set_string(0, 1, "Hi", Style::default());

        assert_eq!(buffer_to_string(&buf), "\nHi\n");
    }
}
