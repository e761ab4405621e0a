use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '…';

/// Truncates `input` to at most `max_cols` terminal columns, ending in `…` when clipped.
pub fn truncate_to_cols(input: &str, max_cols: u16) -> String {
    let max_cols = max_cols as usize;
    if UnicodeWidthStr::width(input) <= max_cols {
        return input.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let budget = max_cols - 1;
    let mut cols = 0usize;
    let mut out = String::new();
    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + w > budget {
            break;
        }
        out.push(ch);
        cols += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Fills one row with `style` and writes `marker` followed by the clipped `label`.
pub fn render_row(area: Rect, buf: &mut Buffer, marker: &str, label: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);
    buf.set_style(row, style);

    let marker_w = UnicodeWidthStr::width(marker).min(area.width as usize) as u16;
    buf.set_stringn(row.x, row.y, marker, marker_w as usize, style);

    let label_w = area.width - marker_w;
    if label_w == 0 {
        return;
    }
    let text = truncate_to_cols(label, label_w);
    buf.set_stringn(row.x + marker_w, row.y, text, label_w as usize, style);
}

/// Plain text of row `y` within `area`, trailing blanks removed. Handy for assertions.
pub fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
    let mut out = String::new();
    for x in area.x..area.x.saturating_add(area.width) {
        if let Some(cell) = buf.cell((x, y)) {
            out.push_str(cell.symbol());
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_labels() {
        assert_eq!(truncate_to_cols("Repo 1", 10), "Repo 1");
        assert_eq!(truncate_to_cols("Repo 1", 6), "Repo 1");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_cols("Repository", 5), "Repo…");
        assert_eq!(truncate_to_cols("Repository", 1), "…");
        assert_eq!(truncate_to_cols("Repository", 0), "");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_cols("日本語", 4), "日…");
    }

    #[test]
    fn render_row_writes_marker_and_label() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        render_row(area, &mut buf, "› ", "Item 1", Style::default());
        assert_eq!(row_text(&buf, area, 0), "› Item 1");
    }

    #[test]
    fn render_row_clips_narrow_area() {
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        render_row(area, &mut buf, "› ", "Item 1", Style::default());
        assert_eq!(row_text(&buf, area, 0), "› Ite…");
    }
}
