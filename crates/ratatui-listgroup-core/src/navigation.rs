use crate::keymap::ListKeyAction;
use ratatui::layout::Rect;
use std::ops::Range;

/// Focus cursor, scroll offset and hit-testing for a one-row-per-item list.
///
/// The cursor is where keyboard activation lands. It is independent of any selection.
/// `layout` must run during render so mouse events can be mapped back to rows.
#[derive(Clone, Debug, Default)]
pub struct ListNavigation {
    cursor: Option<usize>,
    offset: usize,
    area: Option<Rect>,
}

impl ListNavigation {
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>, count: usize) {
        self.cursor = match cursor {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
        self.scroll_to_cursor();
    }

    /// Moves the cursor. Returns `true` if it moved.
    pub fn apply(&mut self, action: ListKeyAction, count: usize) -> bool {
        if count == 0 {
            let had = self.cursor.take().is_some();
            self.offset = 0;
            return had;
        }
        let last = count - 1;
        let page = self.page_len();
        let next = match (action, self.cursor) {
            (ListKeyAction::Up | ListKeyAction::Down, None) => 0,
            (ListKeyAction::Up, Some(c)) => c.saturating_sub(1),
            (ListKeyAction::Down, Some(c)) => (c + 1).min(last),
            (ListKeyAction::PageUp, c) => c.unwrap_or(0).saturating_sub(page),
            (ListKeyAction::PageDown, c) => (c.unwrap_or(0) + page).min(last),
            (ListKeyAction::First, _) => 0,
            (ListKeyAction::Last, _) => last,
            (ListKeyAction::Activate | ListKeyAction::Clear, _) => return false,
        };
        if self.cursor == Some(next) {
            return false;
        }
        self.cursor = Some(next);
        self.scroll_to_cursor();
        true
    }

    /// Records the render area and returns the item range that fits into it.
    pub fn layout(&mut self, area: Rect, count: usize) -> Range<usize> {
        self.area = Some(area);
        if let Some(c) = self.cursor {
            if c >= count {
                self.cursor = count.checked_sub(1);
            }
        }
        let height = area.height as usize;
        self.offset = self.offset.min(count.saturating_sub(height));
        self.scroll_to_cursor();
        self.offset..(self.offset + height).min(count)
    }

    /// Forgets the recorded area, so no cell maps to a row until the next `layout`.
    pub fn clear_area(&mut self) {
        self.area = None;
    }

    /// Maps a terminal cell to the row rendered there during the last `layout`.
    pub fn row_at(&self, x: u16, y: u16, count: usize) -> Option<usize> {
        let area = self.area?;
        let inside = x >= area.x
            && x < area.x.saturating_add(area.width)
            && y >= area.y
            && y < area.y.saturating_add(area.height);
        if !inside {
            return None;
        }
        let row = self.offset + (y - area.y) as usize;
        (row < count).then_some(row)
    }

    fn page_len(&self) -> usize {
        self.area
            .map(|a| (a.height as usize).saturating_sub(1).max(1))
            .unwrap_or(1)
    }

    fn scroll_to_cursor(&mut self) {
        let Some(c) = self.cursor else {
            return;
        };
        let Some(area) = self.area else {
            return;
        };
        let height = (area.height as usize).max(1);
        if c < self.offset {
            self.offset = c;
        } else if c >= self.offset + height {
            self.offset = c + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_from_nothing_focuses_first_row() {
        let mut nav = ListNavigation::default();
        assert!(nav.apply(ListKeyAction::Down, 3));
        assert_eq!(nav.cursor(), Some(0));
        assert!(nav.apply(ListKeyAction::Down, 3));
        assert!(nav.apply(ListKeyAction::Down, 3));
        assert!(!nav.apply(ListKeyAction::Down, 3));
        assert_eq!(nav.cursor(), Some(2));
    }

    #[test]
    fn cursor_stays_visible_when_scrolling() {
        let mut nav = ListNavigation::default();
        assert_eq!(nav.layout(Rect::new(0, 0, 10, 3), 10), 0..3);
        nav.apply(ListKeyAction::Last, 10);
        assert_eq!(nav.offset(), 7);
        assert_eq!(nav.layout(Rect::new(0, 0, 10, 3), 10), 7..10);
        nav.apply(ListKeyAction::First, 10);
        assert_eq!(nav.offset(), 0);
    }

    #[test]
    fn row_at_accounts_for_area_and_offset() {
        let mut nav = ListNavigation::default();
        nav.layout(Rect::new(2, 5, 10, 2), 4);
        assert_eq!(nav.row_at(2, 5, 4), Some(0));
        assert_eq!(nav.row_at(11, 6, 4), Some(1));
        assert_eq!(nav.row_at(12, 6, 4), None);
        assert_eq!(nav.row_at(2, 7, 4), None);

        nav.apply(ListKeyAction::Last, 4);
        assert_eq!(nav.row_at(2, 5, 4), Some(2));
    }

    #[test]
    fn rows_past_the_end_are_not_hit() {
        let mut nav = ListNavigation::default();
        nav.layout(Rect::new(0, 0, 10, 5), 2);
        assert_eq!(nav.row_at(0, 1, 2), Some(1));
        assert_eq!(nav.row_at(0, 2, 2), None);
    }

    #[test]
    fn layout_clamps_cursor_when_list_shrinks() {
        let mut nav = ListNavigation::default();
        nav.set_cursor(Some(4), 5);
        nav.layout(Rect::new(0, 0, 10, 5), 2);
        assert_eq!(nav.cursor(), Some(1));
        nav.layout(Rect::new(0, 0, 10, 5), 0);
        assert_eq!(nav.cursor(), None);
    }

    #[test]
    fn cleared_area_hits_nothing() {
        let mut nav = ListNavigation::default();
        nav.layout(Rect::new(0, 0, 10, 2), 2);
        assert_eq!(nav.row_at(1, 0, 2), Some(0));

        nav.clear_area();
        assert_eq!(nav.row_at(1, 0, 2), None);
    }

    #[test]
    fn empty_layout_hits_nothing() {
        let mut nav = ListNavigation::default();
        nav.layout(Rect::new(0, 0, 10, 2), 2);
        assert_eq!(nav.layout(Rect::new(0, 0, 10, 0), 2), 0..0);
        assert_eq!(nav.row_at(1, 0, 2), None);
    }
}
