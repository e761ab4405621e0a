use crate::input::InputEvent;
use crate::keymap::ListBindings;
use crate::list_group::ItemKind;
use crate::list_group::ItemRow;
use crate::list_group::ListGroupAction;
use crate::list_group::ListGroupItem;
use crate::list_group::ListGroupOptions;
use crate::list_group::RowGesture;
use crate::list_group::render_rows;
use crate::list_group::route_event;
use crate::navigation::ListNavigation;
use crate::selection::SelectionChange;
use crate::selection::SelectionController;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A list group in which at most one row is selected.
///
/// Every row is an action row: activating an unselected row selects it, activating the
/// selected row clears the selection. The initial selection is the first item passed in with
/// `active` set; item callbacks and later flag changes are not consulted.
#[derive(Debug, Default)]
pub struct SingleSelectionListGroup {
    labels: Vec<String>,
    selection: SelectionController,
    options: ListGroupOptions,
    bindings: ListBindings,
    nav: ListNavigation,
}

impl SingleSelectionListGroup {
    pub fn new(items: impl IntoIterator<Item = ListGroupItem>) -> Self {
        let items: Vec<ListGroupItem> = items.into_iter().collect();
        let selection = SelectionController::from_active_flags(items.iter().map(|i| i.is_active()));
        Self {
            labels: items.into_iter().map(ListGroupItem::into_label).collect(),
            selection,
            ..Self::default()
        }
    }

    pub fn from_labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::new(labels.into_iter().map(ListGroupItem::new))
    }

    pub fn with_options(mut self, options: ListGroupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_on_change(mut self, f: impl FnMut(&SelectionChange) + 'static) -> Self {
        self.selection.set_on_change(f);
        self
    }

    pub fn set_on_change(&mut self, f: impl FnMut(&SelectionChange) + 'static) {
        self.selection.set_on_change(f);
    }

    pub fn set_bindings(&mut self, bindings: ListBindings) {
        self.bindings = bindings;
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected()
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.nav.cursor()
    }

    pub fn activate(&mut self, index: usize) -> Option<SelectionChange> {
        self.selection.activate(index, &self.labels)
    }

    pub fn clear_selection(&mut self) -> Option<SelectionChange> {
        self.selection.clear()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ListGroupAction {
        let change = match route_event(&mut self.nav, &self.bindings, &event, self.labels.len()) {
            RowGesture::Activate(index) => self.activate(index),
            RowGesture::Clear => self.clear_selection(),
            RowGesture::Moved => return ListGroupAction::Redraw,
            RowGesture::Ignored => return ListGroupAction::None,
        };
        change.map_or(ListGroupAction::None, ListGroupAction::SelectionChanged)
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let labels = &self.labels;
        let selection = &self.selection;
        render_rows(
            area,
            buf,
            theme,
            &self.options,
            &mut self.nav,
            labels.len(),
            |i| ItemRow {
                label: &labels[i],
                kind: ItemKind::Action,
                active: selection.is_selected(i),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::render::row_text;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_items() -> [ListGroupItem; 2] {
        [ListGroupItem::new("Item 1"), ListGroupItem::new("Item 2")]
    }

    fn active_rows(list: &SingleSelectionListGroup) -> Vec<usize> {
        (0..list.len()).filter(|&i| list.is_selected(i)).collect()
    }

    #[test]
    fn renders_all_items_as_action_rows() {
        let mut list = SingleSelectionListGroup::new(two_items());
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, area, 0), "› Item 1");
        assert_eq!(row_text(&buf, area, 1), "› Item 2");
    }

    #[test]
    fn selects_clicked_item() {
        let mut list = SingleSelectionListGroup::new(two_items());
        assert_eq!(list.selected(), None);

        list.activate(0);
        assert_eq!(active_rows(&list), vec![0]);
    }

    #[test]
    fn selecting_another_item_deselects_initial_one() {
        let mut list = SingleSelectionListGroup::new([
            ListGroupItem::new("Item 1").with_active(true),
            ListGroupItem::new("Item 2"),
        ]);
        assert_eq!(active_rows(&list), vec![0]);

        list.activate(1);
        assert_eq!(active_rows(&list), vec![1]);
    }

    #[test]
    fn activating_selected_item_deselects_it() {
        let mut list = SingleSelectionListGroup::new([
            ListGroupItem::new("Item 1"),
            ListGroupItem::new("Item 2").with_active(true),
        ]);
        assert_eq!(active_rows(&list), vec![1]);

        list.activate(1);
        assert!(active_rows(&list).is_empty());
    }

    #[test]
    fn on_change_receives_index_and_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut list = SingleSelectionListGroup::new(two_items()).with_on_change(move |ch| {
            sink.borrow_mut().push((ch.signed_index(), ch.value.clone()));
        });

        list.activate(0);
        list.activate(0);

        assert_eq!(
            *seen.borrow(),
            vec![(0, Some("Item 1".to_string())), (-1, None)]
        );
    }

    #[test]
    fn click_and_keyboard_drive_selection() {
        let mut list = SingleSelectionListGroup::from_labels(["Item 1", "Item 2"]);
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &Theme::default());

        assert_eq!(
            list.handle_event(InputEvent::click(0, 1)),
            ListGroupAction::SelectionChanged(SelectionChange::selected(1, "Item 2"))
        );
        assert_eq!(list.selected_label(), Some("Item 2"));

        list.handle_event(InputEvent::key(KeyCode::Up));
        assert_eq!(
            list.handle_event(InputEvent::key(KeyCode::Enter)),
            ListGroupAction::SelectionChanged(SelectionChange::selected(0, "Item 1"))
        );

        assert_eq!(
            list.handle_event(InputEvent::key(KeyCode::Esc)),
            ListGroupAction::SelectionChanged(SelectionChange::cleared())
        );
        assert_eq!(list.handle_event(InputEvent::key(KeyCode::Esc)), ListGroupAction::None);
    }

    #[test]
    fn first_active_flag_wins() {
        let mut list = SingleSelectionListGroup::new([
            ListGroupItem::new("Item 1"),
            ListGroupItem::new("Item 2").with_active(true),
            ListGroupItem::new("Item 3").with_active(true),
        ]);
        assert_eq!(list.selected(), Some(1));
        assert_eq!(list.labels(), ["Item 1", "Item 2", "Item 3"]);

        list.activate(2);
        assert_eq!(active_rows(&list), vec![2]);
    }

    #[test]
    fn shrunk_render_stops_clicks_on_hidden_rows() {
        let mut list = SingleSelectionListGroup::from_labels(["Item 1", "Item 2"]);
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 2));
        list.render(Rect::new(0, 0, 12, 2), &mut buf, &theme);
        list.render(Rect::new(0, 0, 12, 1), &mut buf, &theme);

        assert_eq!(list.handle_event(InputEvent::click(0, 1)), ListGroupAction::None);
        assert_eq!(list.selected(), None);

        list.render(Rect::new(0, 0, 12, 0), &mut buf, &theme);
        assert_eq!(list.handle_event(InputEvent::click(0, 0)), ListGroupAction::None);
        assert_eq!(list.selected(), None);
    }
}
