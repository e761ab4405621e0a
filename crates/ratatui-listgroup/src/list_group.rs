//! The list-group container and its items.
//!
//! A [`ListGroup`] draws one row per [`ListGroupItem`]. Items come in two kinds: static entries
//! and action entries. An item is an action entry iff it was built with an activation callback
//! ([`ListGroupItem::action`]); only action entries react to clicks or `Enter`.
//!
//! The row painter [`render_rows`] is shared with the selection-driven widgets. Callers pass the
//! per-row `active` flag explicitly, so a list never caches which row is highlighted.
use crate::input::InputEvent;
use crate::input::MouseEventKind;
use crate::keymap::ListBindings;
use crate::keymap::ListKeyAction;
use crate::navigation::ListNavigation;
use crate::render;
use crate::selection::SelectionChange;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A plain entry. Never activated.
    Static,
    /// A button-like entry that can be activated.
    Action,
}

pub type ActivateCallback = Box<dyn FnMut()>;

pub struct ListGroupItem {
    label: String,
    active: bool,
    on_activate: Option<ActivateCallback>,
}

impl fmt::Debug for ListGroupItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListGroupItem")
            .field("label", &self.label)
            .field("active", &self.active)
            .field("kind", &self.kind())
            .finish()
    }
}

impl ListGroupItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
            on_activate: None,
        }
    }

    pub fn action(label: impl Into<String>, on_activate: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            active: false,
            on_activate: Some(Box::new(on_activate)),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn kind(&self) -> ItemKind {
        if self.on_activate.is_some() {
            ItemKind::Action
        } else {
            ItemKind::Static
        }
    }

    pub(crate) fn into_label(self) -> String {
        self.label
    }

    fn fire(&mut self) -> bool {
        match self.on_activate.as_mut() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

/// What the caller should do after feeding an event to a list widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListGroupAction {
    None,
    Redraw,
    /// An action item was activated.
    Activated(usize),
    /// A selection-driven list changed its selection.
    SelectionChanged(SelectionChange),
}

#[derive(Clone, Debug)]
pub struct ListGroupOptions {
    pub style: Style,
    pub active_style: Style,
    pub action_style: Style,
    pub focus_style: Style,
    pub static_marker: String,
    pub action_marker: String,
    /// Highlight the keyboard cursor row.
    pub show_focus: bool,
}

impl Default for ListGroupOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            active_style: Style::default(),
            action_style: Style::default(),
            focus_style: Style::default(),
            static_marker: "• ".to_string(),
            action_marker: "› ".to_string(),
            show_focus: true,
        }
    }
}

/// Per-row input to [`render_rows`].
#[derive(Clone, Copy, Debug)]
pub struct ItemRow<'a> {
    pub label: &'a str,
    pub kind: ItemKind,
    pub active: bool,
}

/// Paints `count` rows into `area`, scrolled so the focus cursor stays visible.
///
/// `nav` is pointed at `area` even when nothing fits, so clicks only hit rows drawn this frame.
pub fn render_rows<'a>(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    options: &ListGroupOptions,
    nav: &mut ListNavigation,
    count: usize,
    row: impl Fn(usize) -> ItemRow<'a>,
) {
    if area.width == 0 || area.height == 0 {
        nav.clear_area();
        return;
    }

    let base_style = if options.style == Style::default() {
        theme.text_primary
    } else {
        options.style
    };
    buf.set_style(area, base_style);

    let action_style = options.action_style.patch(theme.action);
    let active_style = options.active_style.patch(theme.accent);
    let focus_style = options.focus_style.patch(theme.focus);
    let visible = nav.layout(area, count);
    let cursor = nav.cursor();

    for (dy, index) in visible.enumerate() {
        let item = row(index);
        let mut style = base_style;
        let marker = match item.kind {
            ItemKind::Static => options.static_marker.as_str(),
            ItemKind::Action => {
                style = style.patch(action_style);
                options.action_marker.as_str()
            }
        };
        if item.active {
            style = style.patch(active_style);
        }
        if options.show_focus && cursor == Some(index) {
            style = style.patch(focus_style);
        }
        let row_area = Rect::new(area.x, area.y + dy as u16, area.width, 1);
        render::render_row(row_area, buf, marker, item.label, style);
    }
}

/// Outcome of routing an input event through list navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowGesture {
    Ignored,
    Moved,
    Activate(usize),
    Clear,
}

pub(crate) fn route_event(
    nav: &mut ListNavigation,
    bindings: &ListBindings,
    event: &InputEvent,
    count: usize,
) -> RowGesture {
    match event {
        InputEvent::Paste(_) => RowGesture::Ignored,
        InputEvent::Key(key) => match bindings.action_for(key) {
            None => RowGesture::Ignored,
            Some(ListKeyAction::Activate) => nav
                .cursor()
                .filter(|&c| c < count)
                .map_or(RowGesture::Ignored, RowGesture::Activate),
            Some(ListKeyAction::Clear) => RowGesture::Clear,
            Some(action) => {
                if nav.apply(action, count) {
                    RowGesture::Moved
                } else {
                    RowGesture::Ignored
                }
            }
        },
        InputEvent::Mouse(m) if m.is_primary_click() => match nav.row_at(m.x, m.y, count) {
            Some(row) => {
                nav.set_cursor(Some(row), count);
                RowGesture::Activate(row)
            }
            None => RowGesture::Ignored,
        },
        InputEvent::Mouse(m) => {
            let action = match m.kind {
                MouseEventKind::ScrollUp => ListKeyAction::Up,
                MouseEventKind::ScrollDown => ListKeyAction::Down,
                _ => return RowGesture::Ignored,
            };
            if nav.apply(action, count) {
                RowGesture::Moved
            } else {
                RowGesture::Ignored
            }
        }
    }
}

/// An ordered group of static and action items.
#[derive(Debug, Default)]
pub struct ListGroup {
    items: Vec<ListGroupItem>,
    options: ListGroupOptions,
    bindings: ListBindings,
    nav: ListNavigation,
}

impl ListGroup {
    pub fn new(items: impl IntoIterator<Item = ListGroupItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ListGroupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ListGroupOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListGroupOptions) {
        self.options = options;
    }

    pub fn set_bindings(&mut self, bindings: ListBindings) {
        self.bindings = bindings;
    }

    pub fn push(&mut self, item: ListGroupItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ListGroupItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [ListGroupItem] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.nav.cursor()
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.nav.set_cursor(cursor, self.items.len());
    }

    /// Activates row `index`. Static rows and out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> ListGroupAction {
        let Some(item) = self.items.get_mut(index) else {
            return ListGroupAction::None;
        };
        if !item.fire() {
            return ListGroupAction::None;
        }
        tracing::debug!(target: "ratatui_listgroup::list_group", index, label = %item.label, "item activated");
        ListGroupAction::Activated(index)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ListGroupAction {
        match route_event(&mut self.nav, &self.bindings, &event, self.items.len()) {
            RowGesture::Activate(index) => match self.activate(index) {
                ListGroupAction::None => ListGroupAction::Redraw,
                action => action,
            },
            RowGesture::Moved => ListGroupAction::Redraw,
            RowGesture::Ignored | RowGesture::Clear => ListGroupAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let items = &self.items;
        render_rows(
            area,
            buf,
            theme,
            &self.options,
            &mut self.nav,
            items.len(),
            |i| ItemRow {
                label: items[i].label(),
                kind: items[i].kind(),
                active: items[i].is_active(),
            },
        );
    }
}
