//! Single-selection state shared by selection-driven list widgets.
//!
//! [`SelectionController`] owns the selected index and implements the toggle rule:
//! activating an unselected row selects it (implicitly deselecting the previous one), and
//! activating the selected row clears the selection. Rows never store their own `active`
//! flag; renderers ask [`SelectionController::is_selected`] on every frame.
//!
//! The controller is fed labels at activation time rather than owning them, so the same
//! instance works for lists whose labels are recomputed on every render.
use std::fmt;

/// Notification emitted after every accepted activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// The newly selected row, or `None` when the selection was cleared.
    pub index: Option<usize>,
    /// Label of the newly selected row, or `None` when the selection was cleared.
    pub value: Option<String>,
}

impl SelectionChange {
    pub fn selected(index: usize, value: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            value: Some(value.into()),
        }
    }

    pub fn cleared() -> Self {
        Self {
            index: None,
            value: None,
        }
    }

    /// The index with `-1` standing for "no selection".
    pub fn signed_index(&self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }
}

pub type ChangeCallback = Box<dyn FnMut(&SelectionChange)>;

#[derive(Default)]
pub struct SelectionController {
    selected: Option<usize>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selected", &self.selected)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the first row flagged active, if any.
    ///
    /// The flags are read once. Flipping an item's flag later has no effect; the controller is
    /// authoritative from here on.
    pub fn from_active_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        Self {
            selected: flags.into_iter().position(|active| active),
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, f: impl FnMut(&SelectionChange) + 'static) -> Self {
        self.set_on_change(f);
        self
    }

    pub fn set_on_change(&mut self, f: impl FnMut(&SelectionChange) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Applies the toggle rule to row `index` of `labels`.
    ///
    /// Returns the emitted change, or `None` when `index` is out of range (the state is left
    /// untouched and no observer is called).
    pub fn activate<S: AsRef<str>>(
        &mut self,
        index: usize,
        labels: &[S],
    ) -> Option<SelectionChange> {
        let Some(label) = labels.get(index) else {
            tracing::trace!(
                target: "ratatui_listgroup::selection",
                index,
                len = labels.len(),
                "ignoring out-of-range activation"
            );
            return None;
        };

        let change = if self.selected == Some(index) {
            self.selected = None;
            SelectionChange::cleared()
        } else {
            self.selected = Some(index);
            SelectionChange::selected(index, label.as_ref())
        };

        tracing::debug!(
            target: "ratatui_listgroup::selection",
            index = change.signed_index(),
            value = change.value.as_deref(),
            "selection changed"
        );
        self.notify(&change);
        Some(change)
    }

    /// Clears the selection. Emits a change only if something was selected.
    pub fn clear(&mut self) -> Option<SelectionChange> {
        self.selected.take()?;
        let change = SelectionChange::cleared();
        tracing::debug!(target: "ratatui_listgroup::selection", "selection cleared");
        self.notify(&change);
        Some(change)
    }

    /// Drops a selection that no longer points into a list of `len` rows.
    ///
    /// This is silent: it reflects data going away, not a user gesture.
    pub fn retain_within(&mut self, len: usize) {
        if self.selected.is_some_and(|i| i >= len) {
            self.selected = None;
        }
    }

    fn notify(&mut self, change: &SelectionChange) {
        if let Some(f) = self.on_change.as_mut() {
            f(change);
        }
    }
}
