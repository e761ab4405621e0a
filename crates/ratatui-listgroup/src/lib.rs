//! List-group widgets for [`ratatui`].
//!
//! - [`list_group::ListGroup`]: an ordered group of static and action items.
//! - [`single_selection::SingleSelectionListGroup`]: a list group where activating a row selects
//!   it and activating it again clears the selection.
//! - [`issues_browser::RepositoryIssuesBrowser`]: repositories with open-issue counts and a
//!   read-only list of the selected repository's open issues.
//!
//! Widgets are driven by the caller: feed [`input::InputEvent`]s to `handle_event`, then call
//! `render` with a [`theme::Theme`]. Nothing here spawns threads or touches the terminal.
//!
//! ```
//! use ratatui_listgroup::list_group::ListGroupItem;
//! use ratatui_listgroup::single_selection::SingleSelectionListGroup;
//!
//! let mut list = SingleSelectionListGroup::new([
//!     ListGroupItem::new("Item 1"),
//!     ListGroupItem::new("Item 2").with_active(true),
//! ]);
//! assert_eq!(list.selected(), Some(1));
//!
//! let change = list.activate(1).expect("row exists");
//! assert_eq!(change.signed_index(), -1);
//! assert_eq!(change.value, None);
//! ```
pub use ratatui_listgroup_core::input;
pub use ratatui_listgroup_core::keymap;
pub use ratatui_listgroup_core::navigation;
pub use ratatui_listgroup_core::render;
pub use ratatui_listgroup_core::selection;
pub use ratatui_listgroup_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_listgroup_core::crossterm_input;

pub mod error;
pub mod issues_browser;
pub mod list_group;
pub mod repository;
pub mod single_selection;

pub use error::Error;
pub use error::Result;
