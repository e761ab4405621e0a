//! `ratatui-listgroup-core` provides the state and input plumbing behind the list-group widgets.
//!
//! This crate is designed for **widget authors** who want the selection rules without the
//! widgets. Most users should depend on the facade crate `ratatui-listgroup`.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: every operation completes before returning.
//! - One source of truth: [`selection::SelectionController`] owns the selected index and rows
//!   derive their `active` state from it on every render.
//!
//! Useful entry points:
//! - [`selection::SelectionController`]: single-selection toggle state machine.
//! - [`navigation::ListNavigation`]: focus cursor, scrolling and mouse hit-testing.
//! - [`keymap::ListBindings`]: configurable key bindings for list widgets.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
pub mod navigation;
pub mod render;
pub mod selection;
