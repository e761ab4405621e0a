//! Repository list with open-issue counts and a drill-down into the selected repository.
//!
//! Layout, top to bottom:
//!
//! ```text
//! Total open issues: 1
//! › Repo 1 (1)        <- selectable, one SelectionController
//! › Repo 2
//!
//! • A                 <- open issues of the selected repository, read-only
//! ```
//!
//! Counts and labels are recomputed from the repository data on every render.
use crate::input::InputEvent;
use crate::keymap::ListBindings;
use crate::list_group::ItemKind;
use crate::list_group::ItemRow;
use crate::list_group::ListGroupAction;
use crate::list_group::ListGroupOptions;
use crate::list_group::RowGesture;
use crate::list_group::render_rows;
use crate::list_group::route_event;
use crate::navigation::ListNavigation;
use crate::render;
use crate::repository::Repository;
use crate::repository::total_open_issues;
use crate::selection::SelectionChange;
use crate::selection::SelectionController;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct RepositoryIssuesBrowserOptions {
    pub loading_text: String,
    pub summary_prefix: String,
    pub summary_style: Style,
    pub repositories: ListGroupOptions,
    pub issues: ListGroupOptions,
    /// Blank rows between the repository list and the issue list.
    pub gap: u16,
}

impl Default for RepositoryIssuesBrowserOptions {
    fn default() -> Self {
        Self {
            loading_text: "loading repository data...".to_string(),
            summary_prefix: "Total open issues: ".to_string(),
            summary_style: Style::default(),
            repositories: ListGroupOptions::default(),
            issues: ListGroupOptions {
                show_focus: false,
                ..ListGroupOptions::default()
            },
            gap: 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct RepositoryIssuesBrowser {
    repositories: Option<Vec<Repository>>,
    loading: bool,
    selection: SelectionController,
    options: RepositoryIssuesBrowserOptions,
    bindings: ListBindings,
    nav: ListNavigation,
    issues_nav: ListNavigation,
}

impl RepositoryIssuesBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn with_repositories(repositories: Vec<Repository>) -> Self {
        Self {
            repositories: Some(repositories),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: RepositoryIssuesBrowserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_on_change(mut self, f: impl FnMut(&SelectionChange) + 'static) -> Self {
        self.selection.set_on_change(f);
        self
    }

    pub fn set_bindings(&mut self, bindings: ListBindings) {
        self.bindings = bindings;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn repositories(&self) -> Option<&[Repository]> {
        self.repositories.as_deref()
    }

    /// Replaces the data. A selection pointing past the new list is dropped.
    pub fn set_repositories(&mut self, repositories: Option<Vec<Repository>>) {
        let len = repositories.as_ref().map_or(0, Vec::len);
        self.selection.retain_within(len);
        tracing::debug!(
            target: "ratatui_listgroup::issues_browser",
            count = len,
            selected = ?self.selection.selected(),
            "repositories replaced"
        );
        self.repositories = repositories;
    }

    pub fn total_open_issues(&self) -> usize {
        self.repositories.as_deref().map_or(0, total_open_issues)
    }

    /// Row labels as rendered: `name` or `name (open count)`.
    pub fn labels(&self) -> Vec<String> {
        self.repositories
            .iter()
            .flatten()
            .map(Repository::label)
            .collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selected_repository(&self) -> Option<&Repository> {
        let index = self.selection.selected()?;
        self.repositories.as_ref()?.get(index)
    }

    /// Open issue titles of the selected repository; empty when nothing is selected.
    pub fn selected_issue_titles(&self) -> Vec<&str> {
        self.selected_repository()
            .map(Repository::open_issue_titles)
            .unwrap_or_default()
    }

    pub fn activate(&mut self, index: usize) -> Option<SelectionChange> {
        let labels = self.labels();
        let change = self.selection.activate(index, &labels)?;
        self.issues_nav = ListNavigation::default();
        Some(change)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ListGroupAction {
        if self.loading {
            return ListGroupAction::None;
        }
        let count = self.repositories.as_ref().map_or(0, Vec::len);
        let change = match route_event(&mut self.nav, &self.bindings, &event, count) {
            RowGesture::Activate(index) => self.activate(index),
            RowGesture::Clear => self.selection.clear(),
            RowGesture::Moved => return ListGroupAction::Redraw,
            RowGesture::Ignored => return ListGroupAction::None,
        };
        change.map_or(ListGroupAction::None, ListGroupAction::SelectionChanged)
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        // Lists that are not drawn this frame must not take clicks.
        self.nav.clear_area();
        self.issues_nav.clear_area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.loading {
            let style = theme.text_muted;
            render::render_row(area, buf, "", &self.options.loading_text, style);
            return;
        }

        let Some(repositories) = self.repositories.as_deref() else {
            return;
        };

        let summary = format!(
            "{}{}",
            self.options.summary_prefix,
            total_open_issues(repositories)
        );
        let summary_style = theme.text_primary.patch(self.options.summary_style);
        render::render_row(area, buf, "", &summary, summary_style);

        let below = shrink_top(area, 1);
        let list_h = (repositories.len().min(u16::MAX as usize) as u16).min(below.height);
        let list_area = Rect::new(below.x, below.y, below.width, list_h);

        let labels: Vec<String> = repositories.iter().map(Repository::label).collect();
        let selection = &self.selection;
        render_rows(
            list_area,
            buf,
            theme,
            &self.options.repositories,
            &mut self.nav,
            labels.len(),
            |i| ItemRow {
                label: &labels[i],
                kind: ItemKind::Action,
                active: selection.is_selected(i),
            },
        );

        let titles = self
            .selection
            .selected()
            .and_then(|i| repositories.get(i))
            .map(Repository::open_issue_titles)
            .unwrap_or_default();
        if titles.is_empty() {
            return;
        }
        let issues_area = shrink_top(below, list_h.saturating_add(self.options.gap));
        render_rows(
            issues_area,
            buf,
            theme,
            &self.options.issues,
            &mut self.issues_nav,
            titles.len(),
            |i| ItemRow {
                label: titles[i],
                kind: ItemKind::Static,
                active: false,
            },
        );
    }
}

fn shrink_top(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect::new(area.x, area.y + rows, area.width, area.height - rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::row_text;
    use crate::repository::Issue;

    fn rows(browser: &mut RepositoryIssuesBrowser, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        browser.render(area, &mut buf, &Theme::default());
        (area.y..area.y + area.height)
            .map(|y| row_text(&buf, area, y))
            .collect()
    }

    fn scenario() -> Vec<Repository> {
        vec![
            Repository::new("Repo 1").with_issues(vec![Issue::open("A"), Issue::closed("B")]),
            Repository::new("Repo 2"),
        ]
    }

    #[test]
    fn loading_shows_only_indicator() {
        let mut b = RepositoryIssuesBrowser::loading();
        b.set_repositories(Some(scenario()));
        let out = rows(&mut b, Rect::new(0, 0, 30, 4));
        assert_eq!(out, vec!["loading repository data...", "", "", ""]);
        assert_eq!(b.handle_event(InputEvent::click(0, 1)), ListGroupAction::None);
    }

    #[test]
    fn absent_repositories_render_nothing() {
        let mut b = RepositoryIssuesBrowser::new();
        let out = rows(&mut b, Rect::new(0, 0, 20, 2));
        assert!(out.iter().all(String::is_empty));
    }

    #[test]
    fn selection_reveals_open_issues() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        let area = Rect::new(0, 0, 30, 6);

        assert_eq!(
            rows(&mut b, area),
            vec!["Total open issues: 1", "› Repo 1 (1)", "› Repo 2", "", "", ""]
        );

        assert_eq!(
            b.activate(0),
            Some(SelectionChange::selected(0, "Repo 1 (1)"))
        );
        assert_eq!(
            rows(&mut b, area),
            vec!["Total open issues: 1", "› Repo 1 (1)", "› Repo 2", "", "• A", ""]
        );

        b.activate(1);
        assert!(b.selected_issue_titles().is_empty());
        assert_eq!(rows(&mut b, area)[4], "");
    }

    #[test]
    fn clicking_selected_repository_deselects() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        rows(&mut b, Rect::new(0, 0, 30, 6));

        assert_eq!(
            b.handle_event(InputEvent::click(2, 1)),
            ListGroupAction::SelectionChanged(SelectionChange::selected(0, "Repo 1 (1)"))
        );
        assert_eq!(b.selected_issue_titles(), vec!["A"]);

        assert_eq!(
            b.handle_event(InputEvent::click(2, 1)),
            ListGroupAction::SelectionChanged(SelectionChange::cleared())
        );
        assert_eq!(b.selected(), None);
    }

    #[test]
    fn summary_row_is_not_clickable() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        rows(&mut b, Rect::new(0, 0, 30, 6));
        assert_eq!(b.handle_event(InputEvent::click(2, 0)), ListGroupAction::None);
    }

    #[test]
    fn shrinking_data_drops_stale_selection() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        b.activate(1);
        b.set_repositories(Some(vec![Repository::new("only")]));
        assert_eq!(b.selected(), None);

        b.activate(0);
        b.set_repositories(Some(scenario()));
        assert_eq!(b.selected(), Some(0));
    }

    #[test]
    fn summary_only_render_ignores_clicks_on_old_rows() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        rows(&mut b, Rect::new(0, 0, 30, 6));
        assert_eq!(
            rows(&mut b, Rect::new(0, 0, 30, 1)),
            vec!["Total open issues: 1"]
        );

        assert_eq!(b.handle_event(InputEvent::click(2, 1)), ListGroupAction::None);
        assert_eq!(b.selected(), None);
    }

    #[test]
    fn clicks_ignored_after_switching_back_to_loading() {
        let mut b = RepositoryIssuesBrowser::with_repositories(scenario());
        rows(&mut b, Rect::new(0, 0, 30, 6));
        b.set_loading(true);
        rows(&mut b, Rect::new(0, 0, 30, 6));
        b.set_loading(false);

        assert_eq!(b.handle_event(InputEvent::click(2, 1)), ListGroupAction::None);
        rows(&mut b, Rect::new(0, 0, 30, 6));
        assert_eq!(
            b.handle_event(InputEvent::click(2, 1)),
            ListGroupAction::SelectionChanged(SelectionChange::selected(0, "Repo 1 (1)"))
        );
    }
}
