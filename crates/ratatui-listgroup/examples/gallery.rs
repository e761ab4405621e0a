use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_listgroup::crossterm_input::input_event_from_crossterm;
use ratatui_listgroup::input::InputEvent;
use ratatui_listgroup::input::KeyCode;
use ratatui_listgroup::issues_browser::RepositoryIssuesBrowser;
use ratatui_listgroup::list_group::ListGroup;
use ratatui_listgroup::list_group::ListGroupAction;
use ratatui_listgroup::list_group::ListGroupItem;
use ratatui_listgroup::repository::Issue;
use ratatui_listgroup::repository::Repository;
use ratatui_listgroup::single_selection::SingleSelectionListGroup;
use ratatui_listgroup::theme::Theme;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

type Log = Rc<RefCell<String>>;

enum Widget {
    Plain(ListGroup),
    Single(SingleSelectionListGroup),
    Browser(RepositoryIssuesBrowser),
}

impl Widget {
    fn handle_event(&mut self, ev: InputEvent) -> ListGroupAction {
        match self {
            Widget::Plain(w) => w.handle_event(ev),
            Widget::Single(w) => w.handle_event(ev),
            Widget::Browser(w) => w.handle_event(ev),
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        match self {
            Widget::Plain(w) => w.render(area, buf, theme),
            Widget::Single(w) => w.render(area, buf, theme),
            Widget::Browser(w) => w.render(area, buf, theme),
        }
    }
}

struct Story {
    title: &'static str,
    widget: Widget,
}

fn stories(log: &Log) -> Vec<Story> {
    let action = |msg: &'static str| {
        let log = log.clone();
        move || {
            tracing::info!(target: "gallery", "{msg}");
            *log.borrow_mut() = msg.to_string();
        }
    };
    let on_change = || {
        let log = log.clone();
        move |ch: &ratatui_listgroup::selection::SelectionChange| {
            tracing::info!(target: "gallery", index = ch.signed_index(), value = ?ch.value, "selection changed");
            *log.borrow_mut() = format!(
                "Selection changed {{ index: {}, value: {:?} }}",
                ch.signed_index(),
                ch.value
            );
        }
    };

    vec![
        Story {
            title: "ListGroup: with items",
            widget: Widget::Plain(ListGroup::new([
                ListGroupItem::new("item 1"),
                ListGroupItem::new("item 2"),
            ])),
        },
        Story {
            title: "ListGroup: with active items",
            widget: Widget::Plain(ListGroup::new([
                ListGroupItem::new("item 1").with_active(true),
                ListGroupItem::new("item 2").with_active(true),
            ])),
        },
        Story {
            title: "ListGroup: with actionable items",
            widget: Widget::Plain(ListGroup::new([
                ListGroupItem::action("action item 1", action("Item 1 clicked!")).with_active(true),
                ListGroupItem::action("action item 2", action("Item 2 clicked!")),
            ])),
        },
        Story {
            title: "SingleSelectionListGroup: with items",
            widget: Widget::Single(
                SingleSelectionListGroup::from_labels(["item 1", "item 2"])
                    .with_on_change(on_change()),
            ),
        },
        Story {
            title: "SingleSelectionListGroup: with initial selection",
            widget: Widget::Single(
                SingleSelectionListGroup::new([
                    ListGroupItem::new("item 1"),
                    ListGroupItem::new("item 2").with_active(true),
                ])
                .with_on_change(on_change()),
            ),
        },
        Story {
            title: "RepositoryIssuesBrowser: loading repository data",
            widget: Widget::Browser(RepositoryIssuesBrowser::loading()),
        },
        Story {
            title: "RepositoryIssuesBrowser: with repositories",
            widget: Widget::Browser(RepositoryIssuesBrowser::with_repositories(vec![
                Repository::new("Repo 1"),
                Repository::new("Repo 2"),
            ])),
        },
        Story {
            title: "RepositoryIssuesBrowser: with repositories and open issues",
            widget: Widget::Browser(
                RepositoryIssuesBrowser::with_repositories(vec![
                    Repository::new("Repo 1").with_issues(vec![
                        Issue::open("Repo 1 - Issue 1"),
                        Issue::open("Repo 1 - Issue 2"),
                    ]),
                    Repository::new("Repo 2").with_issues(vec![
                        Issue::open("Repo 2 - Issue 1"),
                        Issue::closed("Repo 2 - Issue 2"),
                    ]),
                    Repository::new("Repo 3"),
                ])
                .with_on_change(on_change()),
            ),
        },
    ]
}

fn init_logging() -> io::Result<()> {
    // RUST_LOG enables logging; output goes to a file since the UI owns the terminal.
    let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = std::fs::File::create("gallery.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    init_logging()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let log: Log = Rc::default();
    let mut stories = stories(&log);
    let res = run(&mut terminal, &Theme::default(), &mut stories, &log);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    theme: &Theme,
    stories: &mut [Story],
    log: &Log,
) -> io::Result<()> {
    let total = stories.len();
    let mut current = 0usize;
    loop {
        terminal.draw(|f| {
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(f.area());

            let story = &mut stories[current];
            let block = Block::default()
                .title(format!(
                    "{} ({}/{total})  Tab/Shift-Tab: story, j/k, Enter, Esc, click, q",
                    story.title,
                    current + 1,
                ))
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            story.widget.render(inner, buf, theme);

            let status_span = Span::styled(log.borrow().clone(), Style::default());
            buf.set_span(status.x, status.y, &status_span, status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if let InputEvent::Key(key) = &ev {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => {
                    current = (current + 1) % total;
                    log.borrow_mut().clear();
                    continue;
                }
                KeyCode::BackTab => {
                    current = (current + total - 1) % total;
                    log.borrow_mut().clear();
                    continue;
                }
                _ => {}
            }
        }
        stories[current].widget.handle_event(ev);
    }
}
