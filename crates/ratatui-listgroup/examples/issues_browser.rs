use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_listgroup::crossterm_input::input_event_from_crossterm;
use ratatui_listgroup::input::InputEvent;
use ratatui_listgroup::input::KeyCode;
use ratatui_listgroup::issues_browser::RepositoryIssuesBrowser;
use ratatui_listgroup::repository;
use ratatui_listgroup::repository::Repository;
use ratatui_listgroup::theme::Theme;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use std::time::Instant;

const SAMPLE: &str = r#"[
  { "name": "Repo 1", "issues": [
      { "title": "Repo 1 - Issue 1", "isOpen": true },
      { "title": "Repo 1 - Issue 2", "isOpen": true } ] },
  { "name": "Repo 2", "issues": [
      { "title": "Repo 2 - Issue 1", "isOpen": true },
      { "title": "Repo 2 - Issue 2", "isOpen": false } ] },
  { "name": "Repo 3" }
]"#;

struct Args {
    path: Option<PathBuf>,
    delay: Duration,
}

fn parse_args() -> Result<Option<Args>, String> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let mut out = Args {
        path: None,
        delay: Duration::from_millis(800),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            "--delay-ms" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--delay-ms requires a value".to_string())?;
                let ms: u64 = v
                    .parse()
                    .map_err(|_| format!("--delay-ms: invalid number: {v}"))?;
                out.delay = Duration::from_millis(ms);
                i += 2;
            }
            other if other.starts_with('-') => return Err(format!("unknown flag: {other}")),
            other => {
                out.path = Some(PathBuf::from(other));
                i += 1;
            }
        }
    }
    Ok(Some(out))
}

fn print_help() {
    eprintln!(
        "Usage: issues_browser [--delay-ms N] [PATH]\n\n\
         PATH  JSON array of {{ name, issues?: [{{ title, isOpen }}] }} (built-in sample if omitted)\n\
         --delay-ms N  how long to show the loading indicator (default 800)"
    );
}

fn load(path: Option<&PathBuf>) -> ratatui_listgroup::Result<Vec<Repository>> {
    match path {
        Some(p) => repository::from_json_file(p),
        None => repository::from_json_str(SAMPLE),
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let repositories = match load(args.path.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    match run_ui(repositories, args.delay) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_ui(repositories: Vec<Repository>, delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &Theme::default(), repositories, delay);

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
    repositories: Vec<Repository>,
    delay: Duration,
) -> io::Result<()> {
    let started = Instant::now();
    let mut pending = Some(repositories);
    let mut browser = RepositoryIssuesBrowser::loading();

    loop {
        if started.elapsed() >= delay {
            if let Some(data) = pending.take() {
                browser.set_repositories(Some(data));
                browser.set_loading(false);
            }
        }

        terminal.draw(|f| {
            let block = Block::default()
                .title("Repositories (j/k, Enter, click, Esc, q)")
                .borders(Borders::ALL);
            let area = f.area();
            let inner = block.inner(area);
            f.render_widget(block, area);
            browser.render(inner, f.buffer_mut(), theme);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if matches!(&ev, InputEvent::Key(k) if k.code == KeyCode::Char('q')) {
            return Ok(());
        }
        browser.handle_event(ev);
    }
}
