mod app;
mod config;
mod engine;
mod event;
mod import;
mod session;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use store::json_store::JsonStore;
use ui::components::card::FlipCard;
use ui::components::chapter_list::ChapterList;
use ui::components::session_summary::SessionSummary;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "vocadr", version, about = "Terminal vocabulary flashcard trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Import a pipe-delimited word list as a new chapter
    Import {
        /// Word list file, one `term|translation` per line
        file: PathBuf,

        #[arg(short, long, help = "Chapter name (defaults to \"Chapter N\")")]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Import { file, name }) = cli.command {
        return run_import(&file, name);
    }

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            app.theme = Box::leak(Box::new(theme));
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_import(file: &PathBuf, name: Option<String>) -> Result<()> {
    let words = import::read_word_list(file)?;
    if words.is_empty() {
        println!("No words found in {} (expected `term|translation` lines)", file.display());
        return Ok(());
    }

    let config = config::Config::load().unwrap_or_default();
    let json_store = match config.data_dir() {
        Some(dir) => JsonStore::with_base_dir(dir)?,
        None => JsonStore::new()?,
    };
    let mut store = json_store.load();

    let label = name.unwrap_or_else(|| import::default_chapter_label(store.chapter_count()));
    let count = store.add_chapter(label.clone(), words);
    json_store.save(&store)?;

    println!("Imported {count} words into \"{label}\"");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            // Ticks just trigger a redraw, which expires the reveal delay
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::ChapterList => handle_chapter_list_key(app, key),
        AppScreen::Study => handle_study_key(app, key),
        AppScreen::SessionResult => handle_result_key(app, key),
    }
}

fn handle_chapter_list_key(app: &mut App, key: KeyEvent) {
    // Confirmation dialog takes priority
    if app.confirm_delete {
        match key.code {
            KeyCode::Char('y') => {
                app.delete_selected_chapter();
                app.confirm_delete = false;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                app.confirm_delete = false;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.chapter_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.chapter_select_prev(),
        KeyCode::Enter => app.start_chapter_study(),
        KeyCode::Char('r') => app.start_due_review(),
        KeyCode::Char('w') => app.start_weak_drill(),
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.words.chapter_count() > 0 {
                app.confirm_delete = true;
            }
        }
        _ => {}
    }
}

fn handle_study_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.abandon_session(),
        KeyCode::Char(' ') | KeyCode::Enter => app.flip_card(),
        KeyCode::Char('o') | KeyCode::Right => app.answer(true),
        KeyCode::Char('x') | KeyCode::Left => app.answer(false),
        KeyCode::Char('u') => app.undo(),
        _ => {}
    }
}

fn handle_result_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.retry_wrong(),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('q') | KeyCode::Esc => app.abandon_session(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::ChapterList => render_chapter_list(frame, app),
        AppScreen::Study => render_study(frame, app),
        AppScreen::SessionResult => render_result(frame, app),
    }
}

fn render_chapter_list(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let today = App::today();
    let rows = app.chapter_rows(today);
    let list_area = ui::layout::centered_rect(60, 90, layout[0]);
    let list = ChapterList::new(
        &rows,
        app.chapter_selected,
        app.due_total(today),
        app.confirm_delete,
        app.theme,
    );
    frame.render_widget(&list, list_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Enter] Study  [r] Review due  [w] Weak words  [x] Delete  [q] Quit ",
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[1]);
}

fn render_study(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let Some(ref session) = app.session else {
        return;
    };

    let app_layout = AppLayout::new(area);

    let progress = format!(" {} / {}", session.position + 1, session.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", session.display_label()),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            progress,
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, app_layout.header);

    // Render the live store record so level/date changes show immediately;
    // the frozen session snapshot only backs undo.
    let snapshot = session.current();
    let live = snapshot.and_then(|w| app.words.get(w.id)).or(snapshot);
    if let Some(word) = live {
        let card_area = ui::layout::centered_rect(60, 60, app_layout.main);
        let card = FlipCard::new(word, session.flipped, app.card_concealed(), app.theme);
        frame.render_widget(card, card_area);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Space] Flip  [o] Correct  [x] Wrong  [u] Undo  [ESC] Quit session ",
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, app_layout.footer);
}

fn render_result(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    if let Some(ref session) = app.session {
        let centered = ui::layout::centered_rect(50, 60, area);
        let summary = SessionSummary::new(
            session.display_label(),
            session.len(),
            session.wrong.len(),
            app.theme,
        );
        frame.render_widget(summary, centered);
    }
}
