mod app;
mod print;
mod styled;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notes_markup_config::{Config, ConfigError};
use notes_markup_engine::{RenderStyle, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

/// Non-interactive output for a single file.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PrintMode {
    Styled,
    Tree,
    Runs,
}

fn print_mode(flag: &str) -> Option<PrintMode> {
    match flag {
        "--print" => Some(PrintMode::Styled),
        "--tree" => Some(PrintMode::Tree),
        "--runs" => Some(PrintMode::Runs),
        _ => None,
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [notes-folder-path]");
    eprintln!("       {program} --print|--tree|--runs <note-file>");
}

/// Style from the config file, or the default when there is none.
fn load_style(config: Option<&Config>) -> Result<RenderStyle> {
    match config {
        Some(config) => Ok(config.style.render_style()?),
        None => Ok(RenderStyle::default()),
    }
}

/// Style for modes that do not need the config file: a config that fails to
/// load or holds a bad style falls back to the default.
fn style_or_default(config: &Result<Option<Config>, ConfigError>) -> RenderStyle {
    let loaded = match config {
        Ok(config) => load_style(config.as_ref()),
        Err(e) => Err(anyhow::anyhow!("Failed to load config file: {e}")),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("{e:#}; using the default style");
        RenderStyle::default()
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    let config = Config::load();

    if args.len() == 3
        && let Some(mode) = print_mode(&args[1])
    {
        let style = style_or_default(&config);
        let path = PathBuf::from(&args[2]);
        let note = io::read_note(&path)
            .with_context(|| format!("Failed to read note {}", path.display()))?;
        let mut out = stdout().lock();
        return match mode {
            PrintMode::Styled => print::styled(&mut out, &note, &style),
            PrintMode::Tree => print::tree(&mut out, &note),
            PrintMode::Runs => print::runs(&mut out, &note, &style),
        };
    }

    // Determine notes path from CLI args or config file
    let (notes_path, style, from_config) = match (args.len(), config) {
        (2, config) if !args[1].starts_with("--") => {
            (PathBuf::from(&args[1]), style_or_default(&config), false)
        }
        (1, Err(e)) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(&args[0]);
            process::exit(1);
        }
        (1, Ok(Some(config))) => {
            let style = load_style(Some(&config))
                .with_context(|| format!("Invalid style in {}", config_path.display()))?;
            (config.notes_path, style, true)
        }
        (1, Ok(None)) => {
            eprintln!("Error: No notes path provided and no config file found");
            usage(&args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            usage(&args[0]);
            process::exit(1);
        }
    };

    // Validate notes directory using engine
    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(&notes_path, style)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(file.display_name().to_string())))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a note to view it")]
    } else {
        app.current_content.clone()
    };
    let title = app
        .selected_file()
        .map_or("Content".to_string(), |file| file.display_name().to_string());

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));
    f.render_widget(help, rows[1]);
}
