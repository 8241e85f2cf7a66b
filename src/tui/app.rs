use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::fetch::{LoadEvent, TodoLoader};
use crate::model::config::Config;
use crate::ops::board::Board;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Filter,
    Edit,
}

/// Which of the two filter inputs has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    From,
    To,
}

/// Remote load progress, shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Main application state
pub struct App {
    pub board: Board,
    pub config: Config,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub load_state: LoadState,
    /// In-flight fetch, polled each tick; `None` once the result arrived
    pub loader: Option<TodoLoader>,

    // Filter mode inputs (persist across mode switches so reopening the
    // filter shows what was last typed)
    pub filter_from: String,
    pub filter_to: String,
    pub filter_from_cursor: usize,
    pub filter_to_cursor: usize,
    pub filter_field: FilterField,

    // Edit mode buffer (byte cursor into a single-line draft)
    pub edit_buffer: String,
    pub edit_cursor: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            board: Board::new(),
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            load_state: LoadState::Loading,
            loader: None,
            filter_from: String::new(),
            filter_to: String::new(),
            filter_from_cursor: 0,
            filter_to_cursor: 0,
            filter_field: FilterField::From,
            edit_buffer: String::new(),
            edit_cursor: 0,
        }
    }

    /// Id of the todo under the cursor, if any.
    pub fn cursor_todo_id(&self) -> Option<u64> {
        self.board.visible().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.board.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Kick off the one-shot background fetch.
    pub fn start_load(&mut self) {
        self.load_state = LoadState::Loading;
        self.loader = Some(TodoLoader::spawn(self.config.clone()));
    }

    /// Drain the loader channel; on completion perform exactly one
    /// `load_all` (or record the failure) and drop the loader.
    pub fn poll_loader(&mut self) {
        let event = match &self.loader {
            Some(loader) => loader.poll(),
            None => return,
        };
        match event {
            None => {}
            Some(LoadEvent::Loaded(todos)) => {
                self.board.load_all(todos);
                self.load_state = LoadState::Loaded;
                self.loader = None;
                self.clamp_cursor();
            }
            Some(LoadEvent::Failed(message)) => {
                self.load_state = LoadState::Failed(message);
                self.loader = None;
            }
        }
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.map(Path::new))?;
    let mut app = App::new(config);
    app.start_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.poll_loader();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
