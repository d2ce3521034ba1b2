//! Main TUI application state and logic

use crate::automaton::Algorithm;
use crate::history::{RoundHistory, Scoreboard};
use crate::process::{SortProcess, Verdict};
use crate::session::{format_array, generate_array, parse_guess, Score};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing an algorithm
    Menu,
    /// Typing guesses for a running session
    Guessing,
    /// Session over, score shown
    Finished,
}

/// The main application state
pub struct App {
    pub screen: Screen,

    /// Highlighted entry in the algorithm menu
    pub menu_index: usize,

    /// The running (or just finished) session
    pub process: Option<SortProcess<i32>>,

    /// Rounds of the current session
    pub history: RoundHistory,

    /// Results of every session finished in this run
    pub scoreboard: Scoreboard,

    /// Guess being typed
    pub input: String,

    /// Scroll offset of the history pane
    pub history_scroll: usize,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a problem
    pub status_is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    array_len: usize,
    rng: StdRng,
}

impl App {
    /// Create the app; with an algorithm the session starts immediately,
    /// otherwise the menu is shown first
    pub fn new(array_len: usize, rng: StdRng, algorithm: Option<Algorithm>) -> Self {
        let mut app = App {
            screen: Screen::Menu,
            menu_index: 0,
            process: None,
            history: RoundHistory::new(),
            scoreboard: Scoreboard::new(),
            input: String::new(),
            history_scroll: 0,
            status_message: String::from("Choose an algorithm"),
            status_is_error: false,
            should_quit: false,
            array_len,
            rng,
        };

        if let Some(algorithm) = algorithm {
            app.menu_index = Algorithm::ALL
                .iter()
                .position(|a| *a == algorithm)
                .unwrap_or(0);
            app.start_session(algorithm);
        }

        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Begin a new session on a fresh random array
    pub fn start_session(&mut self, algorithm: Algorithm) {
        let array = generate_array(self.array_len, &mut self.rng);
        info!(%algorithm, array = ?array, "session started");

        self.process = Some(SortProcess::new(algorithm, array));
        self.history.clear();
        self.input.clear();
        self.history_scroll = 0;
        self.screen = Screen::Guessing;
        self.set_status(format!("{} sort: what does the next step look like?", algorithm));
    }

    /// Score the typed guess
    pub fn submit_guess(&mut self) {
        let Some(process) = self.process.as_mut() else {
            return;
        };

        let guess = match parse_guess(&self.input, process.current().len()) {
            Ok(guess) => guess,
            Err(e) => {
                self.status_message = format!("Invalid guess: {}", e);
                self.status_is_error = true;
                return;
            }
        };

        let verdict = process.next(&guess);
        self.history.record(guess, &verdict, process.current());
        self.history_scroll = usize::MAX;
        self.input.clear();

        let (message, is_error) = match &verdict {
            Verdict::Correct => (String::from("Correct!"), false),
            Verdict::Incorrect { expected } => {
                (format!("Incorrect. Correct one: {}", format_array(expected)), true)
            }
        };

        if process.is_done() {
            let score = Score::of(process);
            self.scoreboard
                .record(process.algorithm(), score.correct, score.rounds);
            info!(
                algorithm = %process.algorithm(),
                correct = score.correct,
                rounds = score.rounds,
                "session finished"
            );
            self.screen = Screen::Finished;
        }

        self.status_message = message;
        self.status_is_error = is_error;
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let status_area = main_chunks[1];

        match (self.screen, self.process.as_ref()) {
            (Screen::Menu, _) | (_, None) => {
                super::panes::render_menu_pane(
                    frame,
                    main_chunks[0],
                    self.menu_index,
                    &self.scoreboard,
                );
            }
            (screen, Some(process)) => {
                // Array + history on top, input line below
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(main_chunks[0]);

                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(rows[0]);

                super::panes::render_array_pane(frame, columns[0], process);

                super::panes::render_history_pane(
                    frame,
                    columns[1],
                    &self.history,
                    &mut self.history_scroll,
                );

                let finished = (screen == Screen::Finished).then(|| Score::of(process));
                super::panes::render_input_pane(frame, rows[1], &self.input, finished);
            }
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.status_is_error,
            self.screen,
            self.process.as_ref(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Guessing => self.handle_guess_key(key),
            Screen::Finished => self.handle_finished_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.menu_index = self
                    .menu_index
                    .checked_sub(1)
                    .unwrap_or(Algorithm::ALL.len() - 1);
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % Algorithm::ALL.len();
            }
            KeyCode::Enter => {
                self.start_session(Algorithm::ALL[self.menu_index]);
            }
            _ => {}
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => {
                // Start from the current array and edit it
                if let Some(process) = &self.process {
                    self.input = format_array(process.current());
                }
            }
            KeyCode::Up => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
            KeyCode::Char(c) if c.is_ascii_digit() || "[], -".contains(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_finished_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.screen = Screen::Menu;
                self.set_status(String::from("Choose an algorithm"));
            }
            KeyCode::Up => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
            _ => {}
        }
    }
}
