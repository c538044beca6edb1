//! TUI application state and logic

use crate::core::{Board, Cell, split_tokens};
use crate::dictionary::Dictionary;
use crate::generator::{BoardGenerator, BoardType};
use crate::solver::{
    PathNode, SolveRequest, SolveResponse, Solver, Strategy, StrategyType, word_path,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Time between replay frames
const TICK: Duration = Duration::from_millis(40);

/// Roughly how many frames a full trace replay takes
const REPLAY_FRAMES: usize = 250;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, StrategyType>,
    pub min_word_length: usize,
    pub board: Board,
    pub board_type: BoardType,
    pub response: Option<SolveResponse>,
    pub selected: usize,
    pub highlight: Vec<Cell>,
    pub replay: Option<Replay>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    EditBoard,
}

/// Progress through the path trace animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub position: usize,
    pub step: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app with a freshly rolled board
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, strategy: StrategyType, min_word_length: usize) -> Self {
        let board_type = BoardType::default();
        let board = BoardGenerator::new(board_type).generate_random();
        Self::with_board(dictionary, strategy, min_word_length, board)
    }

    /// Create the app around a known board
    #[must_use]
    pub fn with_board(
        dictionary: &'a Dictionary,
        strategy: StrategyType,
        min_word_length: usize,
        board: Board,
    ) -> Self {
        let mut app = Self {
            solver: Solver::new(strategy, dictionary),
            min_word_length,
            board,
            board_type: BoardType::default(),
            response: None,
            selected: 0,
            highlight: Vec::new(),
            replay: None,
            input_mode: InputMode::Browse,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Arrows pick a word, r replays the search.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };
        app.solve();
        app
    }

    /// Solve the current board and reset the selection
    pub fn solve(&mut self) {
        let request = SolveRequest::for_board(&self.board)
            .with_min_word_length(self.min_word_length)
            .with_paths(true);

        self.replay = None;
        self.selected = 0;
        match self.solver.solve(&request) {
            Ok(response) => {
                self.add_message(
                    &format!(
                        "{}: {} words, {} points in {:.2}ms",
                        response.strategy,
                        response.word_count(),
                        response.board.total_score,
                        response.solve_time_ms
                    ),
                    MessageStyle::Success,
                );
                self.response = Some(response);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.response = None;
            }
        }
        self.update_highlight();
    }

    /// Roll a board of the given type and solve it
    pub fn new_board(&mut self, board_type: BoardType) {
        self.board_type = board_type;
        self.board = BoardGenerator::new(board_type).generate_random();
        self.add_message(
            &format!("New {} board: {}", board_type.name(), self.board.as_string()),
            MessageStyle::Info,
        );
        self.solve();
    }

    /// Switch strategies and solve again
    pub fn toggle_strategy(&mut self) {
        let strategy = self.solver.strategy().toggled();
        self.solver = Solver::new(strategy, self.solver.dictionary());
        self.add_message(
            &format!("Strategy: {}", strategy.name()),
            MessageStyle::Info,
        );
        self.solve();
    }

    /// Replace the board with the typed letters
    pub fn submit_board(&mut self) {
        match Board::new(split_tokens(&self.input_buffer)) {
            Ok(board) => {
                self.board = board;
                self.input_buffer.clear();
                self.input_mode = InputMode::Browse;
                self.solve();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.response.as_ref().map_or(0, SolveResponse::word_count)
    }

    #[must_use]
    pub fn selected_word(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.words.get(self.selected))
            .map(|w| w.word.as_str())
    }

    pub fn select_next(&mut self) {
        if self.word_count() > 0 {
            self.selected = (self.selected + 1) % self.word_count();
            self.update_highlight();
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.word_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
            self.update_highlight();
        }
    }

    fn update_highlight(&mut self) {
        self.highlight = self
            .selected_word()
            .and_then(|word| word_path(&self.board, self.solver.adjacency(), word))
            .unwrap_or_default();
    }

    #[must_use]
    pub fn trace(&self) -> &[PathNode] {
        self.response
            .as_ref()
            .map(|r| r.board.path_trace.as_slice())
            .unwrap_or(&[])
    }

    /// Start replaying the path trace from the beginning
    pub fn start_replay(&mut self) {
        let len = self.trace().len();
        if len == 0 {
            self.add_message("Nothing to replay", MessageStyle::Error);
            return;
        }
        self.replay = Some(Replay {
            position: 0,
            step: len.div_ceil(REPLAY_FRAMES),
        });
    }

    pub fn stop_replay(&mut self) {
        self.replay = None;
    }

    /// Advance the replay by one frame
    pub fn tick(&mut self) {
        let len = self.trace().len();
        if let Some(replay) = &mut self.replay {
            replay.position += replay.step;
            if replay.position >= len {
                self.replay = None;
                self.add_message("Replay finished", MessageStyle::Info);
            }
        }
    }

    /// The trace entry the replay is showing
    #[must_use]
    pub fn replay_node(&self) -> Option<&PathNode> {
        self.replay
            .as_ref()
            .and_then(|replay| self.trace().get(replay.position))
    }

    /// Cells to highlight on the board right now
    #[must_use]
    pub fn current_path(&self) -> &[Cell] {
        self.replay_node()
            .map_or(self.highlight.as_slice(), |node| node.visited.as_slice())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('n') => self.new_board(BoardType::New),
            KeyCode::Char('o') => self.new_board(BoardType::Old),
            KeyCode::Char('t') => self.toggle_strategy(),
            KeyCode::Char('r') => self.start_replay(),
            KeyCode::Esc => self.stop_replay(),
            KeyCode::Char('e') | KeyCode::Tab => {
                self.stop_replay();
                self.input_mode = InputMode::EditBoard;
                self.input_buffer.clear();
                self.add_message("Type 16 letters and press Enter", MessageStyle::Info);
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.input_mode = InputMode::Browse;
                self.input_buffer.clear();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_board(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Browse => app.handle_browse_key(key.code),
                    InputMode::EditBoard => app.handle_edit_key(key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "denswodexkvjzyfm";

    fn setup_dictionary() -> Dictionary {
        Dictionary::build(["dens", "ends", "node", "nodes", "send"])
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::with_board(
            dictionary,
            StrategyType::from_name("trie"),
            3,
            BOARD.parse().unwrap(),
        )
    }

    #[test]
    fn app_solves_on_start() {
        let dictionary = setup_dictionary();
        let app = app(&dictionary);

        assert_eq!(app.word_count(), 5);
        assert_eq!(app.selected_word(), Some("dens"));
        assert_eq!(app.highlight, vec![1, 2, 3, 4]);
        assert!(!app.trace().is_empty());
    }

    #[test]
    fn selection_wraps_and_moves_highlight() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);

        app.select_previous();
        assert_eq!(app.selected_word(), Some("send"));
        app.select_next();
        assert_eq!(app.selected_word(), Some("dens"));
        app.select_next();
        assert_eq!(app.selected_word(), Some("ends"));
        assert_eq!(app.current_path(), [2, 3, 7, 4]);
    }

    #[test]
    fn toggle_strategy_keeps_words() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);
        let before = app.response.clone().unwrap().words;

        app.toggle_strategy();
        let response = app.response.as_ref().unwrap();
        assert_eq!(response.strategy, "Standard");
        assert_eq!(response.words, before);
    }

    #[test]
    fn submit_board_rejects_bad_input() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);
        app.input_mode = InputMode::EditBoard;
        app.input_buffer = "abc".to_string();

        app.submit_board();
        assert_eq!(app.input_mode, InputMode::EditBoard);
        assert_eq!(app.board.as_string(), BOARD);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submit_board_with_no_words_clears_response() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);
        app.input_buffer = "xxxxxxxxxxxxxxxx".to_string();

        app.submit_board();
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.response.is_none());
        assert!(app.current_path().is_empty());
    }

    #[test]
    fn replay_walks_the_trace() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);
        let len = app.trace().len();

        app.start_replay();
        assert_eq!(app.replay_node(), app.trace().first());
        assert_eq!(app.current_path(), app.trace()[0].visited.as_slice());

        for _ in 0..len {
            app.tick();
        }
        assert!(app.replay.is_none());
        assert_eq!(app.current_path(), [1, 2, 3, 4]);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = setup_dictionary();
        let mut app = app(&dictionary);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
