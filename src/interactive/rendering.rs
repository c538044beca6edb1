//! TUI rendering with ratatui
//!
//! Board grid, word list and trace replay for the Boggle solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BOARD_SIDE, cells};
use crate::output::formatters::tile_label;
use crate::solver::Strategy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and replay
            Constraint::Percentage(50), // Words and messages
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 BOGGLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Replay gauge
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_replay(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let path = app.current_path();
    let (path_color, title) = match app.replay_node() {
        Some(node) if node.found_word => (Color::Green, " Board (replay: word) "),
        Some(_) => (Color::Red, " Board (replay) "),
        None => (Color::Yellow, " Board "),
    };

    let mut lines = vec![Line::from("")];
    let tiles: Vec<_> = cells().collect();
    for row in tiles.chunks(BOARD_SIDE) {
        let spans: Vec<Span> = row
            .iter()
            .map(|&cell| {
                let label = format!(" {:<2} ", tile_label(app.board.letter(cell)));
                if let Some(step) = path.iter().position(|&c| c == cell) {
                    let style = Style::default()
                        .fg(Color::Black)
                        .bg(path_color)
                        .add_modifier(Modifier::BOLD);
                    // Underline where the path starts
                    if step == 0 {
                        Span::styled(label, style.add_modifier(Modifier::UNDERLINED))
                    } else {
                        Span::styled(label, style)
                    }
                } else {
                    Span::styled(label, Style::default().fg(Color::White))
                }
            })
            .flat_map(|span| [span, Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_replay(f: &mut Frame, app: &App, area: Rect) {
    let total = app.trace().len();
    let position = app.replay.as_ref().map_or(0, |r| r.position + 1);
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(position * 100 / total).unwrap_or(100).min(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Replay ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{position}/{total} paths"));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Words
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let (items, title): (Vec<ListItem>, String) = match &app.response {
        Some(response) => (
            response
                .words
                .iter()
                .map(|w| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<16}", w.word.to_uppercase()), Style::default()),
                        Span::styled(
                            format!("{:>3}", w.score),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]))
                })
                .collect(),
            format!(
                " Words ({}) - {} points ",
                response.word_count(),
                response.board.total_score
            ),
        ),
        None => (vec![ListItem::new("No words")], " Words ".to_string()),
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .style(Style::default().fg(Color::Green))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if app.word_count() > 0 {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Browse => (
            " Board | e or TAB to type a new one ",
            app.board.as_string(),
            Color::Yellow,
        ),
        InputMode::EditBoard => (
            " Enter 16 Letters (Qu as q) | ESC to cancel ",
            app.input_buffer.clone(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let strategy = Paragraph::new(format!("Strategy: {}", app.solver.strategy().name()))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let timing = app.response.as_ref().map_or_else(
        || format!("Dice: {}", app.board_type.name()),
        |r| format!("{:.2}ms | min {}", r.solve_time_ms, r.min_word_length),
    );
    f.render_widget(Paragraph::new(timing).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Browse => "q: Quit | ↑↓: Word | n/o: New/Old Dice | t: Strategy | r: Replay",
        InputMode::EditBoard => "Enter: Solve | Backspace: Delete | ESC: Cancel",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
