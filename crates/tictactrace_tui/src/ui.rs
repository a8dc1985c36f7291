//! Stateless UI rendering over the derived game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactrace::{Cell, GameView, MoveEntry, Outcome, Player, Position};

use crate::app::{App, Focus};

/// Renders one frame from the controller's derived view.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(38)])
        .split(frame.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(2), // Key hints
        ])
        .split(panes[0]);

    let title = Paragraph::new("Tictactrace")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, left[0]);

    draw_board(frame, left[1], &view, app);
    draw_status(frame, left[2], &view);
    draw_hints(frame, left[3], app.focus());
    draw_moves(frame, panes[1], &view, app);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], view, app, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], view, app, 1);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], view, app, 2);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(position) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], view, app, position);
        }
        if col < 2 {
            draw_vertical_separator(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, app: &App, position: Position) {
    let (symbol, base_style) = match view.board().get(position) {
        Cell::Empty => (
            format!(" {} ", position.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = view
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(&position));
    let mut style = if winning {
        base_style.fg(Color::Black).bg(Color::Green)
    } else {
        base_style
    };
    if app.focus() == Focus::Board && position == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let status = status_line(view);
    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints = match focus {
        Focus::Board => "Arrows move, Enter or 1-9 places, Tab history, s sort, r restart, q quit",
        Focus::Moves => "Arrows select, Enter jumps, Tab board, s sort, r restart, q quit",
    };
    let paragraph = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let title = if view.ascending() {
        "Moves (oldest first)"
    } else {
        "Moves (newest first)"
    };

    let lines: Vec<Line> = view
        .moves()
        .iter()
        .map(|entry| {
            let selected = app.focus() == Focus::Moves && entry.step() == app.selected();
            let marker = if selected { "▶ " } else { "  " };

            let mut style = Style::default();
            if entry.current() {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if selected {
                style = style.bg(Color::White).fg(Color::Black);
            }

            Line::from(Span::styled(format!("{marker}{}", move_label(entry)), style))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Formats one move-list entry.
fn move_label(entry: &MoveEntry) -> String {
    if entry.step() == 0 {
        return "Game start".to_string();
    }
    match entry.detail() {
        Some(detail) => format!(
            "Move #{} [Player: {}, Coord: ({},{})]",
            entry.step(),
            detail.player(),
            detail.row(),
            detail.column()
        ),
        None => format!("Move #{}", entry.step()),
    }
}

fn status_line(view: &GameView) -> String {
    match view.outcome() {
        Outcome::Won { player, .. } => format!("Winner: {player}"),
        Outcome::Draw => "Winner: Cat's Game".to_string(),
        Outcome::InProgress => format!("Next player: {}", view.to_move()),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactrace::Game;

    #[test]
    fn test_move_labels() {
        let mut game = Game::new();
        game.play(Position::MiddleRight);
        let view = game.view();

        assert_eq!(move_label(&view.moves()[0]), "Game start");
        assert_eq!(
            move_label(&view.moves()[1]),
            "Move #1 [Player: X, Coord: (2,3)]"
        );
    }

    #[test]
    fn test_status_wording() {
        let mut game = Game::new();
        assert_eq!(status_line(&game.view()), "Next player: X");

        game.play(Position::TopLeft);
        assert_eq!(status_line(&game.view()), "Next player: O");

        for position in [
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            game.play(position);
        }
        assert_eq!(status_line(&game.view()), "Winner: X");
    }

    #[test]
    fn test_draw_status_wording() {
        let mut game = Game::new();
        for position in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomCenter,
        ] {
            game.play(position);
        }

        assert_eq!(status_line(&game.view()), "Winner: Cat's Game");
    }
}
