use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{Game, Phase};

const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Score as shown on the scoreboard: rounded to the nearest ten, with
/// thousands separators.
pub fn format_score(score: u32) -> String {
    let rounded = (u64::from(score) + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Centered play button inside the playfield, shrunk to fit small terminals.
pub fn button_area(field: Rect) -> Rect {
    let w = BUTTON_WIDTH.min(field.width);
    let h = BUTTON_HEIGHT.min(field.height);
    Rect::new(
        field.x + (field.width - w) / 2,
        field.y + (field.height - h) / 2,
        w,
        h,
    )
}

/// Ships left on the left, high score in the middle, score and level on the
/// right.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, game: &Game) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let ships = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            "\u{25b2} ".repeat(game.stats.ships_left as usize),
            Style::default().fg(Color::Rgb(120, 200, 255)).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(ships), chunks[0]);

    let high = Line::from(vec![
        Span::styled("High ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_score(game.stats.high_score),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(high).alignment(Alignment::Center), chunks[1]);

    let score = Line::from(vec![
        Span::styled(
            format_score(game.stats.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Lv ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", game.stats.level),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(score).alignment(Alignment::Right), chunks[2]);
}

/// Draw the play button (and the game-over banner above it). Returns the
/// button's area for click testing.
pub fn render_play_button(frame: &mut Frame, field: Rect, game: &Game) -> Rect {
    let area = button_area(field);

    if game.game_over && area.y > field.y {
        let banner = Rect::new(field.x, area.y - 1, field.width, 1);
        let text = Paragraph::new(Line::from(Span::styled(
            " GAME OVER ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(text, banner);
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(0, 200, 0)))
        .style(Style::default().bg(Color::Rgb(0, 135, 0)));
    let label = Paragraph::new(Line::from(Span::styled(
        "Play",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(label, area);
    area
}

pub fn render_help(frame: &mut Frame, area: Rect, game: &Game) {
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));
    let line = match game.phase {
        Phase::Inactive => Line::from(vec![
            Span::styled(" Click Play or press P ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ]),
        Phase::Stunned { .. } => Line::from(vec![Span::styled(
            " Ship lost! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Phase::Active => Line::from(vec![
            Span::styled(" \u{2190}\u{2192}/A D Move ", dim),
            Span::styled("| ", sep),
            Span::styled("Space Shoot ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("| ", sep),
            Span::styled("R Restart ", dim),
            Span::styled("| ", sep),
            Span::styled("Q Quit", dim),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
