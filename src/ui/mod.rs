pub mod field;
pub mod hud;
pub mod stars;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

/// Draw one frame: scoreboard, playfield, then the play button on top while
/// no game is running.
pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" \u{1f47e} Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(1),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let (fw, fh) = (chunks[1].width as usize, chunks[1].height as usize);
    if fw > 0 && fh > 0 {
        let lines = field::render_field(app, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    hud::render_scoreboard(frame, chunks[0], &app.game);
    hud::render_help(frame, chunks[2], &app.game);

    app.play_button = if !app.game.is_active() && fw > 0 && fh > 0 {
        Some(hud::render_play_button(frame, chunks[1], &app.game))
    } else {
        None
    };
}
