use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::game::Game;
use crate::input::{Control, HeldKeys, Input};
use crate::settings::Settings;
use crate::ui::stars::Starfield;

const STAR_COUNT: usize = 90;

pub struct App {
    pub should_quit: bool,
    pub game: Game,
    pub held: HeldKeys,
    pub frame: u64,
    /// Screen area of the play button as last drawn, `None` while hidden.
    pub play_button: Option<Rect>,
    pub stars: Starfield,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let stars = Starfield::generate(&mut rand::thread_rng(), &settings, STAR_COUNT);
        Self {
            should_quit: false,
            held: HeldKeys::new(settings.fps),
            game: Game::new(settings),
            frame: 0,
            play_button: None,
            stars,
        }
    }

    pub fn on_tick(&mut self) {
        self.frame += 1;
        self.game.set_moving_left(self.held.is_held(Control::Left, self.frame));
        self.game.set_moving_right(self.held.is_held(Control::Right, self.frame));
        self.game.update();
    }

    pub fn on_input(&mut self, input: Input) {
        match input {
            Input::Press { control, repeat } => self.on_press(control, repeat),
            Input::Release(control) => self.held.release(control),
            Input::Click { column, row } => {
                let on_button = self
                    .play_button
                    .is_some_and(|area| area.contains(Position::new(column, row)));
                if on_button && !self.game.is_active() {
                    debug!(column, row, "play button clicked");
                    self.start();
                }
            }
        }
    }

    fn on_press(&mut self, control: Control, repeat: bool) {
        match control {
            Control::Quit => self.should_quit = true,
            Control::Left | Control::Right => self.held.press(control, repeat, self.frame),
            Control::Fire => {
                if !repeat {
                    self.game.fire_bullet();
                }
            }
            Control::Start => {
                if !repeat && !self.game.is_active() {
                    debug!("start requested");
                    self.start();
                }
            }
            Control::Restart => {
                if !repeat {
                    debug!(active = self.game.is_active(), "restart requested");
                    self.start();
                }
            }
        }
    }

    fn start(&mut self) {
        self.held.clear();
        self.game.start_game();
    }
}
