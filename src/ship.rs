use crate::geometry::Rect;
use crate::settings::Settings;

/// The player's ship. Sits on the bottom edge and only moves horizontally.
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            y: (settings.screen_height - settings.ship_height) as f32,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn rect(&self) -> Rect {
        Rect::from_f32(self.x, self.y, self.width, self.height)
    }

    fn max_x(&self, settings: &Settings) -> f32 {
        (settings.screen_width - self.width).max(0) as f32
    }

    /// Apply one tick of movement intent. Right wins when both flags are set.
    pub fn update(&mut self, settings: &Settings) {
        let rect = self.rect();
        if self.moving_right {
            if rect.right() < settings.screen_width {
                self.x += settings.ship_speed;
            }
        } else if self.moving_left && rect.left() > 0 {
            self.x -= settings.ship_speed;
        }
        self.x = self.x.clamp(0.0, self.max_x(settings));
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.x = ((settings.screen_width - self.width) as f32 / 2.0).max(0.0);
    }
}
