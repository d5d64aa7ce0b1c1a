use crate::geometry::Rect;
use crate::settings::Settings;
use crate::ship::Ship;

/// A shot fired by the ship. Travels straight up.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    /// Kept as a real so slow bullets still creep upward every frame.
    pub y: f32,
    pub width: i32,
    pub height: i32,
}

impl Bullet {
    /// Spawn a bullet at the ship's current top-center.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let ship_rect = ship.rect();
        Self {
            x: (ship_rect.center_x() - settings.bullet_width / 2) as f32,
            y: ship_rect.top() as f32,
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_f32(self.x, self.y, self.width, self.height)
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }

    /// Fully above the top edge.
    pub fn is_expired(&self) -> bool {
        self.rect().bottom() <= 0
    }
}
