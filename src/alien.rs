use crate::geometry::Rect;
use crate::settings::Settings;

/// One member of the fleet. Direction lives in `Settings` so the whole fleet
/// moves in lockstep.
#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
}

impl Alien {
    pub fn new(settings: &Settings, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_f32(self.x, self.y, self.width, self.height)
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction;
    }

    /// True when touching either side of the screen.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.left() <= 0 || rect.right() >= settings.screen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_fleet_direction() {
        let mut s = Settings::default();
        let mut a = Alien::new(&s, 100.0, 50.0);
        a.update(&s);
        assert_eq!(a.x, 101.0);
        s.fleet_direction = -1.0;
        a.update(&s);
        a.update(&s);
        assert_eq!(a.x, 99.0);
        assert_eq!(a.y, 50.0);
    }

    #[test]
    fn edge_detection() {
        let s = Settings::default();
        assert!(Alien::new(&s, 0.0, 10.0).check_edges(&s));
        assert!(!Alien::new(&s, 1.0, 10.0).check_edges(&s));
        let right = (s.screen_width - s.alien_width) as f32;
        assert!(Alien::new(&s, right, 10.0).check_edges(&s));
        assert!(!Alien::new(&s, right - 1.0, 10.0).check_edges(&s));
    }
}
