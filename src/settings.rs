use crate::config::{Config, MAX_SCREEN_SIDE};

pub const SHIP_SIZE: (i32, i32) = (60, 48);
pub const ALIEN_SIZE: (i32, i32) = (60, 58);
pub const BULLET_SIZE: (i32, i32) = (3, 15);

const SHIP_SPEED: f32 = 1.5;
const BULLET_SPEED: f32 = 2.5;
const ALIEN_SPEED: f32 = 1.0;
const ALIEN_POINTS: u32 = 50;
const FLEET_DROP_SPEED: f32 = 10.0;
const SPEEDUP_SCALE: f32 = 1.1;
const SCORE_SCALE: f32 = 1.5;
/// Length of the pause after losing a ship.
const STUN_SECONDS: f32 = 0.5;

/// All tunables for one game. The static half is fixed for the process; the
/// dynamic half is reset by `initialize_dynamic_settings` and scaled up by
/// `increase_speed` on every cleared wave.
#[derive(Clone, Debug)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub fps: u32,

    // Ship
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,
    pub stun_frames: u32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_width: i32,
    pub alien_height: i32,
    pub fleet_drop_speed: f32,

    // Level-up scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Dynamic
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    /// 1.0 moves the fleet right, -1.0 left.
    pub fleet_direction: f32,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        let mut settings = Self {
            screen_width: screen_side(config.width),
            screen_height: screen_side(config.height),
            fps: config.fps,
            ship_width: SHIP_SIZE.0,
            ship_height: SHIP_SIZE.1,
            ship_limit: config.ships,
            stun_frames: ((config.fps as f32 * STUN_SECONDS).round() as u32).max(1),
            bullet_width: BULLET_SIZE.0,
            bullet_height: BULLET_SIZE.1,
            bullets_allowed: config.bullets,
            alien_width: ALIEN_SIZE.0,
            alien_height: ALIEN_SIZE.1,
            fleet_drop_speed: FLEET_DROP_SPEED,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0,
            fleet_direction: 1.0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = SHIP_SPEED;
        self.bullet_speed = BULLET_SPEED;
        self.alien_speed = ALIEN_SPEED;
        self.alien_points = ALIEN_POINTS;
        self.fleet_direction = 1.0;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}

/// Screen side as a coordinate. Sides past the validated maximum are
/// clamped to it.
fn screen_side(side: u32) -> i32 {
    i32::try_from(side.min(MAX_SCREEN_SIDE)).unwrap_or(MAX_SCREEN_SIDE as i32)
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
