use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::settings::{ALIEN_SIZE, SHIP_SIZE};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_SHIPS: u32 = 3;
pub const DEFAULT_BULLETS: usize = 3;
/// Largest accepted screen side. Keeps the fleet grid small and every
/// coordinate well inside `i32`.
pub const MAX_SCREEN_SIDE: u32 = 10_000;

/// Alien Invasion - shoot down the fleet before it lands
#[derive(Parser, Debug, Clone)]
#[command(name = "alien_invasion")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Logical screen width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Logical screen height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Spare ships at the start of a game
    #[arg(long, default_value_t = DEFAULT_SHIPS)]
    pub ships: u32,

    /// Bullets allowed in flight at once
    #[arg(long, default_value_t = DEFAULT_BULLETS)]
    pub bullets: usize,

    /// Write tracing output to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            ships: DEFAULT_SHIPS,
            bullets: DEFAULT_BULLETS,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Smallest screen that holds the ship and one fleet slot.
    pub fn min_screen() -> (u32, u32) {
        let (ship_w, ship_h) = SHIP_SIZE;
        let (alien_w, alien_h) = ALIEN_SIZE;
        // First column sits at alien_w and must stay below width - 2 * alien_w;
        // first row sits at alien_h and must stay below height - 3 * alien_h.
        let min_w = (3 * alien_w + 1).max(ship_w);
        let min_h = (4 * alien_h + 1).max(ship_h);
        (min_w as u32, min_h as u32)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }
        let (min_width, min_height) = Self::min_screen();
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::ScreenTooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.width > MAX_SCREEN_SIDE || self.height > MAX_SCREEN_SIDE {
            return Err(ConfigError::ScreenTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_SCREEN_SIDE,
            });
        }
        if !(1..=240).contains(&self.fps) {
            return Err(ConfigError::FrameRate(self.fps));
        }
        if self.ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.bullets == 0 {
            return Err(ConfigError::NoBullets);
        }
        Ok(())
    }
}
