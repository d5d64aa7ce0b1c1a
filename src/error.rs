use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Startup and terminal failures. Gameplay itself never fails; everything
/// that goes wrong mid-game is a state transition, not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open log file {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen must be non-empty, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },
    #[error("screen {width}x{height} is too small, need at least {min_width}x{min_height}")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("screen {width}x{height} is too large, each side must be at most {max}")]
    ScreenTooLarge { width: u32, height: u32, max: u32 },
    #[error("frame rate {0} is outside 1..=240")]
    FrameRate(u32),
    #[error("ship limit must be at least 1")]
    NoShips,
    #[error("at least one bullet must be allowed in flight")]
    NoBullets,
}
