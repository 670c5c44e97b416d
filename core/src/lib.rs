#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::ToString;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use media::*;
pub use round::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod input;
mod media;
mod round;
#[cfg(test)]
mod testing;
mod tile;
mod types;

/// Animation durations, in [`Millis`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long an incorrect tile takes to shrink to nothing
    pub shrink: Millis,
    /// How long the correct tile celebrates before a new round
    pub blink: Millis,
    /// How long each half of the blinking sprite stays up
    pub blink_frame: Millis,
}

impl Timing {
    pub const fn new(shrink: Millis, blink: Millis, blink_frame: Millis) -> Self {
        Self {
            shrink,
            blink,
            blink_frame,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(4000, 4000, 1000)
    }
}

/// Screen placement and timing, fixed for the whole session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: Size,
    pub board_side: Coord,
    #[serde(default)]
    pub timing: Timing,
}

impl GameConfig {
    pub const DEFAULT_WINDOW: Size = Size::new(800, 600);

    /// Board fills 80% of the window height.
    pub const fn new(window: Size) -> Self {
        Self {
            window,
            board_side: window.height / 5 * 4,
            timing: Timing::new(4000, 4000, 1000),
        }
    }

    pub const fn board_center(&self) -> Point {
        self.window.center()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.window.is_empty() {
            return Err(GameError::InvalidConfig(format!(
                "window must not be empty, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.timing.shrink == 0 || self.timing.blink == 0 || self.timing.blink_frame == 0 {
            return Err(GameError::InvalidConfig(format!(
                "durations must be positive, got {:?}",
                self.timing
            )));
        }

        let max_side = self.window.width.min(self.window.height);
        let board_side = self.board_side.clamp(0, max_side);
        if board_side != self.board_side {
            log::warn!(
                "Board side {} does not fit the window, clamped to {}",
                self.board_side,
                board_side
            );
        }
        if Board::tile_side_for(board_side) == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board side {} leaves no room for tiles",
                board_side
            )));
        }
        Ok(Self { board_side, ..self })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
