use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PointerButtons: u16 {
        const PRIMARY   = 1;
        const SECONDARY = 1 << 1;
        const MIDDLE    = 1 << 2;
    }
}

/// Pointer snapshot for a single frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub position: Point,
    pub buttons: PointerButtons,
}

impl PointerState {
    pub const fn new(position: Point, buttons: PointerButtons) -> Self {
        Self { position, buttons }
    }

    pub const fn released_at(x: Coord, y: Coord) -> Self {
        Self::new(Point::new(x, y), PointerButtons::empty())
    }

    pub const fn pressed_at(x: Coord, y: Coord) -> Self {
        Self::new(Point::new(x, y), PointerButtons::PRIMARY)
    }

    /// Only the primary button clicks tiles.
    pub const fn is_pressed(&self) -> bool {
        self.buttons.contains(PointerButtons::PRIMARY)
    }
}

/// Everything the shell delivers to the core on each frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Time since the previous frame.
    pub elapsed: Millis,
    pub pointer: PointerState,
    /// Confirm request from the opening screen.
    pub start: bool,
}

impl FrameInput {
    pub const fn new(elapsed: Millis, pointer: PointerState) -> Self {
        Self {
            elapsed,
            pointer,
            start: false,
        }
    }

    pub const fn with_start(mut self) -> Self {
        self.start = true;
        self
    }
}
