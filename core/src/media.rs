//! Collaborators the shell provides: image loading, sound cues and drawing.

use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque reference to an image the shell has loaded, with its pixel size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    pub id: u32,
    pub width: Coord,
    pub height: Coord,
}

impl ImageHandle {
    pub const fn new(id: u32, width: Coord, height: Coord) -> Self {
        Self { id, width, height }
    }

    /// The whole image.
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Source slice of a horizontal two-frame sprite sheet.
    pub const fn frame(&self, frame: SpriteFrame) -> Rect {
        let frame_width = self.width / 2;
        Rect::new(frame_width * frame.index(), 0, frame_width, self.height)
    }
}

pub trait AssetProvider {
    /// Fails with [`GameError::AssetNotFound`] when `name` is not registered.
    fn load_image(&mut self, name: &str) -> Result<ImageHandle>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    CorrectGuess,
    IncorrectGuess,
    NewRound,
}

impl Cue {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CorrectGuess => "correctGuess",
            Self::IncorrectGuess => "incorrectGuess",
            Self::NewRound => "newGame",
        }
    }
}

/// Fire-and-forget sound playback.
pub trait AudioProvider {
    fn play_cue(&mut self, cue: Cue);
}

pub trait Renderer {
    /// Draws `source` (in image pixels) of `image` scaled into `destination`.
    fn draw_image(&mut self, image: ImageHandle, destination: Rect, source: Rect);
}
