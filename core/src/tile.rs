use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle <-> Hovered, following the pointer
/// - Hovered -> PressArmed, on a primary press edge over the tile
/// - PressArmed -> Idle, when the pointer leaves before releasing
/// - PressArmed -> Blinking, on release over the correct tile
/// - PressArmed -> Shrinking, on release over any other tile
/// - Shrinking -> Gone, once the side length reaches zero
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Idle,
    Hovered,
    PressArmed,
    /// Correct guess, celebrating
    Blinking,
    /// Incorrect guess, shrinking out
    Shrinking,
    /// Shrunk to nothing, never drawn or interactive again
    Gone,
}

impl TileState {
    /// Animating tiles ignore pointer input
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Blinking | Self::Shrinking | Self::Gone)
    }

    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Gone)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Outcome of updating a tile for one frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileOutcome {
    NoChange,
    /// Hover, arm, sprite frame or size changed
    Changed,
    CorrectGuess,
    IncorrectGuess,
    /// Shrinking finished this frame
    Vanished,
    /// Celebration finished, reported once per tile
    Won,
}

impl TileOutcome {
    /// Whether this outcome could need a redraw
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pos: Cell2,
    label: Label,
    is_correct: bool,
    center: Point,
    original_side: Coord,
    side: Coord,
    rect: Rect,
    image: ImageHandle,
    blinking_image: ImageHandle,
    showing_blinking: bool,
    frame: SpriteFrame,
    state: TileState,
    timing: Timing,
    was_pressed: bool,
    shrink_elapsed: Millis,
    blink_elapsed: Millis,
    frame_elapsed: Millis,
    won_reported: bool,
}

impl Tile {
    /// Builds the tile showing `number`, loading its normal and blinking sprite sheets.
    pub fn new<A: AssetProvider + ?Sized>(
        assets: &mut A,
        pos: Cell2,
        center: Point,
        side: Coord,
        number: u8,
        correct: Label,
        timing: Timing,
    ) -> Result<Self> {
        let label = Label::new(number)?;
        let image = assets.load_image(label.asset_name())?;
        let blinking_image = assets.load_image(label.blinking_asset_name())?;
        let side = side.max(0);
        let state = if side == 0 {
            log::warn!("Tile {:?} has no room on the board, never shown", pos);
            TileState::Gone
        } else {
            TileState::Idle
        };

        Ok(Self {
            pos,
            label,
            is_correct: label == correct,
            center,
            original_side: side,
            side,
            rect: Rect::square_around(center, side),
            image,
            blinking_image,
            showing_blinking: false,
            frame: SpriteFrame::First,
            state,
            timing,
            was_pressed: false,
            shrink_elapsed: 0,
            blink_elapsed: 0,
            frame_elapsed: 0,
            won_reported: false,
        })
    }

    pub fn pos(&self) -> Cell2 {
        self.pos
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn side_length(&self) -> Coord {
        self.side
    }

    pub fn original_side_length(&self) -> Coord {
        self.original_side
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn frame(&self) -> SpriteFrame {
        self.frame
    }

    /// Sprite sheet currently drawn, the blinking one once the tile celebrates.
    pub fn current_image(&self) -> ImageHandle {
        if self.showing_blinking {
            self.blinking_image
        } else {
            self.image
        }
    }

    /// Advances animations or handles the pointer, never both in the same frame.
    pub fn update<A: AudioProvider + ?Sized>(
        &mut self,
        input: &FrameInput,
        audio: &mut A,
    ) -> TileOutcome {
        use TileState::*;

        let outcome = match self.state {
            Blinking => self.advance_blink(input.elapsed),
            Shrinking => self.advance_shrink(input.elapsed),
            Gone => TileOutcome::NoChange,
            Idle | Hovered | PressArmed => self.handle_pointer(&input.pointer, audio),
        };
        self.was_pressed = input.pointer.is_pressed();
        outcome
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if self.is_visible() {
            let image = self.current_image();
            renderer.draw_image(image, self.rect, image.frame(self.frame));
        }
    }

    fn handle_pointer<A: AudioProvider + ?Sized>(
        &mut self,
        pointer: &PointerState,
        audio: &mut A,
    ) -> TileOutcome {
        use TileState::*;

        let hovered = self.rect.contains(pointer.position);
        let pressed = pointer.is_pressed();
        let previous = self.state;

        let next = match (previous, hovered, pressed) {
            (PressArmed, true, false) => return self.resolve_click(audio),
            (PressArmed, false, _) => {
                log::debug!("Tile {:?} disarmed, pointer left before release", self.pos);
                Idle
            }
            (_, false, _) => Idle,
            (PressArmed, true, true) => PressArmed,
            (_, true, true) if !self.was_pressed => {
                log::trace!("Tile {:?} armed", self.pos);
                PressArmed
            }
            (_, true, _) => Hovered,
        };

        self.state = next;
        self.frame = match next {
            Idle => SpriteFrame::First,
            _ => SpriteFrame::Second,
        };

        if next == previous {
            TileOutcome::NoChange
        } else {
            TileOutcome::Changed
        }
    }

    fn resolve_click<A: AudioProvider + ?Sized>(&mut self, audio: &mut A) -> TileOutcome {
        if self.is_correct {
            log::debug!("Tile {:?} ({}) guessed correctly", self.pos, self.label);
            self.state = TileState::Blinking;
            self.blink_elapsed = 0;
            self.frame_elapsed = 0;
            self.showing_blinking = true;
            self.frame = SpriteFrame::First;
            audio.play_cue(Cue::CorrectGuess);
            TileOutcome::CorrectGuess
        } else {
            log::debug!("Tile {:?} ({}) guessed incorrectly", self.pos, self.label);
            self.state = TileState::Shrinking;
            self.shrink_elapsed = 0;
            audio.play_cue(Cue::IncorrectGuess);
            TileOutcome::IncorrectGuess
        }
    }

    fn advance_blink(&mut self, elapsed: Millis) -> TileOutcome {
        if self.won_reported {
            return TileOutcome::NoChange;
        }

        self.blink_elapsed = self.blink_elapsed.saturating_add(elapsed);
        if self.blink_elapsed >= self.timing.blink {
            log::debug!("Tile {:?} finished blinking", self.pos);
            self.won_reported = true;
            return TileOutcome::Won;
        }

        let frame_duration = self.timing.blink_frame.max(1);
        self.frame_elapsed = self.frame_elapsed.saturating_add(elapsed);
        let flips = self.frame_elapsed / frame_duration;
        if flips == 0 {
            return TileOutcome::NoChange;
        }
        self.frame_elapsed %= frame_duration;
        if flips % 2 == 1 {
            self.frame = self.frame.toggled();
        }
        log::trace!("Tile {:?} blink frame {:?}", self.pos, self.frame);
        TileOutcome::Changed
    }

    fn advance_shrink(&mut self, elapsed: Millis) -> TileOutcome {
        self.shrink_elapsed = self.shrink_elapsed.saturating_add(elapsed);

        let total = self.timing.shrink;
        let remaining = total.saturating_sub(self.shrink_elapsed);
        // remaining <= total, so the result never exceeds the original side
        let side = if total == 0 {
            0
        } else {
            (i64::from(self.original_side) * i64::from(remaining) / i64::from(total)) as Coord
        };

        if side == self.side {
            return TileOutcome::NoChange;
        }

        self.side = side.max(0);
        self.rect = Rect::square_around(self.center, self.side);
        log::trace!("Tile {:?} shrunk to {}", self.pos, self.side);

        if self.side == 0 {
            log::debug!("Tile {:?} vanished", self.pos);
            self.state = TileState::Gone;
            TileOutcome::Vanished
        } else {
            TileOutcome::Changed
        }
    }
}
