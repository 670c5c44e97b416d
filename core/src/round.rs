use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Opening screen, waiting for a start request
    Menu,
    Play,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Menu
    }
}

/// Outcome of a controller update
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Still on the opening screen
    InMenu,
    /// Left the opening screen this frame
    Started,
    Playing,
    /// The previous round was won and a fresh board replaced it
    NewRound,
}

/// Owns the current board and starts a new round each time the correct tile is found.
#[derive(Clone, Debug)]
pub struct RoundController<G = RandomTargetGenerator> {
    config: GameConfig,
    generator: G,
    phase: Phase,
    opening_screen: Option<ImageHandle>,
    board: Board,
    target: Label,
    round: u32,
}

impl<G: TargetGenerator> RoundController<G> {
    pub const OPENING_SCREEN_IMAGE: &'static str = "openingscreen";

    /// Loads the opening screen when starting in [`Phase::Menu`] and starts the first round.
    pub fn new<A: AssetProvider + ?Sized>(
        assets: &mut A,
        config: GameConfig,
        mut generator: G,
        phase: Phase,
    ) -> Result<Self> {
        let opening_screen = match phase {
            Phase::Menu => Some(assets.load_image(Self::OPENING_SCREEN_IMAGE)?),
            Phase::Play => None,
        };
        let target = generator.generate();
        let board = Self::build_board(assets, &config, target)?;
        log::debug!("Round 1 started, phase {:?}", phase);

        Ok(Self {
            config,
            generator,
            phase,
            opening_screen,
            board,
            target,
            round: 1,
        })
    }

    fn build_board<A: AssetProvider + ?Sized>(
        assets: &mut A,
        config: &GameConfig,
        target: Label,
    ) -> Result<Board> {
        Board::new(
            assets,
            config.board_center(),
            config.board_side,
            target,
            config.timing,
        )
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> Label {
        self.target
    }

    /// Rounds started so far, including the current one
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Draws a new target and replaces the board, nothing from the old one is kept.
    pub fn start_round<A: AssetProvider + ?Sized>(&mut self, assets: &mut A) -> Result<&Board> {
        let target = self.generator.generate();
        self.board = Self::build_board(assets, &self.config, target)?;
        self.target = target;
        self.round = self.round.saturating_add(1);
        log::debug!("Round {} started", self.round);
        Ok(&self.board)
    }

    pub fn update<A, S>(
        &mut self,
        input: &FrameInput,
        assets: &mut A,
        audio: &mut S,
    ) -> Result<RoundOutcome>
    where
        A: AssetProvider + ?Sized,
        S: AudioProvider + ?Sized,
    {
        match self.phase {
            Phase::Menu if input.start => {
                log::info!("Leaving opening screen");
                self.phase = Phase::Play;
                Ok(RoundOutcome::Started)
            }
            Phase::Menu => Ok(RoundOutcome::InMenu),
            Phase::Play => {
                if self.board.update(input, audio) {
                    audio.play_cue(Cue::NewRound);
                    self.start_round(assets)?;
                    Ok(RoundOutcome::NewRound)
                } else {
                    Ok(RoundOutcome::Playing)
                }
            }
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match (self.phase, self.opening_screen) {
            (Phase::Menu, Some(image)) => renderer.draw_image(image, image.bounds(), image.bounds()),
            (Phase::Menu, None) => {}
            (Phase::Play, _) => self.board.draw(renderer),
        }
    }
}
