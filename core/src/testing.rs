//! In-memory collaborators used by the unit tests.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::*;

pub(crate) struct MemoryAssets {
    images: BTreeMap<String, ImageHandle>,
    pub(crate) loads: usize,
}

impl MemoryAssets {
    pub(crate) fn standard() -> Self {
        let mut assets = Self {
            images: BTreeMap::new(),
            loads: 0,
        };
        assets.register("board", 480, 480);
        assets.register("openingscreen", 800, 600);
        for label in Label::iter() {
            assets.register(label.asset_name(), 300, 150);
            assets.register(label.blinking_asset_name(), 300, 150);
        }
        assets
    }

    pub(crate) fn register(&mut self, name: &str, width: Coord, height: Coord) {
        let id = self.images.len() as u32;
        self.images
            .insert(name.to_string(), ImageHandle::new(id, width, height));
    }

    pub(crate) fn without(mut self, name: &str) -> Self {
        self.images.remove(name);
        self
    }

    pub(crate) fn handle(&self, name: &str) -> ImageHandle {
        self.images[name]
    }
}

impl AssetProvider for MemoryAssets {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle> {
        self.loads += 1;
        self.images
            .get(name)
            .copied()
            .ok_or_else(|| GameError::AssetNotFound(name.to_string()))
    }
}

#[derive(Default)]
pub(crate) struct RecordingAudio {
    pub(crate) cues: Vec<Cue>,
}

impl AudioProvider for RecordingAudio {
    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) draws: Vec<(ImageHandle, Rect, Rect)>,
}

impl Renderer for RecordingRenderer {
    fn draw_image(&mut self, image: ImageHandle, destination: Rect, source: Rect) {
        self.draws.push((image, destination, source));
    }
}

pub(crate) fn frame(elapsed: Millis, pointer: PointerState) -> FrameInput {
    FrameInput::new(elapsed, pointer)
}
