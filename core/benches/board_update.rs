//! Frame update cost of a full board.
//!
//! Run with:
//!   cargo bench -p guessnum-core

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use guessnum_core::*;

struct Assets(HashMap<&'static str, ImageHandle>);

impl Assets {
    fn new() -> Self {
        let mut names = vec!["board", "openingscreen"];
        for label in Label::iter() {
            names.push(label.asset_name());
            names.push(label.blinking_asset_name());
        }
        Self(
            names
                .into_iter()
                .enumerate()
                .map(|(id, name)| (name, ImageHandle::new(id as u32, 300, 150)))
                .collect(),
        )
    }
}

impl AssetProvider for Assets {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| GameError::AssetNotFound(name.to_string()))
    }
}

struct Silent;

impl AudioProvider for Silent {
    fn play_cue(&mut self, _cue: Cue) {}
}

fn bench_board_update(c: &mut Criterion) {
    let mut assets = Assets::new();
    let config = GameConfig::default();
    let target = Label::new(5).unwrap();
    let board = Board::new(
        &mut assets,
        config.board_center(),
        config.board_side,
        target,
        config.timing,
    )
    .unwrap();
    let sweep: Vec<FrameInput> = (0..64)
        .map(|step| {
            let x = 160 + step * 7;
            let pointer = if step % 4 == 0 {
                PointerState::pressed_at(x, 300)
            } else {
                PointerState::released_at(x, 300)
            };
            FrameInput::new(16, pointer)
        })
        .collect();

    c.bench_function("board_update_sweep", |b| {
        b.iter(|| {
            let mut board = board.clone();
            let mut won = false;
            for input in &sweep {
                won |= board.update(black_box(input), &mut Silent);
            }
            black_box(won)
        })
    });
}

fn bench_round_cycle(c: &mut Criterion) {
    c.bench_function("round_start", |b| {
        let mut assets = Assets::new();
        let mut controller = RoundController::new(
            &mut assets,
            GameConfig::default(),
            RandomTargetGenerator::new(0x5EED),
            Phase::Play,
        )
        .unwrap();
        b.iter(|| black_box(controller.start_round(&mut assets).unwrap().correct_label()))
    });
}

criterion_group!(benches, bench_board_update, bench_round_cycle);
criterion_main!(benches);
