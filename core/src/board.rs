use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Square grid of number tiles on top of a background image.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: Array2<Tile>,
    rect: Rect,
    background: ImageHandle,
    tile_side: Coord,
    correct: Label,
}

impl Board {
    pub const COLUMNS: Cell = 3;
    pub const ROWS: Cell = Self::COLUMNS;
    /// Gap between tiles and around the outer ones
    pub const BORDER: Coord = 8;
    pub const BACKGROUND_IMAGE: &'static str = "board";

    /// Builds a board centered on `center`, tiles are numbered 1..=9 in row-major order.
    pub fn new<A: AssetProvider + ?Sized>(
        assets: &mut A,
        center: Point,
        side: Coord,
        correct: Label,
        timing: Timing,
    ) -> Result<Self> {
        let background = assets.load_image(Self::BACKGROUND_IMAGE)?;
        let side = side.max(0);
        let tile_side = Self::tile_side_for(side);
        let rect = Rect::square_around(center, side);

        let mut tiles = Vec::with_capacity(usize::from(Self::ROWS) * usize::from(Self::COLUMNS));
        for row in 0..Self::ROWS {
            for column in 0..Self::COLUMNS {
                let number = row * Self::COLUMNS + column + 1;
                tiles.push(Tile::new(
                    assets,
                    (row, column),
                    Self::tile_center(rect, tile_side, (row, column)),
                    tile_side,
                    number,
                    correct,
                    timing,
                )?);
            }
        }
        let tiles = Array2::from_shape_vec(
            (usize::from(Self::ROWS), usize::from(Self::COLUMNS)),
            tiles,
        )
        .map_err(|_| GameError::InvalidBoardShape)?;

        log::debug!(
            "Board built at {:?}, tile side {}, correct number {}",
            rect,
            tile_side,
            correct
        );
        Ok(Self {
            tiles,
            rect,
            background,
            tile_side,
            correct,
        })
    }

    /// Floor division, never negative.
    pub const fn tile_side_for(side: Coord) -> Coord {
        let columns = Self::COLUMNS as Coord;
        let side = (side - (columns + 1) * Self::BORDER) / columns;
        if side < 0 { 0 } else { side }
    }

    fn tile_center(rect: Rect, tile_side: Coord, (row, column): Cell2) -> Point {
        let row = Coord::from(row);
        let column = Coord::from(column);
        let upper_left_x = rect.x + Self::BORDER * (column + 1) + tile_side * column;
        let upper_left_y = rect.y + Self::BORDER * (row + 1) + tile_side * row;
        Point::new(upper_left_x + tile_side / 2, upper_left_y + tile_side / 2)
    }

    pub fn size(&self) -> Cell2 {
        (Self::ROWS, Self::COLUMNS)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn tile_side_length(&self) -> Coord {
        self.tile_side
    }

    pub fn correct_label(&self) -> Label {
        self.correct
    }

    pub fn background(&self) -> ImageHandle {
        self.background
    }

    pub fn tile_at(&self, pos: Cell2) -> Option<&Tile> {
        self.tiles.get(pos.to_nd_index())
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tile_with_label(&self, label: Label) -> Option<&Tile> {
        self.tiles().find(|tile| tile.label() == label)
    }

    /// Feeds the frame to every tile in row-major order, true once the correct tile
    /// finished celebrating. Tiles after the winner are not updated that frame.
    pub fn update<A: AudioProvider + ?Sized>(&mut self, input: &FrameInput, audio: &mut A) -> bool {
        for tile in self.tiles.iter_mut() {
            if tile.update(input, audio).is_won() {
                log::debug!("Round won on tile {:?}", tile.pos());
                return true;
            }
        }
        false
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_image(self.background, self.rect, self.background.bounds());
        for tile in self.tiles.iter() {
            tile.draw(renderer);
        }
    }
}
