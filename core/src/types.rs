use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Screen-space coordinate or length, in pixels.
pub type Coord = i32;

/// Elapsed time unit delivered by the frame clock, in milliseconds.
pub type Millis = u32;

/// Single grid axis used for rows and columns.
pub type Cell = u8;

/// Grid position `(row, column)`.
pub type Cell2 = (Cell, Cell);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Cell2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: Coord,
    pub height: Coord,
}

impl Size {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn center(self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Integer rectangle, containment is half-open on the right and bottom edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl Rect {
    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of `side` whose upper-left corner is offset by half the side from `center`.
    pub const fn square_around(center: Point, side: Coord) -> Self {
        Self::new(center.x - side / 2, center.y - side / 2, side, side)
    }

    pub const fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Number printed on a tile, only `1..=9` have assets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Label(u8);

impl Label {
    pub const MIN: Label = Label(1);
    pub const MAX: Label = Label(9);

    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GameError::UnsupportedLabel(number))
        }
    }

    pub(crate) const fn new_unchecked(number: u8) -> Self {
        Self(number)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn iter() -> impl Iterator<Item = Label> {
        (Self::MIN.0..=Self::MAX.0).map(Label)
    }

    pub const fn asset_name(self) -> &'static str {
        match self.0 {
            1 => "one",
            2 => "two",
            3 => "three",
            4 => "four",
            5 => "five",
            6 => "six",
            7 => "seven",
            8 => "eight",
            _ => "nine",
        }
    }

    pub const fn blinking_asset_name(self) -> &'static str {
        match self.0 {
            1 => "blinkingone",
            2 => "blinkingtwo",
            3 => "blinkingthree",
            4 => "blinkingfour",
            5 => "blinkingfive",
            6 => "blinkingsix",
            7 => "blinkingseven",
            8 => "blinkingeight",
            _ => "blinkingnine",
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of a two-frame horizontal sprite sheet is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteFrame {
    First,
    Second,
}

impl SpriteFrame {
    pub const fn toggled(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn index(self) -> Coord {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl Default for SpriteFrame {
    fn default() -> Self {
        Self::First
    }
}
