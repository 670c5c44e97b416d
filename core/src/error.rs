use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unsupported number for number tile: {0}")]
    UnsupportedLabel(u8),
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
