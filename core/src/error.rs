use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown card")]
    UnknownCard,
    #[error("Layout must contain every card exactly once")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
