/// Number of guesses, used for both the configured maximum and the remaining count.
pub type Tries = u8;

/// Tiles per row (and rows per grid).
pub const GRID_SIDE: usize = 3;
