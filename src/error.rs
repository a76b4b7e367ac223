use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("status must be 1 (alive) or 0 (dead), got {0}")]
    InvalidStatus(i64),
    #[error("cell ({x}, {y}) is not a pair of 32 bit coordinates")]
    MalformedCell { x: i64, y: i64 },
    #[error("slice {start}..{start}+{length} exceeds the {count} cells of the grid")]
    SliceOutOfBounds {
        start: usize,
        length: usize,
        count: usize,
    },
    #[error("pattern spans {width}x{height} but the grid is {max_width}x{max_height}")]
    PatternOutOfBounds {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
