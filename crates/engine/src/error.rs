use thiserror::Error;

pub type Result<T> = std::result::Result<T, GapError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GapError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("tile map contains no rows")]
    EmptyMap,

    #[error("ragged tile map: row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile { row: usize, column: usize, tile: char },
}

impl GapError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        GapError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
