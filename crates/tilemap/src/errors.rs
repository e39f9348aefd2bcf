#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TilemapError {
    #[error("Unknown tile character {ch:?} at column {column} of line {line}")]
    UnknownTile { ch: char, line: usize, column: usize },

    #[error("Level is too large: tile coordinates must fit in a u16")]
    TooLarge,
}
