use strum::EnumIs;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContrastError>;

/// Contrast-configuration faults. Levels are rendered to strings at
/// construction time so the error type stays independent of the level type.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum ContrastError {
    /// Contrasts are undefined for fewer than two levels.
    #[error("Contrasts are only defined for 2 or more levels, but {count} level(s) were given.")]
    TooFewLevels { count: usize },

    /// Declared and observed levels must contain exactly the same values.
    #[error(
        "The declared levels {declared:?} and the observed levels {observed:?} must contain exactly the same values."
    )]
    LevelMismatch {
        declared: Vec<String>,
        observed: Vec<String>,
    },

    /// The declared base level must appear among the resolved levels.
    #[error("The declared base level `{base}` does not appear among the levels {levels:?}.")]
    UnknownBaseLevel { base: String, levels: Vec<String> },

    /// A user-supplied matrix with the wrong shape for the level count.
    #[error(
        "A user-supplied contrasts matrix for {levels} levels must be {levels} x {expected_cols}, but a {rows} x {cols} matrix was given."
    )]
    BadShape {
        levels: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// New data contained a level the coding was never built for.
    #[error(
        "The level `{level}` was not present when this coding was built; known levels are {levels:?}."
    )]
    UnknownNewLevel { level: String, levels: Vec<String> },
}
