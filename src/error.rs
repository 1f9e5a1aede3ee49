/// Errors that can occur when building a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is even; the cross needs a single centre hole")]
    EvenSize(usize),

    #[error("board size {size} is too small (minimum {min})")]
    TooSmall { size: usize, min: usize },

    #[error("board size {size} is too large (maximum {max})")]
    TooLarge { size: usize, max: usize },
}
