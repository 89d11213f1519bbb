use thiserror::Error;

/// Reasons a program could not be placed in memory.
///
/// Whenever one of these is returned the Chip-8's memory and registers are exactly as they were
/// before the attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),

    /// `size` counts what was read before giving up, which is never more than `max + 1`.
    #[error("program of at least {size} bytes does not fit; at most {max} bytes fit in memory")]
    TooLarge { size: usize, max: usize },

    #[error("{len} bytes at {base:#05X} would fall outside the program region")]
    OutOfRange { base: u16, len: usize },
}
