use thiserror::Error;

use crate::car::MAX_RACER_NAME_LENGTH;
use crate::registry::MAX_RACER_SIZE;

pub type Result<T, E = RaceError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RaceError {
    #[error("input must contain non-blank text")]
    BlankInput,

    #[error("input must contain digits only: {0:?}")]
    InvalidNumericInput(String),

    #[error("input length {len} is outside {min}..={max}")]
    InvalidInputLength { len: usize, min: usize, max: usize },

    #[error("car name {0:?} must be non-blank and at most {max} characters", max = MAX_RACER_NAME_LENGTH)]
    InvalidNameLength(String),

    #[error("car name {0:?} must contain only letters and digits")]
    InvalidNameFormat(String),

    #[error("car name {0:?} is registered more than once")]
    DuplicateName(String),

    #[error("at most {max} cars can race, got {0}", max = MAX_RACER_SIZE)]
    TooManyRacers(usize),

    #[error("at least one car must be registered before racing")]
    NoRacers,

    #[error("number of turns must be positive, got {0}")]
    InvalidTurnCount(u32),

    #[error("race has already been started")]
    RaceAlreadyStarted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
