use std::num::ParseIntError;
use thiserror::Error;

/// Any failure while turning an expression into a roll.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error(transparent)]
    DiceInitialize(#[from] DiceInitializeError),
    #[error(transparent)]
    RollInitialize(#[from] RollInitializeError),
    #[error(transparent)]
    Infinity(#[from] InfinityError),
}

/// A single dice term could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceInitializeError {
    #[error("invalid dice syntax {0:?}: expected a 'd' between count and faces")]
    NoDelimiter(String),
    #[error("invalid number of rolls in {notation:?}: {source}")]
    InvalidNumber {
        notation: String,
        source: ParseIntError,
    },
    #[error("invalid amount of faces in {notation:?}: {source}")]
    InvalidAmount {
        notation: String,
        source: ParseIntError,
    },
    #[error("dice {0:?} must have at least one face")]
    NoFaces(String),
    #[error("too many dice in {notation:?}: at most {max} can be rolled at once")]
    TooManyDice { notation: String, max: u32 },
}

/// The roll expression as a whole is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollInitializeError {
    /// `position` is the character index in the expression as given, whitespace included.
    #[error("invalid syntax in roll expression: unexpected {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("invalid dice syntax in roll expression: {0:?} is incomplete")]
    IncompleteDice(String),
    #[error("invalid number syntax in roll expression: {0:?} is incomplete")]
    IncompleteDecimal(String),
    #[error("invalid number syntax in roll expression: {0:?}")]
    InvalidLiteral(String),
    #[error("mismatched parenthesis in roll expression")]
    MismatchedParenthesis,
}

/// The expression evaluated to something that is not a finite number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InfinityError {
    #[error("unable to evaluate expression, value is {0}")]
    Infinite(f64),
    #[error("unable to evaluate expression, no value could be resolved")]
    Unresolved,
}
