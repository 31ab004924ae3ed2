pub mod dice;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod roller;
pub mod token;

use crate::interpreter::display::build_roll_string;
use crate::interpreter::error::RollError;
use crate::interpreter::evaluator::{evaluate, TraceEntry};
use crate::interpreter::roller::Roller;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// A fully evaluated roll expression, such as `2d4 + 3d5*5 + 5.0 + d4`.
///
/// All the work happens when the roll is created: the expression is tokenized,
/// reordered into postfix, evaluated (rolling every dice term once) and rendered.
/// Afterwards every accessor returns the same values no matter how often it is called.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceRoller {
    expression: String,
    tokens: Vec<Token>,
    postfix: Vec<Token>,
    total: f64,
    trace: Vec<TraceEntry>,
    roll_string: String,
}

impl DiceRoller {
    /// Evaluates the given expression using the thread-local random generator.
    ///
    /// # Arguments
    ///
    /// * `expression`: A roll expression in infix format.
    ///
    /// returns: The evaluated roll.
    ///
    /// # Examples
    ///
    /// ```
    /// use dice_roller::interpreter::DiceRoller;
    /// # use dice_roller::interpreter::error::RollError;
    ///
    /// # fn main() -> Result<(), RollError> {
    /// let roll = DiceRoller::new("d4 + 1")?;
    /// assert!((2.0..=5.0).contains(&roll.total()));
    /// # Ok(()) }
    /// ```
    pub fn new(expression: &str) -> Result<DiceRoller, RollError> {
        Self::with_roller(expression, &mut rand::thread_rng())
    }

    /// Evaluates the given expression, taking every die face from `roller`.
    ///
    /// # Arguments
    ///
    /// * `expression`: A roll expression in infix format.
    /// * `roller`: Where die faces come from, e.g. a seeded `StdRng`.
    ///
    /// returns: The evaluated roll.
    pub fn with_roller<R: Roller>(expression: &str, roller: &mut R) -> Result<DiceRoller, RollError> {
        let tokens = lexer::tokenize(expression)?;
        debug!("tokens: {:?}", tokens);
        let postfix = parser::parse(tokens.clone())?;
        debug!("postfix: {}", tokens_to_string(&postfix));
        let evaluation = evaluate(&postfix, roller)?;
        debug!("total: {}", evaluation.total);
        let roll_string = build_roll_string(&evaluation.trace)?;

        Ok(DiceRoller {
            expression: expression.to_string(),
            tokens,
            postfix,
            total: evaluation.total,
            trace: evaluation.trace,
            roll_string,
        })
    }

    /// The expression exactly as it was given.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The tokens of the expression, in infix order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The tokens of the expression, in postfix order.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Every operand and operator in the order they were evaluated.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// The expression with each dice term replaced by its faces.
    pub fn roll_string(&self) -> &str {
        &self.roll_string
    }
}

impl fmt::Display for DiceRoller {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.roll_string, self.total)
    }
}

/// Rolls the given expression with the thread-local random generator.
///
/// # Examples
///
/// ```
/// use dice_roller::interpreter::roll;
/// # use dice_roller::interpreter::error::RollError;
///
/// # fn main() -> Result<(), RollError> {
/// let roll = roll("2 * (3 + 4)")?;
/// assert_eq!(roll.total(), 14.0);
/// assert_eq!(roll.to_string(), "2 * ( 3 + 4 ) = 14");
/// # Ok(()) }
/// ```
pub fn roll(expression: &str) -> Result<DiceRoller, RollError> {
    DiceRoller::new(expression)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use dice_roller::interpreter::tokens_to_string;
/// use dice_roller::interpreter::token::Token;
/// use dice_roller::interpreter::operator::BinaryOperator;
///
/// let tokens = vec![
///     Token::Dice("2d6".to_string()),
///     Token::Literal("2".to_string()),
///     Token::Operator(BinaryOperator::Exponentiate),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2d6 2 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
