use crate::interpreter::dice::Dice;
use crate::interpreter::error::{InfinityError, RollError, RollInitializeError};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::roller::Roller;
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

/// One step of a postfix evaluation, recorded so the computation can be shown afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEntry {
    Number(f64),
    /// The individual faces of one dice term.
    Rolls(Vec<u32>),
    Operator(BinaryOperator),
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Number(value) => write!(f, "{}", value),
            TraceEntry::Rolls(rolls) if rolls.is_empty() => f.write_str("[ ]"),
            TraceEntry::Rolls(rolls) => write!(f, "[ {} ]", rolls.iter().join(", ")),
            TraceEntry::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

/// The outcome of evaluating a postfix expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub total: f64,
    pub trace: Vec<TraceEntry>,
}

/// Evaluates the given postfix tokens, rolling every dice term as it is reached.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens in postfix order, without parentheses.
/// * `roller`: Where die faces come from.
///
/// returns: The total, and the trace of operands and operators in evaluation order.
pub fn evaluate<R: Roller>(postfix_tokens: &[Token], roller: &mut R) -> Result<Evaluation, RollError> {
    let mut operands: Vec<f64> = Vec::new();
    let mut trace: Vec<TraceEntry> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Dice(notation) => {
                let dice = Dice::roll(notation, roller)?;
                operands.push(dice.total() as f64);
                trace.push(TraceEntry::Rolls(dice.into_die_rolls()));
            }
            Token::Literal(text) => {
                let value: f64 = text
                    .parse()
                    .map_err(|_| RollInitializeError::InvalidLiteral(text.clone()))?;
                operands.push(value);
                trace.push(TraceEntry::Number(value));
            }
            Token::Operator(operator) => {
                let right = operands.pop().ok_or(InfinityError::Unresolved)?;
                let left = operands.pop().ok_or(InfinityError::Unresolved)?;
                operands.push(operator.evaluate(left, right));
                trace.push(TraceEntry::Operator(*operator));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(RollInitializeError::MismatchedParenthesis.into())
            }
        }
    }

    // A well formed expression leaves exactly one operand behind.
    let total = operands.pop().ok_or(InfinityError::Unresolved)?;
    if !operands.is_empty() || total.is_nan() {
        return Err(InfinityError::Unresolved.into());
    }
    if total.is_infinite() {
        return Err(InfinityError::Infinite(total).into());
    }

    Ok(Evaluation { total, trace })
}
