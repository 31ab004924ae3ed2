mod infix_converter;

use crate::interpreter::error::RollInitializeError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix tokens into postfix (reverse polish) order,
/// which can be evaluated in a single pass without parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same operands and operators, in postfix format.
///
/// # Examples
///
/// ```
/// # use dice_roller::interpreter::error::RollInitializeError;
/// # fn main() -> Result<(), RollInitializeError> {
/// use dice_roller::interpreter::lexer::tokenize;
/// use dice_roller::interpreter::parser::parse;
/// use dice_roller::interpreter::tokens_to_string;
///
/// let infix_tokens = tokenize("2d6 + 3 * 4")?;
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "2d6 3 4 * +");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, RollInitializeError> {
    infix_to_postfix(infix_tokens)
}
