use crate::interpreter::error::RollInitializeError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;

/// Splits a roll expression into tokens.
///
/// Whitespace is ignored. Digits, `d`/`D` and `.` are gathered into a single
/// literal or dice token; every other accepted character is a token of its own.
/// An opening parenthesis directly after a value implies multiplication, so
/// `2(1+1)` lexes the same as `2*(1+1)`.
///
/// # Arguments
///
/// * `expression`: The roll expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use dice_roller::interpreter::lexer::tokenize;
/// use dice_roller::interpreter::token::Token;
/// # use dice_roller::interpreter::error::RollInitializeError;
///
/// # fn main() -> Result<(), RollInitializeError> {
/// let tokens = tokenize("2d4 + 5")?;
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::Dice("2d4".to_string()));
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, RollInitializeError> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for (position, character) in expression.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if is_operand_character(character) {
            buffer.push(character);
            continue;
        }

        flush_buffer(&mut buffer, &mut tokens)?;

        if let Some(operator) = BinaryOperator::from_symbol(character) {
            tokens.push(Token::Operator(operator));
        } else if character == '(' {
            if tokens.last().map_or(false, Token::is_value) {
                tokens.push(Token::Operator(BinaryOperator::Multiply));
            }
            tokens.push(Token::LeftParenthesis);
        } else if character == ')' {
            tokens.push(Token::RightParenthesis);
        } else {
            return Err(RollInitializeError::UnexpectedCharacter {
                character,
                position,
            });
        }
    }

    flush_buffer(&mut buffer, &mut tokens)?;

    Ok(tokens)
}

fn is_operand_character(character: char) -> bool {
    character.is_ascii_digit() || is_dice_separator(character) || character == '.'
}

fn is_dice_separator(character: char) -> bool {
    character == 'd' || character == 'D'
}

/// Classifies the gathered characters as a literal or dice token and empties the buffer.
fn flush_buffer(buffer: &mut String, tokens: &mut Vec<Token>) -> Result<(), RollInitializeError> {
    if buffer.is_empty() {
        return Ok(());
    }

    let text = std::mem::take(buffer);
    let token = if text.contains(is_dice_separator) {
        if text.ends_with(is_dice_separator) || text.ends_with('.') {
            return Err(RollInitializeError::IncompleteDice(text));
        }
        Token::Dice(text)
    } else {
        if text.ends_with('.') {
            return Err(RollInitializeError::IncompleteDecimal(text));
        }
        if text.parse::<f64>().is_err() {
            return Err(RollInitializeError::InvalidLiteral(text));
        }
        Token::Literal(text)
    };
    tokens.push(token);

    Ok(())
}
