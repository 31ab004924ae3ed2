use crate::interpreter::error::RollInitializeError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

type ConvertResult<T> = Result<T, RollInitializeError>;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
/// Parentheses are consumed and never appear in the output.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> ConvertResult<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Literal(_) | Token::Dice(_) => output.push(token),
            Token::LeftParenthesis => operators.push_front(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::RightParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> ConvertResult<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(RollInitializeError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> ConvertResult<()> {
    loop {
        match operators.pop_front() {
            None => return Err(RollInitializeError::MismatchedParenthesis),
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(Token::Operator(top_of_operator_stack)) = operators.front() {
        if !top_of_operator_stack.takes_priority_over(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(Token::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    fn dice(text: &str) -> Token {
        Token::Dice(text.to_string())
    }

    fn operator(symbol: char) -> Token {
        Token::Operator(BinaryOperator::from_symbol(symbol).unwrap())
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + d4
        let infix = vec![literal("1"), operator('+'), dice("d4")];
        let postfix = vec![literal("1"), dice("d4"), operator('+')];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_respects_precedence() {
        // 1 + 2 * 3
        let infix = vec![
            literal("1"),
            operator('+'),
            literal("2"),
            operator('*'),
            literal("3"),
        ];
        let postfix = vec![
            literal("1"),
            literal("2"),
            literal("3"),
            operator('*'),
            operator('+'),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 2d6 - (3 + d8)
        let infix = vec![
            dice("2d6"),
            operator('-'),
            Token::LeftParenthesis,
            literal("3"),
            operator('+'),
            dice("d8"),
            Token::RightParenthesis,
        ];
        let postfix = vec![
            dice("2d6"),
            literal("3"),
            dice("d8"),
            operator('+'),
            operator('-'),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5)^6^7
        let infix = vec![
            literal("1"),
            operator('+'),
            literal("2"),
            operator('*'),
            literal("3"),
            operator('/'),
            Token::LeftParenthesis,
            literal("4"),
            operator('-'),
            literal("5"),
            Token::RightParenthesis,
            operator('^'),
            literal("6"),
            operator('^'),
            literal("7"),
        ];
        let postfix = vec![
            literal("1"),
            literal("2"),
            literal("3"),
            operator('*'),
            literal("4"),
            literal("5"),
            operator('-'),
            literal("6"),
            literal("7"),
            operator('^'),
            operator('^'),
            operator('/'),
            operator('+'),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = vec![
            literal("1"),
            operator('+'),
            literal("2"),
            operator('*'),
            literal("3"),
            operator('-'),
            literal("4"),
        ];
        let postfix = vec![
            literal("1"),
            literal("2"),
            literal("3"),
            operator('*'),
            operator('+'),
            literal("4"),
            operator('-'),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            literal("1"),
            operator('+'),
            Token::LeftParenthesis,
            Token::LeftParenthesis,
            literal("2"),
            operator('+'),
            literal("3"),
            Token::RightParenthesis,
            operator('*'),
            literal("4"),
            Token::RightParenthesis,
        ];
        let postfix = vec![
            literal("1"),
            literal("2"),
            literal("3"),
            operator('+'),
            literal("4"),
            operator('*'),
            operator('+'),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParenthesis,
            literal("1"),
            operator('+'),
            literal("2"),
            Token::RightParenthesis,
            Token::RightParenthesis,
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, RollInitializeError::MismatchedParenthesis);
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![
            Token::LeftParenthesis,
            literal("1"),
            operator('+'),
            literal("2"),
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, RollInitializeError::MismatchedParenthesis);
    }
}
