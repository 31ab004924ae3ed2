use crate::interpreter::operator::{Associativity, BinaryOperator};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of a roll expression.
///
/// Literal and dice tokens keep the exact text they were lexed from,
/// e.g. `Token::Dice("3d6")` rather than a parsed pair.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(String),
    Dice(String),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// The raw text that produced this token.
    pub fn value(&self) -> String {
        match self {
            Token::Literal(text) | Token::Dice(text) => text.clone(),
            Token::Operator(operator) => operator.symbol().to_string(),
            Token::LeftParenthesis => "(".to_string(),
            Token::RightParenthesis => ")".to_string(),
        }
    }

    /// Name of the token variant, as shown in token listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Literal(_) => "Literal",
            Token::Dice(_) => "Dice",
            Token::Operator(_) => "Operator",
            Token::LeftParenthesis => "Left Parenthesis",
            Token::RightParenthesis => "Right Parenthesis",
        }
    }

    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Operator(operator) => Some(operator.precedence()),
            _ => None,
        }
    }

    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            Token::Operator(operator) => Some(operator.associativity()),
            _ => None,
        }
    }

    /// A 'value' token is one that can end an operand, i.e. a literal, dice or a closing
    /// parenthesis. An opening parenthesis directly after one implies multiplication.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Token::Literal(_) | Token::Dice(_) | Token::RightParenthesis
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) | Token::Dice(text) => f.write_str(text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => f.write_str("("),
            Token::RightParenthesis => f.write_str(")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_token_keeps_its_full_notation() {
        let token = Token::Dice("3d6".into());

        assert_eq!(token.value(), "3d6");
        assert_eq!(token.precedence(), None);
    }

    #[test]
    fn operator_token_resolves_table_entries() {
        let caret = Token::Operator(BinaryOperator::Exponentiate);
        let star = Token::Operator(BinaryOperator::Multiply);
        let plus = Token::Operator(BinaryOperator::Add);

        assert_eq!(caret.precedence(), Some(4));
        assert_eq!(caret.associativity(), Some(Associativity::Right));
        assert_eq!(star.precedence(), Some(3));
        assert_eq!(star.associativity(), Some(Associativity::Left));
        assert_eq!(plus.precedence(), Some(2));
        assert_eq!(plus.associativity(), Some(Associativity::Left));
    }

    #[test]
    fn closing_parenthesis_is_a_value_but_opening_is_not() {
        assert!(Token::RightParenthesis.is_value());
        assert!(!Token::LeftParenthesis.is_value());
        assert!(!Token::Operator(BinaryOperator::Add).is_value());
    }

    #[test]
    fn debug_shows_kind_and_value() {
        let token = Token::Literal("5.0".into());

        assert_eq!(format!("{:?}", token), "Literal(5.0)");
    }
}
