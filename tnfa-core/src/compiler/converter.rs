use alloc::vec::Vec;
use core::ops::Range;

use super::{
    ConversionError,
    ErrorKind,
    InfixToken,
    Lexer,
};
use crate::{
    postfix::OwnedPostfix,
    Token,
};

/// Entry of the operator stack.
/// An open group acts as a sentinel which is never popped by an operator.
enum Pending {
    Group(Range<usize>),
    Operator(Token),
}

fn precedence(operator: &Token) -> u8 {
    match operator {
        Token::Star | Token::Plus | Token::Optional => 3,
        Token::Concat => 2,
        Token::Alternate => 1,
        Token::Literal(_) => unreachable!("literals are operands"),
    }
}

/// Converts an infix pattern into postfix token order using the shunting-yard algorithm.
pub struct PostfixConverter<'a> {
    lexer: Lexer<'a>,

    output: Vec<Token>,
    stack: Vec<Pending>,
}

impl<'a> PostfixConverter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),

            output: Vec::with_capacity(input.len() * 2),
            stack: Vec::with_capacity(16),
        }
    }

    /// Lex the whole input and make every concatenation explicit.
    ///
    /// A concatenation is inserted between two adjacent tokens unless the left one
    /// opens an operand (`(` or `|`) or the right one closes it (`)`, `|` or a quantifier).
    /// Inserted operators get an empty range in front of the token following them.
    fn explicit_tokens(&mut self) -> Vec<(InfixToken, Range<usize>)> {
        let mut tokens = Vec::<(InfixToken, Range<usize>)>::with_capacity(self.output.capacity());
        while let Some(token) = self.lexer.next_token() {
            let range = self.lexer.token_range();
            if let Some((previous, _)) = tokens.last() {
                if !previous.opens_operand() && !token.closes_operand() {
                    tokens.push((
                        InfixToken::Operator(Token::Concat),
                        range.start..range.start,
                    ));
                }
            }

            tokens.push((token, range));
        }

        tokens
    }

    pub fn convert(mut self) -> Result<OwnedPostfix, ConversionError> {
        for (token, range) in self.explicit_tokens() {
            match token {
                InfixToken::Literal(value) => self.output.push(Token::Literal(value)),
                InfixToken::GroupOpen => self.stack.push(Pending::Group(range)),
                InfixToken::GroupClose => self.close_group(range)?,
                InfixToken::Operator(operator) => self.push_operator(operator),
            }
        }

        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(operator) => self.output.push(operator),
                Pending::Group(range) => {
                    return Err(ConversionError::new(range, ErrorKind::UnbalancedParen));
                }
            }
        }

        Ok(OwnedPostfix::new(self.output))
    }

    fn close_group(&mut self, range: Range<usize>) -> Result<(), ConversionError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Operator(operator)) => self.output.push(operator),
                Some(Pending::Group(_)) => return Ok(()),
                None => return Err(ConversionError::new(range, ErrorKind::UnbalancedParen)),
            }
        }
    }

    fn push_operator(&mut self, operator: Token) {
        let current = precedence(&operator);
        while let Some(Pending::Operator(top)) = self.stack.last() {
            if precedence(top) < current {
                break;
            }

            self.output.push(*top);
            self.stack.pop();
        }

        self.stack.push(Pending::Operator(operator));
    }
}

/// Convert the given infix pattern into postfix order.
///
/// The pattern must not contain character classes any more,
/// see [super::expand_character_classes].
pub fn infix_to_postfix(pattern: &str) -> Result<OwnedPostfix, ConversionError> {
    let converter = PostfixConverter::new(pattern);
    converter.convert()
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use super::infix_to_postfix;
    use crate::compiler::{
        ConversionError,
        ErrorKind,
    };

    fn postfix(pattern: &str) -> alloc::string::String {
        infix_to_postfix(pattern).unwrap().to_string()
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(postfix("a"), "a");
        assert_eq!(postfix("ab"), "ab.");
        assert_eq!(postfix("abc"), "ab.c.");
        assert_eq!(postfix("a(b)"), "ab.");
        assert_eq!(postfix("(a)(b)"), "ab.");
    }

    #[test]
    fn test_alternation() {
        assert_eq!(postfix("a|b"), "ab|");
        assert_eq!(postfix("a|b|c"), "ab|c|");
        assert_eq!(postfix("ab|c"), "ab.c|");
        assert_eq!(postfix("a|bc"), "abc.|");
        assert_eq!(postfix("(a|b)c"), "ab|c.");
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(postfix("a*b"), "a*b.");
        assert_eq!(postfix("a+"), "a+");
        assert_eq!(postfix("ab?"), "ab?.");
        assert_eq!(postfix("(ab)*"), "ab.*");
        assert_eq!(postfix("(a|b)*c"), "ab|*c.");
        assert_eq!(postfix("a*|b+"), "a*b+|");

        /* stacked quantifiers apply left to right */
        assert_eq!(postfix("a*?"), "a*?");
    }

    #[test]
    fn test_expanded_class() {
        assert_eq!(postfix("x(a|b|c)y"), "xab|c|.y.");
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(
            infix_to_postfix("(a|b").unwrap_err(),
            ConversionError::new(0..1, ErrorKind::UnbalancedParen)
        );
        assert_eq!(
            infix_to_postfix("a)").unwrap_err(),
            ConversionError::new(1..2, ErrorKind::UnbalancedParen)
        );
        assert_eq!(
            infix_to_postfix("(a))(").unwrap_err(),
            ConversionError::new(3..4, ErrorKind::UnbalancedParen)
        );
        assert_eq!(
            infix_to_postfix("((a)").unwrap_err(),
            ConversionError::new(0..1, ErrorKind::UnbalancedParen)
        );
    }

    #[test]
    fn test_operator_in_operand_position() {
        /* the converter passes these through, evaluation rejects them later */
        assert_eq!(postfix("*a"), "*a.");
        assert_eq!(postfix("a||b"), "a|b|");
        assert_eq!(postfix("()"), "");
    }
}
