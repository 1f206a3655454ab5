use alloc::vec::Vec;
use core::{
    fmt::{
        self,
        Debug,
    },
    str::FromStr,
};

use crate::{
    compiler::{
        ConversionError,
        ExpressionDefect,
    },
    Token,
};

/// A postfix pattern is the operator-after-operands form of an infix regular expression.
///
/// Evaluating its [Token]s from left to right on an operand stack yields the NFA
/// without any further precedence decisions.
pub trait PostfixPattern: Send + Sync + Debug {
    /// Retrieves the tokens of this pattern in postfix order.
    fn tokens(&self) -> &[Token];

    /// Returns an upper bound for the number of states the resulting NFA will have.
    ///
    /// # Note
    /// Concatenation does not allocate states, therefore the actual count might be smaller.
    fn state_bound(&self) -> usize {
        self.tokens()
            .iter()
            .filter(|token| !matches!(token, Token::Concat))
            .count()
            * 2
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    for token in tokens {
        write!(f, "{}", token)?;
    }

    Ok(())
}

/// An implementation of the [PostfixPattern] interface that borrows the [Token]s.
///
/// This struct is primarily used alongside the [postfix!] macro to convert patterns at compile time.
#[derive(Debug, Clone, Copy)]
pub struct BorrowedPostfix<'a> {
    tokens: &'a [Token],
}

impl<'a> BorrowedPostfix<'a> {
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }
}

impl PostfixPattern for BorrowedPostfix<'_> {
    fn tokens(&self) -> &[Token] {
        self.tokens
    }
}

impl fmt::Display for BorrowedPostfix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, self.tokens)
    }
}

/// An implementation of the [PostfixPattern] interface that allocates a `Vec` for the [Token]s.
///
/// This struct is primarily used with [crate::compiler::infix_to_postfix] to convert patterns at runtime.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OwnedPostfix {
    tokens: Vec<Token>,
}

impl OwnedPostfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl PostfixPattern for OwnedPostfix {
    fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for OwnedPostfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.tokens)
    }
}

impl FromStr for OwnedPostfix {
    type Err = ConversionError;

    /// Read raw postfix text where every character is one token.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut tokens = Vec::with_capacity(value.len());
        for (index, character) in value.chars().enumerate() {
            if matches!(character, '(' | ')' | '[' | ']') {
                return Err(ConversionError::expression(
                    index..index + 1,
                    ExpressionDefect::UnexpectedCharacter(character),
                ));
            }

            tokens.push(Token::from_char(character));
        }

        Ok(Self::new(tokens))
    }
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use super::{
        BorrowedPostfix,
        OwnedPostfix,
        PostfixPattern,
    };
    use crate::{
        compiler::{
            ConversionError,
            ExpressionDefect,
        },
        Token,
    };

    #[test]
    fn test_from_str() {
        {
            let postfix = "ab.c|*".parse::<OwnedPostfix>().unwrap();
            assert_eq!(
                postfix.tokens(),
                &[
                    Token::Literal('a'),
                    Token::Literal('b'),
                    Token::Concat,
                    Token::Literal('c'),
                    Token::Alternate,
                    Token::Star,
                ]
            );
            assert_eq!(postfix.to_string(), "ab.c|*");
        }

        {
            /* group characters never appear in postfix text */
            let result = "ab(".parse::<OwnedPostfix>().unwrap_err();
            assert_eq!(
                result,
                ConversionError::expression(2..3, ExpressionDefect::UnexpectedCharacter('('))
            );
        }
    }

    #[test]
    fn test_state_bound() {
        static TOKENS: &[Token] = &[
            Token::Literal('a'),
            Token::Literal('b'),
            Token::Concat,
            Token::Plus,
        ];

        let postfix = BorrowedPostfix::new(TOKENS);
        assert_eq!(postfix.state_bound(), 6);
        assert_eq!(postfix.to_string(), "ab.+");
    }
}
