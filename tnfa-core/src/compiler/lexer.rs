use core::{
    ops::Range,
    str::CharIndices,
};

use crate::Token;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum InfixToken {
    /// Any character without a special meaning
    Literal(char),

    /// Group open token: "("
    GroupOpen,
    /// Group close token: ")"
    GroupClose,

    /// One of the operators "*", "+", "?", "." or "|"
    Operator(Token),
}

impl InfixToken {
    /// No implicit concatenation is inserted after this token.
    pub fn opens_operand(&self) -> bool {
        matches!(
            self,
            InfixToken::GroupOpen | InfixToken::Operator(Token::Alternate)
        )
    }

    /// No implicit concatenation is inserted in front of this token.
    pub fn closes_operand(&self) -> bool {
        matches!(
            self,
            InfixToken::GroupClose
                | InfixToken::Operator(Token::Alternate | Token::Star | Token::Plus | Token::Optional)
        )
    }
}

pub struct Lexer<'a> {
    iter: CharIndices<'a>,
    token_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.char_indices(),
            token_start: 0,
        }
    }

    /// Byte range of the token returned by the last call to [Lexer::next_token].
    pub fn token_range(&self) -> Range<usize> {
        self.token_start..self.iter.offset()
    }

    fn char_to_token(value: char) -> InfixToken {
        match value {
            '(' => InfixToken::GroupOpen,
            ')' => InfixToken::GroupClose,

            '*' | '+' | '?' | '.' | '|' => InfixToken::Operator(Token::from_char(value)),

            value => InfixToken::Literal(value),
        }
    }

    pub fn next_token(&mut self) -> Option<InfixToken> {
        let (position, value) = self.iter.next()?;
        self.token_start = position;
        Some(Self::char_to_token(value))
    }
}

#[cfg(test)]
mod test {
    use std::{
        iter,
        vec::Vec,
    };

    use super::{
        InfixToken,
        Lexer,
    };
    use crate::Token;

    fn execute_tests(test_cases: &[(&str, &[InfixToken])]) {
        for (input, expected_output) in test_cases {
            let mut lexer = Lexer::new(input);
            let result = iter::from_fn(|| lexer.next_token()).collect::<Vec<_>>();

            assert_eq!(result.as_slice(), *expected_output);
        }
    }

    #[test]
    fn lexer_literals() {
        self::execute_tests(&[
            ("", &[]),
            ("a", &[InfixToken::Literal('a')]),
            (
                "a b",
                &[
                    InfixToken::Literal('a'),
                    InfixToken::Literal(' '),
                    InfixToken::Literal('b'),
                ],
            ),
            (
                "[-]",
                &[
                    InfixToken::Literal('['),
                    InfixToken::Literal('-'),
                    InfixToken::Literal(']'),
                ],
            ),
        ]);
    }

    #[test]
    fn lexer_operators() {
        self::execute_tests(&[(
            "(a|b)*c+?.",
            &[
                InfixToken::GroupOpen,
                InfixToken::Literal('a'),
                InfixToken::Operator(Token::Alternate),
                InfixToken::Literal('b'),
                InfixToken::GroupClose,
                InfixToken::Operator(Token::Star),
                InfixToken::Literal('c'),
                InfixToken::Operator(Token::Plus),
                InfixToken::Operator(Token::Optional),
                InfixToken::Operator(Token::Concat),
            ],
        )]);
    }

    #[test]
    fn lexer_token_range() {
        let mut lexer = Lexer::new("aé)");
        assert_eq!(lexer.next_token(), Some(InfixToken::Literal('a')));
        assert_eq!(lexer.token_range(), 0..1);
        assert_eq!(lexer.next_token(), Some(InfixToken::Literal('é')));
        assert_eq!(lexer.token_range(), 1..3);
        assert_eq!(lexer.next_token(), Some(InfixToken::GroupClose));
        assert_eq!(lexer.token_range(), 3..4);
        assert_eq!(lexer.next_token(), None);
    }
}
