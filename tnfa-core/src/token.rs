use core::fmt;

/// A token represents a single element of a postfix ordered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// Match exactly this character.
    Literal(char),

    /// Zero or more repetitions of the operand: "*"
    Star,
    /// One or more repetitions of the operand: "+"
    Plus,
    /// Zero or one occurrence of the operand: "?"
    Optional,

    /// Explicit concatenation of two operands: "."
    Concat,
    /// Match either of the two operands: "|"
    Alternate,
}

impl Token {
    /// Classify a character of postfix text.
    /// Every operator character maps to its operator, everything else is a literal.
    pub const fn from_char(value: char) -> Self {
        match value {
            '*' => Self::Star,
            '+' => Self::Plus,
            '?' => Self::Optional,
            '.' => Self::Concat,
            '|' => Self::Alternate,
            value => Self::Literal(value),
        }
    }

    /// The character spelling this token in postfix text.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Literal(value) => *value,
            Self::Star => '*',
            Self::Plus => '+',
            Self::Optional => '?',
            Self::Concat => '.',
            Self::Alternate => '|',
        }
    }

    /// Number of fragments the token consumes from the operand stack.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Star | Self::Plus | Self::Optional => 1,
            Self::Concat | Self::Alternate => 2,
        }
    }

    pub const fn is_operator(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::Token;

    #[test]
    fn test_classification() {
        assert_eq!(Token::from_char('a'), Token::Literal('a'));
        assert_eq!(Token::from_char('*'), Token::Star);
        assert_eq!(Token::from_char('+'), Token::Plus);
        assert_eq!(Token::from_char('?'), Token::Optional);
        assert_eq!(Token::from_char('.'), Token::Concat);
        assert_eq!(Token::from_char('|'), Token::Alternate);

        /* group characters have no postfix meaning and stay literals here */
        assert_eq!(Token::from_char('('), Token::Literal('('));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Token::Literal('x').arity(), 0);
        assert_eq!(Token::Star.arity(), 1);
        assert_eq!(Token::Optional.arity(), 1);
        assert_eq!(Token::Concat.arity(), 2);
        assert_eq!(Token::Alternate.arity(), 2);
        assert!(!Token::Literal('x').is_operator());
        assert!(Token::Plus.is_operator());
    }
}
