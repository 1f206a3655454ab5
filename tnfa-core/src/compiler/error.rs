use core::ops::Range;

use thiserror::Error;

/// Reason why a bracketed character class was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassDefect {
    #[error("missing closing ']'")]
    Unterminated,

    #[error("only simple ranges like [a-z] are supported")]
    NotARange,

    #[error("range start is greater than range end")]
    ReversedRange,
}

/// Reason why a postfix token stream could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpressionDefect {
    #[error("expression is empty")]
    Empty,

    #[error("operator '{0}' is missing an operand")]
    MissingOperand(char),

    #[error("{0} sub-expressions are not joined by an operator")]
    DanglingOperands(usize),

    #[error("character '{0}' is not valid in a postfix expression")]
    UnexpectedCharacter(char),
}

/// The kind of failure reported by one of the conversion stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("malformed character class: {0}")]
    MalformedClass(ClassDefect),

    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    #[error("malformed expression: {0}")]
    MalformedExpression(ExpressionDefect),
}

/// A ConversionError is associated with a specific position in the input of the stage which failed.
///
/// For character class and parenthesis errors the position is a byte range within the pattern
/// handed to that stage. For expression errors it is a range of token indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (at {}..{})", .position.start, .position.end)]
pub struct ConversionError {
    position: Range<usize>,
    kind: ErrorKind,
}

impl ConversionError {
    pub fn new(position: Range<usize>, kind: ErrorKind) -> Self {
        Self { position, kind }
    }

    pub(crate) fn class(position: Range<usize>, defect: ClassDefect) -> Self {
        Self::new(position, ErrorKind::MalformedClass(defect))
    }

    pub(crate) fn expression(position: Range<usize>, defect: ExpressionDefect) -> Self {
        Self::new(position, ErrorKind::MalformedExpression(defect))
    }

    pub fn position(&self) -> &Range<usize> {
        &self.position
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use super::{
        ClassDefect,
        ConversionError,
        ErrorKind,
        ExpressionDefect,
    };

    #[test]
    fn test_display() {
        let error = ConversionError::class(0..4, ClassDefect::Unterminated);
        assert_eq!(
            error.to_string(),
            "malformed character class: missing closing ']' (at 0..4)"
        );

        let error = ConversionError::new(3..4, ErrorKind::UnbalancedParen);
        assert_eq!(error.to_string(), "unbalanced parenthesis (at 3..4)");

        let error = ConversionError::expression(1..2, ExpressionDefect::MissingOperand('|'));
        assert_eq!(
            error.to_string(),
            "malformed expression: operator '|' is missing an operand (at 1..2)"
        );
    }
}
