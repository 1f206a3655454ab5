use alloc::{
    collections::BTreeMap,
    vec::Vec,
};

use super::{
    ConversionError,
    ExpressionDefect,
};
use crate::{
    Nfa,
    PostfixPattern,
    StateId,
    Symbol,
    Token,
    TransitionMap,
};

/// Evaluates postfix tokens on an operand stack of NFA fragments (Thompson's construction).
///
/// The builder owns the state counter. Every state minted by one builder is unique,
/// which keeps the state sets of all fragments disjoint. Use a new builder for every
/// conversion, the identifiers of one build are meaningless in another.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    next_state: StateId,
    operands: Vec<Nfa>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self {
            next_state: 0,
            operands: Vec::with_capacity(16),
        }
    }

    fn new_state(&mut self) -> StateId {
        let state = self.next_state;
        self.next_state += 1;
        state
    }

    /// Allocate a fresh start/accept pair for a fragment wrapping the given transitions.
    fn new_fragment(&mut self, transitions: TransitionMap) -> Nfa {
        let start = self.new_state();
        let accept = self.new_state();
        Nfa::new(start, accept, transitions)
    }

    fn pop_operand(&mut self, index: usize, operator: &Token) -> Result<Nfa, ConversionError> {
        self.operands.pop().ok_or_else(|| {
            ConversionError::expression(
                index..index + 1,
                ExpressionDefect::MissingOperand(operator.symbol()),
            )
        })
    }

    pub fn build(mut self, pattern: &dyn PostfixPattern) -> Result<Nfa, ConversionError> {
        let tokens = pattern.tokens();
        self.operands.reserve(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            let fragment = match token {
                Token::Literal(value) => self.build_literal(*value),

                Token::Star => {
                    let operand = self.pop_operand(index, token)?;
                    self.build_star(operand)
                }
                Token::Plus => {
                    let operand = self.pop_operand(index, token)?;
                    self.build_plus(operand)
                }
                Token::Optional => {
                    let operand = self.pop_operand(index, token)?;
                    self.build_optional(operand)
                }

                Token::Concat => {
                    /* the top of the stack is the right hand side */
                    let right = self.pop_operand(index, token)?;
                    let left = self.pop_operand(index, token)?;
                    Self::build_concat(left, right)
                }
                Token::Alternate => {
                    let right = self.pop_operand(index, token)?;
                    let left = self.pop_operand(index, token)?;
                    self.build_alternate(left, right)
                }
            };

            crate::trace!(
                "{} -> fragment {}..{} ({} operands)",
                token,
                fragment.start(),
                fragment.accept(),
                self.operands.len() + 1
            );
            self.operands.push(fragment);
        }

        let Some(nfa) = self.operands.pop() else {
            return Err(ConversionError::expression(
                0..tokens.len(),
                ExpressionDefect::Empty,
            ));
        };

        if !self.operands.is_empty() {
            return Err(ConversionError::expression(
                0..tokens.len(),
                ExpressionDefect::DanglingOperands(self.operands.len() + 1),
            ));
        }

        crate::debug!(
            "built nfa with {} states and {} transitions",
            self.next_state,
            nfa.transition_count()
        );
        Ok(nfa)
    }

    /// `s0 --c--> s1`
    fn build_literal(&mut self, value: char) -> Nfa {
        let mut fragment = self.new_fragment(BTreeMap::new());
        fragment.add_transition(fragment.start(), Symbol::Char(value), fragment.accept());
        fragment
    }

    /// Zero or more: enter, loop back from the operand accept and skip the operand entirely.
    fn build_star(&mut self, operand: Nfa) -> Nfa {
        let (inner_start, inner_accept) = (operand.start(), operand.accept());
        let mut fragment = self.new_fragment(operand.into_transition_map());
        fragment.add_epsilon(fragment.start(), inner_start);
        fragment.add_epsilon(inner_accept, inner_start);
        fragment.add_epsilon(fragment.start(), fragment.accept());
        fragment.add_epsilon(inner_accept, fragment.accept());
        fragment
    }

    /// One or more: like star but without the skip edge.
    fn build_plus(&mut self, operand: Nfa) -> Nfa {
        let (inner_start, inner_accept) = (operand.start(), operand.accept());
        let mut fragment = self.new_fragment(operand.into_transition_map());
        fragment.add_epsilon(fragment.start(), inner_start);
        fragment.add_epsilon(inner_accept, inner_start);
        fragment.add_epsilon(inner_accept, fragment.accept());
        fragment
    }

    /// Zero or one: like star but without the loop back.
    fn build_optional(&mut self, operand: Nfa) -> Nfa {
        let (inner_start, inner_accept) = (operand.start(), operand.accept());
        let mut fragment = self.new_fragment(operand.into_transition_map());
        fragment.add_epsilon(fragment.start(), inner_start);
        fragment.add_epsilon(inner_accept, fragment.accept());
        fragment.add_epsilon(fragment.start(), fragment.accept());
        fragment
    }

    /// Concatenation does not allocate states, the left accept is linked to the right start.
    fn build_concat(left: Nfa, right: Nfa) -> Nfa {
        let (left_accept, right_start, right_accept) =
            (left.accept(), right.start(), right.accept());

        let mut fragment = Nfa::new(left.start(), right_accept, left.into_transition_map());
        fragment.merge(right.into_transition_map());
        fragment.add_epsilon(left_accept, right_start);
        fragment
    }

    fn build_alternate(&mut self, left: Nfa, right: Nfa) -> Nfa {
        let (left_start, left_accept) = (left.start(), left.accept());
        let (right_start, right_accept) = (right.start(), right.accept());

        let mut fragment = self.new_fragment(left.into_transition_map());
        fragment.merge(right.into_transition_map());
        fragment.add_epsilon(fragment.start(), left_start);
        fragment.add_epsilon(fragment.start(), right_start);
        fragment.add_epsilon(left_accept, fragment.accept());
        fragment.add_epsilon(right_accept, fragment.accept());
        fragment
    }
}

/// Evaluate the given postfix pattern with a fresh [NfaBuilder].
pub fn postfix_to_nfa(pattern: &dyn PostfixPattern) -> Result<Nfa, ConversionError> {
    NfaBuilder::new().build(pattern)
}
