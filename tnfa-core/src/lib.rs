#![cfg_attr(not(test), no_std)]
extern crate alloc;

#[cfg(feature = "logging")]
macro_rules! trace {
    ($($tt:tt)*) => { log::trace!($($tt)*) };
}
#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
pub(crate) use trace;

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($tt:tt)*) => { log::debug!($($tt)*) };
}
#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
pub(crate) use debug;

pub mod compiler;
pub use compiler::{
    ConversionError,
    ErrorKind,
};

mod token;
pub use token::Token;

mod postfix;
pub use postfix::{
    BorrowedPostfix,
    OwnedPostfix,
    PostfixPattern,
};

mod nfa;
pub use nfa::{
    Edge,
    Nfa,
    StateId,
    Symbol,
    SymbolTransitions,
    Transition,
    TransitionMap,
};

pub mod render;

/// Convert an infix regular expression into a Thompson NFA.
///
/// The pattern runs through character class expansion, postfix conversion and finally
/// the NFA construction. Every call uses its own state counter, so the same pattern
/// always results in the same automaton.
pub fn regex_to_nfa(pattern: &str) -> Result<Nfa, ConversionError> {
    let expanded = compiler::expand_character_classes(pattern)?;
    debug!("expanded {:?} into {:?}", pattern, expanded);

    let postfix = compiler::infix_to_postfix(&expanded)?;
    debug!("postfix form of {:?} is {:?}", expanded, postfix.tokens());

    compiler::postfix_to_nfa(&postfix)
}
