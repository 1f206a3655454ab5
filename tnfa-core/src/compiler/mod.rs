//! The conversion pipeline: class expansion, postfix conversion and NFA construction.

mod error;
pub use error::{
    ClassDefect,
    ConversionError,
    ErrorKind,
    ExpressionDefect,
};

mod lexer;
use lexer::{
    InfixToken,
    Lexer,
};

mod classes;
pub use classes::expand_character_classes;

mod converter;
pub use converter::{
    infix_to_postfix,
    PostfixConverter,
};

mod builder;
pub use builder::{
    postfix_to_nfa,
    NfaBuilder,
};
