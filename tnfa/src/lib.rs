/*!
Convert small infix regular expressions into Thompson NFAs.

# How does the conversion work?
Every pattern runs through three stages:
1. Character classes like `[a-z]` are expanded into alternations `(a|b|...|z)`.
2. Implicit concatenations are made explicit and the pattern is reordered into postfix notation.
3. The postfix tokens are evaluated on a stack of NFA fragments (Thompson's construction).

Patterns known at compile time can be converted by the [postfix!] macro, the remaining
construction then starts directly at stage three.

*/
#![doc = include_str!("../GRAMMAR.MD")]
#![cfg_attr(not(test), no_std)]
pub use tnfa_core::*;
pub use tnfa_proc::postfix;
