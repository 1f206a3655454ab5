//! Read-only textual views of an [Nfa].
//!
//! Both views are [fmt::Display] adapters, so they can be written into any formatter
//! without building intermediate strings.

use core::fmt::{
    self,
    Write,
};

use crate::{
    Nfa,
    Symbol,
};

/// Human readable listing of the start state, the accepting state and every transition.
///
/// ```text
/// Start: 0
/// Accept: 1
/// Transitions:
/// 0 --a--> 1
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    nfa: &'a Nfa,
}

impl<'a> Listing<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {}", self.nfa.start())?;
        write!(f, "\nAccept: {}", self.nfa.accept())?;
        write!(f, "\nTransitions:")?;
        for transition in self.nfa.transitions() {
            write!(f, "\n{}", transition)?;
        }

        Ok(())
    }
}

/// Graphviz DOT description of the automaton.
///
/// Transitions between the same pair of states are collapsed into one labeled edge.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    nfa: &'a Nfa,
}

impl<'a> Dot<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }
}

fn write_label_symbol(f: &mut fmt::Formatter<'_>, symbol: &Symbol) -> fmt::Result {
    match symbol {
        Symbol::Char(value @ ('"' | '\\')) => {
            f.write_char('\\')?;
            f.write_char(*value)
        }
        Symbol::Char(value) => f.write_char(*value),
        Symbol::Epsilon => f.write_char(Symbol::EPSILON_GLYPH),
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph NFA {{")?;
        writeln!(f, "  rankdir=LR;")?;
        writeln!(f, "  node [shape=circle, fontname=\"Arial\"];")?;
        writeln!(f, "  dummy [label=\"\", shape=none];")?;
        writeln!(f, "  dummy -> {};", self.nfa.start())?;

        for state in self.nfa.states() {
            let shape = if state == self.nfa.accept() {
                "doublecircle"
            } else {
                "circle"
            };
            writeln!(f, "  {} [shape={}];", state, shape)?;
        }

        for edge in self.nfa.edges() {
            write!(f, "  {} -> {} [label=\"", edge.from, edge.to)?;
            for (index, symbol) in edge.symbols.iter().enumerate() {
                if index > 0 {
                    f.write_char(',')?;
                }
                write_label_symbol(f, symbol)?;
            }
            writeln!(f, "\"];")?;
        }

        writeln!(f, "}}")
    }
}

impl Nfa {
    /// Textual listing of this automaton, see [Listing].
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self)
    }

    /// Graphviz DOT text of this automaton, see [Dot].
    pub fn dot(&self) -> Dot<'_> {
        Dot::new(self)
    }
}
