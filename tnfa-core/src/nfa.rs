use alloc::{
    collections::{
        BTreeMap,
        BTreeSet,
    },
    string::String,
    vec::Vec,
};
use core::fmt::{
    self,
    Write,
};

/// Identifier of an NFA state.
///
/// Identifiers are only meaningful within the [Nfa] they have been created for.
pub type StateId = u32;

/// The label of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Consume exactly this character.
    Char(char),

    /// Move without consuming any input.
    Epsilon,
}

impl Symbol {
    pub const EPSILON_GLYPH: char = 'ε';

    pub const fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(value) => f.write_char(*value),
            Self::Epsilon => f.write_char(Self::EPSILON_GLYPH),
        }
    }
}

/// Outgoing transitions of a single state, keyed by their symbol.
pub type SymbolTransitions = BTreeMap<Symbol, BTreeSet<StateId>>;

/// All transitions of an NFA, keyed by their source state.
pub type TransitionMap = BTreeMap<StateId, SymbolTransitions>;

/// A single `from --symbol--> to` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.symbol, self.to)
    }
}

/// All symbols leading from one state to another, collapsed into a single edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: StateId,
    pub to: StateId,
    pub symbols: Vec<Symbol>,
}

impl Edge {
    /// Comma joined symbols of this edge, epsilon rendered as `ε`.
    pub fn label(&self) -> String {
        let mut label = String::new();
        for (index, symbol) in self.symbols.iter().enumerate() {
            if index > 0 {
                label.push(',');
            }

            /* writing into a String can not fail */
            let _ = write!(&mut label, "{}", symbol);
        }

        label
    }
}

/// A Thompson NFA (or a fragment of one while it is being built).
///
/// Every Thompson fragment has exactly one start and exactly one accepting state.
/// The transitions are kept in ordered maps so every enumeration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    start: StateId,
    accept: StateId,
    transitions: TransitionMap,
}

impl Nfa {
    pub(crate) fn new(start: StateId, accept: StateId, transitions: TransitionMap) -> Self {
        Self {
            start,
            accept,
            transitions,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn transition_map(&self) -> &TransitionMap {
        &self.transitions
    }

    pub(crate) fn into_transition_map(self) -> TransitionMap {
        self.transitions
    }

    /// Outgoing transitions of the given state, if it has any.
    pub fn transitions_from(&self, state: StateId) -> Option<&SymbolTransitions> {
        self.transitions.get(&state)
    }

    pub(crate) fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.transitions
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(to);
    }

    pub(crate) fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.add_transition(from, Symbol::Epsilon, to);
    }

    /// Union the given transitions into this automaton.
    ///
    /// Existing target sets are extended, never replaced.
    pub(crate) fn merge(&mut self, transitions: TransitionMap) {
        for (state, symbols) in transitions {
            let own_symbols = self.transitions.entry(state).or_default();
            for (symbol, targets) in symbols {
                own_symbols.entry(symbol).or_default().extend(targets);
            }
        }
    }

    /// All states: transition sources and targets plus the start and accepting state.
    pub fn states(&self) -> BTreeSet<StateId> {
        let mut states = BTreeSet::new();
        states.insert(self.start);
        states.insert(self.accept);

        for (state, symbols) in self.transitions.iter() {
            states.insert(*state);
            for targets in symbols.values() {
                states.extend(targets.iter().copied());
            }
        }

        states
    }

    pub fn state_count(&self) -> usize {
        self.states().len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|symbols| symbols.values())
            .map(|targets| targets.len())
            .sum()
    }

    /// Every transition, sorted by source state, then symbol, then target state.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions.iter().flat_map(|(from, symbols)| {
            symbols.iter().flat_map(move |(symbol, targets)| {
                targets.iter().map(move |to| Transition {
                    from: *from,
                    symbol: *symbol,
                    to: *to,
                })
            })
        })
    }

    /// Transitions grouped by their (from, to) state pair, sorted by source and then target.
    pub fn edges(&self) -> Vec<Edge> {
        let mut grouped = BTreeMap::<(StateId, StateId), Vec<Symbol>>::new();
        for transition in self.transitions() {
            grouped
                .entry((transition.from, transition.to))
                .or_default()
                .push(transition.symbol);
        }

        grouped
            .into_iter()
            .map(|((from, to), symbols)| Edge { from, to, symbols })
            .collect()
    }
}
