//! The transition table data model.
//!
//! An [Automaton] is a set of named states, each owning its outgoing [Transition]s, together with
//! an initial state, a set of accepting states, and an ordered [Alphabet].
//! Automata are only created through an [AutomatonBuilder], which enforces that every referenced state exists
//! and that an initial state is set. Once built, an automaton is never modified.

mod alphabet;
mod builder;
mod error;

use std::{collections::HashMap, fmt::Display, rc::Rc};

use indexmap::IndexSet;
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};

pub use alphabet::{Alphabet, Symbol};
pub use builder::AutomatonBuilder;
pub use error::AutomatonError;

/// The position of a state in the state list of its automaton.
pub type StateId = usize;

/// A transition from one state to another, labeled with a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    from: StateId,
    to: StateId,
    symbol: Symbol,
}

impl Transition {
    pub fn from(&self) -> StateId {
        self.from
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

/// A named state and its outgoing transitions, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    transitions: Vec<Transition>,
}

impl State {
    fn new(name: String) -> Self {
        Self {
            name,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the outgoing transitions labeled with the given symbol, in insertion order.
    pub fn transitions_on<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.iter().filter(move |t| &t.symbol == symbol)
    }
}

#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    /// Maps state names to their position in `states`
    index: HashMap<String, StateId>,
    initial: StateId,
    accepting: IndexSet<StateId>,
    /// Shared with every automaton derived from this one
    alphabet: Rc<Alphabet>,
}

impl Automaton {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.index_of(name).map(|id| &self.states[id])
    }

    /// Returns the position of the state with the given name.
    pub fn index_of(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// Returns the name of the state with the given id.
    ///
    /// # Panics
    /// If `id` is not a state of this automaton.
    pub fn name(&self, id: StateId) -> &str {
        &self.states[id].name
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn initial_state(&self) -> &State {
        &self.states[self.initial]
    }

    /// Iterates over the accepting states in the order they were declared.
    pub fn accepting(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.iter().copied()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accepting.contains(&id)
    }

    /// Returns true if a state with the given name exists and is accepting.
    pub fn is_accepting_name(&self, name: &str) -> bool {
        self.index_of(name)
            .map(|id| self.is_accepting(id))
            .unwrap_or(false)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns a handle to the alphabet that can be shared with derived automata.
    pub fn shared_alphabet(&self) -> Rc<Alphabet> {
        self.alphabet.clone()
    }

    /// Iterates over all transitions of the automaton.
    /// The transitions are owned by their source states, this is a view over the outgoing lists in state order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.states.iter().flat_map(|s| s.transitions.iter())
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_transitions(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Returns true if every state has at most one outgoing transition per symbol.
    pub fn is_deterministic(&self) -> bool {
        self.states
            .iter()
            .all(|s| s.transitions.iter().map(|t| &t.symbol).all_unique())
    }
}

/// Prints one line per state in the form `name:sym>dest,sym>dest`.
/// States without outgoing transitions are printed by name only.
impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in &self.states {
            if state.transitions.is_empty() {
                writeln!(f, "{}", state.name)?;
            } else {
                writeln!(
                    f,
                    "{}:{}",
                    state.name,
                    state
                        .transitions
                        .iter()
                        .map(|t| format!("{}>{}", t.symbol, self.name(t.to)))
                        .join(",")
                )?;
            }
        }
        Ok(())
    }
}

/* Arbitrary */

impl Arbitrary for Automaton {
    /// Generates small automata with states `s0`, `s1`, ... over the alphabet `{a, b, c}`.
    fn arbitrary(g: &mut Gen) -> Self {
        let num_states = usize::arbitrary(g) % 4 + 1;
        let alphabet: Rc<Alphabet> = Rc::new(['a', 'b', 'c'].into_iter().map(Symbol::from).collect());

        let mut states: Vec<State> = (0..num_states)
            .map(|i| State::new(format!("s{}", i)))
            .collect();
        for (from, state) in states.iter_mut().enumerate() {
            for symbol in alphabet.iter() {
                for _ in 0..usize::arbitrary(g) % 3 {
                    state.transitions.push(Transition {
                        from,
                        to: usize::arbitrary(g) % num_states,
                        symbol: symbol.clone(),
                    });
                }
            }
        }
        let accepting = (0..num_states).filter(|_| bool::arbitrary(g)).collect();
        let index = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();

        Automaton {
            states,
            index,
            initial: usize::arbitrary(g) % num_states,
            accepting,
            alphabet,
        }
    }
}
