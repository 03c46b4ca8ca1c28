//! Running input sequences through an automaton.

use std::{collections::BTreeSet, mem};

use crate::automaton::{Automaton, StateId, Symbol};

/// An element of an input sequence that can be compared against the symbols of an automaton.
pub trait InputSymbol {
    fn matches(&self, symbol: &Symbol) -> bool;
}

impl InputSymbol for char {
    fn matches(&self, symbol: &Symbol) -> bool {
        symbol.is_char(*self)
    }
}

impl InputSymbol for str {
    fn matches(&self, symbol: &Symbol) -> bool {
        symbol.as_str() == self
    }
}

impl InputSymbol for Symbol {
    fn matches(&self, symbol: &Symbol) -> bool {
        self == symbol
    }
}

impl<T: InputSymbol + ?Sized> InputSymbol for &T {
    fn matches(&self, symbol: &Symbol) -> bool {
        (**self).matches(symbol)
    }
}

impl Automaton {
    /// Walks the automaton from the initial state, taking the first outgoing transition that matches each input symbol.
    /// Rejects as soon as no transition matches.
    /// After the input is consumed, accepts iff the current state is accepting.
    ///
    /// Alternatives are never explored.
    /// On a nondeterministic table the result therefore depends on the order in which transitions were added.
    /// Use [`accepts_any_path`](Self::accepts_any_path) for the nondeterministic semantics.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: InputSymbol,
    {
        let mut current = self.initial();
        for symbol in input {
            match self.states()[current]
                .transitions()
                .iter()
                .find(|t| symbol.matches(t.symbol()))
            {
                Some(t) => current = t.to(),
                None => return false,
            }
        }
        self.is_accepting(current)
    }

    /// Like [`accepts`](Self::accepts), reading every character of `word` as one symbol.
    pub fn accepts_str(&self, word: &str) -> bool {
        self.accepts(word.chars())
    }

    /// Accepts iff some path labeled with the input leads from the initial state to an accepting state.
    pub fn accepts_any_path<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: InputSymbol,
    {
        let mut current: BTreeSet<StateId> = BTreeSet::new();
        let mut next = BTreeSet::new();
        current.insert(self.initial());
        for symbol in input {
            for &state in &current {
                next.extend(
                    self.states()[state]
                        .transitions()
                        .iter()
                        .filter(|t| symbol.matches(t.symbol()))
                        .map(|t| t.to()),
                );
            }
            current.clear();
            mem::swap(&mut current, &mut next);

            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|&s| self.is_accepting(s))
    }
}
