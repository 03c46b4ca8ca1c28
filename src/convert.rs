//! Named conversions between representations.
//!
//! All four conversions are subset construction passes.
//! The minimized variants run a second pass over the result of the first one, no states are merged.

use std::fmt::Display;

use crate::{automaton::Automaton, error::Error, options::Options, subset::subset_construction};

/// Builds the deterministic form of the automaton (one subset construction pass).
pub fn to_deterministic(automaton: &Automaton, options: &Options) -> Result<Automaton, Error> {
    subset_construction(automaton, options)
}

/// Re-expresses the automaton (one subset construction pass).
pub fn to_nondeterministic_form(
    automaton: &Automaton,
    options: &Options,
) -> Result<Automaton, Error> {
    subset_construction(automaton, options)
}

/// [`to_deterministic`] followed by a second pass over its result.
pub fn to_minimized_deterministic(
    automaton: &Automaton,
    options: &Options,
) -> Result<Automaton, Error> {
    let dfa = to_deterministic(automaton, options)?;
    log::debug!("Second pass over {} states", dfa.num_states());
    subset_construction(&dfa, options)
}

/// [`to_nondeterministic_form`] followed by a second pass over its result.
pub fn to_minimized_nondeterministic_form(
    automaton: &Automaton,
    options: &Options,
) -> Result<Automaton, Error> {
    let nfa = to_nondeterministic_form(automaton, options)?;
    log::debug!("Second pass over {} states", nfa.num_states());
    subset_construction(&nfa, options)
}

/// Selects one of the conversions at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    Deterministic,
    Nondeterministic,
    MinimizedDeterministic,
    MinimizedNondeterministic,
}

impl Conversion {
    pub fn apply(&self, automaton: &Automaton, options: &Options) -> Result<Automaton, Error> {
        match self {
            Conversion::Deterministic => to_deterministic(automaton, options),
            Conversion::Nondeterministic => to_nondeterministic_form(automaton, options),
            Conversion::MinimizedDeterministic => to_minimized_deterministic(automaton, options),
            Conversion::MinimizedNondeterministic => {
                to_minimized_nondeterministic_form(automaton, options)
            }
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conversion::Deterministic => write!(f, "dfa"),
            Conversion::Nondeterministic => write!(f, "nfa"),
            Conversion::MinimizedDeterministic => write!(f, "min-dfa"),
            Conversion::MinimizedNondeterministic => write!(f, "min-nfa"),
        }
    }
}
