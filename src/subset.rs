//! Breadth-first subset construction over composite states.
//!
//! Starting from the initial state of the source automaton, the construction computes for every
//! discovered composite state and every symbol the composite successor, until no new composites are found.
//! How composites are identified depends on the [CompositeNaming] in the [Options].

use std::{
    collections::{BTreeSet, VecDeque},
    hash::Hash,
    time::Instant,
};

use indexmap::{map::Entry, IndexMap};
use itertools::Itertools;

use crate::{
    automaton::{Automaton, AutomatonBuilder, StateId, Symbol},
    error::Error,
    options::{CompositeNaming, Options},
};

/// The name of the state reached if no component has a transition on a symbol.
pub const DEAD_STATE: &str = "$";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("subset construction exceeded the limit of {0} states")]
    StateLimitExceeded(usize),
}

/// Builds a new automaton from `source` by subset construction.
/// The result shares the alphabet of `source` and has exactly one transition per state and symbol.
pub fn subset_construction(source: &Automaton, options: &Options) -> Result<Automaton, Error> {
    let t = Instant::now();
    let result = match options.naming {
        CompositeNaming::Positional => construct::<Positional>(source, options),
        CompositeNaming::StateSet => construct::<StateSet>(source, options),
    }?;
    log::debug!(
        "Subset construction ({:?}): {} -> {} states ({:?})",
        options.naming,
        source.num_states(),
        result.num_states(),
        t.elapsed()
    );
    Ok(result)
}

/// The identity of a state of the automaton under construction.
trait Composite: Clone + Eq + Hash {
    fn seed(source: &Automaton) -> Self;

    fn name(&self, source: &Automaton) -> String;

    fn is_accepting(&self, source: &Automaton) -> bool;

    fn successor(&self, source: &Automaton, symbol: &Symbol) -> Self;
}

fn construct<C: Composite>(source: &Automaton, options: &Options) -> Result<Automaton, Error> {
    let mut builder = AutomatonBuilder::with_alphabet(source.shared_alphabet());
    // Composites are registered on discovery, so transitions never point to missing states
    let mut visited: IndexMap<C, StateId> = IndexMap::new();
    let mut queue = VecDeque::new();

    let seed = C::seed(source);
    let seed_id = discover(&seed, source, options, &mut visited, &mut builder)?;
    builder.set_initial_id(seed_id)?;
    queue.push_back((seed, seed_id));

    while let Some((composite, id)) = queue.pop_front() {
        if composite.is_accepting(source) {
            builder.add_accepting_id(id)?;
        }
        for symbol in source.alphabet().iter() {
            let next = composite.successor(source, symbol);
            log::trace!(
                "{} -{}-> {}",
                composite.name(source),
                symbol,
                next.name(source)
            );
            let next_id = match visited.get(&next) {
                Some(&next_id) => next_id,
                None => {
                    let next_id = discover(&next, source, options, &mut visited, &mut builder)?;
                    queue.push_back((next, next_id));
                    next_id
                }
            };
            builder.add_transition_ids(id, symbol.clone(), next_id)?;
        }
    }

    Ok(builder.build()?)
}

/// Registers a newly found composite as a state of the result.
fn discover<C: Composite>(
    composite: &C,
    source: &Automaton,
    options: &Options,
    visited: &mut IndexMap<C, StateId>,
    builder: &mut AutomatonBuilder,
) -> Result<StateId, Error> {
    if let Some(max) = options.max_states {
        if visited.len() >= max {
            return Err(ConstructionError::StateLimitExceeded(max).into());
        }
    }
    match visited.entry(composite.clone()) {
        Entry::Occupied(e) => Ok(*e.get()),
        Entry::Vacant(e) => {
            // Set names can coincide with a source name such as `$`
            let mut name = composite.name(source);
            while builder.state_id(&name).is_some() {
                name.push('\'');
            }
            let id = builder.add_state(name)?;
            e.insert(id);
            Ok(id)
        }
    }
}

/// Composite identified by the concatenated names of its components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Positional(String);

impl Composite for Positional {
    fn seed(source: &Automaton) -> Self {
        Positional(source.initial_state().name().to_string())
    }

    fn name(&self, _: &Automaton) -> String {
        self.0.clone()
    }

    /// Compares the raw name against the names of the accepting source states.
    fn is_accepting(&self, source: &Automaton) -> bool {
        source.is_accepting_name(&self.0)
    }

    /// The i-th character of the name selects the i-th source state.
    /// Positions past the last source state contribute nothing.
    fn successor(&self, source: &Automaton, symbol: &Symbol) -> Self {
        let mut next = String::new();
        for (_, state) in self.0.chars().zip(source.states()) {
            for t in state.transitions_on(symbol) {
                next.push_str(source.name(t.to()));
            }
        }
        if next.is_empty() {
            next.push_str(DEAD_STATE);
        }
        Positional(next)
    }
}

/// Composite identified by the set of source states it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateSet(BTreeSet<StateId>);

impl Composite for StateSet {
    fn seed(source: &Automaton) -> Self {
        StateSet(BTreeSet::from([source.initial()]))
    }

    /// Singletons keep the name of their member, so a second pass over a result reproduces it.
    fn name(&self, source: &Automaton) -> String {
        match self.0.len() {
            0 => DEAD_STATE.to_string(),
            1 => self.0.iter().map(|&s| source.name(s)).join(""),
            // No commas, so written tables read back with split destinations
            _ => format!("{{{}}}", self.0.iter().map(|&s| source.name(s)).join(" ")),
        }
    }

    fn is_accepting(&self, source: &Automaton) -> bool {
        self.0.iter().any(|&s| source.is_accepting(s))
    }

    fn successor(&self, source: &Automaton, symbol: &Symbol) -> Self {
        StateSet(
            self.0
                .iter()
                .flat_map(|&s| source.states()[s].transitions_on(symbol))
                .map(|t| t.to())
                .collect(),
        )
    }
}
