use std::{collections::HashMap, rc::Rc};

use indexmap::IndexSet;

use super::{Alphabet, Automaton, AutomatonError, State, StateId, Symbol, Transition};

/// Incrementally assembles an [Automaton].
///
/// States must be declared before they are referenced.
/// [`build`](Self::build) fails if no initial state was set.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    index: HashMap<String, StateId>,
    initial: Option<StateId>,
    accepting: IndexSet<StateId>,
    alphabet: Rc<Alphabet>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose automaton will share the given alphabet.
    pub fn with_alphabet(alphabet: Rc<Alphabet>) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Declares a new state and returns its id.
    pub fn add_state(&mut self, name: impl Into<String>) -> Result<StateId, AutomatonError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(AutomatonError::DuplicateState(name));
        }
        let id = self.states.len();
        self.index.insert(name.clone(), id);
        self.states.push(State::new(name));
        Ok(id)
    }

    /// Returns the id of a declared state.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Appends a symbol to the alphabet.
    /// If the alphabet is shared with another automaton, it is copied first.
    pub fn add_symbol(&mut self, symbol: Symbol) -> Result<&mut Self, AutomatonError> {
        if self.alphabet.contains(&symbol) {
            return Err(AutomatonError::DuplicateSymbol(symbol));
        }
        Rc::make_mut(&mut self.alphabet).insert(symbol);
        Ok(self)
    }

    pub fn set_initial(&mut self, name: &str) -> Result<&mut Self, AutomatonError> {
        let id = self.resolve(name)?;
        self.set_initial_id(id)
    }

    pub fn set_initial_id(&mut self, id: StateId) -> Result<&mut Self, AutomatonError> {
        self.check_id(id)?;
        if let Some(current) = self.initial {
            return Err(AutomatonError::InitialAlreadySet(
                self.states[current].name.clone(),
            ));
        }
        self.initial = Some(id);
        Ok(self)
    }

    /// Marks a state as accepting.
    /// Marking a state twice has no effect.
    pub fn add_accepting(&mut self, name: &str) -> Result<&mut Self, AutomatonError> {
        let id = self.resolve(name)?;
        self.add_accepting_id(id)
    }

    pub fn add_accepting_id(&mut self, id: StateId) -> Result<&mut Self, AutomatonError> {
        self.check_id(id)?;
        self.accepting.insert(id);
        Ok(self)
    }

    /// Appends a transition to the outgoing list of `from`.
    /// The symbol does not need to be part of the alphabet.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: Symbol,
        to: &str,
    ) -> Result<&mut Self, AutomatonError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.add_transition_ids(from, symbol, to)
    }

    pub fn add_transition_ids(
        &mut self,
        from: StateId,
        symbol: Symbol,
        to: StateId,
    ) -> Result<&mut Self, AutomatonError> {
        self.check_id(from)?;
        self.check_id(to)?;
        self.states[from]
            .transitions
            .push(Transition { from, to, symbol });
        Ok(self)
    }

    pub fn build(self) -> Result<Automaton, AutomatonError> {
        let initial = self.initial.ok_or(AutomatonError::MissingInitial)?;
        Ok(Automaton {
            states: self.states,
            index: self.index,
            initial,
            accepting: self.accepting,
            alphabet: self.alphabet,
        })
    }

    fn resolve(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_id(name)
            .ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
    }

    fn check_id(&self, id: StateId) -> Result<(), AutomatonError> {
        if id < self.states.len() {
            Ok(())
        } else {
            Err(AutomatonError::UnknownStateId(id))
        }
    }
}
