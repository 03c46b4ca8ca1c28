use super::{StateId, Symbol};

/// The error type for automata that violate the structural invariants of a transition table
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("no initial state declared")]
    MissingInitial,

    #[error("initial state already declared as `{0}`")]
    InitialAlreadySet(String),

    #[error("undeclared state `{0}`")]
    UnknownState(String),

    #[error("no state with index {0}")]
    UnknownStateId(StateId),

    #[error("state `{0}` declared more than once")]
    DuplicateState(String),

    #[error("symbol `{0}` occurs more than once in the alphabet")]
    DuplicateSymbol(Symbol),
}
