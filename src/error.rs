use thiserror::Error;

use crate::{automaton::AutomatonError, parse::ParseError, subset::ConstructionError};

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(#[from] pub ErrorRepr);

#[derive(Debug, Error)]
pub enum ErrorRepr {
    /// The transition table violates a structural invariant.
    #[error("invalid automaton: {0}")]
    InvalidAutomaton(AutomatonError),

    /// The textual description could not be read.
    #[error("failed to parse the transition table: {0}")]
    ParseError(ParseError),

    #[error("subset construction failed: {0}")]
    ConstructionError(ConstructionError),
}

// Resolve transitive conversion

impl From<AutomatonError> for Error {
    fn from(err: AutomatonError) -> Self {
        Error(ErrorRepr::InvalidAutomaton(err))
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error(ErrorRepr::ParseError(err))
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        Error(ErrorRepr::ConstructionError(err))
    }
}

impl Error {
    /// Returns the structural error if the automaton was malformed.
    pub fn as_invalid_automaton(&self) -> Option<&AutomatonError> {
        match &self.0 {
            ErrorRepr::InvalidAutomaton(err) => Some(err),
            _ => None,
        }
    }
}
