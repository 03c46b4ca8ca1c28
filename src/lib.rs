mod accept;
pub mod automaton;
mod convert;
mod error;
pub mod format;
mod options;
mod parse;
mod subset;

pub use accept::InputSymbol;
pub use automaton::{Alphabet, Automaton, AutomatonBuilder, AutomatonError, StateId, Symbol};
pub use convert::{
    to_deterministic, to_minimized_deterministic, to_minimized_nondeterministic_form,
    to_nondeterministic_form, Conversion,
};
pub use error::{Error, ErrorRepr};
pub use options::{CompositeNaming, Options};
pub use parse::{parse_file, parse_table, parse_table_str, ParseError};
pub use subset::{subset_construction, ConstructionError, DEAD_STATE};
