//! Reads transition tables from their textual description.
//!
//! The input consists of sections introduced by a marker line (`#states`, `#initial`, `#accepting`,
//! `#alphabet`, `#transitions`), each followed by one record per line:
//!
//! ```text
//! #states
//! s0
//! s1
//! #initial
//! s0
//! #accepting
//! s1
//! #alphabet
//! a
//! #transitions
//! s0:a>s1
//! ```
//!
//! Carriage returns are removed, other whitespace is part of the record. Empty lines are skipped. Records under unknown markers, or before the first marker, are ignored.

mod error;

use std::{
    io::{BufRead, BufReader},
    path::Path,
};

pub use error::ParseError;

use crate::{
    automaton::{Automaton, AutomatonBuilder, Symbol},
    error::Error,
    options::Options,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    States,
    Initial,
    Accepting,
    Alphabet,
    Transitions,
    Unknown,
}

impl Section {
    fn from_marker(marker: &str) -> Self {
        match marker {
            "#states" => Section::States,
            "#initial" => Section::Initial,
            "#accepting" => Section::Accepting,
            "#alphabet" => Section::Alphabet,
            "#transitions" => Section::Transitions,
            _ => Section::Unknown,
        }
    }
}

/// Reads the transition table stored in the file at `path`.
pub fn parse_file(path: impl AsRef<Path>, options: &Options) -> Result<Automaton, Error> {
    let file = std::fs::File::open(path).map_err(ParseError::from)?;
    parse_table(BufReader::new(file), options)
}

/// Reads a transition table.
/// States must be declared before they are referenced by other sections.
pub fn parse_table<R: BufRead>(reader: R, options: &Options) -> Result<Automaton, Error> {
    let mut builder = AutomatonBuilder::new();
    let mut section = Section::Unknown;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(ParseError::from)?;
        let record = line.replace('\r', "");
        let record = record.as_str();
        if record.starts_with('#') {
            section = Section::from_marker(record);
            if section == Section::Unknown {
                log::debug!("Ignoring unknown section `{}` (line {})", record, i + 1);
            }
            continue;
        }
        if record.is_empty() {
            continue;
        }
        match section {
            Section::States => {
                builder.add_state(record)?;
            }
            Section::Initial => {
                builder.set_initial(record)?;
            }
            Section::Accepting => {
                builder.add_accepting(record)?;
            }
            Section::Alphabet => {
                builder.add_symbol(Symbol::from(record))?;
            }
            Section::Transitions => parse_transition(record, i + 1, options, &mut builder)?,
            Section::Unknown => {}
        }
    }

    let automaton = builder.build()?;
    log::debug!(
        "Parsed automaton with {} states, {} symbols, and {} transitions",
        automaton.num_states(),
        automaton.alphabet().len(),
        automaton.num_transitions()
    );
    Ok(automaton)
}

pub fn parse_table_str(input: &str, options: &Options) -> Result<Automaton, Error> {
    parse_table(input.as_bytes(), options)
}

/// Parses a `SOURCE:SYMBOL>DEST` record.
fn parse_transition(
    record: &str,
    line: usize,
    options: &Options,
    builder: &mut AutomatonBuilder,
) -> Result<(), Error> {
    let malformed = || ParseError::MalformedTransition {
        line,
        record: record.to_string(),
    };
    let (lhs, dest) = record.rsplit_once('>').ok_or_else(malformed)?;
    let (source, symbol) = lhs.split_once(':').ok_or_else(malformed)?;
    if source.is_empty() || symbol.is_empty() || dest.is_empty() {
        return Err(malformed().into());
    }

    let symbol = Symbol::from(symbol);
    if !builder.alphabet().contains(&symbol) {
        log::warn!(
            "Transition on `{}` in line {}, which is not in the alphabet",
            symbol,
            line
        );
    }

    if options.split_destinations {
        for to in dest.split(',') {
            if to.is_empty() {
                return Err(malformed().into());
            }
            builder.add_transition(source, symbol.clone(), to)?;
        }
    } else {
        builder.add_transition(source, symbol, dest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{automaton::AutomatonError, error::ErrorRepr};

    const CANONICAL: &str = "#states
s0
s1
s2
s3
#initial
s0
#accepting
s0
s1
s2
s3
#alphabet
a
b
c
#transitions
s0:b>s3
s0:c>s1,s2
s1:a>s2,s3
s1:c>s1,s2
s2:c>s3
s3:a>s1
s3:c>s1
";

    #[test]
    fn parse_canonical() {
        let a = parse_table_str(CANONICAL, &Options::default()).unwrap();
        assert_eq!(a.num_states(), 4);
        assert_eq!(a.alphabet().len(), 3);
        assert_eq!(a.name(a.initial()), "s0");
        assert_eq!(a.accepting().count(), 4);
        // Three records list two destinations
        assert_eq!(a.num_transitions(), 10);
        assert_eq!(a.state_by_name("s1").unwrap().transitions().len(), 4);
    }

    #[test]
    fn parse_canonical_behavior() {
        let a = parse_table_str(CANONICAL, &Options::default()).unwrap();
        assert!(a.accepts_str("b"));
        assert!(!a.accepts_str("bx"));
        assert!(a.accepts_str(""));
        assert!(a.accepts_str("bac"));
    }

    #[test]
    fn unsplit_destinations_must_name_states() {
        let options = Options {
            split_destinations: false,
            ..Options::default()
        };
        let err = parse_table_str(CANONICAL, &options).unwrap_err();
        assert_eq!(
            err.as_invalid_automaton(),
            Some(&AutomatonError::UnknownState("s1,s2".to_string()))
        );
    }

    #[test]
    fn crlf_and_blank_lines() {
        let input = "#states\r\ns0\r\n\r\ns1\r\n#initial\r\ns0\r\n#alphabet\r\na\r\n#transitions\r\ns0:a>s1\r\n";
        let a = parse_table_str(input, &Options::default()).unwrap();
        assert_eq!(a.num_states(), 2);
        assert_eq!(a.num_transitions(), 1);
        assert_eq!(a.state(0).unwrap().name(), "s0");
    }

    #[test]
    fn whitespace_is_kept_in_names() {
        let input = "#states\ns0\n s0\n#initial\n s0\n#alphabet\na\n#transitions\n s0:a>s0\n";
        let a = parse_table_str(input, &Options::default()).unwrap();
        assert_eq!(a.num_states(), 2);
        assert_eq!(a.initial_state().name(), " s0");
        assert_eq!(a.state_by_name(" s0").unwrap().transitions().len(), 1);
        assert!(a.state_by_name("s0").unwrap().transitions().is_empty());
    }

    #[test]
    fn unknown_sections_are_skipped() {
        let input = "s9\n#states\ns0\n#comment\nanything goes\n#initial\ns0\n";
        let a = parse_table_str(input, &Options::default()).unwrap();
        assert_eq!(a.num_states(), 1);
    }

    #[test]
    fn missing_initial() {
        let err = parse_table_str("#states\ns0\n", &Options::default()).unwrap_err();
        assert_eq!(
            err.as_invalid_automaton(),
            Some(&AutomatonError::MissingInitial)
        );
    }

    #[test]
    fn undeclared_state() {
        let input = "#states\ns0\n#initial\ns0\n#accepting\ns1\n";
        let err = parse_table_str(input, &Options::default()).unwrap_err();
        assert_eq!(
            err.as_invalid_automaton(),
            Some(&AutomatonError::UnknownState("s1".to_string()))
        );
    }

    #[test]
    fn duplicate_symbol() {
        let input = "#states\ns0\n#initial\ns0\n#alphabet\na\na\n";
        let err = parse_table_str(input, &Options::default()).unwrap_err();
        assert_eq!(
            err.as_invalid_automaton(),
            Some(&AutomatonError::DuplicateSymbol(Symbol::from('a')))
        );
    }

    #[test]
    fn malformed_transition() {
        let input = "#states\ns0\n#initial\ns0\n#transitions\ns0-a>s0\n";
        let err = parse_table_str(input, &Options::default()).unwrap_err();
        match err.0 {
            ErrorRepr::ParseError(ParseError::MalformedTransition { line, record }) => {
                assert_eq!(line, 6);
                assert_eq!(record, "s0-a>s0");
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn symbols_may_be_separators() {
        let input = "#states\ns0\n#initial\ns0\n#accepting\ns0\n#alphabet\n>\n:\n#transitions\ns0:>>s0\ns0::>s0\n";
        let a = parse_table_str(input, &Options::default()).unwrap();
        assert!(a.accepts_str(">:>"));
    }
}
