//! Writes automata in the textual transition table format read by [`parse_table`](crate::parse_table).

use std::fmt::{self, Write};

use crate::automaton::Automaton;

/// Writes all sections of the table, with one transition record per transition.
pub fn write_table<W: Write>(automaton: &Automaton, w: &mut W) -> fmt::Result {
    writeln!(w, "#states")?;
    for state in automaton.states() {
        writeln!(w, "{}", state.name())?;
    }
    writeln!(w, "#initial")?;
    writeln!(w, "{}", automaton.initial_state().name())?;
    writeln!(w, "#accepting")?;
    for id in automaton.accepting() {
        writeln!(w, "{}", automaton.name(id))?;
    }
    writeln!(w, "#alphabet")?;
    for symbol in automaton.alphabet() {
        writeln!(w, "{}", symbol)?;
    }
    writeln!(w, "#transitions")?;
    for t in automaton.transitions() {
        writeln!(
            w,
            "{}:{}>{}",
            automaton.name(t.from()),
            t.symbol(),
            automaton.name(t.to())
        )?;
    }
    Ok(())
}

pub fn to_table_string(automaton: &Automaton) -> String {
    let mut out = String::new();
    // Writing to a String never fails
    let _ = write_table(automaton, &mut out);
    out
}
