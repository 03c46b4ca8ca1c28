use std::fmt::Display;

use indexmap::IndexSet;
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};

/// A single input token of an automaton.
/// Usually a single character, but any non-empty string is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this symbol consists of exactly the character `c`.
    pub fn is_char(&self, c: char) -> bool {
        let mut chars = self.0.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered set of symbols an automaton reads.
/// Iteration follows insertion order, which is the order the subset construction visits symbols in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: IndexSet<Symbol>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a symbol to the alphabet.
    /// Returns false if the symbol was already present, in which case the alphabet is unchanged.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.symbols.insert(symbol)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Symbol;
    type IntoIter = indexmap::set::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbols.iter().join(", "))
    }
}

/* Arbitrary */

impl Arbitrary for Symbol {
    fn arbitrary(g: &mut Gen) -> Self {
        // `x` is never part of a generated alphabet, so words containing it exercise rejection
        let choices = ['a', 'b', 'c', 'x'];
        match g.choose(&choices) {
            Some(c) => Symbol::from(*c),
            None => Symbol::from('a'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut alphabet = Alphabet::new();
        assert!(alphabet.insert("b".into()));
        assert!(alphabet.insert("a".into()));
        assert!(!alphabet.insert("b".into()));
        let symbols: Vec<&str> = alphabet.iter().map(|s| s.as_str()).collect();
        assert_eq!(symbols, vec!["b", "a"]);
    }

    #[test]
    fn symbol_is_char() {
        assert!(Symbol::from('a').is_char('a'));
        assert!(!Symbol::from("ab").is_char('a'));
        assert!(!Symbol::from("").is_char('a'));
    }

    #[test]
    fn display_alphabet() {
        let alphabet: Alphabet = vec![Symbol::from('a'), Symbol::from('b')].into_iter().collect();
        assert_eq!(alphabet.to_string(), "{a, b}");
    }
}
