//! Mask pattern grammar.
//!
//! A pattern is a template such as `(###) ###-####`: every placeholder symbol
//! is a slot for one raw character, everything else is a literal copied into
//! the formatted output. A backslash turns the next character into a literal,
//! so `\#` renders a literal `#`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Placeholder symbol used when none is given.
pub const DEFAULT_PLACEHOLDER: char = '#';

/// Escape character that forces the following character to be a literal.
pub const ESCAPE: char = '\\';

/// Characters a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Any character.
    #[default]
    Any,
    /// Decimal digits `0-9`.
    Digit,
    /// Alphabetic characters.
    Letter,
    /// Alphabetic characters and decimal digits.
    Alphanumeric,
}

impl CharClass {
    /// Check whether a character may fill a slot of this class.
    pub fn accepts(self, c: char) -> bool {
        match self {
            CharClass::Any => !c.is_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Alphanumeric => c.is_alphabetic() || c.is_ascii_digit(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharClass::Any => "any",
            CharClass::Digit => "digit",
            CharClass::Letter => "letter",
            CharClass::Alphanumeric => "alphanumeric",
        }
    }
}

impl FromStr for CharClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(CharClass::Any),
            "digit" | "digits" | "numeric" => Ok(CharClass::Digit),
            "letter" | "letters" | "alpha" => Ok(CharClass::Letter),
            "alphanumeric" | "alnum" => Ok(CharClass::Alphanumeric),
            _ => Err(format!("unknown character class: {}", s)),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Filled by one raw character.
    Slot,
    /// Emitted verbatim.
    Literal(char),
}

/// A parsed, immutable mask pattern.
///
/// Positions in the formatted text line up one-to-one with pattern symbols,
/// so a formatted index is also a pattern index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    placeholder: char,
    class: CharClass,
    symbols: Vec<Symbol>,
    /// Pattern index of every slot, in order.
    slots: Vec<usize>,
}

impl Pattern {
    /// Parse a pattern using the default `#` placeholder.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Self::with_placeholder(source, DEFAULT_PLACEHOLDER)
    }

    /// Parse a pattern with a custom placeholder symbol.
    pub fn with_placeholder(source: &str, placeholder: char) -> Result<Self, PatternError> {
        if placeholder.is_whitespace() || placeholder.is_control() || placeholder == ESCAPE {
            return Err(PatternError::InvalidPlaceholder(placeholder));
        }

        let mut symbols = Vec::with_capacity(source.len());
        let mut chars = source.chars().enumerate();

        while let Some((position, c)) = chars.next() {
            if c == ESCAPE {
                match chars.next() {
                    Some((_, escaped)) => symbols.push(Symbol::Literal(escaped)),
                    None => return Err(PatternError::DanglingEscape { position }),
                }
            } else if c == placeholder {
                symbols.push(Symbol::Slot);
            } else {
                symbols.push(Symbol::Literal(c));
            }
        }

        let slots = symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Symbol::Slot)
            .map(|(i, _)| i)
            .collect();

        Ok(Self {
            source: source.to_string(),
            placeholder,
            class: CharClass::default(),
            symbols,
            slots,
        })
    }

    /// Restrict the characters accepted by slots.
    pub fn with_class(mut self, class: CharClass) -> Self {
        self.class = class;
        self
    }

    /// The pattern as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols, i.e. the length of a completely filled value.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// An empty pattern formats as identity.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Maximum number of raw characters, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots.len())
        }
    }

    /// Check whether a character may fill a slot.
    pub fn accepts(&self, c: char) -> bool {
        self.class.accepts(c)
    }

    /// Pattern index where raw character `k` sits.
    ///
    /// Past the last slot this is the pattern length, so everything between
    /// the previous slot and the result is literal.
    pub fn slot_position(&self, k: usize) -> usize {
        if self.is_empty() {
            return k;
        }
        self.slots.get(k).copied().unwrap_or(self.symbols.len())
    }

    /// Pattern index right after raw character `k - 1`; zero for `k == 0`.
    pub fn run_start(&self, k: usize) -> usize {
        if k == 0 || self.is_empty() {
            return k;
        }
        (self.slot_position(k - 1) + 1).min(self.symbols.len())
    }

    /// Literal characters in `from..to`.
    pub fn literals(&self, from: usize, to: usize) -> impl Iterator<Item = char> + '_ {
        let to = to.min(self.symbols.len());
        let from = from.min(to);
        self.symbols[from..to].iter().filter_map(|s| match s {
            Symbol::Literal(c) => Some(*c),
            Symbol::Slot => None,
        })
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
