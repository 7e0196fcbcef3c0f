//! Pattern-driven formatter for fixed masks (phone numbers, cards, dates).

use tracing::{debug, trace};

use super::pattern::{Pattern, Symbol};
use super::{CaretPositioner, EditRange, EditResult, Formatter, InputFormatter, Unformatter};
use crate::error::PatternError;

/// Formats text through a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskFormatter {
    pattern: Pattern,
}

impl MaskFormatter {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Build a formatter from a mask string with the default placeholder.
    pub fn from_mask(mask: &str) -> Result<Self, PatternError> {
        Ok(Self::new(Pattern::new(mask)?))
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Raw characters of `chars` together with their index.
    ///
    /// Text and pattern are walked in lock-step; characters on slot positions
    /// are kept when the class accepts them, literal positions are skipped
    /// whether or not they match.
    fn scan(&self, chars: &[char]) -> Vec<(usize, char)> {
        if self.pattern.is_empty() {
            return chars
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, c)| self.pattern.accepts(*c))
                .collect();
        }

        chars
            .iter()
            .copied()
            .zip(self.pattern.symbols())
            .enumerate()
            .filter(|(_, (c, symbol))| **symbol == Symbol::Slot && self.pattern.accepts(*c))
            .map(|(i, (c, _))| (i, c))
            .collect()
    }

    /// Interleave accepted raw characters with pattern literals.
    fn render(&self, raw: &[char]) -> String {
        if self.pattern.is_empty() {
            return raw.iter().collect();
        }

        let mut raw = raw.iter().copied().peekable();
        let mut out = String::with_capacity(self.pattern.len());

        for symbol in self.pattern.symbols() {
            let Some(&next) = raw.peek() else {
                break;
            };
            match *symbol {
                Symbol::Literal(c) => out.push(c),
                Symbol::Slot => {
                    out.push(next);
                    raw.next();
                }
            }
        }

        out
    }

    /// Walk the replacement against the pattern starting at raw index `at`.
    ///
    /// A character matching a literal of the run in front of the next slot is
    /// typed through. In a pasted replacement, punctuation matching a later
    /// literal of the pattern is taken as formatting and dropped.
    ///
    /// Returns the characters to insert and whether a literal was typed
    /// through.
    fn take_replacement(&self, at: usize, replacement: &str) -> (Vec<char>, bool) {
        if self.pattern.is_empty() {
            let inserted = replacement.chars().filter(|c| self.pattern.accepts(*c)).collect();
            return (inserted, false);
        }

        let symbols = self.pattern.symbols();
        let mut inserted = Vec::new();
        let mut typed_through = false;
        let mut next = at;
        let mut run_from = self.pattern.run_start(next);
        let pasted = replacement.chars().nth(1).is_some();

        for c in replacement.chars() {
            let run = &symbols[run_from..self.pattern.slot_position(next)];

            if let Some(offset) = run.iter().position(|s| *s == Symbol::Literal(c)) {
                run_from += offset + 1;
                typed_through = true;
            } else if pasted
                && !c.is_alphanumeric()
                && self.pattern.literals(run_from, symbols.len()).any(|l| l == c)
            {
                continue;
            } else if self.pattern.accepts(c) {
                inserted.push(c);
                next += 1;
                run_from = self.pattern.run_start(next);
            }
        }

        (inserted, typed_through)
    }
}

impl Formatter for MaskFormatter {
    fn format(&self, raw: &str) -> String {
        let mut accepted: Vec<char> = raw.chars().filter(|c| self.pattern.accepts(*c)).collect();
        if let Some(capacity) = self.pattern.capacity() {
            accepted.truncate(capacity);
        }
        self.render(&accepted)
    }
}

impl Unformatter for MaskFormatter {
    fn unformat(&self, formatted: &str) -> Option<String> {
        let chars: Vec<char> = formatted.chars().collect();
        Some(self.scan(&chars).into_iter().map(|(_, c)| c).collect())
    }
}

impl InputFormatter for MaskFormatter {
    fn format_input(&self, current: &str, range: EditRange, replacement: &str) -> EditResult {
        trace!("Edit {:?} of {:?} with {:?}", range, current, replacement);

        let chars: Vec<char> = current.chars().collect();
        let range = range.clamp(chars.len());
        let scanned = self.scan(&chars);
        let raw: Vec<char> = scanned.iter().map(|&(_, c)| c).collect();

        let mut raw_start = scanned.iter().take_while(|(i, _)| *i < range.start).count();
        let raw_end = scanned.iter().take_while(|(i, _)| *i < range.end()).count();

        // Backspace over a literal removes the raw character before it.
        if replacement.is_empty() && range.length == 1 && raw_start == raw_end && raw_start > 0 {
            raw_start -= 1;
        }

        let (mut inserted, typed_through) = self.take_replacement(raw_start, replacement);

        let kept = raw.len() - (raw_end - raw_start);
        if let Some(capacity) = self.pattern.capacity() {
            inserted.truncate(capacity.saturating_sub(kept));
        }

        if !replacement.is_empty() && inserted.is_empty() && !typed_through {
            debug!("Rejected edit {:?}: nothing to insert", replacement);
            return EditResult::unchanged(current, range);
        }

        let mut new_raw = Vec::with_capacity(kept + inserted.len());
        new_raw.extend_from_slice(&raw[..raw_start]);
        new_raw.extend_from_slice(&inserted);
        new_raw.extend_from_slice(&raw[raw_end..]);

        let mut text = self.render(&new_raw);
        let next = raw_start + inserted.len();
        let slot = self.pattern.slot_position(next);

        let caret = if !inserted.is_empty() || typed_through {
            // Skip the literal run after the insertion point, extending the
            // text with it when the caret would otherwise fall off the end.
            let len = text.chars().count();
            if slot > len {
                text.extend(self.pattern.literals(len, slot));
            }
            slot
        } else if next == 0 {
            slot
        } else {
            range.start.clamp(self.pattern.run_start(next), slot)
        };

        let caret = caret.min(text.chars().count());
        trace!("Edit produced {:?} with caret at {}", text, caret);

        EditResult::new(text, caret)
    }
}

impl CaretPositioner for MaskFormatter {
    fn caret_offset(&self, formatted: &str) -> usize {
        let chars: Vec<char> = formatted.chars().collect();
        if self.pattern.is_empty() {
            return chars.len();
        }

        let filled = self.scan(&chars).len();
        self.pattern.slot_position(filled).min(chars.len())
    }
}
