//! Cursor and failure bookkeeping for one parse

use super::expected::{build_message, Expectation, WHITESPACE};
use crate::error::{Location, Position, SyntaxError};

/// Input, cursor and the furthest failure seen so far.
///
/// Rules return `None` on failure and leave the cursor where they found it;
/// [`attempt`](Self::attempt) does the restoring. Every terminal that fails
/// records what it wanted at the cursor, and only expectations at the
/// furthest cursor position are kept.
///
/// Recursive rules enter through [`nested`](Self::nested), which bounds how
/// deep the rules (and so the finished tree) can go.
pub struct ParseState {
    chars: Vec<char>,
    index: usize,
    furthest: usize,
    expected: Vec<Expectation>,
    silenced: usize,
    depth: usize,
    max_depth: usize,
    too_deep: Option<usize>,
}

impl ParseState {
    pub fn new(source: &str, max_depth: usize) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            furthest: 0,
            expected: Vec::new(),
            silenced: 0,
            depth: 0,
            max_depth,
            too_deep: None,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Run a rule, rewinding the cursor if it fails.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.index;
        let result = rule(self);
        if result.is_none() {
            self.index = start;
        }
        result
    }

    /// Run a recursive rule one level deeper, failing once the nesting limit
    /// is reached.
    pub fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.max_depth {
            self.too_deep = self.too_deep.max(Some(self.index));
            return None;
        }
        self.depth += 1;
        let result = self.attempt(rule);
        self.depth -= 1;
        result
    }

    /// Run a rule without consuming input or recording expectations, and
    /// report whether it matched.
    pub fn lookahead(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        let start = self.index;
        self.silenced += 1;
        let matched = rule(self);
        self.silenced -= 1;
        self.index = start;
        matched
    }

    // ═══════════════════════════════════════════════════════════════════
    // Terminals
    // ═══════════════════════════════════════════════════════════════════

    /// Match an exact piece of text.
    pub fn literal(&mut self, text: &'static str) -> Option<()> {
        let len = text.chars().count();
        let matched = self
            .chars
            .get(self.index..self.index + len)
            .is_some_and(|window| window.iter().copied().eq(text.chars()));

        if matched {
            self.index += len;
            Some(())
        } else {
            self.expect(Expectation::Literal { text });
            None
        }
    }

    /// Match one character of a class.
    pub fn class(&mut self, class: Expectation) -> Option<char> {
        match self.chars.get(self.index) {
            Some(&c) if class.matches(c) => {
                self.index += 1;
                Some(c)
            }
            _ => {
                self.expect(class);
                None
            }
        }
    }

    /// `[ \t\r\n]*`
    pub fn skip_ws(&mut self) {
        while self.class(WHITESPACE).is_some() {}
    }

    /// `text*`
    pub fn many_literal(&mut self, text: &'static str) {
        while self.literal(text).is_some() {}
    }

    /// `text?`
    pub fn optional_literal(&mut self, text: &'static str) {
        let _ = self.literal(text);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Failure Tracking
    // ═══════════════════════════════════════════════════════════════════

    /// Record an expectation at the cursor.
    pub fn expect(&mut self, expectation: Expectation) {
        if self.silenced > 0 || self.index < self.furthest {
            return;
        }
        if self.index > self.furthest {
            self.furthest = self.index;
            self.expected.clear();
        }
        if !self.expected.contains(&expectation) {
            self.expected.push(expectation);
        }
    }

    /// Build the error for the furthest failure.
    ///
    /// When the nesting limit cut off any rule, the expectations are
    /// incomplete and the error reports the limit instead.
    pub fn into_error(self) -> SyntaxError {
        if let Some(offset) = self.too_deep {
            let (found, location) = self.found_at(offset);
            return SyntaxError {
                message: format!("Expression nests deeper than {} levels.", self.max_depth),
                expected: Vec::new(),
                found,
                location,
            };
        }

        let (found, location) = self.found_at(self.furthest);
        SyntaxError {
            message: build_message(&self.expected, found),
            expected: self.expected,
            found,
            location,
        }
    }

    fn found_at(&self, offset: usize) -> (Option<char>, Location) {
        let found = self.chars.get(offset).copied();
        let end = if found.is_some() { offset + 1 } else { offset };
        let location = Location {
            start: self.position_at(offset),
            end: self.position_at(end),
        };
        (found, location)
    }

    fn position_at(&self, offset: usize) -> Position {
        let mut line = 1;
        let mut column = 1;
        for &c in self.chars.iter().take(offset) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Position {
            offset,
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_advances_on_match() {
        let mut state = ParseState::new("λx", 8);
        assert_eq!(state.literal("λ"), Some(()));
        assert_eq!(state.position(), 1);
        assert_eq!(state.literal("y"), None);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_literal_past_end_fails() {
        let mut state = ParseState::new("th", 8);
        assert_eq!(state.literal("then"), None);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_attempt_restores_on_failure() {
        let mut state = ParseState::new("ab", 8);
        let result = state.attempt(|s| {
            s.literal("a")?;
            s.literal("c")
        });
        assert_eq!(result, None);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_furthest_failure_wins() {
        let mut state = ParseState::new("ab", 8);
        let _ = state.literal("x");
        state.restore(1);
        let _ = state.literal("y");
        state.restore(0);
        let _ = state.literal("z");

        let err = state.into_error();
        assert_eq!(err.expected, vec![Expectation::Literal { text: "y" }]);
        assert_eq!(err.found, Some('b'));
        assert_eq!(err.location.start.offset, 1);
        assert_eq!(err.location.end.offset, 2);
    }

    #[test]
    fn test_lookahead_is_silent_and_does_not_consume() {
        let mut state = ParseState::new("if", 8);
        assert!(state.lookahead(|s| s.literal("if").is_some()));
        assert!(!state.lookahead(|s| s.literal("else").is_some()));
        assert_eq!(state.position(), 0);

        let err = state.into_error();
        assert!(err.expected.is_empty());
    }

    #[test]
    fn test_nested_stops_at_limit() {
        fn open(state: &mut ParseState) -> Option<usize> {
            state.nested(|s| {
                s.literal("(")?;
                Some(open(s).unwrap_or(0) + 1)
            })
        }

        let mut state = ParseState::new("(((((", 3);
        assert_eq!(open(&mut state), Some(3));
        assert_eq!(state.position(), 3);

        let err = state.into_error();
        assert_eq!(err.message, "Expression nests deeper than 3 levels.");
        assert!(err.expected.is_empty());
        assert_eq!(err.found, Some('('));
        assert_eq!(err.location.start.offset, 3);
    }

    #[test]
    fn test_positions_track_lines() {
        let state = ParseState::new("a\nbc", 8);
        let pos = state.position_at(3);
        assert_eq!((pos.line, pos.column), (2, 2));
        assert_eq!(state.position_at(0).column, 1);
    }
}
