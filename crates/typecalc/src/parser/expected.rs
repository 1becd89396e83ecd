//! What the parser expected at a failure point, and how that reads

use serde::Serialize;

/// One piece of a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClassPart {
    /// A single character
    Single(char),
    /// An inclusive range
    Range(char, char),
}

/// Something that would have let the parse continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    /// An exact piece of text
    Literal {
        /// The text
        text: &'static str,
    },

    /// One character out of a class
    Class {
        /// Members of the class
        parts: &'static [ClassPart],
        /// Whether the class is negated
        inverted: bool,
    },

    /// The end of the input
    End,
}

/// `[ \t\r\n]`
pub(crate) const WHITESPACE: Expectation = Expectation::Class {
    parts: &[
        ClassPart::Single(' '),
        ClassPart::Single('\t'),
        ClassPart::Single('\r'),
        ClassPart::Single('\n'),
    ],
    inverted: false,
};

/// `[a-z]`
pub(crate) const LOWERCASE: Expectation = Expectation::Class {
    parts: &[ClassPart::Range('a', 'z')],
    inverted: false,
};

impl Expectation {
    /// Check if a character belongs to this class. Literals and the end of
    /// input never match a single character here.
    pub fn matches(&self, c: char) -> bool {
        match self {
            Expectation::Class { parts, inverted } => {
                let hit = parts.iter().any(|part| match *part {
                    ClassPart::Single(single) => c == single,
                    ClassPart::Range(lo, hi) => (lo..=hi).contains(&c),
                });
                hit != *inverted
            }
            _ => false,
        }
    }

    /// The form used in error messages: literals quoted, classes as a
    /// bracket expression.
    pub fn describe(&self) -> String {
        match self {
            Expectation::Literal { text } => format!("\"{}\"", escape_literal(text)),
            Expectation::Class { parts, inverted } => {
                let mut out = String::from("[");
                if *inverted {
                    out.push('^');
                }
                for part in parts.iter() {
                    match *part {
                        ClassPart::Single(c) => push_class_char(&mut out, c),
                        ClassPart::Range(lo, hi) => {
                            push_class_char(&mut out, lo);
                            out.push('-');
                            push_class_char(&mut out, hi);
                        }
                    }
                }
                out.push(']');
                out
            }
            Expectation::End => "end of input".to_string(),
        }
    }
}

/// Build `Expected <alternatives> but <found> found.`
///
/// Alternatives are sorted, deduplicated and joined with commas and a final
/// "or".
pub(crate) fn build_message(expected: &[Expectation], found: Option<char>) -> String {
    let mut descriptions: Vec<String> = expected.iter().map(Expectation::describe).collect();
    descriptions.sort();
    descriptions.dedup();

    let alternatives = match descriptions.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    };

    let found = match found {
        Some(c) => format!("\"{}\"", escape_literal(&c.to_string())),
        None => "end of input".to_string(),
    };

    format!("Expected {} but {} found.", alternatives, found)
}

fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => push_control_escaped(&mut out, c),
        }
    }
    out
}

fn push_class_char(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        ']' => out.push_str("\\]"),
        '^' => out.push_str("\\^"),
        '-' => out.push_str("\\-"),
        _ => push_control_escaped(out, c),
    }
}

fn push_control_escaped(out: &mut String, c: char) {
    match c {
        '\0' => out.push_str("\\0"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\u{01}'..='\u{0F}' => out.push_str(&format!("\\x0{:X}", c as u32)),
        '\u{10}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => out.push_str(&format!("\\x{:X}", c as u32)),
        _ => out.push(c),
    }
}
