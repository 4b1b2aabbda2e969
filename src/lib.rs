#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in a source file. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    /// The location used when there is nothing to point at, e.g. the end
    /// token of an empty token stream.
    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }

    /// Span covering `self` through `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

pub fn get_line_at_position(source: &str, position: &Position) -> Option<String> {
    if position.is_null() {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth((position.line - 1) as usize)
        .map(|line| line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> final.lang
           |
        20 | var a = #;
           | --------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line_at_position(source, position) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{get_line_at_position, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";
        let file = Rc::new(String::from("test.lang"));

        let line = get_line_at_position(source, &Position::new(1, 10, Rc::clone(&file)));
        assert_eq!(line.as_deref(), Some("Hello, world!"));

        let line = get_line_at_position(source, &Position::new(4, 9, Rc::clone(&file)));
        assert_eq!(line.as_deref(), Some("Testing { }"));

        assert!(get_line_at_position(source, &Position::new(9, 1, file)).is_none());
        assert!(get_line_at_position(source, &Position::null()).is_none());
    }

    #[test]
    fn test_position_display() {
        let position = Position::new(3, 7, Rc::new(String::from("main.lang")));
        assert_eq!(position.to_string(), "main.lang:3:7");
    }
}
