use crate::position::Position;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
/// A lexical token, as the raw text of a whitespace-delimited word, with
/// accompanying position information
pub struct TokenInfo {
    pub text: String,
    pub position: Position,
}

impl TokenInfo {
    /// Returns a new token with the given text at the given position
    pub fn new(text: &str, line: usize, column: usize) -> TokenInfo {
        TokenInfo {
            text: text.to_string(),
            position: Position::at(line, column),
        }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{} {}", self.position.line, self.position.column, self.text)
    }
}
