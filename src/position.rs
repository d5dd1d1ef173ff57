use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A reference to a line number within an input file, and the ordinal of a
/// token within that line. All indexes begin at 1.
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Returns a new position referring to the first token of the first line
    pub fn new() -> Position {
        Position { line: 1, column: 1 }
    }

    /// Returns a new position at the given line and column
    pub fn at(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new().to_string(), "line 1, column 1");
        assert_eq!(Position::at(12, 3).to_string(), "line 12, column 3");
    }
}
