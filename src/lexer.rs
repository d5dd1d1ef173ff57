mod token;

use crate::position::Position;
pub use token::TokenInfo;

/// A lexer which splits input into whitespace-separated tokens. Token
/// columns are the 1-based ordinal of the token within its line, not a
/// character offset.
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
    current_line: usize,
    current_column: usize,
}

impl Lexer {
    /// Returns a new lexer for the given input string
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            cursor: 0,
            current_line: 1,
            current_column: 1,
        }
    }

    /// Returns all the tokens in the given input string
    pub fn tokenize(input: &str) -> Vec<TokenInfo> {
        Lexer::new(input).collect()
    }

    /// Returns the next token, if any
    pub fn next_token(&mut self) -> Option<TokenInfo> {
        self.discard_whitespace();
        self.lookahead()?;

        let line = self.current_line;
        let column = self.current_column;

        let mut text = String::new();
        while let Some(c) = self.lookahead() {
            if is_separator(c) {
                break;
            }
            text.push(c);
            self.cursor += 1;
        }

        self.current_column += 1;

        Some(TokenInfo {
            text,
            position: Position::at(line, column),
        })
    }

    /// Reads and discards any whitespace characters, starting a new line
    /// at each line break. A line break is `\n`, `\r\n` or a lone `\r`.
    fn discard_whitespace(&mut self) {
        while let Some(c) = self.lookahead() {
            if !is_separator(c) {
                break;
            }

            let crlf = c == '\r' && self.peek() == Some('\n');
            if (c == '\n' || c == '\r') && !crlf {
                self.current_line += 1;
                self.current_column = 1;
            }

            self.cursor += 1;
        }
    }

    /// Returns the lookahead character
    fn lookahead(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Returns the character after the lookahead character
    fn peek(&self) -> Option<char> {
        self.input.get(self.cursor + 1).copied()
    }
}

/// Returns true if the character separates tokens. The ASCII file, group,
/// record and unit separators count as whitespace along with the Unicode
/// whitespace characters.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Iterator for Lexer {
    type Item = TokenInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
