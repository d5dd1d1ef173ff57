use crate::errors::{Error, Result};
use crate::grammar::Grammar;
use crate::lexer::Lexer;
use std::path::Path;

/// Outputs the tokens of a file with their positions, marking any that are
/// not terminals of the grammar
pub fn output(g: &Grammar, input: &Path) -> Result<()> {
    if !input.is_file() {
        return Err(Error::NoSuchFile(input.display().to_string()));
    }

    for token in Lexer::new(&std::fs::read_to_string(input)?) {
        if g.maybe_terminal_index(&token.text).is_some() {
            println!("{}", token);
        } else {
            println!("{} (unknown)", token);
        }
    }

    Ok(())
}
