pub mod cli;
pub mod errors;
pub mod grammar;
pub mod language;
pub mod lexer;
pub mod parsers;
pub mod position;
