pub mod args;
mod common;
pub mod info;
pub mod output;
pub mod parsetree;
pub mod productions;
pub mod tokens;
