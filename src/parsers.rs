pub mod lr;
pub mod parsetree;
mod stack;
