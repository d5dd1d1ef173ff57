use super::{EPSILON, END_MARKER};
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// A symbol table to contain terminal and non-terminal grammar symbols.
/// Terminal and non-terminal IDs are allocated from separate, dense ranges.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    terminals: Vec<String>,
    non_terminals: Vec<String>,
    terminal_ids: HashMap<String, usize>,
    non_terminal_ids: HashMap<String, usize>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Returns a new symbol table
    pub fn new() -> SymbolTable {
        SymbolTable {
            terminals: Vec::new(),
            non_terminals: Vec::new(),
            terminal_ids: HashMap::new(),
            non_terminal_ids: HashMap::new(),
        }
    }

    /// Adds a terminal to the symbol table and returns its ID. An error is
    /// returned if the name is reserved or already declared.
    pub fn add_terminal(&mut self, name: &str) -> Result<usize> {
        self.check_new(name)?;

        let index = self.terminals.len();
        self.terminal_ids.insert(name.to_string(), index);
        self.terminals.push(name.to_string());
        Ok(index)
    }

    /// Adds a non-terminal to the symbol table and returns its ID. An error
    /// is returned if the name is reserved or already declared.
    pub fn add_non_terminal(&mut self, name: &str) -> Result<usize> {
        self.check_new(name)?;

        let index = self.non_terminals.len();
        self.non_terminal_ids.insert(name.to_string(), index);
        self.non_terminals.push(name.to_string());
        Ok(index)
    }

    fn check_new(&self, name: &str) -> Result<()> {
        if name == EPSILON || name == END_MARKER || name.is_empty() {
            return Err(Error::ReservedSymbol(name.to_string()));
        }

        if self.terminal_ids.contains_key(name) || self.non_terminal_ids.contains_key(name) {
            return Err(Error::DuplicateSymbol(name.to_string()));
        }

        Ok(())
    }

    /// Returns the ID of the terminal with the given name, if any
    pub fn terminal_index(&self, name: &str) -> Option<usize> {
        self.terminal_ids.get(name).copied()
    }

    /// Returns the ID of the non-terminal with the given name, if any
    pub fn non_terminal_index(&self, name: &str) -> Option<usize> {
        self.non_terminal_ids.get(name).copied()
    }

    /// Returns the name of the terminal with the given ID. Panics if there
    /// is no such terminal.
    pub fn terminal_name(&self, i: usize) -> &str {
        &self.terminals[i]
    }

    /// Returns the name of the non-terminal with the given ID. Panics if
    /// there is no such non-terminal.
    pub fn non_terminal_name(&self, i: usize) -> &str {
        &self.non_terminals[i]
    }

    /// Returns the terminal names in declaration order
    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    /// Returns the non-terminal names in declaration order
    pub fn non_terminals(&self) -> &[String] {
        &self.non_terminals
    }
}
