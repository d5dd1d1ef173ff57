/// A context-free grammar symbol. Terminals and non-terminals are indexed
/// separately, in the order in which they were declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(usize),
    NonTerminal(usize),
    Empty,
    EndOfInput,
}

impl Symbol {
    /// Returns true if the symbol is a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Returns true if the symbol is a non-terminal
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }
}
