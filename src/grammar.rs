mod parser;
mod symbol;
mod symboltable;

use crate::errors::Result;
pub use symbol::Symbol;
use symboltable::SymbolTable;

/// The name of the empty-string marker in production bodies
pub const EPSILON: &str = "e";

/// The name of the end-of-input marker
pub const END_MARKER: &str = "$";

/// A context-free grammar production
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: usize,
    pub body: Vec<Symbol>,
}

impl Production {
    /// Returns true if the production is an ϵ-production
    pub fn is_e(&self) -> bool {
        self.body == [Symbol::Empty]
    }

    /// Returns the number of symbols the production derives, which is zero
    /// for an ϵ-production
    pub fn len(&self) -> usize {
        if self.is_e() {
            0
        } else {
            self.body.len()
        }
    }

    /// Returns true if the production derives the empty string
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An immutable context-free grammar with ordered sets of terminals and
/// non-terminals and an ordered list of productions
#[derive(Debug, Clone)]
pub struct Grammar {
    symbol_table: SymbolTable,
    productions: Vec<Production>,
    nt_productions: Vec<Vec<usize>>,
}

impl Grammar {
    /// Creates a grammar from the given terminal and non-terminal names and a
    /// representation of its productions, one per line in the form
    /// `HEAD -> BODY`, with `e` standing for an empty body
    pub fn new(terminals: &[&str], non_terminals: &[&str], productions: &str) -> Result<Grammar> {
        let mut symbol_table = SymbolTable::new();
        for t in terminals {
            symbol_table.add_terminal(t)?;
        }
        for nt in non_terminals {
            symbol_table.add_non_terminal(nt)?;
        }

        let productions = parser::parse(&symbol_table, productions)?;

        let mut nt_productions = vec![Vec::new(); non_terminals.len()];
        for (i, p) in productions.iter().enumerate() {
            nt_productions[p.head].push(i);
        }

        Ok(Grammar {
            symbol_table,
            productions,
            nt_productions,
        })
    }

    /// Returns a string representation of the production with the given ID
    pub fn format_production(&self, i: usize) -> String {
        format!(
            "{} → {}",
            self.non_terminal_name(self.production(i).head),
            self.format_production_body(i)
        )
    }

    /// Returns a string representation of the body of the production with
    /// the given ID
    pub fn format_production_body(&self, i: usize) -> String {
        self.production(i)
            .body
            .iter()
            .map(|s| match s {
                Symbol::Empty => "ϵ",
                _ => self.symbol_name(*s),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the ID of the non-terminal with the given name, if any
    pub fn maybe_non_terminal_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.non_terminal_index(name)
    }

    /// Returns the ID of the terminal with the given name, if any
    pub fn maybe_terminal_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.terminal_index(name)
    }

    /// Returns the name of the non-terminal with the given ID
    pub fn non_terminal_name(&self, i: usize) -> &str {
        self.symbol_table.non_terminal_name(i)
    }

    /// Returns the names of all non-terminals, in declaration order
    pub fn non_terminals(&self) -> &[String] {
        self.symbol_table.non_terminals()
    }

    /// Returns the number of non-terminals in the grammar
    pub fn num_non_terminals(&self) -> usize {
        self.symbol_table.non_terminals().len()
    }

    /// Returns the number of productions in the grammar
    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    /// Returns the number of terminals in the grammar
    pub fn num_terminals(&self) -> usize {
        self.symbol_table.terminals().len()
    }

    /// Returns the production with the given ID. Panics if there is no such
    /// production.
    pub fn production(&self, i: usize) -> &Production {
        &self.productions[i]
    }

    /// Returns a slice of IDs for all productions for the given non-terminal
    pub fn productions_for_non_terminal(&self, i: usize) -> &[usize] {
        &self.nt_productions[i]
    }

    /// Returns the non-terminal at the head of the first production
    pub fn start(&self) -> usize {
        self.productions[0].head
    }

    /// Returns the name of the given symbol
    pub fn symbol_name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::Terminal(i) => self.terminal_name(i),
            Symbol::NonTerminal(i) => self.non_terminal_name(i),
            Symbol::Empty => EPSILON,
            Symbol::EndOfInput => END_MARKER,
        }
    }

    /// Returns the name of the terminal with the given ID
    pub fn terminal_name(&self, i: usize) -> &str {
        self.symbol_table.terminal_name(i)
    }

    /// Returns the names of all terminals, in declaration order
    pub fn terminals(&self) -> &[String] {
        self.symbol_table.terminals()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error;

    fn expr_grammar() -> Result<Grammar> {
        Grammar::new(
            &["id", "plus", "lparen", "rparen"],
            &["S", "E", "T"],
            "
            S -> E
            E -> E plus T
            E -> T
            T -> lparen E rparen
            T -> id
            ",
        )
    }

    #[test]
    fn test_num_symbols() -> Result<()> {
        let g = expr_grammar()?;
        assert_eq!(g.num_terminals(), 4);
        assert_eq!(g.num_non_terminals(), 3);
        assert_eq!(g.num_productions(), 5);
        assert_eq!(g.start(), 0);

        Ok(())
    }

    #[test]
    fn test_productions_for_non_terminal() -> Result<()> {
        let g = expr_grammar()?;
        assert_eq!(g.productions_for_non_terminal(0), vec![0]);
        assert_eq!(g.productions_for_non_terminal(1), vec![1, 2]);
        assert_eq!(g.productions_for_non_terminal(2), vec![3, 4]);

        Ok(())
    }

    #[test]
    fn test_symbol_names() -> Result<()> {
        let g = expr_grammar()?;
        assert_eq!(g.maybe_terminal_index("rparen"), Some(3));
        assert_eq!(g.maybe_terminal_index("E"), None);
        assert_eq!(g.maybe_non_terminal_index("E"), Some(1));
        assert_eq!(g.symbol_name(Symbol::Terminal(1)), "plus");
        assert_eq!(g.symbol_name(Symbol::NonTerminal(2)), "T");
        assert_eq!(g.symbol_name(Symbol::EndOfInput), "$");
        assert_eq!(g.format_production(1), "E → E plus T");

        Ok(())
    }

    #[test]
    fn test_empty_production() -> Result<()> {
        let g = Grammar::new(&["x"], &["L"], "L -> x L\nL -> e")?;
        assert!(g.production(1).is_e());
        assert_eq!(g.production(1).len(), 0);
        assert_eq!(g.production(0).len(), 2);
        assert_eq!(g.format_production(1), "L → ϵ");

        Ok(())
    }

    #[test]
    fn test_overlapping_symbols() {
        assert!(matches!(
            Grammar::new(&["x"], &["x"], "x -> x"),
            Err(Error::DuplicateSymbol(_))
        ));
    }
}
