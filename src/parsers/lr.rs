mod table;

use super::parsetree::{Node, Tree};
use super::stack::Stack;
use crate::errors::{Error, Result};
use crate::grammar::{Grammar, Symbol};
use crate::lexer::{Lexer, TokenInfo};
use log::{debug, trace};
pub use table::ParseTable;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// An entry in an LR parse table
pub enum TableEntry {
    Goto(usize),
    Shift(usize),
    Reduce(usize),
    Accept,
    Absent,
}

/// Trait which must be satisfied by a parse table used by the LR parser.
/// Tables are read-only once constructed.
pub trait PTable {
    /// Returns the entry for the given state and symbol, or `Absent` for any
    /// state or symbol the table has no entry for
    fn lookup(&self, state: usize, symbol: Symbol) -> TableEntry;
    fn grammar(&self) -> &Grammar;
    fn num_states(&self) -> usize;
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// The result of feeding one input symbol to a parsing session
pub enum Outcome {
    Shifted,
    Accepted,
}

/// An LR parsing automaton
pub struct Parser<T: PTable> {
    table: T,
}

/// A single parse against a shared table. Each session owns its stack and
/// the most recently built tree node, so any number of sessions may run
/// concurrently against one table.
pub struct Session<'t, T: PTable> {
    table: &'t T,
    stack: Stack,
    root: Option<usize>,
    accepted: bool,
}

impl<T: PTable> Parser<T> {
    /// Creates a new parser with the given parse table
    pub fn new(table: T) -> Parser<T> {
        Parser { table }
    }

    /// Returns the parser's grammar
    pub fn grammar(&self) -> &Grammar {
        self.table.grammar()
    }

    /// Returns the parser's table
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Starts a new parsing session
    pub fn session(&self) -> Session<'_, T> {
        Session::new(&self.table)
    }

    /// Parses a sequence of tokens, returning the syntax tree or an error
    /// for the first offending token
    pub fn parse<I>(&self, tokens: I) -> Result<Tree>
    where
        I: IntoIterator<Item = TokenInfo>,
    {
        let mut session = self.session();

        for token in tokens {
            let Some(t) = self.grammar().maybe_terminal_index(&token.text) else {
                debug!("unknown token '{}' at {}", token.text, token.position);
                return Err(Error::UnknownToken {
                    position: token.position,
                    text: token.text,
                });
            };

            match session.advance(Symbol::Terminal(t)) {
                Some(Outcome::Shifted) => (),
                Some(Outcome::Accepted) => {
                    panic!("ACCEPT found for input token '{}'", token.text);
                }
                None => {
                    debug!("unexpected token '{}' at {}", token.text, token.position);
                    return Err(Error::UnexpectedToken {
                        position: token.position,
                        text: token.text,
                    });
                }
            }
        }

        match session.advance(Symbol::EndOfInput) {
            Some(Outcome::Accepted) => (),
            Some(Outcome::Shifted) => {
                panic!("SHIFT found for end of input");
            }
            None => {
                debug!("unexpected end of input");
                return Err(Error::UnexpectedEndOfInput);
            }
        }

        let Some(tree) = session.finish() else {
            panic!("accepted session without a tree");
        };
        Ok(tree)
    }

    /// Splits an input string into whitespace-separated tokens and parses
    /// them
    pub fn parse_str(&self, input: &str) -> Result<Tree> {
        self.parse(Lexer::new(input))
    }
}

impl<'t, T: PTable> Session<'t, T> {
    /// Creates a new session with a stack holding only the start state
    pub fn new(table: &'t T) -> Session<'t, T> {
        Session {
            table,
            stack: Stack::new(),
            root: None,
            accepted: false,
        }
    }

    /// Feeds one input symbol to the automaton, performing as many
    /// reductions as the table calls for before the symbol is either shifted
    /// or accepted. Returns `None` if the table has no action for the symbol
    /// in the state reached, in which case the symbol is not consumed.
    pub fn advance(&mut self, symbol: Symbol) -> Option<Outcome> {
        // Algorithm adapted from Aho et al (2007) p.251
        loop {
            let state = self.stack.peek_state();
            match self.table.lookup(state, symbol) {
                TableEntry::Shift(next) => {
                    if symbol == Symbol::EndOfInput {
                        panic!("SHIFT found for end of input in state {}", state);
                    }

                    trace!(
                        "state {}: shift '{}', goto {}",
                        state,
                        self.table.grammar().symbol_name(symbol),
                        next
                    );
                    self.stack.push(next, Node::leaf(symbol));
                    return Some(Outcome::Shifted);
                }
                TableEntry::Reduce(p) => {
                    self.reduce(p);
                }
                TableEntry::Accept => {
                    if symbol != Symbol::EndOfInput {
                        panic!("ACCEPT found for an input token in state {}", state);
                    }

                    trace!("state {}: accept", state);
                    self.accepted = true;
                    return Some(Outcome::Accepted);
                }
                TableEntry::Absent => {
                    trace!(
                        "state {}: no action for '{}'",
                        state,
                        self.table.grammar().symbol_name(symbol)
                    );
                    return None;
                }
                TableEntry::Goto(_) => {
                    // GOTO is for non-terminals, and actions are determined
                    // by terminals and end-of-input
                    panic!("GOTO found in actions for state {}", state);
                }
            }
        }
    }

    /// Reduces a production with the given id
    fn reduce(&mut self, id: usize) {
        let grammar = self.table.grammar();
        let production = grammar.production(id);
        let head = Symbol::NonTerminal(production.head);

        // Pop the production's children from the stack, which leaves them in
        // left-to-right order
        let children = self.stack.pop(production.len());

        let from = self.stack.peek_state();
        let TableEntry::Goto(next) = self.table.lookup(from, head) else {
            panic!(
                "no GOTO for '{}' in state {} after reducing {}",
                grammar.symbol_name(head),
                from,
                grammar.format_production(id)
            );
        };

        trace!(
            "state {}: reduce {}, goto {}",
            from,
            grammar.format_production(id),
            next
        );

        // Push the new state and a tree node for the production onto the
        // stack, and remember it as the root of the tree so far
        self.stack.push(next, Node::new(head, children));
        self.root = Some(self.stack.len() - 1);
    }

    /// Returns the automaton states on the stack, from bottom to top
    pub fn states(&self) -> Vec<usize> {
        self.stack.states()
    }

    /// Returns true if the input has been accepted
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Ends the session, returning the syntax tree if the input was accepted
    pub fn finish(mut self) -> Option<Tree> {
        if !self.accepted {
            return None;
        }

        Some(Tree {
            root: self.root.and_then(|depth| self.stack.take(depth)),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::position::Position;

    // A right-recursive list grammar with an ϵ-production and an
    // accompanying SLR(1) table. Columns: x, y, $, S, L, T
    fn parser() -> Result<Parser<ParseTable>> {
        let g = Grammar::new(
            &["x", "y"],
            &["S", "L", "T"],
            "S -> L\nL -> T L\nL -> e\nT -> x\nT -> y x",
        )?;
        let table = ParseTable::new(
            g,
            "
            s 3,s 4,r 2,,1,2
            ,,acc,,,
            s 3,s 4,r 2,,5,2
            r 3,r 3,r 3,,,
            s 6,,,,,
            ,,r 1,,,
            r 4,r 4,r 4,,,
            ",
        )?;
        Ok(Parser::new(table))
    }

    #[test]
    fn test_parse() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let p = parser()?;
        let tree = p.parse_str("x y x")?;

        assert_eq!(
            tree.frontier(),
            vec![Symbol::Terminal(0), Symbol::Terminal(1), Symbol::Terminal(0)]
        );
        assert_eq!(
            tree.visualize(p.grammar()),
            "L→[T→[x] L→[T→[y x] L→[ϵ]]]"
        );

        Ok(())
    }

    #[test]
    fn test_parse_empty() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let p = parser()?;
        let tree = p.parse_str("  \n ")?;

        assert_eq!(tree.render(p.grammar()), "L");
        assert!(tree.root.as_ref().is_some_and(|n| n.is_leaf()));

        Ok(())
    }

    #[test]
    fn test_parse_fail() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let p = parser()?;

        match p.parse_str("x\nx z") {
            Err(Error::UnknownToken { position, text }) => {
                assert_eq!(position, Position::at(2, 2));
                assert_eq!(text, "z");
            }
            _ => panic!("expected unknown token"),
        }

        match p.parse_str("x y y") {
            Err(Error::UnexpectedToken { position, text }) => {
                assert_eq!(position, Position::at(1, 3));
                assert_eq!(text, "y");
            }
            _ => panic!("expected unexpected token"),
        }

        assert!(matches!(p.parse_str("x y"), Err(Error::UnexpectedEndOfInput)));

        Ok(())
    }

    #[test]
    fn test_session() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let p = parser()?;
        let mut session = p.session();

        assert_eq!(session.states(), vec![0]);
        assert_eq!(session.advance(Symbol::Terminal(1)), Some(Outcome::Shifted));
        assert_eq!(session.states(), vec![0, 4]);

        // A rejected symbol leaves the stack untouched
        assert_eq!(session.advance(Symbol::Terminal(1)), None);
        assert_eq!(session.states(), vec![0, 4]);

        assert_eq!(session.advance(Symbol::Terminal(0)), Some(Outcome::Shifted));
        assert_eq!(session.states(), vec![0, 4, 6]);

        // Shifting the next x first reduces T → y x
        assert_eq!(session.advance(Symbol::Terminal(0)), Some(Outcome::Shifted));
        assert_eq!(session.states(), vec![0, 2, 3]);
        assert!(!session.is_accepted());

        // End of input reduces T → x, L → ϵ, L → T L twice, then accepts
        assert_eq!(session.advance(Symbol::EndOfInput), Some(Outcome::Accepted));
        assert_eq!(session.states(), vec![0, 1]);
        assert!(session.is_accepted());

        let tree = session.finish().ok_or("no tree")?;
        assert_eq!(tree.visualize(p.grammar()), "L→[T→[y x] L→[T→[x] L→[ϵ]]]");

        Ok(())
    }

    #[test]
    #[should_panic(expected = "no GOTO")]
    fn test_missing_goto() {
        // Valid cell by cell, but state 0 has no goto for L
        let g = Grammar::new(&["x"], &["S", "L"], "S -> L\nL -> x").expect("invalid grammar");
        let table = ParseTable::new(g, "s 2,,,\n,acc,,\n,r 1,,").expect("invalid table");

        let _ = Parser::new(table).parse_str("x");
    }

    #[test]
    fn test_unfinished_session() -> Result<()> {
        let p = parser()?;
        let mut session = p.session();
        session.advance(Symbol::Terminal(0));

        assert!(session.finish().is_none());

        Ok(())
    }
}
