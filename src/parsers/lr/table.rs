use super::{PTable, TableEntry};
use crate::errors::{Error, Result};
use crate::grammar::{Grammar, Symbol};
use log::debug;

/// A precomputed LR parse table, decoded once from its textual form
pub struct ParseTable {
    grammar: Grammar,
    entries: Vec<Vec<TableEntry>>,
}

impl PTable for ParseTable {
    fn lookup(&self, state: usize, symbol: Symbol) -> TableEntry {
        let Some(column) = self.column(symbol) else {
            return TableEntry::Absent;
        };

        self.entries
            .get(state)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or(TableEntry::Absent)
    }

    fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    fn num_states(&self) -> usize {
        self.entries.len()
    }
}

impl ParseTable {
    /// Creates a parse table for the given grammar from its textual form:
    /// one line per state and one comma-separated cell per column. Columns
    /// are the terminals, then the end marker, then the non-terminals, each
    /// in grammar order. A cell is `s N` (shift to state N), `r N` (reduce by
    /// production N), `acc` (accept), `N` (goto state N), or empty.
    pub fn new(grammar: Grammar, input: &str) -> Result<ParseTable> {
        let rows: Vec<&str> = input.trim().lines().collect();
        let num_states = rows.len();
        let width = grammar.num_terminals() + 1 + grammar.num_non_terminals();

        let mut entries = Vec::with_capacity(num_states);
        for (state, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.split(',').collect();
            if cells.len() != width {
                return Err(Error::InvalidTable(format!(
                    "state {} has {} columns, expected {}",
                    state,
                    cells.len(),
                    width
                )));
            }

            let mut decoded = Vec::with_capacity(width);
            for (column, cell) in cells.iter().enumerate() {
                let symbol = column_symbol(&grammar, column);
                let entry = decode(cell.trim()).ok_or_else(|| {
                    Error::InvalidTable(format!(
                        "state {}, column '{}': unrecognized entry '{}'",
                        state,
                        grammar.symbol_name(symbol),
                        cell.trim()
                    ))
                })?;
                validate(&grammar, num_states, entry, symbol).map_err(|reason| {
                    Error::InvalidTable(format!(
                        "state {}, column '{}': {}",
                        state,
                        grammar.symbol_name(symbol),
                        reason
                    ))
                })?;
                decoded.push(entry);
            }

            entries.push(decoded);
        }

        debug!(
            "decoded parse table with {} states and {} columns",
            num_states, width
        );

        Ok(ParseTable { grammar, entries })
    }

    /// Returns the table column for the given symbol, if it has one
    fn column(&self, symbol: Symbol) -> Option<usize> {
        let num_terminals = self.grammar.num_terminals();
        match symbol {
            Symbol::Terminal(i) if i < num_terminals => Some(i),
            Symbol::EndOfInput => Some(num_terminals),
            Symbol::NonTerminal(i) if i < self.grammar.num_non_terminals() => {
                Some(num_terminals + 1 + i)
            }
            _ => None,
        }
    }
}

/// Returns the symbol for the given table column
fn column_symbol(g: &Grammar, column: usize) -> Symbol {
    let num_terminals = g.num_terminals();
    if column < num_terminals {
        Symbol::Terminal(column)
    } else if column == num_terminals {
        Symbol::EndOfInput
    } else {
        Symbol::NonTerminal(column - num_terminals - 1)
    }
}

/// Decodes the textual form of a single table cell
fn decode(cell: &str) -> Option<TableEntry> {
    if cell.is_empty() {
        return Some(TableEntry::Absent);
    }
    if cell == "acc" {
        return Some(TableEntry::Accept);
    }

    match cell.split_once(' ') {
        Some(("s", n)) => n.trim().parse().ok().map(TableEntry::Shift),
        Some(("r", n)) => n.trim().parse().ok().map(TableEntry::Reduce),
        Some(_) => None,
        None => cell.parse().ok().map(TableEntry::Goto),
    }
}

/// Checks that an entry is legal for the column it appears in and refers
/// only to existing states and productions
fn validate(
    g: &Grammar,
    num_states: usize,
    entry: TableEntry,
    symbol: Symbol,
) -> std::result::Result<(), String> {
    match entry {
        TableEntry::Shift(s) | TableEntry::Goto(s) if s >= num_states => {
            Err(format!("no such state {}", s))
        }
        TableEntry::Reduce(p) if p >= g.num_productions() => {
            Err(format!("no such production {}", p))
        }
        TableEntry::Goto(_) if !symbol.is_non_terminal() => {
            Err("goto entry for a terminal".to_string())
        }
        TableEntry::Shift(_) if !symbol.is_terminal() => {
            Err("shift entry for a non-terminal or end of input".to_string())
        }
        TableEntry::Reduce(_) | TableEntry::Accept if symbol.is_non_terminal() => {
            Err("action entry for a non-terminal".to_string())
        }
        TableEntry::Accept if symbol != Symbol::EndOfInput => {
            Err("accept entry for a terminal".to_string())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grammar() -> Result<Grammar> {
        Grammar::new(
            &["x"],
            &["S", "L"],
            "S -> L\nL -> x L\nL -> e",
        )
    }

    // Columns: x, $, S, L
    const TABLE: &str = "
        s 2,r 2,,1
        ,acc,,
        s 2,r 2,,3
        ,r 1,,
    ";

    #[test]
    fn test_decode() -> Result<()> {
        let t = ParseTable::new(grammar()?, TABLE)?;
        assert_eq!(t.num_states(), 4);
        assert_eq!(
            t.entries,
            vec![
                vec![
                    TableEntry::Shift(2),
                    TableEntry::Reduce(2),
                    TableEntry::Absent,
                    TableEntry::Goto(1),
                ],
                vec![
                    TableEntry::Absent,
                    TableEntry::Accept,
                    TableEntry::Absent,
                    TableEntry::Absent,
                ],
                vec![
                    TableEntry::Shift(2),
                    TableEntry::Reduce(2),
                    TableEntry::Absent,
                    TableEntry::Goto(3),
                ],
                vec![
                    TableEntry::Absent,
                    TableEntry::Reduce(1),
                    TableEntry::Absent,
                    TableEntry::Absent,
                ],
            ]
        );

        Ok(())
    }

    #[test]
    fn test_lookup() -> Result<()> {
        let t = ParseTable::new(grammar()?, TABLE)?;
        assert_eq!(t.lookup(0, Symbol::Terminal(0)), TableEntry::Shift(2));
        assert_eq!(t.lookup(1, Symbol::EndOfInput), TableEntry::Accept);
        assert_eq!(t.lookup(2, Symbol::NonTerminal(1)), TableEntry::Goto(3));
        assert_eq!(t.lookup(3, Symbol::Terminal(0)), TableEntry::Absent);

        // Lookups outside the table never fail
        assert_eq!(t.lookup(99, Symbol::Terminal(0)), TableEntry::Absent);
        assert_eq!(t.lookup(0, Symbol::Terminal(7)), TableEntry::Absent);
        assert_eq!(t.lookup(0, Symbol::NonTerminal(9)), TableEntry::Absent);
        assert_eq!(t.lookup(0, Symbol::Empty), TableEntry::Absent);

        Ok(())
    }

    #[test]
    fn test_invalid_tables() -> Result<()> {
        let cases = [
            ("s 1,,", "state 0 has 3 columns, expected 4"),
            ("t 1,,,", "state 0, column 'x': unrecognized entry 't 1'"),
            ("s one,,,", "state 0, column 'x': unrecognized entry 's one'"),
            ("s 5,,,", "state 0, column 'x': no such state 5"),
            (",r 3,,", "state 0, column '$': no such production 3"),
            ("0,,,", "state 0, column 'x': goto entry for a terminal"),
            (",s 0,,", "state 0, column '$': shift entry for a non-terminal or end of input"),
            (",,acc,", "state 0, column 'S': action entry for a non-terminal"),
            ("acc,,,", "state 0, column 'x': accept entry for a terminal"),
        ];

        for (input, want) in cases {
            match ParseTable::new(grammar()?, input) {
                Err(Error::InvalidTable(s)) => assert_eq!(s, want),
                Err(e) => panic!("unexpected error: {}", e),
                Ok(_) => panic!("no error for '{}'", input),
            }
        }

        Ok(())
    }
}
