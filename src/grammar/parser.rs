use super::symboltable::SymbolTable;
use super::{Production, Symbol, EPSILON};
use crate::errors::{Error, Result};

/// The symbol separating a production head from its body
const PRODUCTION_SYMBOL: &str = "->";

/// Parses a list of productions, one per line, in the form `HEAD -> BODY`,
/// resolving symbol names against the given symbol table. Blank lines are
/// ignored.
pub fn parse(symbol_table: &SymbolTable, input: &str) -> Result<Vec<Production>> {
    let mut productions = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        productions.push(parse_production(symbol_table, line)?);
    }

    if productions.is_empty() {
        return Err(Error::EmptyGrammar);
    }

    Ok(productions)
}

/// Parses a single production
fn parse_production(symbol_table: &SymbolTable, line: &str) -> Result<Production> {
    let Some((head, body)) = line.split_once(PRODUCTION_SYMBOL) else {
        return Err(Error::ExpectedProductionSymbol(line.to_string()));
    };

    let head = head.trim();
    let Some(head_id) = symbol_table.non_terminal_index(head) else {
        return Err(Error::ExpectedNonTerminal(head.to_string()));
    };

    let mut symbols: Vec<Symbol> = Vec::new();
    for name in body.split_whitespace() {
        symbols.push(parse_symbol(symbol_table, name)?);
    }

    // Verify the production body is valid
    if symbols.is_empty() {
        return Err(Error::EmptyProductionBody(head.to_string()));
    } else if symbols.len() > 1 && symbols.contains(&Symbol::Empty) {
        return Err(Error::EmptyNotAlone);
    }

    Ok(Production {
        head: head_id,
        body: symbols,
    })
}

/// Resolves a symbol name
fn parse_symbol(symbol_table: &SymbolTable, name: &str) -> Result<Symbol> {
    if name == EPSILON {
        return Ok(Symbol::Empty);
    }

    if let Some(i) = symbol_table.terminal_index(name) {
        Ok(Symbol::Terminal(i))
    } else if let Some(i) = symbol_table.non_terminal_index(name) {
        Ok(Symbol::NonTerminal(i))
    } else {
        Err(Error::UnknownSymbol(name.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn symbol_table() -> SymbolTable {
        let mut st = SymbolTable::new();
        for t in ["id", "addsub"] {
            st.add_terminal(t).unwrap();
        }
        for nt in ["EXPR", "TAIL"] {
            st.add_non_terminal(nt).unwrap();
        }
        st
    }

    #[test]
    fn test_parse() -> Result<()> {
        let productions = parse(
            &symbol_table(),
            "EXPR -> id TAIL\n\n   TAIL -> addsub id TAIL\nTAIL -> e\n",
        )?;

        assert_eq!(productions.len(), 3);
        assert_eq!(productions[0].head, 0);
        assert_eq!(
            productions[1].body,
            vec![Symbol::Terminal(1), Symbol::Terminal(0), Symbol::NonTerminal(1)]
        );
        assert_eq!(productions[2].body, vec![Symbol::Empty]);
        assert_eq!(productions[2].len(), 0);

        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        let st = symbol_table();

        assert!(matches!(parse(&st, "\n  \n"), Err(Error::EmptyGrammar)));
        assert!(matches!(
            parse(&st, "EXPR id"),
            Err(Error::ExpectedProductionSymbol(_))
        ));
        assert!(matches!(
            parse(&st, "id -> EXPR"),
            Err(Error::ExpectedNonTerminal(s)) if s == "id"
        ));
        assert!(matches!(
            parse(&st, "EXPR -> id multdiv"),
            Err(Error::UnknownSymbol(s)) if s == "multdiv"
        ));
        assert!(matches!(
            parse(&st, "EXPR ->"),
            Err(Error::EmptyProductionBody(s)) if s == "EXPR"
        ));
        assert!(matches!(parse(&st, "TAIL -> e id"), Err(Error::EmptyNotAlone)));
    }
}
