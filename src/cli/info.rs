use super::common;
use crate::parsers::lr::PTable;

/// Outputs information about a parse table and its grammar
pub fn output<T: PTable>(table: &T, verbose: bool) {
    let g = table.grammar();
    let width = 24;

    println!(
        "{:w$}: {}",
        "Number of productions",
        g.num_productions(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of non-terminals",
        g.num_non_terminals(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of terminals",
        g.num_terminals(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of states",
        table.num_states(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "ϵ-productions",
        (0..g.num_productions())
            .filter(|i| g.production(*i).is_e())
            .count(),
        w = width
    );

    if verbose {
        println!(
            "{:w$}: {}",
            "Start symbol",
            g.non_terminal_name(g.start()),
            w = width
        );

        print_names("Non-terminals", g.non_terminals(), width);
        print_names("Terminals", g.terminals(), width);
    }
}

/// Prints a labelled list of names, wrapped to the line length
fn print_names(label: &str, names: &[String], width: usize) {
    for (i, line) in common::wrap(names, " ", common::LINE_LENGTH - width - 2)
        .iter()
        .enumerate()
    {
        if i == 0 {
            println!("{:w$}: {}", label, line, w = width);
        } else {
            println!("{:w$}  {}", "", line, w = width);
        }
    }
}
