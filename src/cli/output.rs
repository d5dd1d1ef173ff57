use super::common;
use crate::grammar::Grammar;

/// Outputs a grammar
pub fn output(g: &Grammar) {
    for line in format(g) {
        println!("{}", line);
    }
}

/// Returns the lines of a grammar listing. Each non-terminal gets one
/// entry with its alternatives separated by bars, continued on further
/// lines beneath the arrow when it would overrun the line length.
fn format(g: &Grammar) -> Vec<String> {
    let width = common::longest_non_terminal_name(g);
    let mut lines = Vec::new();

    for nt in 0..g.num_non_terminals() {
        let bodies: Vec<String> = g
            .productions_for_non_terminal(nt)
            .iter()
            .map(|p| g.format_production_body(*p))
            .collect();

        let wrapped = common::wrap(&bodies, " | ", common::LINE_LENGTH - width - 3);
        for (i, alternatives) in wrapped.iter().enumerate() {
            if i == 0 {
                lines.push(format!("{:<w$} → {}", g.non_terminal_name(nt), alternatives, w = width));
            } else {
                lines.push(format!("{:<w$} | {}", "", alternatives, w = width));
            }
        }
    }

    lines
}
