use super::common;
use crate::grammar::Grammar;

/// Outputs an ordered list of the productions in the grammar, with the
/// indices that reduce actions refer to
pub fn output(g: &Grammar) {
    for line in format(g) {
        println!("{}", line);
    }
}

fn format(g: &Grammar) -> Vec<String> {
    let n_width = common::index_width(g.num_productions());
    let head_width = common::longest_non_terminal_name(g);

    (0..g.num_productions())
        .map(|i| {
            format!(
                "{:>n$}: {:h$} → {}",
                i,
                g.non_terminal_name(g.production(i).head),
                g.format_production_body(i),
                n = n_width,
                h = head_width
            )
        })
        .collect()
}
