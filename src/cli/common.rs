use crate::grammar::Grammar;

pub const LINE_LENGTH: usize = 72;

/// Returns the length of the longest non-terminal name in the grammar
pub fn longest_non_terminal_name(g: &Grammar) -> usize {
    g.non_terminals()
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
}

/// Returns the number of digits needed to show indices below n
pub fn index_width(n: usize) -> usize {
    (n.saturating_sub(1).checked_ilog10().unwrap_or(0) + 1) as usize
}

/// Returns the given items joined by the separator into lines no wider than
/// the given width. An item wider than the line gets a line of its own.
pub fn wrap<S: AsRef<str>>(items: &[S], separator: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut written = 0;

    for item in items {
        let item = item.as_ref();
        let len = item.chars().count();

        if !line.is_empty() && written + separator.chars().count() + len > width {
            lines.push(std::mem::take(&mut line));
            written = 0;
        }
        if !line.is_empty() {
            line.push_str(separator);
            written += separator.chars().count();
        }
        line.push_str(item);
        written += len;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::language;

    #[test]
    fn test_longest_non_terminal_name() -> crate::errors::Result<()> {
        assert_eq!(longest_non_terminal_name(&language::grammar()?), 8);

        Ok(())
    }

    #[test]
    fn test_index_width() {
        assert_eq!(index_width(0), 1);
        assert_eq!(index_width(10), 1);
        assert_eq!(index_width(39), 2);
        assert_eq!(index_width(101), 3);
    }

    #[test]
    fn test_wrap() {
        let names: Vec<String> = ["vtype", "id", "semi", "assign"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(wrap(&names, " ", 12), vec!["vtype id", "semi assign"]);
        assert_eq!(wrap(&names, " ", 72), vec!["vtype id semi assign"]);
        assert_eq!(
            wrap(&names, " | ", 15),
            vec!["vtype | id", "semi | assign"]
        );
        assert!(wrap::<String>(&[], " ", 10).is_empty());
    }
}
