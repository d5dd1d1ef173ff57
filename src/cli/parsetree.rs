use crate::errors::{Error, Result};
use crate::parsers::lr::{PTable, Parser};
use log::info;
use std::path::{Path, PathBuf};

/// Parses the tokens in the given source text and returns the rendered
/// syntax tree
pub fn analyze<T: PTable>(parser: &Parser<T>, source: &str) -> Result<String> {
    Ok(parser.parse_str(source)?.render(parser.grammar()))
}

/// Returns the path the result for the given input file is saved to by
/// default, which is the input path with its extension replaced by `.out`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("out")
}

/// Analyzes the given file, printing either its syntax tree or the
/// diagnostic for its first error, and saving the same text unless save is
/// false. Returns true if the file parsed successfully. Errors other than
/// syntax errors are returned without being printed or saved.
pub fn output<T: PTable>(
    parser: &Parser<T>,
    input: &Path,
    output: Option<&Path>,
    save: bool,
) -> Result<bool> {
    if !input.is_file() {
        return Err(Error::NoSuchFile(input.display().to_string()));
    }

    let source = std::fs::read_to_string(input)?;
    let (result, parsed) = match analyze(parser, &source) {
        Ok(tree) => (tree, true),
        Err(e) if e.is_syntax_error() => (e.to_string(), false),
        Err(e) => return Err(e),
    };

    println!("{}", result);

    if save {
        let path = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
        std::fs::write(&path, &result)?;
        info!("saved result to '{}'", path.display());

        println!("\nOutput has been saved as '{}'", path.display());
    }

    Ok(parsed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::language;
    use crate::test::read_test_file;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dir/prog.txt")),
            PathBuf::from("dir/prog.out")
        );
        assert_eq!(default_output_path(Path::new("prog")), PathBuf::from("prog.out"));
    }

    #[test]
    fn test_analyze() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let parser = language::parser()?;
        assert_eq!(
            analyze(&parser, &read_test_file("programs/function.txt"))?,
            read_test_file("programs/function.out")
        );

        Ok(())
    }

    #[test]
    fn test_analyze_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let parser = language::parser()?;
        match analyze(&parser, "vtype id assign num\nsemi semi") {
            Err(e) => assert_eq!(
                e.to_string(),
                "[Error] Unexpected token at line 2, column 2: semi"
            ),
            Ok(_) => panic!("no error"),
        }

        Ok(())
    }
}
