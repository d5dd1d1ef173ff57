use clap::Parser;
use env_logger::Env;
use slr::cli::args::{Commands, Options};
use slr::cli::{info, output, parsetree, productions, tokens};
use slr::errors::{Error, Result};
use slr::language;
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = Options::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = options.log_level {
        logger.filter_level(level);
    }
    logger.init();

    match run(options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e @ Error::NoSuchFile(_)) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("slr: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the requested command, returning false if the analyzed input was
/// rejected
fn run(options: Options) -> Result<bool> {
    let parser = language::parser()?;

    match options.command {
        Some(Commands::Grammar) => {
            output::output(parser.grammar());
        }
        Some(Commands::Info { verbose }) => {
            info::output(parser.table(), verbose);
        }
        Some(Commands::Productions) => {
            productions::output(parser.grammar());
        }
        Some(Commands::Tokens { input }) => {
            tokens::output(parser.grammar(), &input)?;
        }
        None => {
            let Some(input) = options.input else {
                println!("Usage: slr <input file>");
                return Ok(false);
            };

            return parsetree::output(
                &parser,
                &input,
                options.output.as_deref(),
                !options.no_save,
            );
        }
    }

    Ok(true)
}
