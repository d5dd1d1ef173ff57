use crate::position::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("[Error] Unknown token at {position}: {text}")]
    UnknownToken { position: Position, text: String },

    #[error("[Error] Unexpected token at {position}: {text}")]
    UnexpectedToken { position: Position, text: String },

    #[error("[Error] Unexpected EOF while parsing")]
    UnexpectedEndOfInput,

    #[error("[Error] No such file: '{0}'")]
    NoSuchFile(String),

    #[error("duplicate grammar symbol '{0}'")]
    DuplicateSymbol(String),

    #[error("'{0}' is reserved and may not be used as a grammar symbol")]
    ReservedSymbol(String),

    #[error("expected production symbol '->' in '{0}'")]
    ExpectedProductionSymbol(String),

    #[error("production head '{0}' is not a non-terminal")]
    ExpectedNonTerminal(String),

    #[error("unknown grammar symbol '{0}'")]
    UnknownSymbol(String),

    #[error("empty production body for '{0}'")]
    EmptyProductionBody(String),

    #[error("ϵ-productions may not contain other symbols")]
    EmptyNotAlone,

    #[error("grammar has no productions")]
    EmptyGrammar,

    #[error("invalid parse table: {0}")]
    InvalidTable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error is a diagnostic about the analyzed input,
    /// rather than a problem with the grammar, the table, or the environment
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownToken { .. } | Error::UnexpectedToken { .. } | Error::UnexpectedEndOfInput
        )
    }
}
