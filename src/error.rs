use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ParsecError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),
}

/// A recoverable parse failure, carried inside `Outcome::Failure`.
///
/// These are ordinary return values: `or` catches them and tries an
/// alternative, the sequencing combinators short-circuit on them. They never
/// abort the process.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected '{expected}', reached end of input")]
    #[diagnostic(
        code(parse::unexpected_eof),
        help("The input ended before the parser could match what it was looking for.")
    )]
    UnexpectedEnd { expected: String },

    #[error("expected '{expected}', found '{found}' in \"{rest}\"")]
    #[diagnostic(code(parse::unexpected_char))]
    Unexpected {
        expected: String,
        found: char,
        /// The input that was still unconsumed when the match failed. The
        /// document layer uses its length to locate the failure in the
        /// original source.
        rest: String,
    },

    #[error("number literal '{text}' is out of range")]
    #[diagnostic(code(parse::malformed_number))]
    MalformedNumber { text: String },
}

impl ParseError {
    /// The unconsumed input at the point of failure, when known.
    pub fn remaining(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedEnd { .. } => Some(""),
            ParseError::Unexpected { rest, .. } => Some(rest),
            ParseError::MalformedNumber { .. } => None,
        }
    }
}

/// Errors produced by the document-level API (`analyze`, `analyze_file`).
#[derive(Error, Debug, Diagnostic)]
pub enum DocumentError {
    #[error("syntax error")]
    #[diagnostic(
        code(document::syntax),
        help("The document does not match the grammar at the marked position.")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("trailing characters after the document")]
    #[diagnostic(
        code(document::trailing_input),
        help("The grammar matched a complete value but input was left over.")
    )]
    TrailingInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("input beyond this point was not consumed")]
        span: SourceSpan,
    },

    #[error("could not read '{path}'")]
    #[diagnostic(code(document::unreadable))]
    Unreadable { path: String },
}
