use logos::Logos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Error)]
pub enum LexerError {
    #[default]
    #[error("unknown token")]
    UnknownToken,
}

/// Lexemes of a single command line (or pipeline stage). There is no quoting
/// or escaping grammar; anything that is not whitespace or an operator is a
/// word.
#[derive(Debug, PartialEq, Logos)]
#[logos(skip r"[ \t\n\f]+", error = LexerError)]
pub enum Token<'a> {
    #[token("|")]
    Pipe,
    #[token("<")]
    ReadFrom,
    #[token(">")]
    WriteTo,
    #[token("&")]
    Background,

    #[regex(r"[^ \t\n\f|<>&]+")]
    Word(&'a str),
}
