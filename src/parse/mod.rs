use logos::Logos;
use thiserror::Error;

use self::token::{LexerError, Token};

pub mod token;

/// Hard bound on the number of arguments in one command; anything past it is
/// dropped without an error.
pub const MAX_ARGS: usize = 64;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to tokenize command")]
    Lexer(Vec<LexerError>),
    #[error("unexpected `|` in command")]
    UnexpectedPipe,
}

/// One whitespace-tokenized command: its argument vector plus whether a `&`
/// marked it for background execution. Redirection operators survive as
/// literal `"<"` / `">"` entries so they can be applied by the child process
/// that owns the streams.
#[derive(Debug, Default, PartialEq)]
pub struct Tokenized {
    pub args: Vec<String>,
    pub background: bool,
}

impl Tokenized {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Split a raw line into pipeline stage texts. Done before whitespace
/// tokenization; each stage is tokenized on its own later.
pub fn split_pipeline(line: &str) -> Vec<&str> {
    line.split('|').collect()
}

/// Tokenize one command line (or one pipeline stage). A `&` token ends the
/// scan and sets the background flag; since `&` is its own lexeme, both
/// `sleep 5 &` and `sleep 5&` produce the same result.
pub fn tokenize(line: &str) -> Result<Tokenized, ParseError> {
    let tokens = Token::lexer(line).collect::<Vec<_>>();

    if tokens.iter().any(|r| r.is_err()) {
        return Err(ParseError::Lexer(
            tokens.into_iter().filter_map(|r| r.err()).collect(),
        ));
    }

    let mut args = Vec::new();
    let mut background = false;

    for token in tokens.into_iter().map(|r| r.unwrap()) {
        let word = match token {
            Token::Word(word) => word,
            Token::ReadFrom => "<",
            Token::WriteTo => ">",
            Token::Background => {
                background = true;
                break;
            }
            Token::Pipe => return Err(ParseError::UnexpectedPipe),
        };
        if args.len() == MAX_ARGS {
            break;
        }
        args.push(word.to_owned());
    }

    Ok(Tokenized { args, background })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        tokenize(line).unwrap().args
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(args("ls   -l \t foo"), ["ls", "-l", "foo"]);
    }

    #[test]
    fn empty_line_yields_no_args() {
        let parsed = tokenize("   \t ").unwrap();
        assert!(parsed.is_empty());
        assert!(!parsed.background);
    }

    #[test]
    fn standalone_ampersand_sets_background() {
        let parsed = tokenize("sleep 5 &").unwrap();
        assert_eq!(parsed.args, ["sleep", "5"]);
        assert!(parsed.background);
    }

    #[test]
    fn trailing_ampersand_sets_background() {
        let parsed = tokenize("sleep 5&").unwrap();
        assert_eq!(parsed.args, ["sleep", "5"]);
        assert!(parsed.background);
    }

    #[test]
    fn tokens_after_ampersand_are_dropped() {
        let parsed = tokenize("echo hi & echo bye").unwrap();
        assert_eq!(parsed.args, ["echo", "hi"]);
        assert!(parsed.background);
    }

    #[test]
    fn redirection_operators_become_their_own_args() {
        assert_eq!(args("cat<in >out"), ["cat", "<", "in", ">", "out"]);
    }

    #[test]
    fn argument_count_is_bounded() {
        let line = vec!["x"; MAX_ARGS + 10].join(" ");
        assert_eq!(args(&line).len(), MAX_ARGS);
    }

    #[test]
    fn pipeline_splits_into_stages() {
        assert_eq!(split_pipeline("a -1 | b | c"), ["a -1 ", " b ", " c"]);
        assert_eq!(split_pipeline("solo").len(), 1);
    }
}
