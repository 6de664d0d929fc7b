use std::path::Path;

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{close, dup2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("missing redirection target after `{0}`")]
    MissingTarget(char),
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        source: nix::Error,
    },
    #[error(transparent)]
    Nix(#[from] nix::Error),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Input,
    Output,
}

/// One `< target` or `> target` pair spliced out of an argument vector.
#[derive(Debug, PartialEq)]
pub struct Directive {
    pub direction: Direction,
    pub target: String,
}

/// Splices every `<`/`>` operator and its operand out of `args`, preserving
/// the order of the remaining arguments. Pure argument-vector surgery; no
/// descriptors are touched, which keeps it testable.
pub fn extract(args: &mut Vec<String>) -> Result<Vec<Directive>, RedirectError> {
    let mut directives = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let direction = match args[i].as_str() {
            "<" => Direction::Input,
            ">" => Direction::Output,
            _ => {
                i += 1;
                continue;
            }
        };
        if i + 1 >= args.len() {
            let op = if direction == Direction::Input { '<' } else { '>' };
            return Err(RedirectError::MissingTarget(op));
        }
        let target = args.remove(i + 1);
        args.remove(i);
        directives.push(Directive { direction, target });
    }

    Ok(directives)
}

/// Applies every redirection found in `args` to the calling process's own
/// standard streams, in order of appearance. Meant to run in a forked child
/// just before the command itself; each opened descriptor is closed once its
/// duplicate onto fd 0/1 exists.
pub fn apply(args: &mut Vec<String>) -> Result<(), RedirectError> {
    for directive in extract(args)? {
        let (flags, mode, stdfd) = match directive.direction {
            Direction::Input => (OFlag::O_RDONLY, Mode::empty(), nix::libc::STDIN_FILENO),
            Direction::Output => (
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
                Mode::from_bits_truncate(0o644),
                nix::libc::STDOUT_FILENO,
            ),
        };
        let fd = open(Path::new(&directive.target), flags, mode).map_err(|source| {
            RedirectError::Open {
                path: directive.target.clone(),
                source,
            }
        })?;
        dup2(fd, stdfd)?;
        close(fd)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_output_directive() {
        let mut args = argv(&["echo", "hi", ">", "out.txt"]);
        let directives = extract(&mut args).unwrap();
        assert_eq!(args, ["echo", "hi"]);
        assert_eq!(
            directives,
            [Directive {
                direction: Direction::Output,
                target: "out.txt".into()
            }]
        );
    }

    #[test]
    fn extracts_input_and_output_together() {
        let mut args = argv(&["sort", "<", "in.txt", ">", "out.txt", "-r"]);
        let directives = extract(&mut args).unwrap();
        assert_eq!(args, ["sort", "-r"]);
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].direction, Direction::Input);
        assert_eq!(directives[1].direction, Direction::Output);
    }

    #[test]
    fn missing_operand_is_an_error() {
        let mut args = argv(&["cat", ">"]);
        assert!(matches!(
            extract(&mut args),
            Err(RedirectError::MissingTarget('>'))
        ));

        let mut args = argv(&["cat", "<"]);
        assert!(matches!(
            extract(&mut args),
            Err(RedirectError::MissingTarget('<'))
        ));
    }

    #[test]
    fn no_operators_is_a_no_op() {
        let mut args = argv(&["ls", "-l"]);
        assert!(extract(&mut args).unwrap().is_empty());
        assert_eq!(args, ["ls", "-l"]);
    }
}
