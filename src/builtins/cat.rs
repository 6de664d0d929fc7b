use std::fs::File;
use std::io;

use super::Builtin;

#[derive(Default)]
pub struct Cat;

impl Builtin for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    /// Dumps one file to stdout. With no argument it reads from stdin, which
    /// lets `cat` sit in the middle of a pipeline or behind a `<` redirect.
    fn run(&self, args: &[String]) -> u8 {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        let result = match args {
            [path] => match File::open(path) {
                Ok(mut file) => io::copy(&mut file, &mut stdout),
                Err(err) => {
                    eprintln!("cat: {path}: {err}");
                    return 1;
                }
            },
            [] => io::copy(&mut io::stdin().lock(), &mut stdout),
            _ => {
                eprintln!("usage: cat [file]");
                return 1;
            }
        };

        match result {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("cat: {err}");
                1
            }
        }
    }
}
