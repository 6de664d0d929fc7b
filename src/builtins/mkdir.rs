use std::os::unix::fs::DirBuilderExt;

use super::Builtin;

#[derive(Default)]
pub struct Mkdir;

impl Builtin for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn run(&self, args: &[String]) -> u8 {
        let path = match args {
            [path] => path,
            _ => {
                eprintln!("usage: mkdir directory");
                return 1;
            }
        };

        match std::fs::DirBuilder::new().mode(0o755).create(path) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("mkdir: {path}: {err}");
                1
            }
        }
    }
}
