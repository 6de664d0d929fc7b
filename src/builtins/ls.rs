use itertools::Itertools;

use super::Builtin;

#[derive(Default)]
pub struct Ls;

impl Builtin for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    /// Lists the current directory, hidden entries skipped, names on one
    /// line in directory order.
    fn run(&self, args: &[String]) -> u8 {
        if !args.is_empty() {
            eprintln!("usage: ls");
            return 1;
        }

        let entries = match std::fs::read_dir(".") {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("ls: {err}");
                return 1;
            }
        };

        let names = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .join("  ");
        println!("{names}");
        0
    }
}
