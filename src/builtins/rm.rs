use super::Builtin;

#[derive(Default)]
pub struct Rm;

impl Builtin for Rm {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn run(&self, args: &[String]) -> u8 {
        let path = match args {
            [path] => path,
            _ => {
                eprintln!("usage: rm file");
                return 1;
            }
        };

        match std::fs::remove_file(path) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("rm: {path}: {err}");
                1
            }
        }
    }
}
