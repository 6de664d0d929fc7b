use super::Builtin;

#[derive(Default)]
pub struct Rmdir;

impl Builtin for Rmdir {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn run(&self, args: &[String]) -> u8 {
        let path = match args {
            [path] => path,
            _ => {
                eprintln!("usage: rmdir directory");
                return 1;
            }
        };

        match std::fs::remove_dir(path) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("rmdir: {path}: {err}");
                1
            }
        }
    }
}
