use super::Builtin;

#[derive(Default)]
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    /// Changes the working directory of the calling process. The dispatcher
    /// forks every command, so this only moves the child; the shell's own
    /// cwd is untouched.
    fn run(&self, args: &[String]) -> u8 {
        let path = match args {
            [path] => path,
            _ => {
                eprintln!("usage: cd directory");
                return 1;
            }
        };

        match std::env::set_current_dir(path) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("cd: {path}: {err}");
                1
            }
        }
    }
}
