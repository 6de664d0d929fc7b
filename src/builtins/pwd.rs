use super::Builtin;

#[derive(Default)]
pub struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn run(&self, args: &[String]) -> u8 {
        if !args.is_empty() {
            eprintln!("usage: pwd");
            return 1;
        }

        match std::env::current_dir() {
            Ok(cwd) => {
                println!("{}", cwd.display());
                0
            }
            Err(err) => {
                eprintln!("pwd: {err}");
                1
            }
        }
    }
}
