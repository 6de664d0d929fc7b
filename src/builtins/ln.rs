use super::Builtin;

#[derive(Default)]
pub struct Ln;

impl Builtin for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    /// Hard-links source to dest.
    fn run(&self, args: &[String]) -> u8 {
        let (source, dest) = match args {
            [source, dest] => (source, dest),
            _ => {
                eprintln!("usage: ln source dest");
                return 1;
            }
        };

        match std::fs::hard_link(source, dest) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("ln: {err}");
                1
            }
        }
    }
}
