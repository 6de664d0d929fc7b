use super::Builtin;

#[derive(Default)]
pub struct Mv;

impl Builtin for Mv {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn run(&self, args: &[String]) -> u8 {
        let (source, dest) = match args {
            [source, dest] => (source, dest),
            _ => {
                eprintln!("usage: mv source dest");
                return 1;
            }
        };

        match std::fs::rename(source, dest) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("mv: {err}");
                1
            }
        }
    }
}
