use super::Builtin;

#[derive(Default)]
pub struct Cp;

impl Builtin for Cp {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn run(&self, args: &[String]) -> u8 {
        let (source, dest) = match args {
            [source, dest] => (source, dest),
            _ => {
                eprintln!("usage: cp source dest");
                return 1;
            }
        };

        match std::fs::copy(source, dest) {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("cp: {err}");
                1
            }
        }
    }
}
