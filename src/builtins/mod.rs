use enum_dispatch::enum_dispatch;
use strum::{EnumIter, IntoEnumIterator};

pub mod cat;
pub mod cd;
pub mod cp;
pub mod ln;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod rm;
pub mod rmdir;

/// A builtin filesystem command. Builtins always run inside a forked child,
/// so a failing builtin only takes down that child; errors go to stderr and
/// the returned status becomes the child's exit code.
#[enum_dispatch(Builtins)]
pub trait Builtin {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[String]) -> u8;
}

#[enum_dispatch]
#[derive(EnumIter)]
pub enum Builtins {
    Ls(ls::Ls),
    Pwd(pwd::Pwd),
    Cd(cd::Cd),
    Mkdir(mkdir::Mkdir),
    Rmdir(rmdir::Rmdir),
    Ln(ln::Ln),
    Cp(cp::Cp),
    Rm(rm::Rm),
    Mv(mv::Mv),
    Cat(cat::Cat),
}

impl Builtins {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|cmd| cmd.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, args: &[&str]) -> u8 {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Builtins::from_name(name).unwrap().run(&args)
    }

    #[test]
    fn lookup_matches_every_builtin() {
        for name in [
            "ls", "pwd", "cd", "mkdir", "rmdir", "ln", "cp", "rm", "mv", "cat",
        ] {
            let builtin = Builtins::from_name(name).unwrap();
            assert_eq!(builtin.name(), name);
        }
        assert!(Builtins::from_name("grep").is_none());
    }

    #[test]
    fn excess_arguments_are_rejected() {
        assert_eq!(run("pwd", &["unexpected", "junk"]), 1);
        assert_eq!(run("ls", &["-l"]), 1);
        assert_eq!(run("cd", &["a", "b"]), 1);
        assert_eq!(run("rm", &["a", "b"]), 1);
        assert_eq!(run("cp", &["a", "b", "c"]), 1);
        assert_eq!(run("cat", &["a", "b"]), 1);
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert_eq!(run("cd", &[]), 1);
        assert_eq!(run("mkdir", &[]), 1);
        assert_eq!(run("ln", &["only-source"]), 1);
        assert_eq!(run("mv", &[]), 1);
    }
}
