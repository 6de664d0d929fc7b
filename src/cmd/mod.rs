use thiserror::Error;

pub mod execute;
pub mod pipeline;
pub mod redirect;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("cannot create pipe: {0}")]
    Pipe(nix::Error),
    #[error("cannot fork: {0}")]
    Fork(nix::Error),
}

/// Child-side failure exit: report and leave without running atexit
/// machinery inherited from the shell.
pub(crate) fn die(msg: &str, status: i32) -> ! {
    eprintln!("{msg}");
    unsafe { nix::libc::_exit(status) }
}
