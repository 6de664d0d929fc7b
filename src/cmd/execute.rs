use std::ffi::CString;

use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{execvp, fork, ForkResult, Pid};

use crate::builtins::{Builtin, Builtins};
use crate::jobs::JobRegistry;
use crate::parse::Tokenized;

use super::{die, redirect, ExecError};

/// Runs one non-pipeline command. Every command, builtin or external, runs
/// in a fresh child; the parent either waits for exactly that pid
/// (foreground) or registers the job and returns to the prompt at once
/// (background).
pub fn run(parsed: Tokenized, line: &str, jobs: &mut JobRegistry) -> Result<(), ExecError> {
    let Tokenized { args, background } = parsed;

    match unsafe { fork() }.map_err(ExecError::Fork)? {
        ForkResult::Child => exec_child(args),
        ForkResult::Parent { child } => {
            trace!(%child, background, "spawned command");
            if background {
                match jobs.push(child, line) {
                    Some(seq) => println!("[{seq}] {child}"),
                    None => eprintln!("minish: job table full, {child} is not tracked"),
                }
            } else {
                wait_foreground(child);
            }
            Ok(())
        }
    }
}

/// Blocks until exactly `child` has terminated. SIGCHLD is delivered for
/// foreground children too; the restartable wait just resumes.
pub(crate) fn wait_foreground(child: Pid) {
    loop {
        match waitpid(child, None) {
            Err(Errno::EINTR) => continue,
            _ => break,
        }
    }
}

/// Child-side tail, shared with pipeline stages: apply the redirections
/// found in the argument vector, then run a matched builtin and exit with
/// its status, or replace the process image via PATH lookup. Never returns.
pub(crate) fn exec_child(mut args: Vec<String>) -> ! {
    if let Err(err) = redirect::apply(&mut args) {
        die(&format!("minish: {err}"), 1);
    }
    if args.is_empty() {
        die("minish: empty command", 2);
    }

    if let Some(builtin) = Builtins::from_name(&args[0]) {
        let status = builtin.run(&args[1..]);
        unsafe { nix::libc::_exit(status as i32) }
    }

    let argv = match args
        .iter()
        .map(|arg| CString::new(arg.as_str()))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(argv) => argv,
        Err(err) => die(&format!("minish: {err}"), 1),
    };

    // Only reachable when the image replacement failed.
    let err = execvp(&argv[0], &argv).unwrap_err();
    die(&format!("minish: {}: {err}", args[0]), 127)
}
