use std::os::unix::io::RawFd;

use nix::unistd::{close, dup2, fork, pipe, ForkResult, Pid};

use crate::parse;

use super::{die, execute, ExecError};

/// Runs `stage1 | stage2 | ... | stageN` as a fully synchronous pipeline:
/// all N-1 pipes are allocated before anything is spawned, one child per
/// stage, and the parent waits for all of them before returning.
pub fn run(line: &str) -> Result<(), ExecError> {
    let stages = parse::split_pipeline(line);

    let mut pipes: Vec<(RawFd, RawFd)> = Vec::with_capacity(stages.len() - 1);
    for _ in 1..stages.len() {
        match pipe() {
            Ok(ends) => pipes.push(ends),
            Err(err) => {
                // No partial pipeline: release what was opened and abort.
                close_all(&pipes);
                return Err(ExecError::Pipe(err));
            }
        }
    }

    let mut pids: Vec<Pid> = Vec::with_capacity(stages.len());
    for (i, stage) in stages.iter().enumerate() {
        match unsafe { fork() } {
            Ok(ForkResult::Child) => exec_stage(i, stage, &pipes),
            Ok(ForkResult::Parent { child }) => pids.push(child),
            Err(err) => {
                // Closing the parent's pipe ends gives the stages already
                // running their EOF, so they can be collected here.
                close_all(&pipes);
                for pid in pids {
                    execute::wait_foreground(pid);
                }
                return Err(ExecError::Fork(err));
            }
        }
    }

    trace!(stages = pids.len(), "pipeline spawned");

    // The parent never touches the pipeline data itself.
    close_all(&pipes);
    for pid in pids {
        execute::wait_foreground(pid);
    }
    Ok(())
}

fn close_all(pipes: &[(RawFd, RawFd)]) {
    for &(read, write) in pipes {
        let _ = close(read);
        let _ = close(write);
    }
}

/// Child side of stage `i`: wire stdin to the upstream pipe and stdout to
/// the downstream one, then close every pipe descriptor. A write end left
/// open in any unrelated stage would keep its reader from ever seeing EOF
/// and hang the whole pipeline, so everything is closed after the dup2s.
fn exec_stage(i: usize, stage: &str, pipes: &[(RawFd, RawFd)]) -> ! {
    if i > 0 {
        if let Err(err) = dup2(pipes[i - 1].0, nix::libc::STDIN_FILENO) {
            die(&format!("minish: {err}"), 1);
        }
    }
    if i < pipes.len() {
        if let Err(err) = dup2(pipes[i].1, nix::libc::STDOUT_FILENO) {
            die(&format!("minish: {err}"), 1);
        }
    }
    close_all(pipes);

    // Stage text is tokenized inside the stage's own process; a trailing
    // `&` has no meaning here, pipelines are always foreground.
    match parse::tokenize(stage) {
        Ok(parsed) if !parsed.is_empty() => execute::exec_child(parsed.args),
        Ok(_) => die("minish: empty pipeline stage", 2),
        Err(err) => die(&format!("minish: {err}"), 2),
    }
}
