use std::sync::atomic::{AtomicBool, Ordering};

use nix::errno::Errno;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::jobs::{BackgroundJob, JobRegistry};

static CHILD_TERMINATED: AtomicBool = AtomicBool::new(false);

/// SIGCHLD handler. It runs in signal context and can interrupt the main
/// loop at any point, so it only flips the flag; all waiting and printing
/// happens later, on the main loop's own turn.
extern "C" fn on_sigchld(_: nix::libc::c_int) {
    CHILD_TERMINATED.store(true, Ordering::SeqCst);
}

pub fn install() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_sigchld),
        SaFlags::SA_RESTART | SaFlags::SA_NOCLDSTOP,
        SigSet::empty(),
    );
    unsafe { sigaction(Signal::SIGCHLD, &action) }?;
    Ok(())
}

/// Collects every already-terminated child without blocking, until none
/// remain. Pids found in the registry are removed and returned for
/// reporting; unknown pids (a foreground child racing the notification) are
/// discarded, so no zombie accumulates either way.
pub fn drain(jobs: &mut JobRegistry) -> Vec<BackgroundJob> {
    let mut reaped = Vec::new();
    if !CHILD_TERMINATED.swap(false, Ordering::SeqCst) {
        return reaped;
    }

    loop {
        match waitpid(None::<Pid>, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(status) => {
                if let Some(pid) = status.pid() {
                    trace!(%pid, ?status, "reaped child");
                    if let Some(job) = jobs.remove(pid) {
                        reaped.push(job);
                    }
                }
            }
            Err(Errno::ECHILD) => break,
            Err(Errno::EINTR) => continue,
            Err(err) => {
                warn!(%err, "waitpid failed while draining");
                break;
            }
        }
    }
    reaped
}
