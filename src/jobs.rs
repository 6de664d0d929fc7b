use nix::unistd::Pid;

/// One tracked background process: its pid and the line that started it.
#[derive(Debug, PartialEq, Eq)]
pub struct BackgroundJob {
    pub pid: Pid,
    pub command: String,
}

/// Insertion-ordered set of live background jobs, owned by the main loop.
/// Entries are only ever inserted by the loop and removed by the drain step;
/// removal keeps the relative order of the survivors.
#[derive(Debug)]
pub struct JobRegistry {
    jobs: Vec<BackgroundJob>,
    capacity: usize,
}

impl JobRegistry {
    pub fn new(capacity: usize) -> Self {
        JobRegistry {
            jobs: Vec::new(),
            capacity,
        }
    }

    /// Tracks a new background process and returns its one-based job number.
    /// `None` means the registry is full; the process keeps running, it just
    /// is not reported on (the drain step discards unknown pids anyway).
    pub fn push(&mut self, pid: Pid, command: &str) -> Option<usize> {
        if self.jobs.len() >= self.capacity {
            return None;
        }
        debug_assert!(self.jobs.iter().all(|job| job.pid != pid));
        self.jobs.push(BackgroundJob {
            pid,
            command: command.to_owned(),
        });
        Some(self.jobs.len())
    }

    /// Removes and returns the entry for `pid`, if one is tracked.
    pub fn remove(&mut self, pid: Pid) -> Option<BackgroundJob> {
        let idx = self.jobs.iter().position(|job| job.pid == pid)?;
        Some(self.jobs.remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackgroundJob> {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: i32) -> Pid {
        Pid::from_raw(n)
    }

    #[test]
    fn push_assigns_sequence_numbers() {
        let mut registry = JobRegistry::new(10);
        assert_eq!(registry.push(pid(100), "sleep 1 &"), Some(1));
        assert_eq!(registry.push(pid(101), "sleep 2 &"), Some(2));
    }

    #[test]
    fn removal_is_stable() {
        let mut registry = JobRegistry::new(10);
        registry.push(pid(1), "a");
        registry.push(pid(2), "b");
        registry.push(pid(3), "c");

        let removed = registry.remove(pid(2)).unwrap();
        assert_eq!(removed.command, "b");

        let remaining: Vec<_> = registry.iter().map(|job| job.pid).collect();
        assert_eq!(remaining, [pid(1), pid(3)]);
    }

    #[test]
    fn unknown_pid_removal_is_none() {
        let mut registry = JobRegistry::new(10);
        registry.push(pid(1), "a");
        assert!(registry.remove(pid(99)).is_none());
        assert!(!registry.is_empty());
    }

    #[test]
    fn full_registry_rejects_new_jobs() {
        let mut registry = JobRegistry::new(1);
        assert_eq!(registry.push(pid(1), "a"), Some(1));
        assert_eq!(registry.push(pid(2), "b"), None);
        registry.remove(pid(1));
        assert_eq!(registry.push(pid(2), "b"), Some(1));
    }
}
