//! Run-once tasks deferred to the next idle tick of the event loop

use std::collections::VecDeque;

use super::host::EditorHost;

/// Work scheduled from inside a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleTask {
    /// Re-enable menu accelerators suspended for terminal passthrough
    RestoreMenuAccelerators,
}

/// FIFO of pending idle tasks
#[derive(Debug, Default)]
pub struct IdleQueue {
    tasks: VecDeque<IdleTask>,
}

impl IdleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task; a task already pending is not queued twice
    pub fn schedule(&mut self, task: IdleTask) {
        if !self.tasks.contains(&task) {
            self.tasks.push_back(task);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Run and drain every pending task, returning how many ran
    pub fn run_pending(&mut self, host: &mut dyn EditorHost) -> usize {
        let mut ran = 0;
        while let Some(task) = self.tasks.pop_front() {
            tracing::trace!(?task, "running idle task");
            match task {
                IdleTask::RestoreMenuAccelerators => host.set_menu_accelerators_enabled(true),
            }
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::command::Command;
    use crate::keymap::context::KeyContext;

    #[derive(Default)]
    struct AccelHost {
        enabled: Vec<bool>,
    }

    impl EditorHost for AccelHost {
        fn key_context(&self) -> KeyContext {
            KeyContext::default()
        }

        fn execute(&mut self, _command: Command) {}

        fn set_menu_accelerators_enabled(&mut self, enabled: bool) {
            self.enabled.push(enabled);
        }
    }

    #[test]
    fn test_schedule_deduplicates() {
        let mut queue = IdleQueue::new();
        queue.schedule(IdleTask::RestoreMenuAccelerators);
        queue.schedule(IdleTask::RestoreMenuAccelerators);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_run_pending_drains() {
        let mut queue = IdleQueue::new();
        let mut host = AccelHost::default();
        queue.schedule(IdleTask::RestoreMenuAccelerators);

        assert_eq!(queue.run_pending(&mut host), 1);
        assert!(queue.is_empty());
        assert_eq!(host.enabled, vec![true]);

        assert_eq!(queue.run_pending(&mut host), 0);
        assert_eq!(host.enabled, vec![true]);
    }
}
