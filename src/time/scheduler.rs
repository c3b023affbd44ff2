use std::collections::BTreeMap;

use web_time::Duration;

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    deadline: Duration,
    task: T,
}

/// One-shot tasks due at a point in time, with cancel and reschedule.
///
/// Nothing runs on its own: the owner calls [`poll`](Self::poll) once per
/// frame and acts on the tasks that came due. Dropping the scheduler drops
/// every pending task.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    entries: BTreeMap<TaskId, Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to come due at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let _ = self.entries.insert(id, Entry { deadline, task });
        id
    }

    /// Move a pending task to a new deadline. Returns `false` if the task
    /// already fired or was cancelled.
    pub fn reschedule(&mut self, id: TaskId, deadline: Duration) -> bool {
        self.entries.get_mut(&id).is_some_and(|entry| {
            entry.deadline = deadline;
            true
        })
    }

    /// Cancel a pending task, returning it if it had not fired yet.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        self.entries.remove(&id).map(|entry| entry.task)
    }

    /// Whether the task is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Deadline of a pending task.
    #[must_use]
    pub fn deadline(&self, id: TaskId) -> Option<Duration> {
        self.entries.get(&id).map(|entry| entry.deadline)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first (ties in scheduling order).
    pub fn poll(&mut self, now: Duration) -> Vec<T> {
        let mut due: Vec<(Duration, TaskId)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(id, entry)| (entry.deadline, *id))
            .collect();
        due.sort_unstable();
        due.into_iter()
            .filter_map(|(_, id)| self.entries.remove(&id))
            .map(|entry| entry.task)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn poll_returns_due_tasks_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.schedule(ms(30), "c");
        let _ = scheduler.schedule(ms(10), "a");
        let _ = scheduler.schedule(ms(20), "b");
        let _ = scheduler.schedule(ms(99), "late");

        assert!(scheduler.poll(ms(5)).is_empty());
        assert_eq!(scheduler.poll(ms(30)), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn reschedule_moves_deadline() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(ms(160), ());
        assert!(scheduler.reschedule(id, ms(190)));
        assert!(scheduler.poll(ms(160)).is_empty());
        assert_eq!(scheduler.poll(ms(190)).len(), 1);
        // fired tasks can no longer be rescheduled
        assert!(!scheduler.reschedule(id, ms(500)));
        assert!(!scheduler.is_pending(id));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(ms(10), 7);
        assert_eq!(scheduler.deadline(id), Some(ms(10)));
        assert_eq!(scheduler.cancel(id), Some(7));
        assert_eq!(scheduler.cancel(id), None);
        assert!(scheduler.poll(ms(100)).is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.schedule(ms(1), 'x');
        let _ = scheduler.schedule(ms(2), 'y');
        scheduler.clear();
        assert_eq!(scheduler.pending(), 0);
    }
}
