use std::time::{Duration, Instant};

/// Deferred one-shot task with a deadline, polled by its owner.
///
/// Nothing runs on its own: the owner calls [`PulseTask::fire_if_due`] from its
/// tick and reacts when it returns `true`. Dropping or cancelling the task
/// guarantees it never fires.
#[derive(Debug, Clone, Default)]
pub struct PulseTask {
    deadline: Option<Instant>,
}

impl PulseTask {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the task `delay` after `now`. A pending deadline is replaced.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Returns whether a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|until| until.saturating_duration_since(now))
    }

    /// Fires at most once per arm: `true` exactly when the deadline has been
    /// reached, after which the task is no longer pending.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(until) if until <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut task = PulseTask::new();
        task.arm(t0, Duration::from_millis(2000));

        assert!(!task.fire_if_due(t0 + Duration::from_millis(1999)));
        assert!(task.fire_if_due(t0 + Duration::from_millis(2000)));
        assert!(!task.fire_if_due(t0 + Duration::from_millis(5000)));
        assert!(!task.is_pending());
    }

    #[test]
    fn rearm_replaces_deadline() {
        let t0 = Instant::now();
        let mut task = PulseTask::new();
        task.arm(t0, Duration::from_millis(2000));
        task.arm(t0 + Duration::from_millis(1500), Duration::from_millis(2000));

        assert!(!task.fire_if_due(t0 + Duration::from_millis(2000)));
        assert_eq!(
            task.remaining(t0 + Duration::from_millis(2000)),
            Some(Duration::from_millis(1500))
        );
        assert!(task.fire_if_due(t0 + Duration::from_millis(3500)));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut task = PulseTask::new();
        task.arm(t0, Duration::from_millis(10));

        assert!(task.cancel());
        assert!(!task.cancel());
        assert!(!task.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
