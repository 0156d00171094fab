use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Latest-wins debounce: a pushed item replaces any pending one and restarts the window.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Debounced<T> {
    pending: Option<T>,
    last_pushed_at: Option<Instant>,
    window: Duration,
}

impl<T> Debounced<T> {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            pending: None,
            last_pushed_at: None,
            window,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the item that was replaced, if any.
    pub(crate) fn push(&mut self, item: T, now: Instant) -> Option<T> {
        self.last_pushed_at = Some(now);
        self.pending.replace(item)
    }

    pub(crate) fn next_timeout(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref()?;
        let last = self.last_pushed_at?;
        Some((last + self.window).saturating_duration_since(now))
    }

    pub(crate) fn take_if_due(&mut self, now: Instant) -> Option<T> {
        let timeout = self.next_timeout(now)?;
        if timeout.is_zero() { self.clear() } else { None }
    }

    pub(crate) fn clear(&mut self) -> Option<T> {
        self.last_pushed_at = None;
        self.pending.take()
    }
}

type Action = Box<dyn FnOnce() + Send + 'static>;

enum SchedulerMsg {
    Queue(Action),
    Cancel,
    Stop,
}

/// Runs the most recently queued action once the quiescence window has passed.
///
/// Actions run on the scheduler's own thread. Dropping the scheduler (or calling
/// [`ThrottledScheduler::dispose`]) discards anything still pending.
pub struct ThrottledScheduler {
    msg_tx: mpsc::Sender<SchedulerMsg>,
    join: Option<thread::JoinHandle<()>>,
}

impl ThrottledScheduler {
    pub fn new(window: Duration) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<SchedulerMsg>();
        let join = thread::Builder::new()
            .name("gitcompare-throttle".to_string())
            .spawn(move || scheduler_thread(window, msg_rx))
            .map_err(|err| tracing::warn!(error = %err, "failed to start throttle thread"))
            .ok();

        Self { msg_tx, join }
    }

    pub fn queue(&self, action: impl FnOnce() + Send + 'static) {
        let _ = self.msg_tx.send(SchedulerMsg::Queue(Box::new(action)));
    }

    pub fn cancel(&self) {
        let _ = self.msg_tx.send(SchedulerMsg::Cancel);
    }

    pub fn is_disposed(&self) -> bool {
        self.join.is_none()
    }

    pub fn dispose(&mut self) {
        let Some(join) = self.join.take() else {
            return;
        };
        let _ = self.msg_tx.send(SchedulerMsg::Stop);
        let _ = join.join();
    }
}

impl Drop for ThrottledScheduler {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn scheduler_thread(window: Duration, msg_rx: mpsc::Receiver<SchedulerMsg>) {
    let mut debouncer: Debounced<Action> = Debounced::new(window);

    loop {
        let received = if debouncer.is_pending() {
            let timeout = debouncer
                .next_timeout(Instant::now())
                .unwrap_or(Duration::ZERO);
            msg_rx.recv_timeout(timeout)
        } else {
            msg_rx
                .recv()
                .map_err(|_| mpsc::RecvTimeoutError::Disconnected)
        };

        match received {
            Ok(SchedulerMsg::Queue(action)) => {
                if debouncer.push(action, Instant::now()).is_some() {
                    tracing::trace!("replaced pending throttled action");
                }
            }
            Ok(SchedulerMsg::Cancel) => {
                debouncer.clear();
            }
            Ok(SchedulerMsg::Stop) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if let Some(action) = debouncer.take_if_due(Instant::now()) {
                    action();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn debouncer_replaces_pending_and_flushes_after_quiet_window() {
        let base = Instant::now();
        let mut d = Debounced::new(Duration::from_millis(100));

        assert_eq!(d.push(1, base), None);
        assert!(d.is_pending());

        // A newer push replaces the old one and restarts the window.
        assert_eq!(d.push(2, base + Duration::from_millis(60)), Some(1));
        assert_eq!(d.take_if_due(base + Duration::from_millis(100)), None);
        assert_eq!(d.take_if_due(base + Duration::from_millis(159)), None);

        assert_eq!(d.take_if_due(base + Duration::from_millis(160)), Some(2));
        assert!(!d.is_pending());
        assert_eq!(d.take_if_due(base + Duration::from_millis(500)), None);
    }

    #[test]
    fn debouncer_has_no_timeout_when_idle() {
        let base = Instant::now();
        let mut d: Debounced<u8> = Debounced::new(Duration::from_millis(100));
        assert_eq!(d.next_timeout(base), None);

        d.push(7, base);
        assert_eq!(
            d.next_timeout(base + Duration::from_millis(30)),
            Some(Duration::from_millis(70))
        );
        assert_eq!(d.clear(), Some(7));
        assert_eq!(d.next_timeout(base), None);
    }

    #[test]
    fn rapid_queue_calls_run_only_the_last_action() {
        let scheduler = ThrottledScheduler::new(Duration::from_millis(40));
        let (done_tx, done_rx) = mpsc::channel::<usize>();

        for n in 1..=10 {
            let done_tx = done_tx.clone();
            scheduler.queue(move || {
                let _ = done_tx.send(n);
            });
        }

        assert_eq!(
            done_rx.recv_timeout(Duration::from_secs(5)),
            Ok(10),
            "expected the last queued action to run"
        );
        assert!(
            done_rx.recv_timeout(Duration::from_millis(200)).is_err(),
            "expected exactly one execution"
        );
    }

    #[test]
    fn cancelled_action_never_runs() {
        let scheduler = ThrottledScheduler::new(Duration::from_millis(40));
        let ran = Arc::new(Mutex::new(false));

        {
            let ran = Arc::clone(&ran);
            scheduler.queue(move || *ran.lock().expect("lock") = true);
        }
        scheduler.cancel();

        thread::sleep(Duration::from_millis(150));
        assert!(!*ran.lock().expect("lock"));
    }

    #[test]
    fn dispose_discards_pending_action() {
        let mut scheduler = ThrottledScheduler::new(Duration::from_millis(40));
        let (done_tx, done_rx) = mpsc::channel::<()>();
        scheduler.queue(move || {
            let _ = done_tx.send(());
        });

        scheduler.dispose();
        assert!(scheduler.is_disposed());
        assert!(done_rx.recv_timeout(Duration::from_millis(150)).is_err());

        // Queueing after disposal is silently dropped.
        scheduler.queue(|| panic!("must not run after disposal"));
    }
}
