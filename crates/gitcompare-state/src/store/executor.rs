use std::sync::{Arc, Mutex, mpsc};
use std::thread;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Small worker pool. With a single thread, tasks run in submission order.
pub(super) struct TaskExecutor {
    tx: mpsc::Sender<Task>,
    _threads: Vec<thread::JoinHandle<()>>,
}

impl TaskExecutor {
    pub(super) fn new(name: &str, threads: usize) -> Self {
        let (tx, rx) = mpsc::channel::<Task>();
        let rx = Arc::new(Mutex::new(rx));

        let mut worker_threads = Vec::with_capacity(threads);
        for ix in 0..threads.max(1) {
            let rx = Arc::clone(&rx);
            let spawned = thread::Builder::new()
                .name(format!("{name}-{ix}"))
                .spawn(move || {
                    loop {
                        let task = {
                            let Ok(rx) = rx.lock() else {
                                break;
                            };
                            rx.recv()
                        };
                        match task {
                            Ok(task) => task(),
                            Err(_) => break,
                        }
                    }
                });
            match spawned {
                Ok(handle) => worker_threads.push(handle),
                Err(err) => tracing::warn!(error = %err, executor = name, "failed to start worker"),
            }
        }

        Self {
            tx,
            _threads: worker_threads,
        }
    }

    pub(super) fn spawn(&self, task: impl FnOnce() + Send + 'static) {
        let _ = self.tx.send(Box::new(task));
    }
}
