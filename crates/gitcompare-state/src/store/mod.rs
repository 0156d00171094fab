use crate::model::SidebarState;
use crate::msg::{Msg, StoreEvent};
use crate::settings::SidebarSettings;
use crate::view::{SidebarView, project};
use gitcompare_core::domain::RepoSpec;
use gitcompare_core::services::ComparisonCoordinator;
use std::sync::{Arc, RwLock, mpsc};
use std::thread;

mod effects;
mod executor;
mod reducer;
mod throttle;

pub use reducer::reconcile;
pub use throttle::ThrottledScheduler;

use effects::EffectRunner;
use executor::TaskExecutor;
use reducer::reduce;

/// Owns the sidebar state on a dedicated thread and applies messages in order.
pub struct SidebarStore {
    state: Arc<RwLock<SidebarState>>,
    msg_tx: mpsc::Sender<Msg>,
}

impl Clone for SidebarStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            msg_tx: self.msg_tx.clone(),
        }
    }
}

impl SidebarStore {
    pub fn new(
        repo: RepoSpec,
        coordinator: Arc<dyn ComparisonCoordinator>,
        settings: SidebarSettings,
    ) -> (Self, mpsc::Receiver<StoreEvent>) {
        let state = Arc::new(RwLock::new(SidebarState::new(repo.clone(), &settings)));
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let (event_tx, event_rx) = mpsc::channel::<StoreEvent>();

        let thread_state = Arc::clone(&state);
        let thread_msg_tx = msg_tx.clone();

        thread::spawn(move || {
            let mut runner = EffectRunner {
                repo,
                coordinator,
                intents: TaskExecutor::new("gitcompare-intents", 1),
                merges: TaskExecutor::new("gitcompare-merge", 1),
                scheduler: ThrottledScheduler::new(settings.changed_files_debounce),
                msg_tx: thread_msg_tx,
                event_tx: event_tx.clone(),
            };

            while let Ok(msg) = msg_rx.recv() {
                let (effects, torn_down) = {
                    let Ok(mut sidebar) = thread_state.write() else {
                        tracing::warn!("sidebar state lock poisoned; stopping store");
                        break;
                    };
                    let effects = reduce(&mut sidebar, msg);
                    (effects, sidebar.torn_down)
                };

                let _ = event_tx.send(StoreEvent::StateChanged);

                for effect in effects {
                    runner.schedule(effect);
                }

                if torn_down {
                    break;
                }
            }
        });

        (Self { state, msg_tx }, event_rx)
    }

    pub fn dispatch(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    pub fn snapshot(&self) -> SidebarState {
        self.state
            .read()
            .expect("state lock poisoned (read)")
            .clone()
    }

    pub fn view(&self) -> SidebarView {
        project(&self.state.read().expect("state lock poisoned (read)"))
    }

    /// Releases the input handle and disposes the throttled scheduler. Messages dispatched
    /// afterwards are dropped.
    pub fn teardown(&self) {
        self.dispatch(Msg::Teardown);
    }
}
