use crate::msg::{Effect, Msg, StoreEvent};
use gitcompare_core::domain::RepoSpec;
use gitcompare_core::services::ComparisonCoordinator;
use std::sync::{Arc, mpsc};

use super::executor::TaskExecutor;
use super::throttle::ThrottledScheduler;

pub(super) struct EffectRunner {
    pub(super) repo: RepoSpec,
    pub(super) coordinator: Arc<dyn ComparisonCoordinator>,
    pub(super) intents: TaskExecutor,
    pub(super) merges: TaskExecutor,
    pub(super) scheduler: ThrottledScheduler,
    pub(super) msg_tx: mpsc::Sender<Msg>,
    pub(super) event_tx: mpsc::Sender<StoreEvent>,
}

impl EffectRunner {
    pub(super) fn schedule(&mut self, effect: Effect) {
        match effect {
            Effect::InitializeComparison => {
                let (coordinator, repo) = self.handles();
                self.intents
                    .spawn(move || coordinator.initialize_comparison(&repo));
            }

            Effect::ExecuteComparison(action) => {
                let (coordinator, repo) = self.handles();
                self.intents
                    .spawn(move || coordinator.execute_comparison(&repo, &action));
            }

            Effect::MergeBranch { branch } => {
                let (coordinator, repo) = self.handles();
                let msg_tx = self.msg_tx.clone();
                self.merges.spawn(move || {
                    let result = coordinator.merge_branch(&repo, &branch);
                    let _ = msg_tx.send(Msg::MergeFinished { branch, result });
                });
            }

            Effect::LoadNextHistoryBatch => {
                let (coordinator, repo) = self.handles();
                let msg_tx = self.msg_tx.clone();
                self.intents.spawn(move || {
                    let result = coordinator.load_next_history_batch(&repo);
                    let _ = msg_tx.send(Msg::HistoryBatchFinished(result));
                });
            }

            Effect::ChangeCommitSelection { commit_id } => {
                let (coordinator, repo) = self.handles();
                self.intents
                    .spawn(move || coordinator.change_commit_selection(&repo, &commit_id));
            }

            Effect::LoadChangedFilesForSelection => {
                let (coordinator, repo) = self.handles();
                self.scheduler.queue(move || {
                    tracing::debug!("loading changed files for selected commit");
                    coordinator.load_changed_files_for_selection(&repo);
                });
            }

            Effect::FocusFilterInput { handle } => {
                let _ = self.event_tx.send(StoreEvent::FocusFilterInput { handle });
            }

            Effect::BlurFilterInput => {
                let _ = self.event_tx.send(StoreEvent::BlurFilterInput);
            }

            Effect::MoveBranchListSelection { delta } => {
                let _ = self
                    .event_tx
                    .send(StoreEvent::MoveBranchListSelection { delta });
            }

            Effect::DisposeScheduler => {
                self.scheduler.dispose();
            }
        }
    }

    fn handles(&self) -> (Arc<dyn ComparisonCoordinator>, RepoSpec) {
        (Arc::clone(&self.coordinator), self.repo.clone())
    }
}
