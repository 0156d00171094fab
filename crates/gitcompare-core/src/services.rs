use crate::domain::*;
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The party that owns the git plumbing behind the comparison sidebar.
///
/// Most methods are fire-and-forget intents: the coordinator reports progress by pushing a fresh
/// comparison snapshot back into the store. [`ComparisonCoordinator::merge_branch`] and
/// [`ComparisonCoordinator::load_next_history_batch`] also return their outcome so the sidebar
/// can release its in-flight guards.
pub trait ComparisonCoordinator: Send + Sync {
    fn initialize_comparison(&self, repo: &RepoSpec);
    fn execute_comparison(&self, repo: &RepoSpec, action: &CompareAction);
    fn merge_branch(&self, repo: &RepoSpec, branch: &str) -> Result<()>;
    fn load_next_history_batch(&self, repo: &RepoSpec) -> Result<()>;
    fn change_commit_selection(&self, repo: &RepoSpec, commit_id: &CommitId);
    fn load_changed_files_for_selection(&self, repo: &RepoSpec);
}
