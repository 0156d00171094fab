use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepoSpec {
    pub workdir: PathBuf,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommitId(pub String);

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CommitId {
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(7)
            .map(|(ix, _)| ix)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    pub id: CommitId,
    pub parent_ids: Vec<CommitId>,
    pub summary: String,
    pub author: String,
    pub time: SystemTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Branch {
    pub name: String,
    pub tip: CommitId,
}

impl Branch {
    pub fn new(name: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tip: CommitId(tip.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AheadBehind {
    pub ahead: usize,
    pub behind: usize,
}

/// Which side of a two-branch comparison the commit list shows.
///
/// `Behind` lists commits on the comparison branch that the current branch lacks;
/// `Ahead` lists commits on the current branch that the comparison branch lacks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ComparisonMode {
    Behind,
    Ahead,
}

impl ComparisonMode {
    pub fn from_tab_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Behind),
            1 => Some(Self::Ahead),
            _ => None,
        }
    }

    pub fn tab_index(self) -> usize {
        match self {
            Self::Behind => 0,
            Self::Ahead => 1,
        }
    }
}

/// Comparison state owned by the coordinator and pushed into the sidebar.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ComparisonState {
    #[default]
    None,
    Comparing {
        branch: Branch,
        mode: ComparisonMode,
        counts: AheadBehind,
    },
}

impl ComparisonState {
    pub fn is_comparing(&self) -> bool {
        matches!(self, Self::Comparing { .. })
    }

    pub fn branch(&self) -> Option<&Branch> {
        match self {
            Self::None => None,
            Self::Comparing { branch, .. } => Some(branch),
        }
    }

    pub fn mode(&self) -> Option<ComparisonMode> {
        match self {
            Self::None => None,
            Self::Comparing { mode, .. } => Some(*mode),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompareAction {
    History,
    Branch {
        branch: Branch,
        mode: ComparisonMode,
    },
}

/// Visible row range reported by the commit list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScrollWindow {
    pub first_visible: usize,
    pub last_visible: usize,
}
