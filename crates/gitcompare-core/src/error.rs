#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("io error: {0:?}")]
    Io(std::io::ErrorKind),
    #[error("merging `{branch}` stopped on conflicts")]
    MergeConflicts { branch: String },
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
    #[error("{0}")]
    Backend(String),
}
