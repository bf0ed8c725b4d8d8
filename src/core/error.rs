use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `doc_id` negative, or already present in the engine.
    InvalidDocId,
    /// A token in a document, stop-word set, or query contains a byte < 0x20.
    InvalidWord,
    /// A query token is empty, begins with `--`, or is just `-`.
    InvalidQuery,
    /// `match_document` called on an id that is not live.
    OutOfRange,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error {
            kind,
            context: context.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
