use std::{convert::Infallible, fmt};

pub use self::{buffered_cursor::*, list_cursor::*, source::*};

mod buffered_cursor;
mod list_cursor;
mod source;

/// Structural operations a read-only cursor refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Set,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Set => "set",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CursorError<E = Infallible> {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("no more elements")]
    NoMoreElements,
    #[error("cursor does not support `{0}`")]
    Unsupported(Operation),
    #[error("source error: {0}")]
    Source(E),
}

impl<E> From<PullError<E>> for CursorError<E> {
    fn from(err: PullError<E>) -> Self {
        match err {
            PullError::Exhausted => CursorError::NoMoreElements,
            PullError::Source(err) => CursorError::Source(err),
        }
    }
}
