use std::{fmt, io::Write};

use rewind_collections::{CursorError, ListCursor};
use rewind_kernel::types::step::{MoveScript, Step};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum WalkError<E> {
    #[error(transparent)]
    Cursor(CursorError<E>),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<CursorError<E>> for WalkError<E> {
    fn from(err: CursorError<E>) -> Self {
        WalkError::Cursor(err)
    }
}

/// An element reached by a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<T> {
    pub step: Step,
    pub index: usize,
    pub item: T,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub visits: usize,
    pub misses: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} visits, {} misses", self.visits, self.misses)
    }
}

/// Drives a [`ListCursor`] with [`Step`]s.
#[derive(Debug)]
pub struct Walker<C> {
    cursor: C,
}

impl<C: ListCursor> Walker<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Performs one step. Running off either end of the sequence is not an
    /// error and yields `Ok(None)`.
    pub fn apply(
        &mut self,
        step: Step,
    ) -> Result<Option<Visit<&C::Item>>, CursorError<C::Error>> {
        let before = self.cursor.next_index();
        let res = match step {
            Step::Next => self.cursor.next(),
            Step::Previous => self.cursor.previous(),
        };
        match res {
            Ok(item) => {
                // a successful `previous` implies `before > 0`
                let index = match step {
                    Step::Next => before,
                    Step::Previous => before - 1,
                };
                Ok(Some(Visit { step, index, item }))
            }
            Err(CursorError::NoMoreElements) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Applies every step of `script`, writing one line per step to `out`.
    pub fn run(
        &mut self,
        script: &MoveScript,
        mut out: impl Write,
    ) -> Result<Summary, WalkError<C::Error>>
    where
        C::Item: fmt::Display,
    {
        let mut summary = Summary::default();
        for step in script.steps() {
            match self.apply(step)? {
                Some(Visit { index, item, .. }) => {
                    writeln!(out, "{index}\t{item}")?;
                    summary.visits += 1;
                }
                None => {
                    debug!(%step, position = self.cursor.next_index(), "end of sequence");
                    writeln!(out, "{step}\t<end>")?;
                    summary.misses += 1;
                }
            }
        }
        Ok(summary)
    }
}
