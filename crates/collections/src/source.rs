use std::{convert::Infallible, fmt, iter::Peekable};

use crate::buffered_cursor::BufferedCursor;

/// Why a [`Source`] could not produce another element.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PullError<E> {
    #[error("source exhausted")]
    Exhausted,
    #[error("{0}")]
    Source(E),
}

/// A forward-only, single-pass producer of elements.
///
/// Every successful [`pull`](Source::pull) consumes the element for good;
/// there is no way to ask for it again.
pub trait Source {
    type Item;
    type Error;

    /// Returns `true` if a subsequent `pull` would produce an element.
    fn has_next(&mut self) -> bool;

    /// Produces the next element, or [`PullError::Exhausted`] at the end.
    fn pull(&mut self) -> Result<Self::Item, PullError<Self::Error>>;
}

impl<S> Source for &mut S
where
    S: Source + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn pull(&mut self) -> Result<Self::Item, PullError<Self::Error>> {
        (**self).pull()
    }
}

/// [`Source`] over a plain iterator.
pub struct IterSource<I: Iterator> {
    iter: Peekable<I>,
}

impl<I> fmt::Debug for IterSource<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterSource")
            .field("iter", &self.iter)
            .finish()
    }
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I, Item = I::Item>) -> Self {
        Self {
            iter: iter.into_iter().peekable(),
        }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn pull(&mut self) -> Result<Self::Item, PullError<Self::Error>> {
        self.iter.next().ok_or(PullError::Exhausted)
    }
}

pub trait IntoSource: IntoIterator + Sized {
    fn into_source(self) -> IterSource<Self::IntoIter> {
        IterSource::new(self)
    }

    fn buffered_cursor(self) -> BufferedCursor<IterSource<Self::IntoIter>> {
        BufferedCursor::new(self.into_source())
    }
}

impl<I: IntoIterator> IntoSource for I {}
