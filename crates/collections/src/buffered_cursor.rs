use std::fmt;

use tracing::trace;

use crate::{list_cursor::ListCursor, source::Source, CursorError};

/// Bidirectional cursor over a forward-only [`Source`].
///
/// Every element pulled from the source is kept, so the cursor can walk back
/// over it and forward again without asking the source twice. The source is
/// only pulled when the cursor stands at the frontier, that is, just past the
/// last buffered element.
pub struct BufferedCursor<S: Source> {
    source: S,
    buf: Vec<S::Item>,
    current: usize,
}

impl<S> fmt::Debug for BufferedCursor<S>
where
    S: Source,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedCursor")
            .field("buf", &self.buf)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<S: Source> BufferedCursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: Vec::new(),
            current: 0,
        }
    }

    /// Like [`new`](Self::new), but fails if no source was supplied.
    pub fn from_option(source: Option<S>) -> Result<Self, CursorError<S::Error>> {
        match source {
            Some(source) => Ok(Self::new(source)),
            None => Err(CursorError::InvalidArgument("source must be present")),
        }
    }

    /// Elements pulled from the source so far, in order.
    pub fn buffered(&self) -> &[S::Item] {
        &self.buf
    }

    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_at_frontier(&self) -> bool {
        self.current == self.buf.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_parts(self) -> (S, Vec<S::Item>) {
        (self.source, self.buf)
    }

    /// Forward iterator yielding clones, starting at the current position.
    pub fn forward(&mut self) -> Forward<'_, S> {
        Forward { cursor: self }
    }
}

impl<S: Source> TryFrom<Option<S>> for BufferedCursor<S> {
    type Error = CursorError<S::Error>;

    fn try_from(source: Option<S>) -> Result<Self, CursorError<S::Error>> {
        Self::from_option(source)
    }
}

impl<S: Source> ListCursor for BufferedCursor<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn has_next(&mut self) -> bool {
        if self.is_at_frontier() {
            return self.source.has_next();
        }
        true
    }

    fn next(&mut self) -> Result<&Self::Item, CursorError<Self::Error>> {
        if self.current < self.buf.len() {
            self.current += 1;
            return Ok(&self.buf[self.current - 1]);
        }

        let item = self.source.pull()?;
        trace!(index = self.current, "pulled from source");
        self.buf.push(item);
        self.current += 1;
        Ok(&self.buf[self.current - 1])
    }

    fn has_previous(&self) -> bool {
        self.current != 0
    }

    fn previous(&mut self) -> Result<&Self::Item, CursorError<Self::Error>> {
        if self.current == 0 {
            return Err(CursorError::NoMoreElements);
        }
        self.current -= 1;
        Ok(&self.buf[self.current])
    }

    fn next_index(&self) -> usize {
        self.current
    }
}

/// Iterator returned by [`BufferedCursor::forward`].
///
/// Stops at the first [`CursorError::NoMoreElements`]; other errors are
/// yielded and iteration may be resumed afterwards.
pub struct Forward<'a, S: Source> {
    cursor: &'a mut BufferedCursor<S>,
}

impl<S> Iterator for Forward<'_, S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = Result<S::Item, CursorError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.next() {
            Ok(item) => Some(Ok(item.clone())),
            Err(CursorError::NoMoreElements) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
