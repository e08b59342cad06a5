use crate::{CursorError, Operation};

/// A cursor that walks a sequence in both directions.
///
/// The cursor sits *between* elements: `next` yields the element after it and
/// moves forward, `previous` yields the element before it and moves backward.
/// Structural changes are rejected unless an implementation overrides the
/// provided `add`, `remove` and `set`.
pub trait ListCursor {
    type Item;
    type Error;

    fn has_next(&mut self) -> bool;

    fn next(&mut self) -> Result<&Self::Item, CursorError<Self::Error>>;

    fn has_previous(&self) -> bool;

    fn previous(&mut self) -> Result<&Self::Item, CursorError<Self::Error>>;

    /// Index of the element a following `next` would return.
    fn next_index(&self) -> usize;

    /// Index of the element a following `previous` would return, or `None`
    /// at the start of the sequence.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    fn add(&mut self, _item: Self::Item) -> Result<(), CursorError<Self::Error>> {
        Err(CursorError::Unsupported(Operation::Add))
    }

    fn remove(&mut self) -> Result<(), CursorError<Self::Error>> {
        Err(CursorError::Unsupported(Operation::Remove))
    }

    fn set(&mut self, _item: Self::Item) -> Result<(), CursorError<Self::Error>> {
        Err(CursorError::Unsupported(Operation::Set))
    }
}

impl<C> ListCursor for &mut C
where
    C: ListCursor + ?Sized,
{
    type Item = C::Item;
    type Error = C::Error;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<&Self::Item, CursorError<Self::Error>> {
        (**self).next()
    }

    fn has_previous(&self) -> bool {
        (**self).has_previous()
    }

    fn previous(&mut self) -> Result<&Self::Item, CursorError<Self::Error>> {
        (**self).previous()
    }

    fn next_index(&self) -> usize {
        (**self).next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        (**self).previous_index()
    }

    fn add(&mut self, item: Self::Item) -> Result<(), CursorError<Self::Error>> {
        (**self).add(item)
    }

    fn remove(&mut self) -> Result<(), CursorError<Self::Error>> {
        (**self).remove()
    }

    fn set(&mut self, item: Self::Item) -> Result<(), CursorError<Self::Error>> {
        (**self).set(item)
    }
}
