use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::VisibleWindow;

/// An ordered, read-only sequence of rows owned by the caller.
///
/// The engine only borrows a source for the length of a render call.
pub trait RowSource {
    type Item;

    fn row_count(&self) -> usize;

    /// Returns the row at `index`, or `None` past the end.
    fn row(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> RowSource for [T] {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> RowSource for [T; N] {
    type Item = T;

    fn row_count(&self) -> usize {
        N
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> RowSource for Vec<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> RowSource for VecDeque<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// A lazy view of `source[window.start..window.end]`, clamped to the source length.
///
/// The view is `Copy`, so it can be iterated any number of times.
pub struct RowSlice<'a, S: ?Sized> {
    source: &'a S,
    start: usize,
    end: usize,
}

impl<S: ?Sized> Clone for RowSlice<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for RowSlice<'_, S> {}

impl<S: ?Sized> core::fmt::Debug for RowSlice<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowSlice")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<'a, S: RowSource + ?Sized> RowSlice<'a, S> {
    pub fn new(source: &'a S, window: VisibleWindow) -> Self {
        let clamped = window.clamp_to(source.row_count());
        Self {
            source,
            start: clamped.start,
            end: clamped.end.max(clamped.start),
        }
    }

    /// The in-bounds window this slice covers.
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow {
            start: self.start,
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> RowIter<'a, S> {
        RowIter {
            source: self.source,
            next: self.start,
            end: self.end,
        }
    }
}

impl<'a, S: RowSource + ?Sized> IntoIterator for RowSlice<'a, S> {
    type Item = (usize, &'a S::Item);
    type IntoIter = RowIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`RowSlice`], yielding `(absolute_index, row)`.
pub struct RowIter<'a, S: ?Sized> {
    source: &'a S,
    next: usize,
    end: usize,
}

impl<S: ?Sized> core::fmt::Debug for RowIter<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowIter")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<'a, S: RowSource + ?Sized> Iterator for RowIter<'a, S> {
    type Item = (usize, &'a S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.end {
            let index = self.next;
            self.next += 1;
            if let Some(row) = self.source.row(index) {
                return Some((index, row));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(self.next)))
    }
}
