use alloc::vec::Vec;
use core::num::NonZeroU32;

use crate::window::{row_offset, spacer_extent};
use crate::{RowSlice, RowSource, VisibleWindow};

/// The output of one render pass.
///
/// Hosts lay this out as a spacer of `spacer_height` with a block placed
/// `content_offset` from its top, holding `rows` in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRows<R> {
    /// The in-bounds window that was rendered.
    pub window: VisibleWindow,
    /// `count * row_height`, independent of the window.
    pub spacer_height: u64,
    /// `window.start * row_height`.
    pub content_offset: u64,
    pub rows: Vec<R>,
}

impl<R> RenderedRows<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Calls `f(index, row)` for every row of `source` inside `window`, without allocating.
pub fn for_each_row<S, F>(source: &S, window: VisibleWindow, mut f: F)
where
    S: RowSource + ?Sized,
    F: FnMut(usize, &S::Item),
{
    for (index, row) in RowSlice::new(source, window) {
        f(index, row);
    }
}

/// Renders the rows of `window` with `render_row(row, absolute_index)`.
///
/// Rows past the end of `source` are skipped, so an out-of-range window produces a
/// shorter (possibly empty) result.
pub fn render_rows<S, R, F>(
    source: &S,
    window: VisibleWindow,
    row_height: NonZeroU32,
    mut render_row: F,
) -> RenderedRows<R>
where
    S: RowSource + ?Sized,
    F: FnMut(&S::Item, usize) -> R,
{
    let slice = RowSlice::new(source, window);
    let mut rows = Vec::with_capacity(slice.len());
    for (index, row) in slice {
        rows.push(render_row(row, index));
    }

    let window = slice.window();
    RenderedRows {
        window,
        spacer_height: spacer_extent(source.row_count(), row_height),
        content_offset: row_offset(window.start, row_height),
        rows,
    }
}
