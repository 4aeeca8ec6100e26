use core::num::NonZeroU32;
use core::ops::Range;

/// The contiguous `[start, end)` index range of rows to materialize.
///
/// The engine does not clamp `end` to the row count; slicing a row source with a window
/// that runs past its end yields fewer rows, never an error. Use [`Self::clamp_to`] when
/// an in-bounds range is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleWindow {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn indexes(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Restricts the window to `0..count`.
    pub fn clamp_to(self, count: usize) -> Self {
        Self {
            start: self.start.min(count),
            end: self.end.min(count),
        }
    }
}

/// Computes which rows of a uniformly spaced list must be materialized.
///
/// - `raw_start = floor(scroll_offset / row_height)`
/// - `visible = floor(container_height / row_height)`
/// - with `overscan > 0`, the start snaps down to a multiple of `overscan` and `visible`
///   grows by `overscan`; the start therefore only changes every `overscan` rows while
///   scrolling, at the price of up to `overscan` extra rows on each side
/// - `end = start + 1 + visible`, so a partially visible trailing row is included
///
/// An unmeasured container (`container_height == 0`) yields a single row at `start`.
/// An empty list always yields [`VisibleWindow::EMPTY`].
///
/// The function is pure: identical inputs always give identical output.
pub fn compute_window(
    count: usize,
    row_height: NonZeroU32,
    container_height: u32,
    scroll_offset: u64,
    overscan: usize,
) -> VisibleWindow {
    if count == 0 {
        return VisibleWindow::EMPTY;
    }

    let pitch = u64::from(row_height.get());
    let raw_start = usize::try_from(scroll_offset / pitch).unwrap_or(usize::MAX);
    let mut visible = usize::try_from(u64::from(container_height) / pitch).unwrap_or(usize::MAX);

    let mut start = raw_start;
    if overscan > 0 {
        start = raw_start - raw_start % overscan;
        visible = visible.saturating_add(overscan);
    }
    let end = start.saturating_add(1).saturating_add(visible);

    vtrace!(
        count,
        scroll_offset,
        container_height,
        overscan,
        start,
        end,
        "compute_window"
    );
    VisibleWindow { start, end }
}

/// Total extent of the scroll spacer: `count * row_height`.
///
/// This is what keeps native scrollbar geometry matching the full, unvirtualized list.
pub fn spacer_extent(count: usize, row_height: NonZeroU32) -> u64 {
    (count as u64).saturating_mul(u64::from(row_height.get()))
}

/// Offset of row `index` from the top of the spacer.
pub fn row_offset(index: usize, row_height: NonZeroU32) -> u64 {
    spacer_extent(index, row_height)
}
