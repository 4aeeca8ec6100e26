use crate::render::render_rows;
use crate::window::spacer_extent;
use crate::{LayoutState, RenderedRows, RowSource, VisibleWindow, WindowConfig};

/// The mount parameters of a windowed list.
///
/// `A` carries the host's container attributes (style, class, ...). They are never
/// inspected, only handed back with every render so the host can forward them verbatim
/// to the outer scroll container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualList<A = ()> {
    config: WindowConfig,
    attrs: A,
}

impl VirtualList<()> {
    pub fn new(config: WindowConfig) -> Self {
        Self { config, attrs: () }
    }
}

impl<A> VirtualList<A> {
    pub fn with_attrs<B>(self, attrs: B) -> VirtualList<B> {
        VirtualList {
            config: self.config,
            attrs,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn attrs(&self) -> &A {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut A {
        &mut self.attrs
    }

    pub fn window(&self, count: usize, layout: &LayoutState) -> VisibleWindow {
        self.config.window(count, layout)
    }

    pub fn spacer_height(&self, count: usize) -> u64 {
        spacer_extent(count, self.config.row_height())
    }

    /// Renders the rows of `source` visible under `layout`.
    pub fn render<S, R, F>(
        &self,
        source: &S,
        layout: &LayoutState,
        render_row: F,
    ) -> ListView<'_, A, R>
    where
        S: RowSource + ?Sized,
        F: FnMut(&S::Item, usize) -> R,
    {
        let window = self.window(source.row_count(), layout);
        ListView {
            attrs: &self.attrs,
            rows: render_rows(source, window, self.config.row_height(), render_row),
        }
    }
}

/// A render pass bundled with the container attributes to forward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView<'a, A, R> {
    pub attrs: &'a A,
    pub rows: RenderedRows<R>,
}
