use alloc::sync::Arc;
use core::cell::Cell;

use virtual_rows::{
    LayoutEvent, LayoutState, ListView, RowSource, VirtualList, VisibleWindow, WindowConfig,
};

use crate::{HostContainer, ResizeHub, ResizeSubscription};

/// How a requested re-render should be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderTiming {
    /// Rendered in the same turn as the event (`sync_mode`).
    Immediate,
    /// Deferred to the host's next scheduled frame (see [`Controller::flush`]).
    Batched,
}

/// A callback that re-renders the list for the given layout.
pub type RenderCallback = Arc<dyn Fn(&LayoutState, RenderTiming) + Send + Sync>;

/// The measurement adapter of one mounted list.
///
/// It owns the list's [`LayoutState`] and its resize subscription, and turns host events
/// into layout transitions plus render requests. Adapters drive it by calling:
/// - `mount` once, then `did_update` after every render that may change geometry
/// - `on_scroll` from the container's scroll handler
/// - `poll_resize` whenever the host's event loop turns, and `flush` on each frame
/// - `unmount` (or just drop it) at teardown
pub struct Controller<A = ()> {
    list: VirtualList<A>,
    layout: LayoutState,
    subscription: Option<ResizeSubscription>,
    on_render: Option<RenderCallback>,

    batch_depth: Cell<usize>,
    render_pending: Cell<Option<RenderTiming>>,
}

impl<A> Controller<A> {
    /// Mounts `list`: subscribes to `hub` and takes the first measurement.
    ///
    /// The subscription is acquired before measuring, so it is released even if reading
    /// the host panics.
    pub fn mount(list: VirtualList<A>, host: &impl HostContainer, hub: &ResizeHub) -> Self {
        let subscription = hub.subscribe();
        vdebug!(
            subscription = subscription.id(),
            row_height = list.config().row_height().get(),
            overscan = list.config().overscan(),
            sync_mode = list.config().sync_mode(),
            "Controller::mount"
        );
        let mut c = Self {
            list,
            layout: LayoutState::default(),
            subscription: Some(subscription),
            on_render: None,
            batch_depth: Cell::new(0),
            render_pending: Cell::new(None),
        };
        c.measure(host);
        c
    }

    pub fn with_on_render(
        mut self,
        on_render: Option<impl Fn(&LayoutState, RenderTiming) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_render(on_render);
        self
    }

    pub fn set_on_render(
        &mut self,
        on_render: Option<impl Fn(&LayoutState, RenderTiming) + Send + Sync + 'static>,
    ) {
        self.on_render = on_render.map(|f| Arc::new(f) as _);
    }

    pub fn list(&self) -> &VirtualList<A> {
        &self.list
    }

    pub fn config(&self) -> &WindowConfig {
        self.list.config()
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_render_pending(&self) -> bool {
        self.render_pending.get().is_some()
    }

    /// Reads the container height and stores it if it changed.
    ///
    /// Returns `true` when the layout changed (a batched re-render is then requested).
    /// An unmeasurable container leaves the layout untouched.
    pub fn measure(&mut self, host: &impl HostContainer) -> bool {
        let Some(height) = host.client_height() else {
            vtrace!("measure: container not measurable, skipped");
            return false;
        };
        if height == self.layout.container_height {
            return false;
        }
        vtrace!(
            from = self.layout.container_height,
            to = height,
            "measure: container resized"
        );
        self.layout = self.layout.apply(LayoutEvent::Resized { height });
        self.request_render(RenderTiming::Batched);
        true
    }

    /// Call after every host update that may have changed the container's geometry.
    pub fn did_update(&mut self, host: &impl HostContainer) -> bool {
        self.measure(host)
    }

    /// Consumes a pending resize broadcast, if any, and re-measures.
    pub fn poll_resize(&mut self, host: &impl HostContainer) -> bool {
        let resized = self
            .subscription
            .as_ref()
            .is_some_and(ResizeSubscription::take_pending);
        if !resized {
            return false;
        }
        self.measure(host)
    }

    /// Handles a scroll event from the container.
    ///
    /// Returns how the resulting re-render is delivered, or `None` when the scroll offset
    /// could not be read.
    pub fn on_scroll(&mut self, host: &impl HostContainer) -> Option<RenderTiming> {
        let Some(offset) = host.scroll_top() else {
            vtrace!("on_scroll: scroll offset not readable, skipped");
            return None;
        };
        self.layout = self.layout.apply(LayoutEvent::Scrolled { offset });
        let timing = if self.list.config().sync_mode() {
            RenderTiming::Immediate
        } else {
            RenderTiming::Batched
        };
        vtrace!(offset, ?timing, "on_scroll");
        self.request_render(timing);
        Some(timing)
    }

    /// Restores a previously captured layout, e.g. across a remount.
    pub fn restore_layout(&mut self, layout: LayoutState) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.request_render(RenderTiming::Batched);
    }

    /// Delivers a pending batched re-render. Call on each host frame.
    ///
    /// Returns `true` if a render was delivered.
    pub fn flush(&mut self) -> bool {
        if self.batch_depth.get() > 0 {
            return false;
        }
        match self.render_pending.take() {
            Some(timing) => {
                self.notify_now(timing);
                true
            }
            None => false,
        }
    }

    /// Batches multiple updates into a single render request.
    ///
    /// An immediate request made inside the batch is delivered when the batch ends; batched
    /// requests stay pending for [`Self::flush`].
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.batch_depth.get();
        self.batch_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.batch_depth.get();
        debug_assert!(depth > 0, "batch_depth underflow");
        let next = depth.saturating_sub(1);
        self.batch_depth.set(next);

        if next == 0 && self.render_pending.get() == Some(RenderTiming::Immediate) {
            self.render_pending.set(None);
            self.notify_now(RenderTiming::Immediate);
        }
    }

    fn request_render(&self, timing: RenderTiming) {
        if timing == RenderTiming::Immediate && self.batch_depth.get() == 0 {
            self.render_pending.set(None);
            self.notify_now(timing);
            return;
        }
        // An immediate request wins over a batched one already waiting.
        let merged = match (self.render_pending.get(), timing) {
            (Some(RenderTiming::Immediate), _) => RenderTiming::Immediate,
            (_, timing) => timing,
        };
        self.render_pending.set(Some(merged));
    }

    fn notify_now(&self, timing: RenderTiming) {
        if let Some(cb) = &self.on_render {
            cb(&self.layout, timing);
        }
    }

    /// The window for `count` rows under the current layout.
    pub fn window(&self, count: usize) -> VisibleWindow {
        self.list.window(count, &self.layout)
    }

    /// Renders the rows of `source` for the current layout.
    pub fn render<S, R, F>(&self, source: &S, render_row: F) -> ListView<'_, A, R>
    where
        S: RowSource + ?Sized,
        F: FnMut(&S::Item, usize) -> R,
    {
        self.list.render(source, &self.layout, render_row)
    }

    /// Tears the list down, releasing its resize subscription.
    ///
    /// Returns the last layout so it can be restored on a later mount.
    pub fn unmount(mut self) -> LayoutState {
        if let Some(subscription) = self.subscription.take() {
            vdebug!(subscription = subscription.id(), "Controller::unmount");
            drop(subscription);
        }
        self.layout
    }
}

impl<A: core::fmt::Debug> core::fmt::Debug for Controller<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("list", &self.list)
            .field("layout", &self.layout)
            .field("subscription", &self.subscription)
            .field("render_pending", &self.render_pending.get())
            .finish_non_exhaustive()
    }
}
