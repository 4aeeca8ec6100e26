/// Geometry reads a host scroll container exposes to the adapter.
///
/// Either read may fail, e.g. while the container is not attached yet. A failed read is
/// returned as `None` and the adapter skips that update; the next event retries.
pub trait HostContainer {
    /// The container's rendered height.
    fn client_height(&self) -> Option<u32>;

    /// The container's current scroll offset.
    fn scroll_top(&self) -> Option<u64>;
}

impl<T: HostContainer + ?Sized> HostContainer for &T {
    fn client_height(&self) -> Option<u32> {
        (**self).client_height()
    }

    fn scroll_top(&self) -> Option<u64> {
        (**self).scroll_top()
    }
}
