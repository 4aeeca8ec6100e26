use crate::{VisibleWindow, WindowConfig};

/// Host geometry the window is computed from.
///
/// The core never clamps `scroll_offset`; the host's native scrolling keeps it in range.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which is
/// handy for restoring a list's position across remounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub container_height: u32,
    pub scroll_offset: u64,
}

/// A single observed change in host geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutEvent {
    /// The container was measured with a new rendered height.
    Resized { height: u32 },
    /// The container reported a new scroll offset.
    Scrolled { offset: u64 },
}

impl LayoutState {
    pub const fn new(container_height: u32, scroll_offset: u64) -> Self {
        Self {
            container_height,
            scroll_offset,
        }
    }

    /// Returns the state after `event`.
    ///
    /// This is a pure transition; adapters compare the result with the previous state to
    /// decide whether a re-render is needed.
    #[must_use]
    pub fn apply(self, event: LayoutEvent) -> Self {
        match event {
            LayoutEvent::Resized { height } => Self {
                container_height: height,
                ..self
            },
            LayoutEvent::Scrolled { offset } => Self {
                scroll_offset: offset,
                ..self
            },
        }
    }

    pub fn window(&self, count: usize, config: &WindowConfig) -> VisibleWindow {
        config.window(count, self)
    }
}
