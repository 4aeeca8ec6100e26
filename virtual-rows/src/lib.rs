//! A headless windowing engine for uniformly spaced row lists.
//!
//! For host-side measurement (resize subscriptions, scroll handling, render scheduling),
//! see the `virtual-rows-adapter` crate.
//!
//! Only the rows currently in view, plus an optional overscan margin, are rendered. The
//! window is a pure function of the row count, row height, container height, scroll
//! offset and overscan; the rendered rows sit inside a spacer as tall as the full list so
//! scrollbar proportions stay correct.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container height and scroll offset ([`LayoutState`])
//! - the rows ([`RowSource`]) and a per-row render callback
//!
//! ```
//! use virtual_rows::{LayoutState, VirtualList, WindowConfig};
//!
//! let config = WindowConfig::new(20).unwrap().with_overscan(5);
//! let list = VirtualList::new(config);
//! let rows: Vec<u32> = (0..1000).collect();
//!
//! let view = list.render(&rows, &LayoutState::new(200, 205), |row, _| *row);
//! assert_eq!(view.rows.window.start, 10);
//! assert_eq!(view.rows.len(), 16);
//! assert_eq!(view.rows.spacer_height, 20_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod list;
mod render;
mod sequence;
mod state;
mod window;

#[cfg(test)]
mod tests;

pub use config::{RawWindowConfig, WindowConfig};
pub use error::ConfigError;
pub use list::{ListView, VirtualList};
pub use render::{RenderedRows, for_each_row, render_rows};
pub use sequence::{RowIter, RowSlice, RowSource};
pub use state::{LayoutEvent, LayoutState};
pub use window::{VisibleWindow, compute_window, row_offset, spacer_extent};
