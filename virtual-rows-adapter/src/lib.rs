//! Measurement adapter for the `virtual-rows` crate.
//!
//! The `virtual-rows` crate is UI-agnostic and only computes windows and rendered rows.
//! This crate bridges a host scroll container into it:
//!
//! - [`HostContainer`]: the geometry reads a host exposes (height, scroll offset)
//! - [`ResizeHub`] / [`ResizeSubscription`]: a broadcast channel for window resizes with a
//!   scoped, release-on-drop subscription per mounted list
//! - [`Controller`]: owns one list's layout state, applies scroll/resize events and
//!   schedules re-renders (immediate in sync mode, batched otherwise)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod resize;


pub use controller::{Controller, RenderCallback, RenderTiming};
pub use host::HostContainer;
pub use resize::{ResizeHub, ResizeSubscription};
