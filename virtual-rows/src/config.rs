use core::num::NonZeroU32;

use crate::window::compute_window;
use crate::{ConfigError, LayoutState, VisibleWindow};

/// Per-mount configuration of a windowed list.
///
/// Exactly three options are recognized:
/// - `row_height`: the fixed row pitch, in the same units as the layout measurements.
/// - `overscan`: extra rows rendered past the viewport. When non-zero it is also the step
///   the window start snaps to, so the start only moves every `overscan` rows.
/// - `sync_mode`: when `true`, scroll events request an immediate re-render instead of a
///   batched one.
///
/// With `feature = "serde"`, this type (de)serializes through [`RawWindowConfig`] and
/// rejects invalid values at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawWindowConfig", into = "RawWindowConfig")
)]
pub struct WindowConfig {
    row_height: NonZeroU32,
    overscan: usize,
    sync_mode: bool,
}

impl WindowConfig {
    /// Creates a configuration with no overscan and batched rendering.
    ///
    /// Fails with [`ConfigError::InvalidRowHeight`] when `row_height` is zero.
    pub fn new(row_height: u32) -> Result<Self, ConfigError> {
        let Some(row_height) = NonZeroU32::new(row_height) else {
            vwarn!(row_height, "WindowConfig: rejected zero row height");
            return Err(ConfigError::InvalidRowHeight { row_height: 0 });
        };
        Ok(Self::from_row_height(row_height))
    }

    pub const fn from_row_height(row_height: NonZeroU32) -> Self {
        Self {
            row_height,
            overscan: 0,
            sync_mode: false,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_sync_mode(mut self, sync_mode: bool) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    pub fn row_height(&self) -> NonZeroU32 {
        self.row_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn sync_mode(&self) -> bool {
        self.sync_mode
    }

    /// Computes the window for `count` rows under the given layout.
    pub fn window(&self, count: usize, layout: &LayoutState) -> VisibleWindow {
        compute_window(
            count,
            self.row_height,
            layout.container_height,
            layout.scroll_offset,
            self.overscan,
        )
    }
}

/// Untyped window options as a host hands them over (script numbers, config files).
///
/// Convert with `WindowConfig::try_from(raw)`; that conversion is the single place where
/// zero/negative row heights and negative overscan counts are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawWindowConfig {
    pub row_height: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overscan_count: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sync_mode: bool,
}

impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWindowConfig) -> Result<Self, Self::Error> {
        if raw.row_height <= 0 {
            vwarn!(row_height = raw.row_height, "WindowConfig: rejected row height");
            return Err(ConfigError::InvalidRowHeight {
                row_height: raw.row_height,
            });
        }
        let row_height = u32::try_from(raw.row_height)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ConfigError::RowHeightOutOfRange {
                row_height: raw.row_height,
                max: u32::MAX,
            })?;

        if raw.overscan_count < 0 {
            vwarn!(
                overscan_count = raw.overscan_count,
                "WindowConfig: rejected overscan count"
            );
            return Err(ConfigError::NegativeOverscan {
                overscan_count: raw.overscan_count,
            });
        }
        let overscan =
            usize::try_from(raw.overscan_count).map_err(|_| ConfigError::OverscanOutOfRange {
                overscan_count: raw.overscan_count,
            })?;

        Ok(Self::from_row_height(row_height)
            .with_overscan(overscan)
            .with_sync_mode(raw.sync_mode))
    }
}

impl From<WindowConfig> for RawWindowConfig {
    fn from(config: WindowConfig) -> Self {
        Self {
            row_height: i64::from(config.row_height.get()),
            overscan_count: i64::try_from(config.overscan).unwrap_or(i64::MAX),
            sync_mode: config.sync_mode,
        }
    }
}
