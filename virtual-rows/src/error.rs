use thiserror::Error;

/// Reasons a window configuration is rejected.
///
/// These are caller mistakes and are reported when the configuration is built, so a
/// render pass never has to deal with a zero row pitch or a negative margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("row height must be greater than zero (got {row_height})")]
    InvalidRowHeight { row_height: i64 },

    #[error("row height {row_height} exceeds the supported maximum of {max}")]
    RowHeightOutOfRange { row_height: i64, max: u32 },

    #[error("overscan count must not be negative (got {overscan_count})")]
    NegativeOverscan { overscan_count: i64 },

    #[error("overscan count {overscan_count} does not fit the platform index type")]
    OverscanOutOfRange { overscan_count: i64 },
}
