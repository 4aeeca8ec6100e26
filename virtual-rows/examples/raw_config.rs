// Example: validating host-provided options.
use virtual_rows::{RawWindowConfig, WindowConfig};

fn main() {
    let inputs = [
        RawWindowConfig {
            row_height: 22,
            overscan_count: 10,
            sync_mode: true,
        },
        RawWindowConfig {
            row_height: 0,
            ..Default::default()
        },
        RawWindowConfig {
            row_height: 22,
            overscan_count: -3,
            sync_mode: false,
        },
    ];

    for raw in inputs {
        match WindowConfig::try_from(raw) {
            Ok(config) => println!("accepted: {config:?}"),
            Err(err) => println!("rejected {raw:?}: {err}"),
        }
    }
}
