// Example: compute a window and render it for a large list.
use virtual_rows::{LayoutState, VirtualList, WindowConfig};

fn main() -> Result<(), virtual_rows::ConfigError> {
    let list = VirtualList::new(WindowConfig::new(22)?.with_overscan(10));
    let data: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();

    for offset in [0u64, 123_456, 21_999_000] {
        let layout = LayoutState::new(480, offset);
        let view = list.render(&data, &layout, |row, index| format!("{index:>7}: {row}"));
        println!(
            "offset={offset} window={:?} rows={} content_offset={} spacer={}",
            view.rows.window,
            view.rows.len(),
            view.rows.content_offset,
            view.rows.spacer_height,
        );
        println!("  first={:?}", view.rows.rows.first());
    }
    Ok(())
}
