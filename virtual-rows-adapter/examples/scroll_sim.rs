// Example: a simulated host driving a controller through mount, scroll, resize and unmount.
use std::cell::Cell;

use virtual_rows::{LayoutState, VirtualList, WindowConfig};
use virtual_rows_adapter::{Controller, HostContainer, RenderTiming, ResizeHub};

struct SimContainer {
    height: Cell<u32>,
    scroll_top: Cell<u64>,
}

impl HostContainer for SimContainer {
    fn client_height(&self) -> Option<u32> {
        Some(self.height.get())
    }

    fn scroll_top(&self) -> Option<u64> {
        Some(self.scroll_top.get())
    }
}

fn main() -> Result<(), virtual_rows::ConfigError> {
    let data: Vec<u32> = (0..10_000).collect();
    let hub = ResizeHub::new();
    let host = SimContainer {
        height: Cell::new(300),
        scroll_top: Cell::new(0),
    };

    let list = VirtualList::new(WindowConfig::new(20)?.with_overscan(4));
    let on_render = |layout: &LayoutState, timing: RenderTiming| {
        println!("render {timing:?} for {layout:?}");
    };
    let mut c = Controller::mount(list, &host, &hub).with_on_render(Some(on_render));
    c.flush();

    for offset in (0..2_000).step_by(170) {
        host.scroll_top.set(offset);
        c.on_scroll(&host);
        c.flush();
        println!("  window={:?}", c.window(data.len()));
    }

    host.height.set(600);
    hub.notify_resize();
    c.poll_resize(&host);
    c.flush();

    let view = c.render(&data, |row, _| *row);
    println!(
        "rows {}..{} at {}px of {}px",
        view.rows.window.start,
        view.rows.window.end,
        view.rows.content_offset,
        view.rows.spacer_height,
    );

    let saved = c.unmount();
    println!("unmounted at {saved:?}, listeners={}", hub.listener_count());
    Ok(())
}
