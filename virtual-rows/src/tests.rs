use crate::*;

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroU32;

use proptest::prelude::*;

fn pitch(row_height: u32) -> NonZeroU32 {
    NonZeroU32::new(row_height).unwrap()
}

fn rows(count: usize) -> Vec<usize> {
    (0..count).collect()
}

#[test]
fn window_without_overscan() {
    let w = compute_window(1000, pitch(20), 200, 205, 0);
    assert_eq!(w, VisibleWindow { start: 10, end: 21 });
    assert_eq!(w.len(), 11);
}

#[test]
fn window_with_overscan_is_inflated() {
    let w = compute_window(1000, pitch(20), 200, 205, 5);
    assert_eq!(w, VisibleWindow { start: 10, end: 26 });
}

#[test]
fn overscan_snaps_start_down() {
    // raw start 13 snaps to 10, the window keeps covering rows 13..23.
    let w = compute_window(1000, pitch(20), 200, 265, 5);
    assert_eq!(w, VisibleWindow { start: 10, end: 26 });

    // Scrolling within the same block never moves the start.
    for offset in 200..300 {
        assert_eq!(compute_window(1000, pitch(20), 200, offset, 5).start, 10);
    }
    assert_eq!(compute_window(1000, pitch(20), 200, 300, 5).start, 15);
}

#[test]
fn unmeasured_container_renders_one_row() {
    let w = compute_window(1000, pitch(20), 0, 0, 0);
    assert_eq!(w, VisibleWindow { start: 0, end: 1 });
}

#[test]
fn empty_list_has_empty_window() {
    assert_eq!(compute_window(0, pitch(20), 200, 500, 3), VisibleWindow::EMPTY);
    assert!(VisibleWindow::EMPTY.is_empty());
}

#[test]
fn partially_visible_trailing_row_is_included() {
    // 210px container at offset 0 shows rows 0..=10, the last one cut off.
    let w = compute_window(1000, pitch(20), 210, 0, 0);
    assert_eq!(w, VisibleWindow { start: 0, end: 11 });
    assert!(w.contains(10));
    assert!(!w.contains(11));
}

#[test]
fn window_is_not_clamped_by_the_engine() {
    let w = compute_window(15, pitch(20), 200, 200, 0);
    assert_eq!(w, VisibleWindow { start: 10, end: 21 });
    assert_eq!(w.clamp_to(15), VisibleWindow { start: 10, end: 15 });
}

#[test]
fn huge_offsets_saturate() {
    let w = compute_window(usize::MAX, pitch(1), u32::MAX, u64::MAX, 7);
    assert!(w.start <= w.end);
}

#[test]
fn spacer_height_ignores_window() {
    let rh = pitch(20);
    assert_eq!(spacer_extent(1000, rh), 20_000);
    assert_eq!(row_offset(10, rh), 200);

    let data = rows(1000);
    for offset in [0u64, 205, 5_000, 19_800, 50_000] {
        let w = compute_window(data.len(), rh, 200, offset, 4);
        let out = render_rows(&data, w, rh, |row, _| *row);
        assert_eq!(out.spacer_height, 20_000);
    }
}

#[test]
fn render_passes_absolute_indexes() {
    let data: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
    let w = compute_window(data.len(), pitch(10), 30, 55, 0);
    assert_eq!(w, VisibleWindow { start: 5, end: 9 });

    let out = render_rows(&data, w, pitch(10), |row, index| (index, row.clone()));
    assert_eq!(out.window, w);
    assert_eq!(out.content_offset, 50);
    assert_eq!(out.rows.first(), Some(&(5, String::from("row 5"))));
    assert_eq!(out.rows.last(), Some(&(8, String::from("row 8"))));
    assert!(out.rows.iter().all(|(i, row)| *row == format!("row {i}")));
}

#[test]
fn render_truncates_past_the_end() {
    let data = rows(25);
    let w = compute_window(data.len(), pitch(20), 200, 400, 0);
    assert_eq!(w, VisibleWindow { start: 20, end: 31 });

    let out = render_rows(&data, w, pitch(20), |row, _| *row);
    assert_eq!(out.rows, (20..25).collect::<Vec<_>>());
    assert_eq!(out.window, VisibleWindow { start: 20, end: 25 });
    assert_eq!(out.spacer_height, 500);
}

#[test]
fn render_far_past_the_end_is_empty() {
    let data = rows(10);
    let w = compute_window(data.len(), pitch(20), 200, 10_000, 0);
    assert!(w.start >= data.len());

    let out = render_rows(&data, w, pitch(20), |row, _| *row);
    assert!(out.is_empty());
    assert_eq!(out.window, VisibleWindow { start: 10, end: 10 });
    assert_eq!(out.content_offset, out.spacer_height);
}

#[test]
fn render_does_not_touch_rows_outside_the_window() {
    let data = rows(1000);
    let mut seen = Vec::new();
    let w = compute_window(data.len(), pitch(20), 100, 2_000, 0);
    for_each_row(&data, w, |index, _| seen.push(index));
    assert_eq!(seen, (100..106).collect::<Vec<_>>());
}

#[test]
fn row_slice_is_restartable() {
    let data: VecDeque<char> = "abcdefgh".chars().collect();
    let slice = RowSlice::new(&data, VisibleWindow { start: 2, end: 5 });
    assert_eq!(slice.len(), 3);

    let first: Vec<_> = slice.iter().map(|(_, c)| *c).collect();
    let second: Vec<_> = slice.into_iter().map(|(i, _)| i).collect();
    assert_eq!(first, ['c', 'd', 'e']);
    assert_eq!(second, [2, 3, 4]);
}

#[test]
fn row_slice_over_inverted_window_is_empty() {
    let data = [1, 2, 3];
    let slice = RowSlice::new(&data, VisibleWindow { start: 5, end: 2 });
    assert!(slice.is_empty());
    assert_eq!(slice.iter().count(), 0);
}

#[test]
fn slices_work_as_sources() {
    let data = rows(50);
    let out = render_rows(&data[..], VisibleWindow { start: 48, end: 60 }, pitch(1), |r, _| *r);
    assert_eq!(out.rows, [48, 49]);
}

#[test]
fn layout_transitions_are_pure() {
    let layout = LayoutState::default();
    let resized = layout.apply(LayoutEvent::Resized { height: 200 });
    let scrolled = resized.apply(LayoutEvent::Scrolled { offset: 205 });

    assert_eq!(layout, LayoutState::new(0, 0));
    assert_eq!(resized, LayoutState::new(200, 0));
    assert_eq!(scrolled, LayoutState::new(200, 205));

    let config = WindowConfig::new(20).unwrap();
    assert_eq!(scrolled.window(1000, &config), VisibleWindow { start: 10, end: 21 });
}

#[test]
fn config_rejects_zero_row_height() {
    assert_eq!(
        WindowConfig::new(0),
        Err(ConfigError::InvalidRowHeight { row_height: 0 })
    );
}

#[test]
fn raw_config_validation() {
    let ok = WindowConfig::try_from(RawWindowConfig {
        row_height: 22,
        overscan_count: 3,
        sync_mode: true,
    })
    .unwrap();
    assert_eq!(ok.row_height().get(), 22);
    assert_eq!(ok.overscan(), 3);
    assert!(ok.sync_mode());

    let cases = [
        (
            RawWindowConfig {
                row_height: 0,
                ..Default::default()
            },
            ConfigError::InvalidRowHeight { row_height: 0 },
        ),
        (
            RawWindowConfig {
                row_height: -4,
                ..Default::default()
            },
            ConfigError::InvalidRowHeight { row_height: -4 },
        ),
        (
            RawWindowConfig {
                row_height: i64::from(u32::MAX) + 1,
                ..Default::default()
            },
            ConfigError::RowHeightOutOfRange {
                row_height: i64::from(u32::MAX) + 1,
                max: u32::MAX,
            },
        ),
        (
            RawWindowConfig {
                row_height: 20,
                overscan_count: -1,
                sync_mode: false,
            },
            ConfigError::NegativeOverscan { overscan_count: -1 },
        ),
    ];
    for (raw, expected) in cases {
        assert_eq!(WindowConfig::try_from(raw), Err(expected));
    }
}

#[test]
fn config_error_messages_are_descriptive() {
    let msg = format!("{}", ConfigError::NegativeOverscan { overscan_count: -2 });
    assert_eq!(msg, "overscan count must not be negative (got -2)");
    let msg = format!("{}", ConfigError::InvalidRowHeight { row_height: 0 });
    assert_eq!(msg, "row height must be greater than zero (got 0)");
}

#[test]
fn config_round_trips_through_raw() {
    let config = WindowConfig::new(18).unwrap().with_overscan(4);
    let raw = RawWindowConfig::from(config);
    assert_eq!(raw.row_height, 18);
    assert_eq!(raw.overscan_count, 4);
    assert_eq!(WindowConfig::try_from(raw), Ok(config));
}

#[cfg(feature = "serde")]
#[test]
fn config_deserialization_validates() {
    use alloc::string::ToString;

    let config: WindowConfig =
        serde_json::from_str(r#"{"row_height":22,"overscan_count":10}"#).unwrap();
    assert_eq!(config.row_height().get(), 22);
    assert_eq!(config.overscan(), 10);
    assert!(!config.sync_mode());

    let err = serde_json::from_str::<WindowConfig>(r#"{"row_height":22,"overscan_count":-1}"#)
        .unwrap_err();
    assert!(err.to_string().contains("overscan count must not be negative"));

    assert!(serde_json::from_str::<WindowConfig>(r#"{"row_height":0}"#).is_err());
}

#[test]
fn list_forwards_attrs_verbatim() {
    #[derive(Debug, PartialEq)]
    struct Attrs {
        class: &'static str,
    }

    let list = VirtualList::new(WindowConfig::new(20).unwrap()).with_attrs(Attrs { class: "feed" });
    let data = rows(1000);
    let view = list.render(&data, &LayoutState::new(200, 205), |row, _| *row);

    assert_eq!(view.attrs, &Attrs { class: "feed" });
    assert_eq!(view.rows.window, VisibleWindow { start: 10, end: 21 });
    assert_eq!(view.rows.rows, (10..21).collect::<Vec<_>>());
    assert_eq!(view.rows.content_offset, 200);
    assert_eq!(list.spacer_height(data.len()), 20_000);
}

#[test]
fn list_renders_nothing_for_empty_data() {
    let list = VirtualList::new(WindowConfig::new(20).unwrap().with_overscan(3));
    let data: Vec<u8> = Vec::new();
    let view = list.render(&data, &LayoutState::new(200, 0), |row, _| *row);
    assert!(view.rows.is_empty());
    assert_eq!(view.rows.spacer_height, 0);
}

proptest! {
    #[test]
    fn window_bounds(
        count in 0usize..100_000,
        row_height in 1u32..200,
        container_height in 0u32..5_000,
        scroll_offset in 0u64..10_000_000,
        overscan in 0usize..64,
    ) {
        let w = compute_window(count, pitch(row_height), container_height, scroll_offset, overscan);
        prop_assert!(w.start <= w.end);
        let visible = (container_height / row_height) as usize;
        prop_assert!(w.end <= w.start + 1 + visible + overscan);
        if count > 0 && overscan == 0 {
            prop_assert!(w.len() * row_height as usize >= container_height as usize);
        }
    }

    #[test]
    fn window_is_deterministic(
        count in 0usize..100_000,
        row_height in 1u32..200,
        container_height in 0u32..5_000,
        scroll_offset in 0u64..10_000_000,
        overscan in 0usize..64,
    ) {
        let a = compute_window(count, pitch(row_height), container_height, scroll_offset, overscan);
        let b = compute_window(count, pitch(row_height), container_height, scroll_offset, overscan);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn start_is_monotonic_in_scroll_offset(
        row_height in 1u32..200,
        container_height in 0u32..5_000,
        scroll_offset in 0u64..10_000_000,
        delta in 0u64..100_000,
        overscan in 0usize..64,
    ) {
        let a = compute_window(1_000_000, pitch(row_height), container_height, scroll_offset, overscan);
        let b = compute_window(1_000_000, pitch(row_height), container_height, scroll_offset + delta, overscan);
        prop_assert!(b.start >= a.start);
    }

    #[test]
    fn start_is_quantized_by_overscan(
        row_height in 1u32..200,
        container_height in 0u32..5_000,
        scroll_offset in 0u64..10_000_000,
        overscan in 1usize..64,
    ) {
        let w = compute_window(1_000_000, pitch(row_height), container_height, scroll_offset, overscan);
        prop_assert_eq!(w.start % overscan, 0);
    }

    #[test]
    fn rendered_rows_stay_in_bounds(
        count in 0usize..500,
        row_height in 1u32..50,
        container_height in 0u32..1_000,
        scroll_offset in 0u64..50_000,
        overscan in 0usize..16,
    ) {
        let data = rows(count);
        let w = compute_window(count, pitch(row_height), container_height, scroll_offset, overscan);
        let out = render_rows(&data, w, pitch(row_height), |row, index| {
            assert_eq!(*row, index);
            index
        });
        prop_assert!(out.rows.len() <= w.len());
        prop_assert!(out.rows.iter().all(|&i| i < count && w.contains(i)));
        prop_assert_eq!(out.spacer_height, count as u64 * u64::from(row_height));
    }
}
