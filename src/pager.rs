//! Paging and scroll-position tracking for the sensor card carousel.
//!
//! The dashboard presents the reading sequence as horizontally swiped pages
//! of a fixed size. Two pure functions do the work: [`paginate`] chunks a
//! snapshot into pages, and [`active_index_for_offset`] projects the latest
//! continuous scroll offset onto a page index. There is no internal counter
//! to drift out of sync with the rendered position; the index is always a
//! function of the latest signal and the current page geometry.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::model::{SensorReading, TelemetrySnapshot};

/// Default number of sensor cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// The reading sequence partitioned into fixed-size pages.
///
/// Invariant: concatenating all pages reproduces the snapshot's reading
/// sequence in order; only the last page may be shorter than the page size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageView {
    /// Pages in display order.
    pub pages: Vec<Vec<SensorReading>>,
}

impl PageView {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Partition a snapshot's readings into pages of at most `page_size`.
///
/// Pure and deterministic. A non-positive page size is unrepresentable:
/// callers holding untrusted configuration validate it into a
/// [`NonZeroUsize`] first (see [`crate::error::Error::Config`]).
pub fn paginate(snapshot: &TelemetrySnapshot, page_size: NonZeroUsize) -> PageView {
    PageView {
        pages: snapshot
            .readings
            .chunks(page_size.get())
            .map(<[SensorReading]>::to_vec)
            .collect(),
    }
}

/// Number of pages a reading sequence of `len` items occupies.
pub fn page_count_for(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Project a continuous scroll offset onto a page index.
///
/// The index is `round(offset / viewport_width)` clamped to
/// `[0, page_count - 1]`. Idempotent: the same offset always yields the same
/// index. Degenerate geometry (no pages, zero or negative viewport width)
/// yields 0.
pub fn active_index_for_offset(offset: f64, viewport_width: f64, page_count: usize) -> usize {
    if page_count == 0 || viewport_width <= 0.0 {
        return 0;
    }

    let projected = (offset / viewport_width).round();
    if projected <= 0.0 {
        0
    } else {
        (projected as usize).min(page_count - 1)
    }
}

/// Current page geometry and position.
///
/// Invariant: `0 <= active_index < max(page_count, 1)`. Mutated only by the
/// scroll signal and by snapshot replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PagerState {
    /// Number of pages in the current snapshot.
    pub page_count: usize,

    /// Index of the page currently in view.
    pub active_index: usize,
}

impl PagerState {
    /// Empty pager: no pages, index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a scroll signal. Updates synchronously, no debouncing.
    pub fn on_scroll(&mut self, offset: f64, viewport_width: f64) {
        self.active_index = active_index_for_offset(offset, viewport_width, self.page_count);
    }

    /// Adopt a new page count after snapshot replacement.
    ///
    /// If the previous index would fall out of range it is clamped to the
    /// last page, or 0 when there are no pages.
    pub fn resync(&mut self, page_count: usize) {
        self.page_count = page_count;
        if self.active_index >= page_count {
            self.active_index = page_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use chrono::Utc;
    use serde_json::json;

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn full_snapshot() -> TelemetrySnapshot {
        normalize(
            &json!({
                "air_quality": 80,
                "soil_moisture_1": 40,
                "soil_moisture_2": 42,
                "temperature_1": 21,
                "temperature_2": 22,
                "uv_index": 4,
                "wind_speed": 10,
                "wind_direction": 90,
                "rain_ticks": 2,
            }),
            Utc::now(),
        )
    }

    #[test]
    fn test_nine_readings_page_size_three() {
        let view = paginate(&full_snapshot(), page_size(3));

        assert_eq!(view.page_count(), 3);
        assert!(view.pages.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn test_pagination_covering_law() {
        let snapshot = full_snapshot();

        for size in 1..=10 {
            let view = paginate(&snapshot, page_size(size));

            let flattened: Vec<_> = view.pages.iter().flatten().cloned().collect();
            assert_eq!(flattened, snapshot.readings);
            assert_eq!(view.page_count(), page_count_for(snapshot.len(), page_size(size)));
        }
    }

    #[test]
    fn test_only_last_page_may_be_short() {
        let view = paginate(&full_snapshot(), page_size(4));

        assert_eq!(view.page_count(), 3);
        assert_eq!(view.pages[0].len(), 4);
        assert_eq!(view.pages[1].len(), 4);
        assert_eq!(view.pages[2].len(), 1);
    }

    #[test]
    fn test_active_index_rounds_to_nearest_page() {
        assert_eq!(active_index_for_offset(0.0, 320.0, 3), 0);
        assert_eq!(active_index_for_offset(150.0, 320.0, 3), 0);
        assert_eq!(active_index_for_offset(170.0, 320.0, 3), 1);
        assert_eq!(active_index_for_offset(640.0, 320.0, 3), 2);
    }

    #[test]
    fn test_active_index_clamped_to_page_range() {
        // Overscroll past the last page
        assert_eq!(active_index_for_offset(5000.0, 320.0, 3), 2);
        // Bounce before the first page
        assert_eq!(active_index_for_offset(-200.0, 320.0, 3), 0);
    }

    #[test]
    fn test_active_index_degenerate_geometry() {
        assert_eq!(active_index_for_offset(640.0, 320.0, 0), 0);
        assert_eq!(active_index_for_offset(640.0, 0.0, 3), 0);
        assert_eq!(active_index_for_offset(640.0, -1.0, 3), 0);
    }

    #[test]
    fn test_index_bound_holds_for_any_offset() {
        for page_count in 0..5 {
            for offset in [-1000.0, -1.0, 0.0, 159.0, 161.0, 320.0, 480.0, 1.0e9] {
                let index = active_index_for_offset(offset, 320.0, page_count);
                assert!(index < page_count.max(1));
            }
        }
    }

    #[test]
    fn test_scroll_projection_is_idempotent() {
        let mut pager = PagerState::new();
        pager.resync(3);

        pager.on_scroll(640.0, 320.0);
        assert_eq!(pager.active_index, 2);
        pager.on_scroll(640.0, 320.0);
        assert_eq!(pager.active_index, 2);
    }

    #[test]
    fn test_resync_clamps_out_of_range_index() {
        let mut pager = PagerState::new();
        pager.resync(4);
        pager.on_scroll(960.0, 320.0);
        assert_eq!(pager.active_index, 3);

        // Snapshot shrank to two pages
        pager.resync(2);
        assert_eq!(pager.active_index, 1);

        // Snapshot emptied out
        pager.resync(0);
        assert_eq!(pager.active_index, 0);
    }

    #[test]
    fn test_resync_keeps_in_range_index() {
        let mut pager = PagerState::new();
        pager.resync(3);
        pager.on_scroll(320.0, 320.0);

        pager.resync(3);
        assert_eq!(pager.active_index, 1);
    }
}
