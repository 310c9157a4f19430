//! Virtualized row windowing for the option list.
//!
//! Only rows intersecting the scroll viewport (plus a small overscan) are
//! materialized, regardless of how many candidates there are. All rows share
//! one estimated height.

use std::ops::RangeInclusive;

use horizon_autocomplete_core::logging::targets;

/// Default estimated row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 32.0;

/// Default number of extra rows materialized on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 1;

/// One materialized row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualRow {
    /// Position in the candidate list.
    pub index: usize,
    /// Distance from the top of the scroll content.
    pub offset_top: f32,
    pub height: f32,
}

/// The rows to materialize for the current scroll state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VirtualWindow {
    /// Height of the whole scroll content (`count * row_height`).
    pub total_height: f32,
    pub rows: Vec<VirtualRow>,
}

impl VirtualWindow {
    /// Candidate positions covered by this window.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        let first = self.rows.first()?.index;
        let last = self.rows.last()?.index;
        Some(first..=last)
    }

    /// Whether the window has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute the visible row window.
///
/// `scroll_offset` is clamped into `[0, max(0, total - viewport)]` first, so
/// any offset yields a non-empty window whenever `count > 0`. A non-positive
/// or non-finite row height yields an empty window.
pub fn compute_window(
    scroll_offset: f32,
    viewport_height: f32,
    row_height: f32,
    count: usize,
    overscan: usize,
) -> VirtualWindow {
    if !(row_height.is_finite() && row_height > 0.0) {
        return VirtualWindow::default();
    }

    let total_height = count as f32 * row_height;
    if count == 0 {
        return VirtualWindow {
            total_height,
            rows: Vec::new(),
        };
    }

    let viewport_height = if viewport_height.is_finite() {
        viewport_height.max(0.0)
    } else {
        0.0
    };
    let offset = clamp_offset(scroll_offset, viewport_height, total_height);

    let last_index = count - 1;
    let first = ((offset / row_height).floor() as usize).min(last_index);
    let end = ((offset + viewport_height) / row_height).ceil() as usize;
    let last = end.saturating_sub(1).clamp(first, last_index);

    let start = first.saturating_sub(overscan);
    let stop = last.saturating_add(overscan).min(last_index);

    let rows = (start..=stop)
        .map(|index| VirtualRow {
            index,
            offset_top: index as f32 * row_height,
            height: row_height,
        })
        .collect();

    VirtualWindow { total_height, rows }
}

fn clamp_offset(offset: f32, viewport_height: f32, total_height: f32) -> f32 {
    let max_offset = (total_height - viewport_height).max(0.0);
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, max_offset)
    }
}

/// Where a row should end up when scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Row top at viewport top.
    Start,
    /// Row centered in the viewport.
    #[default]
    Center,
    /// Row bottom at viewport bottom.
    End,
    /// Scroll the minimum distance needed, or not at all.
    Auto,
}

/// Stateful scroll position over a uniform-height list.
#[derive(Debug, Clone, PartialEq)]
pub struct Virtualizer {
    row_height: f32,
    overscan: usize,
    count: usize,
    viewport_height: f32,
    scroll_offset: f32,
}

impl Default for Virtualizer {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_HEIGHT, DEFAULT_OVERSCAN)
    }
}

impl Virtualizer {
    /// Create a virtualizer with the given row estimate and overscan.
    pub fn new(row_height: f32, overscan: usize) -> Self {
        Self {
            row_height,
            overscan,
            count: 0,
            viewport_height: 0.0,
            scroll_offset: 0.0,
        }
    }

    // =========================================================================
    // Getters / Setters
    // =========================================================================

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Total scroll content height.
    pub fn total_height(&self) -> f32 {
        if self.row_height > 0.0 {
            self.count as f32 * self.row_height
        } else {
            0.0
        }
    }

    /// Set the number of rows. The scroll offset is re-clamped.
    pub fn set_count(&mut self, count: usize) {
        if self.count != count {
            self.count = count;
            self.reclamp();
        }
    }

    /// Set the viewport height. The scroll offset is re-clamped.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.reclamp();
    }

    /// Set the scroll offset, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = clamp_offset(offset, self.viewport_height, self.total_height());
        tracing::trace!(target: targets::VIRTUAL_LIST, offset = self.scroll_offset, "scrolled");
    }

    fn reclamp(&mut self) {
        self.scroll_offset =
            clamp_offset(self.scroll_offset, self.viewport_height, self.total_height());
    }

    // =========================================================================
    // Window
    // =========================================================================

    /// The rows to materialize at the current offset.
    pub fn window(&self) -> VirtualWindow {
        compute_window(
            self.scroll_offset,
            self.viewport_height,
            self.row_height,
            self.count,
            self.overscan,
        )
    }

    /// Whether a row is fully inside the viewport (ignoring overscan).
    pub fn is_index_visible(&self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        let top = index as f32 * self.row_height;
        top >= self.scroll_offset
            && top + self.row_height <= self.scroll_offset + self.viewport_height
    }

    /// Scroll so that `index` is aligned in the viewport.
    ///
    /// Out-of-range indices are ignored. Returns the resulting offset.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> f32 {
        if index >= self.count {
            return self.scroll_offset;
        }

        let top = index as f32 * self.row_height;
        let bottom = top + self.row_height;
        let target = match align {
            ScrollAlign::Start => top,
            ScrollAlign::Center => top - self.viewport_height / 2.0 + self.row_height / 2.0,
            ScrollAlign::End => bottom - self.viewport_height,
            ScrollAlign::Auto => {
                if top < self.scroll_offset {
                    top
                } else if bottom > self.scroll_offset + self.viewport_height {
                    bottom - self.viewport_height
                } else {
                    self.scroll_offset
                }
            }
        };

        self.set_scroll_offset(target);
        tracing::debug!(
            target: targets::VIRTUAL_LIST,
            index,
            ?align,
            offset = self.scroll_offset,
            "scrolled to index"
        );
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(window: &VirtualWindow) -> Vec<usize> {
        window.rows.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_window_at_top() {
        let window = compute_window(0.0, 96.0, 32.0, 100, 0);
        assert_eq!(window.total_height, 3200.0);
        assert_eq!(indices(&window), vec![0, 1, 2]);
    }

    #[test]
    fn test_window_partial_rows_with_overscan() {
        let window = compute_window(40.0, 96.0, 32.0, 100, 1);
        // rows 1..=4 intersect [40, 136), plus one on each side
        assert_eq!(indices(&window), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(window.rows[2].offset_top, 64.0);
    }

    #[test]
    fn test_window_clamps_offset() {
        let window = compute_window(10_000.0, 96.0, 32.0, 10, 0);
        assert_eq!(indices(&window), vec![7, 8, 9]);

        let window = compute_window(-50.0, 64.0, 32.0, 10, 0);
        assert_eq!(indices(&window), vec![0, 1]);
    }

    #[test]
    fn test_window_short_list() {
        let window = compute_window(0.0, 300.0, 32.0, 2, 1);
        assert_eq!(indices(&window), vec![0, 1]);
        assert_eq!(window.total_height, 64.0);
    }

    #[test]
    fn test_window_degenerate_inputs() {
        assert!(compute_window(0.0, 100.0, 32.0, 0, 1).is_empty());
        assert!(compute_window(0.0, 100.0, 0.0, 10, 1).is_empty());
        assert_eq!(indices(&compute_window(0.0, 0.0, 32.0, 10, 0)), vec![0]);
    }

    #[test]
    fn test_scroll_to_index_center() {
        let mut virtualizer = Virtualizer::default();
        virtualizer.set_count(100);
        virtualizer.set_viewport_height(300.0);

        let offset = virtualizer.scroll_to_index(50, ScrollAlign::Center);
        assert_eq!(offset, 50.0 * 32.0 - 150.0 + 16.0);
        assert!(virtualizer.is_index_visible(50));

        // Near the top the offset clamps to zero.
        assert_eq!(virtualizer.scroll_to_index(1, ScrollAlign::Center), 0.0);
    }

    #[test]
    fn test_scroll_to_index_auto() {
        let mut virtualizer = Virtualizer::new(10.0, 0);
        virtualizer.set_count(20);
        virtualizer.set_viewport_height(50.0);

        assert_eq!(virtualizer.scroll_to_index(2, ScrollAlign::Auto), 0.0);
        assert_eq!(virtualizer.scroll_to_index(9, ScrollAlign::Auto), 50.0);
        assert_eq!(virtualizer.scroll_to_index(3, ScrollAlign::Auto), 30.0);
        assert_eq!(virtualizer.scroll_to_index(99, ScrollAlign::Auto), 30.0);
    }

    #[test]
    fn test_count_shrink_reclamps() {
        let mut virtualizer = Virtualizer::new(10.0, 0);
        virtualizer.set_count(100);
        virtualizer.set_viewport_height(50.0);
        virtualizer.set_scroll_offset(900.0);

        virtualizer.set_count(10);
        assert_eq!(virtualizer.scroll_offset(), 50.0);
        assert_eq!(virtualizer.window().range(), Some(5..=9));
    }
}
