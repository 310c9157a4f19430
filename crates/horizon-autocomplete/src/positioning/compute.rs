//! Anchored position computation.
//!
//! Rules are applied in order:
//!
//! 1. **offset**: a fixed gap along the main axis.
//! 2. **flip**: switch to the opposite side when the preferred side cannot
//!    hold the panel but the opposite side can. When neither fits, the side
//!    with more room wins.
//! 3. **shift**: slide along the cross axis (and optionally the main axis) to
//!    stay inside the viewport, never changing side.
//! 4. **size**: clamp width to the available width and height to
//!    `min(max_height, available height)`.

use horizon_autocomplete_core::logging::{span_names, targets};
use horizon_autocomplete_core::PerfSpan;

use super::placement::{Alignment, Placement, Side, Strategy};
use crate::geometry::{Rect, Size};

/// Default main-axis gap between reference and panel.
pub const DEFAULT_OFFSET: f32 = 4.0;

/// Default panel height cap.
pub const DEFAULT_MAX_HEIGHT: f32 = 300.0;

/// Inputs that stay fixed across recomputations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionConfig {
    pub placement: Placement,
    pub strategy: Strategy,
    /// Main-axis gap in pixels.
    pub offset: f32,
    pub max_height: f32,
    /// Inset applied to the viewport before any overflow check.
    pub viewport_padding: f32,
    /// Also shift along the main axis when the panel would overflow.
    pub shift_main_axis: bool,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            strategy: Strategy::default(),
            offset: DEFAULT_OFFSET,
            max_height: DEFAULT_MAX_HEIGHT,
            viewport_padding: 0.0,
            shift_main_axis: false,
        }
    }
}

impl PositionConfig {
    /// Set the placement (builder pattern).
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the main-axis offset (builder pattern).
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the height cap (builder pattern).
    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the viewport padding (builder pattern).
    pub fn with_viewport_padding(mut self, padding: f32) -> Self {
        self.viewport_padding = padding;
        self
    }

    /// The size a panel asks for before the size rule runs: `min_width` or
    /// the reference width, by the height cap.
    pub fn preferred_size(&self, reference: Rect, min_width: Option<f32>) -> Size {
        Size::new(min_width.unwrap_or(reference.width()), self.max_height)
    }
}

/// Computed panel geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionState {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// The placement after flipping.
    pub placement: Placement,
    pub strategy: Strategy,
}

impl PositionState {
    /// The panel's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The side actually used.
    pub fn side(&self) -> Side {
        self.placement.side()
    }
}

/// Compute where the floating panel goes.
pub fn compute_position(
    reference: Rect,
    floating: Size,
    viewport: Rect,
    config: &PositionConfig,
) -> PositionState {
    let _perf = PerfSpan::new(span_names::POSITION);
    let bounds = viewport.inset(config.viewport_padding.max(0.0));
    let offset = config.offset;

    // Room on each side once the gap is taken.
    let space = |side: Side| match side {
        Side::Bottom => bounds.bottom() - (reference.bottom() + offset),
        Side::Top => (reference.top() - offset) - bounds.top(),
    };

    let desired_height = floating.height.min(config.max_height).max(0.0);

    // Flip
    let preferred = config.placement.side();
    let side = if space(preferred) >= desired_height {
        preferred
    } else if space(preferred.opposite()) >= desired_height
        || space(preferred.opposite()) > space(preferred)
    {
        preferred.opposite()
    } else {
        preferred
    };
    let placement = if side == preferred {
        config.placement
    } else {
        tracing::debug!(
            target: targets::POSITION,
            from = ?config.placement,
            to = ?config.placement.flipped(),
            "flipped"
        );
        config.placement.flipped()
    };

    // Size
    let width = floating.width.min(bounds.width()).max(0.0);
    let height = desired_height.min(space(side).max(0.0));

    // Offset
    let mut y = match side {
        Side::Bottom => reference.bottom() + offset,
        Side::Top => reference.top() - offset - height,
    };
    let mut x = match placement.alignment() {
        Alignment::Start => reference.left(),
        Alignment::Center => reference.left() + (reference.width() - width) / 2.0,
        Alignment::End => reference.right() - width,
    };

    // Shift
    x = x.clamp(bounds.left(), (bounds.right() - width).max(bounds.left()));
    if config.shift_main_axis {
        y = y.clamp(bounds.top(), (bounds.bottom() - height).max(bounds.top()));
    }

    let state = PositionState {
        x,
        y,
        width,
        height,
        placement,
        strategy: config.strategy,
    };
    tracing::trace!(target: targets::POSITION, ?state, "computed position");
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn compute(reference: Rect, min_width: Option<f32>) -> PositionState {
        let config = PositionConfig::default();
        compute_position(reference, config.preferred_size(reference, min_width), VIEWPORT, &config)
    }

    #[test]
    fn test_default_bottom_start() {
        let reference = Rect::new(100.0, 50.0, 200.0, 30.0);
        let state = compute(reference, None);

        assert_eq!(state.placement, Placement::BottomStart);
        assert_eq!(state.strategy, Strategy::Absolute);
        assert_eq!(state.x, 100.0);
        assert_eq!(state.y, 84.0);
        assert_eq!(state.width, 200.0);
        assert_eq!(state.height, 300.0);
    }

    #[test]
    fn test_flips_to_top_near_bottom() {
        let reference = Rect::new(100.0, 500.0, 200.0, 30.0);
        let state = compute(reference, None);

        assert_eq!(state.placement, Placement::TopStart);
        assert_eq!(state.height, 300.0);
        assert_eq!(state.y, 500.0 - 4.0 - 300.0);
        assert!(VIEWPORT.contains_rect(&state.rect()));
    }

    #[test]
    fn test_best_fit_shrinks_height() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 400.0);
        let reference = Rect::new(0.0, 250.0, 100.0, 30.0);
        let config = PositionConfig::default();
        let state = compute_position(
            reference,
            config.preferred_size(reference, None),
            viewport,
            &config,
        );

        // 246 above vs 116 below: top wins and shrinks.
        assert_eq!(state.side(), Side::Top);
        assert_eq!(state.height, 246.0);
        assert_eq!(state.y, 0.0);
    }

    #[test]
    fn test_shift_keeps_inside_horizontally() {
        let reference = Rect::new(700.0, 50.0, 80.0, 30.0);
        let state = compute(reference, Some(250.0));

        assert_eq!(state.width, 250.0);
        assert_eq!(state.x, 550.0);
    }

    #[test]
    fn test_width_clamped_to_viewport() {
        let reference = Rect::new(10.0, 50.0, 80.0, 30.0);
        let state = compute(reference, Some(2000.0));

        assert_eq!(state.width, 800.0);
        assert_eq!(state.x, 0.0);
    }

    #[test]
    fn test_viewport_padding() {
        let reference = Rect::new(0.0, 50.0, 100.0, 30.0);
        let config = PositionConfig::default().with_viewport_padding(8.0);
        let state = compute_position(reference, Size::new(100.0, 300.0), VIEWPORT, &config);
        assert_eq!(state.x, 8.0);
    }

    #[test]
    fn test_end_alignment() {
        let reference = Rect::new(300.0, 50.0, 200.0, 30.0);
        let config = PositionConfig::default().with_placement(Placement::BottomEnd);
        let state = compute_position(reference, Size::new(120.0, 100.0), VIEWPORT, &config);
        assert_eq!(state.x, 380.0);
        assert_eq!(state.height, 100.0);
    }

    #[test]
    fn test_custom_offset_and_cap() {
        let reference = Rect::new(100.0, 50.0, 200.0, 30.0);
        let config = PositionConfig::default().with_offset(10.0).with_max_height(120.0);
        let state = compute_position(
            reference,
            config.preferred_size(reference, Some(150.0)),
            VIEWPORT,
            &config,
        );
        assert_eq!(state.y, 90.0);
        assert_eq!(state.height, 120.0);
        assert_eq!(state.width, 150.0);
    }
}
