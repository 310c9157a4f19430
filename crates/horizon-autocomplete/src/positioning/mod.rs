//! Anchored positioning of the floating panel.

mod auto_update;
mod compute;
mod placement;

pub use auto_update::{AutoUpdate, LayoutSignals, LayoutSnapshot};
pub use compute::{
    compute_position, PositionConfig, PositionState, DEFAULT_MAX_HEIGHT, DEFAULT_OFFSET,
};
pub use placement::{Alignment, Placement, Side, Strategy};
