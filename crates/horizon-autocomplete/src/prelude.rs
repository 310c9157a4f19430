//! Prelude module for Horizon Autocomplete.
//!
//! ```ignore
//! use horizon_autocomplete::prelude::*;
//! ```

// ============================================================================
// Controller
// ============================================================================

pub use crate::config::AutocompleteConfig;
pub use crate::controller::{Autocomplete, AutocompleteProps, AutocompleteView, ValueChange};
pub use crate::events::Key;

// ============================================================================
// Options and matching
// ============================================================================

pub use crate::filter::filter_candidates;
pub use crate::highlight::{highlight, Segment};
pub use crate::option::{Candidate, SelectOption, Value};

// ============================================================================
// Layout
// ============================================================================

pub use crate::geometry::{Point, Rect, Size};
pub use crate::positioning::{LayoutSignals, LayoutSnapshot, Placement, Side};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_autocomplete_core::{ConnectionId, Signal};
