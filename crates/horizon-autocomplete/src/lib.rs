//! Horizon Autocomplete - a combobox interaction engine.
//!
//! The crate turns a text input plus a list of options into a filterable,
//! keyboard-navigable, virtualized dropdown anchored to the input. It owns no
//! rendering: the host feeds events in and draws the
//! [`AutocompleteView`] that comes out.
//!
//! # Modules
//!
//! - [`filter`], [`matcher`], [`highlight`]: literal, case-insensitive matching
//! - [`navigation`]: the open/active/selected state machine
//! - [`virtual_list`]: fixed-row-height windowing
//! - [`positioning`]: anchored placement with flip, size and shift
//! - [`animation`]: the open/close presence transition
//! - [`controller`]: [`Autocomplete`], which wires all of the above together
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use horizon_autocomplete::prelude::*;
//!
//! let options: Vec<SelectOption> =
//!     ["pcs", "kg", "liter"].into_iter().map(SelectOption::text).collect();
//! let mut autocomplete = Autocomplete::new(AutocompleteConfig::default());
//! autocomplete.set_anchor_geometry(
//!     Rect::new(20.0, 20.0, 200.0, 32.0),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//!
//! let now = Instant::now();
//! let props = AutocompleteProps::new(None, &options);
//! autocomplete.handle_focus(props, now);
//!
//! let view = autocomplete.render(props, now);
//! let panel = view.panel.expect("panel is mounted while open");
//! assert_eq!(panel.position.unwrap().y, 56.0);
//! assert_eq!(panel.list.unwrap().rows.len(), 3);
//! ```

pub mod accessibility;
pub mod animation;
pub mod config;
pub mod controller;
pub mod events;
pub mod filter;
pub mod geometry;
pub mod highlight;
pub mod matcher;
pub mod navigation;
pub mod option;
pub mod positioning;
pub mod prelude;
pub mod row;
pub mod virtual_list;

mod error;

pub use config::AutocompleteConfig;
pub use controller::{
    Autocomplete, AutocompleteProps, AutocompleteView, ListView, PanelView, ValueChange,
};
pub use error::{AutocompleteError, Result};
pub use events::{Key, NavEvent};
pub use geometry::{Point, Rect, Size};
pub use option::{Candidate, SelectOption, Value};

pub use horizon_autocomplete_core::{ConnectionGuard, ConnectionId, Signal};
