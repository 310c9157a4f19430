//! Widget configuration.
//!
//! All fields have defaults, so a configuration file only needs the values it
//! changes:
//!
//! ```
//! use horizon_autocomplete::AutocompleteConfig;
//!
//! let config = AutocompleteConfig::from_toml_str(
//!     r#"
//!     only_matching = true
//!     min_width = 240.0
//!     aria_labelledby = "unit-label"
//!     "#,
//! )
//! .unwrap();
//! assert!(config.only_matching);
//! assert_eq!(config.row_height, 32.0);
//! ```

use std::time::Duration;

use horizon_autocomplete_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{AutocompleteError, Result};
use crate::positioning::{Placement, PositionConfig, Strategy};
use crate::virtual_list::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT};

/// Configuration for an [`Autocomplete`](crate::Autocomplete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Ignore all interaction.
    pub disabled: bool,
    /// Show only options whose label contains the current value.
    pub only_matching: bool,
    /// Panel width; defaults to the input's width.
    pub min_width: Option<f32>,
    /// Id of the element labelling both input and panel.
    pub aria_labelledby: Option<String>,
    /// Estimated row height in pixels.
    pub row_height: f32,
    /// Extra rows materialized on each side of the viewport.
    pub overscan: usize,
    /// Panel height cap in pixels.
    pub max_height: f32,
    /// Gap between input and panel in pixels.
    pub offset: f32,
    /// Inset from the viewport edges the panel keeps.
    pub viewport_padding: f32,
    /// Also slide the panel vertically to keep it on screen.
    pub shift_main_axis: bool,
    pub placement: Placement,
    pub strategy: Strategy,
    /// Open/close transition duration in milliseconds.
    pub transition_ms: u64,
    pub easing: Easing,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        let position = PositionConfig::default();
        Self {
            disabled: false,
            only_matching: false,
            min_width: None,
            aria_labelledby: None,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            max_height: position.max_height,
            offset: position.offset,
            viewport_padding: position.viewport_padding,
            shift_main_axis: position.shift_main_axis,
            placement: position.placement,
            strategy: position.strategy,
            transition_ms: 200,
            easing: Easing::default(),
        }
    }
}

impl AutocompleteConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded configuration");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| AutocompleteError::InvalidConfig(err.to_string()))
    }

    /// Check that every numeric field is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(AutocompleteError::InvalidConfig(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !(self.max_height.is_finite() && self.max_height >= 0.0) {
            return Err(AutocompleteError::InvalidConfig(format!(
                "max_height must be non-negative, got {}",
                self.max_height
            )));
        }
        if !self.offset.is_finite() {
            return Err(AutocompleteError::InvalidConfig("offset must be finite".into()));
        }
        if !(self.viewport_padding.is_finite() && self.viewport_padding >= 0.0) {
            return Err(AutocompleteError::InvalidConfig(format!(
                "viewport_padding must be non-negative, got {}",
                self.viewport_padding
            )));
        }
        if let Some(width) = self.min_width {
            if !(width.is_finite() && width >= 0.0) {
                return Err(AutocompleteError::InvalidConfig(format!(
                    "min_width must be non-negative, got {width}"
                )));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set only-matching filtering.
    pub fn with_only_matching(mut self, only_matching: bool) -> Self {
        self.only_matching = only_matching;
        self
    }

    /// Set the panel width.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Set the labelling element id.
    pub fn with_aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.aria_labelledby = Some(id.into());
        self
    }

    /// Set the estimated row height.
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the panel height cap.
    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the preferred placement.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the transition duration.
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    // =========================================================================
    // Derived settings
    // =========================================================================

    /// Transition duration.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Settings for the positioning engine.
    pub fn position_config(&self) -> PositionConfig {
        PositionConfig {
            placement: self.placement,
            strategy: self.strategy,
            offset: self.offset,
            max_height: self.max_height,
            viewport_padding: self.viewport_padding,
            shift_main_axis: self.shift_main_axis,
        }
    }
}
