//! The autocomplete controller.
//!
//! [`Autocomplete`] binds filtering, navigation, virtualization, highlighting
//! and positioning to a host's event stream. It never keeps a copy of the
//! option set: every handler and [`Autocomplete::render`] take the current
//! [`AutocompleteProps`].
//!
//! # Signals
//!
//! - `value_changed(ValueChange)`: every keystroke (`picked == false`) and
//!   every commit (`picked == true`)
//! - `open_changed(bool)`: the panel opened or closed
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use horizon_autocomplete::{Autocomplete, AutocompleteConfig, AutocompleteProps, Key, SelectOption};
//!
//! let options: Vec<SelectOption> =
//!     ["pcs", "kg", "meter"].into_iter().map(SelectOption::text).collect();
//! let mut autocomplete = Autocomplete::new(AutocompleteConfig::default());
//! autocomplete.value_changed.connect(|change| {
//!     println!("{} (picked: {})", change.value, change.picked);
//! });
//!
//! let now = Instant::now();
//! let props = AutocompleteProps::new(None, &options);
//! autocomplete.handle_focus(props, now);
//! autocomplete.handle_key_down(props, Key::ArrowDown, now);
//! assert!(autocomplete.handle_key_down(props, Key::Enter, now));
//! ```

use std::sync::Arc;
use std::time::Instant;

use horizon_autocomplete_core::logging::{span_names, targets};
use horizon_autocomplete_core::{PerfSpan, Signal};

use crate::accessibility::{option_id, ComboboxAttributes, PanelAttributes};
use crate::animation::{Presence, PresencePhase, TransitionStyles};
use crate::config::AutocompleteConfig;
use crate::events::{Key, NavEvent};
use crate::filter::filter_candidates;
use crate::geometry::Rect;
use crate::matcher::QueryMatcher;
use crate::navigation::{NavOutcome, NavigationState, Navigator};
use crate::option::{Candidate, SelectOption, Value};
use crate::positioning::{
    compute_position, AutoUpdate, LayoutSignals, LayoutSnapshot, PositionConfig, PositionState,
    Side,
};
use crate::row::{build_rows, RowContext, RowDescriptor};
use crate::virtual_list::{ScrollAlign, Virtualizer};

/// Payload of [`Autocomplete::value_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub value: Value,
    /// `true` when the value came from committing an option.
    pub picked: bool,
}

/// Host-owned inputs, supplied fresh on every call.
#[derive(Debug, Clone, Copy)]
pub struct AutocompleteProps<'a> {
    /// The externally controlled current value.
    pub value: Option<&'a Value>,
    pub options: &'a [SelectOption],
}

impl<'a> AutocompleteProps<'a> {
    pub fn new(value: Option<&'a Value>, options: &'a [SelectOption]) -> Self {
        Self { value, options }
    }
}

/// The scrollable option list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    /// Height of the scroll content.
    pub total_height: f32,
    pub rows: Vec<RowDescriptor<'a>>,
}

/// The floating panel, present while mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<'a> {
    /// `None` until anchor geometry is known.
    pub position: Option<PositionState>,
    pub transition: TransitionStyles,
    pub phase: PresencePhase,
    pub attrs: PanelAttributes,
    /// Omitted when there are no candidates.
    pub list: Option<ListView<'a>>,
}

/// Everything the render boundary needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteView<'a> {
    pub input: ComboboxAttributes,
    pub navigation: NavigationState,
    pub panel: Option<PanelView<'a>>,
}

/// A combobox with a filterable, virtualized, anchored option list.
pub struct Autocomplete {
    config: AutocompleteConfig,
    position_config: PositionConfig,
    navigator: Navigator,
    virtualizer: Virtualizer,
    presence: Presence,
    anchor: Option<LayoutSnapshot>,
    layout: Option<Arc<LayoutSignals>>,
    auto_update: Option<AutoUpdate>,
    /// Selected position already scrolled into view during this open.
    centered: Option<usize>,

    /// Signal emitted with every typed or committed value.
    pub value_changed: Signal<ValueChange>,
    /// Signal emitted when the panel opens or closes.
    pub open_changed: Signal<bool>,
}

impl Autocomplete {
    /// Create a controller without a layout source.
    ///
    /// Anchor geometry must then be pushed with
    /// [`set_anchor_geometry`](Self::set_anchor_geometry).
    pub fn new(config: AutocompleteConfig) -> Self {
        let mut navigator = Navigator::new();
        navigator.set_disabled(config.disabled);
        Self {
            position_config: config.position_config(),
            virtualizer: Virtualizer::new(config.row_height, config.overscan),
            presence: Presence::new(config.transition_duration()).with_easing(config.easing),
            navigator,
            config,
            anchor: None,
            layout: None,
            auto_update: None,
            centered: None,
            value_changed: Signal::new(),
            open_changed: Signal::new(),
        }
    }

    /// Create a controller that follows the host's layout notifications while
    /// the panel is open.
    pub fn with_layout_source(config: AutocompleteConfig, signals: Arc<LayoutSignals>) -> Self {
        let mut autocomplete = Self::new(config);
        autocomplete.layout = Some(signals);
        autocomplete
    }

    // =========================================================================
    // Getters / Setters
    // =========================================================================

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    /// Whether the panel is in the tree (open, or still animating out).
    pub fn is_mounted(&self) -> bool {
        self.presence.is_mounted()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Whether layout listeners are currently connected.
    pub fn is_tracking_layout(&self) -> bool {
        self.auto_update.is_some()
    }

    pub fn virtualizer(&self) -> &Virtualizer {
        &self.virtualizer
    }

    /// Enable or disable the widget. Disabling closes the panel.
    pub fn set_disabled(&mut self, disabled: bool, now: Instant) {
        self.config.disabled = disabled;
        if let Some(open) = self.navigator.set_disabled(disabled) {
            self.apply_open_change(open, now);
        }
    }

    /// Replace the layout source. Listeners move over if the panel is open.
    pub fn set_layout_source(&mut self, signals: Option<Arc<LayoutSignals>>) {
        self.auto_update = None;
        self.layout = signals;
        if self.navigator.is_open() {
            self.start_auto_update();
        }
    }

    /// Push anchor and viewport geometry.
    ///
    /// Replaces any layout notification received so far; the next
    /// notification from the layout source replaces it in turn.
    pub fn set_anchor_geometry(&mut self, reference: Rect, viewport: Rect) {
        if let Some(update) = self.auto_update.as_mut() {
            update.take_latest();
        }
        self.anchor = Some(LayoutSnapshot {
            reference,
            viewport,
        });
    }

    // =========================================================================
    // Event handlers
    // =========================================================================

    /// The input's text changed.
    ///
    /// The typed value is emitted before navigation state is updated. Returns
    /// whether the event was consumed.
    pub fn handle_text_change(&mut self, props: AutocompleteProps<'_>, text: &str, now: Instant) -> bool {
        if self.config.disabled {
            return false;
        }

        let typed = Value::Text(text.to_owned());
        tracing::trace!(target: targets::CONTROLLER, %typed, "typed");
        self.value_changed.emit(ValueChange {
            value: typed.clone(),
            picked: false,
        });

        let candidates = filter_candidates(props.options, Some(&typed), self.config.only_matching);
        self.navigator.sync(&candidates, Some(&typed));
        let outcome = self.navigator.dispatch(NavEvent::TextChanged(text), &candidates);
        self.apply(outcome, &candidates, now)
    }

    /// A key went down in the input. Returns whether the host should prevent
    /// the key's default action.
    pub fn handle_key_down(&mut self, props: AutocompleteProps<'_>, key: Key, now: Instant) -> bool {
        self.dispatch(props, NavEvent::Key(key), now)
    }

    /// The input gained focus.
    pub fn handle_focus(&mut self, props: AutocompleteProps<'_>, now: Instant) -> bool {
        self.dispatch(props, NavEvent::Focus, now)
    }

    /// The input was clicked.
    pub fn handle_input_click(&mut self, props: AutocompleteProps<'_>, now: Instant) -> bool {
        self.dispatch(props, NavEvent::InputClick, now)
    }

    /// Focus left the widget.
    pub fn handle_blur(&mut self, props: AutocompleteProps<'_>, now: Instant) -> bool {
        self.dispatch(props, NavEvent::Blur, now)
    }

    /// A pointer went down outside the input and the panel.
    pub fn handle_outside_pointer_down(&mut self, props: AutocompleteProps<'_>, now: Instant) -> bool {
        self.dispatch(props, NavEvent::OutsidePointerDown, now)
    }

    /// A row was clicked. `position` is the row's candidate position.
    pub fn handle_row_click(&mut self, props: AutocompleteProps<'_>, position: usize, now: Instant) -> bool {
        self.dispatch(props, NavEvent::RowClick(position), now)
    }

    /// The pointer moved over a row.
    pub fn handle_row_hover(&mut self, props: AutocompleteProps<'_>, position: usize, now: Instant) -> bool {
        self.dispatch(props, NavEvent::RowHover(position), now)
    }

    /// The list container scrolled.
    pub fn handle_scroll(&mut self, scroll_offset: f32) {
        self.virtualizer.set_scroll_offset(scroll_offset);
    }

    /// Advance the open/close transition. Returns the current phase.
    pub fn tick(&mut self, now: Instant) -> PresencePhase {
        self.pull_layout();
        self.presence.tick(now)
    }

    fn dispatch(&mut self, props: AutocompleteProps<'_>, event: NavEvent<'_>, now: Instant) -> bool {
        let candidates = self.candidates(props);
        self.navigator.sync(&candidates, props.value);
        let outcome = self.navigator.dispatch(event, &candidates);
        self.apply(outcome, &candidates, now)
    }

    fn apply(&mut self, outcome: NavOutcome, candidates: &[Candidate<'_>], now: Instant) -> bool {
        if let Some(candidate) = outcome.commit.and_then(|pos| candidates.get(pos)) {
            tracing::debug!(
                target: targets::CONTROLLER,
                value = %candidate.value(),
                option_index = candidate.index,
                "picked"
            );
            self.value_changed.emit(ValueChange {
                value: candidate.value().clone(),
                picked: true,
            });
        }
        if let Some(open) = outcome.open_changed {
            self.apply_open_change(open, now);
        }
        outcome.handled
    }

    fn apply_open_change(&mut self, open: bool, now: Instant) {
        self.presence.set_open(open, now);
        if open {
            self.centered = None;
            self.start_auto_update();
        } else if let Some(update) = self.auto_update.take() {
            update.stop();
        }
        self.open_changed.emit(open);
    }

    fn start_auto_update(&mut self) {
        if let Some(signals) = &self.layout {
            self.auto_update = Some(AutoUpdate::start(signals));
        }
    }

    fn pull_layout(&mut self) {
        if let Some(snapshot) = self.auto_update.as_mut().and_then(AutoUpdate::take_latest) {
            self.anchor = Some(snapshot);
        }
    }

    fn candidates<'a>(&self, props: AutocompleteProps<'a>) -> Vec<Candidate<'a>> {
        filter_candidates(props.options, props.value, self.config.only_matching)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Produce the view for the current frame.
    pub fn render<'a>(&mut self, props: AutocompleteProps<'a>, now: Instant) -> AutocompleteView<'a> {
        let _perf = PerfSpan::new(span_names::RENDER);
        self.pull_layout();
        self.presence.tick(now);

        let candidates = self.candidates(props);
        self.navigator.sync(&candidates, props.value);
        let nav = self.navigator.state();
        let labelledby = self.config.aria_labelledby.clone();

        let mut input = ComboboxAttributes::new(self.config.disabled, labelledby.as_deref());
        input.aria_expanded = nav.is_open;
        if nav.is_open {
            input.aria_activedescendant = nav
                .active_index
                .and_then(|pos| candidates.get(pos))
                .map(|candidate| option_id(candidate.value()));
        }

        let panel = if self.presence.is_mounted() {
            Some(self.render_panel(&candidates, props.value, nav, labelledby.as_deref(), now))
        } else {
            None
        };

        AutocompleteView {
            input,
            navigation: nav,
            panel,
        }
    }

    fn render_panel<'a>(
        &mut self,
        candidates: &[Candidate<'a>],
        value: Option<&Value>,
        nav: NavigationState,
        labelledby: Option<&str>,
        now: Instant,
    ) -> PanelView<'a> {
        let position = self.anchor.map(|anchor| {
            let preferred = self
                .position_config
                .preferred_size(anchor.reference, self.config.min_width);
            compute_position(anchor.reference, preferred, anchor.viewport, &self.position_config)
        });

        self.virtualizer.set_count(candidates.len());
        self.virtualizer
            .set_viewport_height(position.map_or(self.config.max_height, |p| p.height));

        if nav.is_open {
            if let Some(selected) = nav.selected_index {
                if self.centered != Some(selected) {
                    self.virtualizer.scroll_to_index(selected, ScrollAlign::Center);
                    self.centered = Some(selected);
                }
            }
        }

        let side = position.map_or(Side::Bottom, |p| p.side());
        let list = if candidates.is_empty() {
            None
        } else {
            let window = self.virtualizer.window();
            let matcher = QueryMatcher::new(&value.map(Value::to_string).unwrap_or_default());
            let ctx = RowContext {
                active_index: nav.active_index,
                selected_index: nav.selected_index,
                matcher: &matcher,
            };
            Some(ListView {
                total_height: window.total_height,
                rows: build_rows(candidates, &window.rows, &ctx),
            })
        };

        PanelView {
            position,
            transition: self.presence.styles(now, side),
            phase: self.presence.phase(),
            attrs: PanelAttributes::new(labelledby),
            list,
        }
    }
}

impl std::fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("navigation", &self.navigator.state())
            .field("phase", &self.presence.phase())
            .field("disabled", &self.config.disabled)
            .field("tracking_layout", &self.auto_update.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn units() -> Vec<SelectOption> {
        ["pcs", "hours", "meter", "square meter"]
            .into_iter()
            .map(SelectOption::text)
            .collect()
    }

    #[test]
    fn test_focus_opens_and_mounts() {
        let options = units();
        let props = AutocompleteProps::new(None, &options);
        let mut autocomplete = Autocomplete::new(AutocompleteConfig::default());
        let now = Instant::now();

        autocomplete.handle_focus(props, now);
        assert!(autocomplete.is_open());
        assert!(autocomplete.is_mounted());

        let view = autocomplete.render(props, now);
        assert!(view.input.aria_expanded);
        assert_eq!(view.input.aria_activedescendant.as_deref(), Some("pcs"));
        let panel = view.panel.unwrap();
        assert!(panel.position.is_none());
        assert_eq!(panel.list.unwrap().total_height, 4.0 * 32.0);
    }

    #[test]
    fn test_exit_animation_keeps_panel_mounted() {
        let options = units();
        let props = AutocompleteProps::new(None, &options);
        let mut autocomplete = Autocomplete::new(AutocompleteConfig::default());
        let now = Instant::now();

        autocomplete.handle_focus(props, now);
        autocomplete.handle_blur(props, now + Duration::from_millis(300));
        assert!(!autocomplete.is_open());

        let view = autocomplete.render(props, now + Duration::from_millis(350));
        assert_eq!(view.panel.unwrap().phase, PresencePhase::Unmounting);

        let view = autocomplete.render(props, now + Duration::from_millis(600));
        assert!(view.panel.is_none());
    }

    #[test]
    fn test_empty_candidates_omit_list() {
        let options = units();
        let query = Value::from("zzz");
        let props = AutocompleteProps::new(Some(&query), &options);
        let config = AutocompleteConfig::default().with_only_matching(true);
        let mut autocomplete = Autocomplete::new(config);
        let now = Instant::now();
        autocomplete.set_anchor_geometry(
            Rect::new(0.0, 0.0, 100.0, 30.0),
            Rect::new(0.0, 0.0, 800.0, 600.0),
        );

        autocomplete.handle_focus(props, now);
        let panel = autocomplete.render(props, now).panel.unwrap();
        assert!(panel.list.is_none());
        assert!(panel.position.is_some());
    }

    #[test]
    fn test_disable_closes() {
        let options = units();
        let props = AutocompleteProps::new(None, &options);
        let mut autocomplete = Autocomplete::new(AutocompleteConfig::default());
        let now = Instant::now();

        autocomplete.handle_focus(props, now);
        autocomplete.set_disabled(true, now);
        assert!(!autocomplete.is_open());
        assert!(!autocomplete.handle_key_down(props, Key::ArrowDown, now));
        assert!(!autocomplete.is_open());
        assert!(autocomplete.render(props, now).input.aria_disabled);
    }
}
