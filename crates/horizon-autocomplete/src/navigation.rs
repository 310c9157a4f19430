//! Open/closed and active/selected state for the option list.
//!
//! The [`Navigator`] owns the only mutable interaction state of the widget.
//! Both `active_index` and `selected_index` are positions in the *current*
//! candidate list; the stable identity of an option is its
//! [`Candidate::index`].
//!
//! # Transitions
//!
//! | From | Event | To |
//! |------|-------|----|
//! | Closed | focus, input click, arrow key | Open, active reset |
//! | any | text change | see [`Navigator::dispatch`] |
//! | Open | ArrowDown / ArrowUp | Open, active steps with wrap, skipping disabled |
//! | Open | row hover | Open, active = hovered row |
//! | Open | Enter / row click | Closed, commit |
//! | Open | blur / outside pointer down | Closed |
//! | Open | Escape | Open (dismiss-on-escape is off) |

use horizon_autocomplete_core::logging::targets;

use crate::error::{AutocompleteError, Result};
use crate::events::{Key, NavEvent};
use crate::matcher::QueryMatcher;
use crate::option::{Candidate, Value};

/// Snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub is_open: bool,
    /// Keyboard/pointer highlight position.
    pub active_index: Option<usize>,
    /// Position of the candidate equal to the current value.
    pub selected_index: Option<usize>,
}

/// What a dispatched event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavOutcome {
    /// Whether the event was consumed (the host should prevent its default).
    pub handled: bool,
    /// Candidate position committed by this event.
    pub commit: Option<usize>,
    /// New open state, if it changed.
    pub open_changed: Option<bool>,
}

impl NavOutcome {
    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }
}

/// The navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
    disabled: bool,
}

impl Navigator {
    /// Create a closed navigator.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Enable or disable all interaction. Disabling closes the panel.
    ///
    /// Returns the new open state if it changed.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<bool> {
        self.disabled = disabled;
        if disabled && self.state.is_open {
            self.state.is_open = false;
            tracing::debug!(target: targets::NAVIGATION, "closed by disable");
            return Some(false);
        }
        None
    }

    /// Recompute `selected_index` from the current value and repair
    /// `active_index` against the current candidates.
    pub fn sync(&mut self, candidates: &[Candidate<'_>], value: Option<&Value>) {
        self.state.selected_index =
            value.and_then(|value| candidates.iter().position(|c| c.value() == value));

        let valid = self
            .state
            .active_index
            .is_some_and(|pos| candidates.get(pos).is_some_and(Candidate::is_enabled));
        if !valid {
            self.reset_active(candidates);
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Apply an event against the current candidate list.
    ///
    /// Text changes follow this rule: empty text opens with the active row
    /// reset; text contained (ignoring case) in some enabled candidate's
    /// label opens with that candidate active; any other text resets the
    /// active row and leaves the open state alone.
    pub fn dispatch(&mut self, event: NavEvent<'_>, candidates: &[Candidate<'_>]) -> NavOutcome {
        if self.disabled {
            tracing::trace!(target: targets::NAVIGATION, ?event, "ignored while disabled");
            return NavOutcome::default();
        }
        tracing::trace!(target: targets::NAVIGATION, ?event, state = ?self.state, "dispatch");

        match event {
            NavEvent::Focus | NavEvent::InputClick => NavOutcome {
                open_changed: self.open(candidates),
                ..NavOutcome::default()
            },
            NavEvent::Key(key) => self.handle_key(key, candidates),
            NavEvent::TextChanged(text) => self.handle_text(text, candidates),
            NavEvent::RowClick(pos) => {
                if !self.state.is_open {
                    return NavOutcome::default();
                }
                self.commit(pos, candidates)
            }
            NavEvent::RowHover(pos) => {
                if self.state.is_open && candidates.get(pos).is_some_and(Candidate::is_enabled) {
                    self.state.active_index = Some(pos);
                }
                NavOutcome::default()
            }
            NavEvent::Blur | NavEvent::OutsidePointerDown => NavOutcome {
                open_changed: self.close(),
                ..NavOutcome::default()
            },
        }
    }

    fn handle_key(&mut self, key: Key, candidates: &[Candidate<'_>]) -> NavOutcome {
        match key {
            Key::ArrowDown | Key::ArrowUp => {
                if !self.state.is_open {
                    return NavOutcome {
                        open_changed: self.open(candidates),
                        ..NavOutcome::handled()
                    };
                }
                self.state.active_index = step(
                    self.state.active_index,
                    candidates,
                    matches!(key, Key::ArrowDown),
                );
                NavOutcome::handled()
            }
            Key::Enter if self.state.is_open => match self.state.active_index {
                Some(pos) => self.commit(pos, candidates),
                None => NavOutcome::default(),
            },
            // Escape intentionally does not dismiss.
            Key::Enter | Key::Escape | Key::Tab | Key::Other => NavOutcome::default(),
        }
    }

    fn handle_text(&mut self, text: &str, candidates: &[Candidate<'_>]) -> NavOutcome {
        if text.is_empty() {
            self.reset_active(candidates);
            return NavOutcome {
                open_changed: self.open_keep_active(),
                ..NavOutcome::default()
            };
        }

        let matcher = QueryMatcher::new(text);
        let found = candidates
            .iter()
            .position(|c| c.is_enabled() && matcher.is_match(c.label()));
        match found {
            Some(pos) => {
                self.state.active_index = Some(pos);
                NavOutcome {
                    open_changed: self.open_keep_active(),
                    ..NavOutcome::default()
                }
            }
            None => {
                self.reset_active(candidates);
                NavOutcome::default()
            }
        }
    }

    /// Validate a commit target.
    pub fn try_commit(&self, pos: usize, candidates: &[Candidate<'_>]) -> Result<usize> {
        let candidate = candidates.get(pos).ok_or(AutocompleteError::IndexOutOfBounds {
            index: pos,
            len: candidates.len(),
        })?;
        if !candidate.is_enabled() {
            return Err(AutocompleteError::DisabledCandidate { index: pos });
        }
        Ok(pos)
    }

    fn commit(&mut self, pos: usize, candidates: &[Candidate<'_>]) -> NavOutcome {
        match self.try_commit(pos, candidates) {
            Ok(pos) => {
                tracing::debug!(
                    target: targets::NAVIGATION,
                    position = pos,
                    option_index = candidates[pos].index,
                    "commit"
                );
                self.reset_active(candidates);
                NavOutcome {
                    handled: true,
                    commit: Some(pos),
                    open_changed: self.close(),
                }
            }
            Err(err) => {
                tracing::trace!(target: targets::NAVIGATION, error = %err, "commit ignored");
                NavOutcome::default()
            }
        }
    }

    fn open(&mut self, candidates: &[Candidate<'_>]) -> Option<bool> {
        if self.state.is_open {
            return None;
        }
        self.reset_active(candidates);
        self.open_keep_active()
    }

    fn open_keep_active(&mut self) -> Option<bool> {
        if self.state.is_open {
            return None;
        }
        self.state.is_open = true;
        tracing::debug!(target: targets::NAVIGATION, active = ?self.state.active_index, "opened");
        Some(true)
    }

    fn close(&mut self) -> Option<bool> {
        if !self.state.is_open {
            return None;
        }
        self.state.is_open = false;
        tracing::debug!(target: targets::NAVIGATION, "closed");
        Some(false)
    }

    fn reset_active(&mut self, candidates: &[Candidate<'_>]) {
        self.state.active_index = candidates.iter().position(Candidate::is_enabled);
    }
}

/// Next enabled position in the given direction, wrapping at both ends.
fn step(from: Option<usize>, candidates: &[Candidate<'_>], forward: bool) -> Option<usize> {
    let len = candidates.len();
    if len == 0 {
        return None;
    }

    let enabled = |pos: &usize| candidates[*pos].is_enabled();
    match from.filter(|&pos| pos < len) {
        None if forward => (0..len).find(enabled),
        None => (0..len).rev().find(enabled),
        // The last offset lands back on `pos`, so a lone enabled row stays put.
        Some(pos) => (1..=len)
            .map(|offset| {
                if forward {
                    (pos + offset) % len
                } else {
                    (pos + len - offset % len) % len
                }
            })
            .find(enabled),
    }
}
