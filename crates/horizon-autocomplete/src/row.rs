//! Per-row view models.
//!
//! Each row is a pure function of its candidate, its virtual slot and a
//! shared, read-only [`RowContext`] handed down by the controller.

use crate::accessibility::OptionAttributes;
use crate::highlight::{highlight_with, Segment};
use crate::matcher::QueryMatcher;
use crate::option::{Candidate, Value};
use crate::virtual_list::VirtualRow;

/// State every row reads from.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'m> {
    pub active_index: Option<usize>,
    pub selected_index: Option<usize>,
    /// Matcher for the highlight query.
    pub matcher: &'m QueryMatcher,
}

/// Everything needed to render one option row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor<'a> {
    pub value: &'a Value,
    pub label: &'a str,
    /// Index into the host's full option set.
    pub option_index: usize,
    /// Position in the candidate list.
    pub position: usize,
    pub segments: Vec<Segment<'a>>,
    pub is_active: bool,
    pub is_selected: bool,
    pub disabled: bool,
    pub top_offset: f32,
    pub height: f32,
    pub attrs: OptionAttributes,
}

impl<'a> RowDescriptor<'a> {
    /// Build the descriptor for the candidate in `slot`.
    pub fn build(candidate: Candidate<'a>, slot: &VirtualRow, ctx: &RowContext<'_>) -> Self {
        let is_active = ctx.active_index == Some(slot.index);
        let is_selected = ctx.selected_index == Some(slot.index);
        let disabled = !candidate.is_enabled();
        Self {
            value: candidate.value(),
            label: candidate.label(),
            option_index: candidate.index,
            position: slot.index,
            segments: highlight_with(candidate.label(), ctx.matcher),
            is_active,
            is_selected,
            disabled,
            top_offset: slot.offset_top,
            height: slot.height,
            attrs: OptionAttributes::new(candidate.value(), is_active, is_selected, disabled),
        }
    }
}

/// Build descriptors for every slot of a window.
///
/// Slots pointing past the candidate list are skipped.
pub fn build_rows<'a>(
    candidates: &[Candidate<'a>],
    slots: &[VirtualRow],
    ctx: &RowContext<'_>,
) -> Vec<RowDescriptor<'a>> {
    slots
        .iter()
        .filter_map(|slot| {
            let candidate = *candidates.get(slot.index)?;
            Some(RowDescriptor::build(candidate, slot, ctx))
        })
        .collect()
}
