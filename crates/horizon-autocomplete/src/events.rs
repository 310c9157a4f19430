//! Input events understood by the autocomplete engine.

/// Keys the navigation state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    /// Any other key. Ignored by navigation.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name onto a [`Key`].
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// An interaction delivered to the navigation state machine.
///
/// Row events carry a position in the current candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent<'a> {
    /// The input gained focus.
    Focus,
    /// The input was clicked.
    InputClick,
    /// A key was pressed while the input had focus.
    Key(Key),
    /// The input text changed to the given value.
    TextChanged(&'a str),
    /// A row was clicked.
    RowClick(usize),
    /// The pointer moved over a row.
    RowHover(usize),
    /// Focus left the widget.
    Blur,
    /// A pointer went down outside both the input and the panel.
    OutsidePointerDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom_key() {
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }
}
