//! Placement and strategy enums for anchored panels.

use serde::{Deserialize, Serialize};

/// Which side of the reference the panel sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// The opposite side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Cross-axis alignment against the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left edges aligned.
    Start,
    /// Centers aligned.
    Center,
    /// Right edges aligned.
    End,
}

/// Where the panel is placed relative to its reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Below, horizontally centered.
    Bottom,
    /// Below, left edges aligned.
    #[default]
    BottomStart,
    /// Below, right edges aligned.
    BottomEnd,
    /// Above, horizontally centered.
    Top,
    /// Above, left edges aligned.
    TopStart,
    /// Above, right edges aligned.
    TopEnd,
}

impl Placement {
    /// Compose a placement from its parts.
    pub fn from_parts(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Bottom, Alignment::Center) => Placement::Bottom,
            (Side::Bottom, Alignment::Start) => Placement::BottomStart,
            (Side::Bottom, Alignment::End) => Placement::BottomEnd,
            (Side::Top, Alignment::Center) => Placement::Top,
            (Side::Top, Alignment::Start) => Placement::TopStart,
            (Side::Top, Alignment::End) => Placement::TopEnd,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Placement::Bottom | Placement::BottomStart | Placement::BottomEnd => Side::Bottom,
            Placement::Top | Placement::TopStart | Placement::TopEnd => Side::Top,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Placement::Bottom | Placement::Top => Alignment::Center,
            Placement::BottomStart | Placement::TopStart => Alignment::Start,
            Placement::BottomEnd | Placement::TopEnd => Alignment::End,
        }
    }

    /// The same alignment on the opposite side.
    pub fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.alignment())
    }
}

/// CSS positioning strategy the coordinates are meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Absolute,
    Fixed,
}
