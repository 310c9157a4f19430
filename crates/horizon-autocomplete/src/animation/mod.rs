//! Panel open/close animation.

mod easing;
mod presence;

pub use easing::{ease, lerp_eased, Easing};
pub use presence::{
    Presence, PresencePhase, TransitionStyles, DEFAULT_DURATION, TRANSLATE_DISTANCE,
};
