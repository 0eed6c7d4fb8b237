// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input-modality classification.
//!
//! The environment is probed once, when the picker is built, and mapped to exactly one
//! [`Modality`]. Each modality enables a fixed set of [`Bindings`].
//!
//! | Viewport | Touch | Modality |
//! |---|---|---|
//! | narrow | any | [`Touch`](Modality::Touch) |
//! | wide | no | [`Pointer`](Modality::Pointer) |
//! | wide | yes | [`Hybrid`](Modality::Hybrid) |

bitflags::bitflags! {
    /// Touch signals reported by the runtime.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Touch events are supported.
        const TOUCH_EVENTS = 0b0000_0001;
        /// The device reports a non-zero number of simultaneous touch points.
        const TOUCH_POINTS = 0b0000_0010;
    }
}

impl Capabilities {
    /// Capabilities from the two raw runtime signals.
    pub fn probe(touch_events: bool, max_touch_points: u32) -> Self {
        let mut caps = Self::empty();
        caps.set(Self::TOUCH_EVENTS, touch_events);
        caps.set(Self::TOUCH_POINTS, max_touch_points > 0);
        caps
    }

    /// True if either touch signal is present.
    pub fn has_touch(self) -> bool {
        self.intersects(Self::TOUCH_EVENTS | Self::TOUCH_POINTS)
    }
}

/// What the runtime looks like when the picker starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Environment {
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Touch signals.
    pub capabilities: Capabilities,
}

impl Environment {
    /// An environment with the given viewport width and capabilities.
    pub const fn new(viewport_width: f64, capabilities: Capabilities) -> Self {
        Self {
            viewport_width,
            capabilities,
        }
    }
}

/// The input style that decides which bindings are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Wide viewport without touch: hover drives the picker.
    Pointer,
    /// Narrow viewport: taps drive the picker.
    Touch,
    /// Wide viewport with touch: hover and taps both work.
    Hybrid,
}

impl Modality {
    /// Classify `env`. A viewport is wide when its width is at least `breakpoint`.
    pub fn classify(env: &Environment, breakpoint: f64) -> Self {
        let wide = env.viewport_width >= breakpoint;
        match (wide, env.capabilities.has_touch()) {
            (false, _) => Self::Touch,
            (true, false) => Self::Pointer,
            (true, true) => Self::Hybrid,
        }
    }

    /// Bindings active in this modality.
    pub fn bindings(self) -> Bindings {
        match self {
            Self::Pointer => Bindings::POINTER,
            Self::Touch => Bindings::TOUCH,
            Self::Hybrid => Bindings::POINTER | Bindings::TOUCH,
        }
    }
}

bitflags::bitflags! {
    /// Event bindings the router honors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Bindings: u8 {
        /// Pointer entering an avatar activates its pair.
        const AVATAR_ENTER    = 0b0000_0001;
        /// Pointer leaving an avatar shrinks that avatar.
        const AVATAR_LEAVE    = 0b0000_0010;
        /// Pointer leaving the avatar row resets.
        const CONTAINER_LEAVE = 0b0000_0100;
        /// Tapping an avatar toggles its pair.
        const AVATAR_TAP      = 0b0000_1000;
        /// Tapping outside the widget resets.
        const OUTSIDE_TAP     = 0b0001_0000;

        /// Hover bindings.
        const POINTER = Self::AVATAR_ENTER.bits()
            | Self::AVATAR_LEAVE.bits()
            | Self::CONTAINER_LEAVE.bits();
        /// Tap bindings.
        const TOUCH = Self::AVATAR_TAP.bits() | Self::OUTSIDE_TAP.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: f64 = 900.0;

    #[test]
    fn probe_reads_both_signals() {
        assert!(!Capabilities::probe(false, 0).has_touch());
        assert_eq!(Capabilities::probe(true, 0), Capabilities::TOUCH_EVENTS);
        assert_eq!(Capabilities::probe(false, 5), Capabilities::TOUCH_POINTS);
        assert!(Capabilities::probe(true, 10).has_touch());
    }

    #[test]
    fn classification_partitions_the_space() {
        let none = Capabilities::empty();
        let touch = Capabilities::TOUCH_POINTS;
        assert_eq!(
            Modality::classify(&Environment::new(1280.0, none), BP),
            Modality::Pointer
        );
        assert_eq!(
            Modality::classify(&Environment::new(1280.0, touch), BP),
            Modality::Hybrid
        );
        assert_eq!(
            Modality::classify(&Environment::new(390.0, touch), BP),
            Modality::Touch
        );
        // Narrow without touch still uses taps (clicks).
        assert_eq!(
            Modality::classify(&Environment::new(600.0, none), BP),
            Modality::Touch
        );
        // The breakpoint itself is wide.
        assert_eq!(
            Modality::classify(&Environment::new(900.0, none), BP),
            Modality::Pointer
        );
    }

    #[test]
    fn hybrid_is_the_union() {
        assert_eq!(Modality::Pointer.bindings() & Modality::Touch.bindings(), Bindings::empty());
        assert_eq!(Modality::Hybrid.bindings(), Bindings::all());
        assert!(!Modality::Pointer.bindings().contains(Bindings::AVATAR_TAP));
        assert!(!Modality::Touch.bindings().contains(Bindings::AVATAR_ENTER));
    }
}
