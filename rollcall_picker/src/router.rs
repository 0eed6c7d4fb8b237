// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map input events to picker actions under the active bindings.
//!
//! ## Routing
//!
//! | Event | Binding | Action |
//! |---|---|---|
//! | [`PointerEnter(a)`](InputEvent::PointerEnter) | `AVATAR_ENTER` | [`Activate(a.pair())`](Action::Activate) |
//! | [`PointerLeave(a)`](InputEvent::PointerLeave) | `AVATAR_LEAVE` | [`Shrink(a)`](Action::Shrink) |
//! | [`ContainerLeave`](InputEvent::ContainerLeave) | `CONTAINER_LEAVE` | [`Reset`](Action::Reset) |
//! | [`Tap(Avatar(a))`](TapTarget::Avatar) | `AVATAR_TAP` | [`Toggle(a)`](Action::Toggle) |
//! | [`Tap(Outside)`](TapTarget::Outside) | `OUTSIDE_TAP` | [`Reset`](Action::Reset) |
//! | [`Tap(Inside)`](TapTarget::Inside) | none | none |
//!
//! Events whose binding is not active route to nothing.

use crate::modality::{Bindings, Environment, Modality};
use crate::types::{AvatarIndex, PairIndex};

/// Where a tap landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapTarget {
    /// On an avatar.
    Avatar(AvatarIndex),
    /// Inside the widget but not on an avatar.
    Inside,
    /// Anywhere outside the widget.
    Outside,
}

/// An input event relevant to the picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Pointer entered an avatar.
    PointerEnter(AvatarIndex),
    /// Pointer left an avatar.
    PointerLeave(AvatarIndex),
    /// Pointer left the avatar row.
    ContainerLeave,
    /// Tap or click.
    Tap(TapTarget),
}

/// What the picker should do in response to an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Activate a pair.
    Activate(PairIndex),
    /// Shrink one avatar, keeping the selection.
    Shrink(AvatarIndex),
    /// Activate the avatar's pair, or reset if it is already active.
    Toggle(AvatarIndex),
    /// Return to the default pair.
    Reset,
}

/// Routes events according to a modality fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Router {
    modality: Modality,
    bindings: Bindings,
}

impl Router {
    /// Router with the bindings of `modality`.
    pub fn new(modality: Modality) -> Self {
        Self {
            modality,
            bindings: modality.bindings(),
        }
    }

    /// Classify `env` once and build the matching router.
    pub fn classify(env: &Environment, breakpoint: f64) -> Self {
        let modality = Modality::classify(env, breakpoint);
        tracing::debug!(
            ?modality,
            viewport_width = env.viewport_width,
            touch = env.capabilities.has_touch(),
            "classified input modality"
        );
        Self::new(modality)
    }

    /// The classified modality.
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Active bindings.
    pub fn bindings(&self) -> Bindings {
        self.bindings
    }

    /// Action for `event`, or `None` if no active binding handles it.
    pub fn route(&self, event: InputEvent) -> Option<Action> {
        let (binding, action) = match event {
            InputEvent::PointerEnter(avatar) => {
                (Bindings::AVATAR_ENTER, Action::Activate(avatar.pair()))
            }
            InputEvent::PointerLeave(avatar) => (Bindings::AVATAR_LEAVE, Action::Shrink(avatar)),
            InputEvent::ContainerLeave => (Bindings::CONTAINER_LEAVE, Action::Reset),
            InputEvent::Tap(TapTarget::Avatar(avatar)) => {
                (Bindings::AVATAR_TAP, Action::Toggle(avatar))
            }
            InputEvent::Tap(TapTarget::Outside) => (Bindings::OUTSIDE_TAP, Action::Reset),
            InputEvent::Tap(TapTarget::Inside) => return None,
        };
        self.bindings.contains(binding).then_some(action)
    }
}
