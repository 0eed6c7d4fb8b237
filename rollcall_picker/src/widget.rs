// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled widget: a router in front of a picker.

use rollcall_tween::engine::TransitionEngine;

use crate::error::ConfigError;
use crate::modality::{Environment, Modality};
use crate::motion::PickerConfig;
use crate::picker::Picker;
use crate::roster::{Content, Roster};
use crate::router::{InputEvent, Router};
use crate::selection::Selection;
use crate::types::Unit;

/// A profile picker: validated content, a modality fixed at startup, and a selection machine.
///
/// Bindings are permanent for the widget's lifetime; there is no teardown.
#[derive(Debug)]
pub struct ProfilePicker<E> {
    router: Router,
    picker: Picker<E>,
}

impl<E: TransitionEngine<Unit>> ProfilePicker<E> {
    /// Validate `content`, classify `env`, and install the resting state through `engine`.
    pub fn new(
        content: Content,
        env: &Environment,
        config: PickerConfig,
        engine: E,
    ) -> Result<Self, ConfigError> {
        let roster = Roster::from_content(content)?;
        let router = Router::classify(env, config.breakpoint);
        let picker = Picker::new(roster, config.motion, engine);
        Ok(Self { router, picker })
    }

    /// Feed one input event. Returns whether the selection changed.
    ///
    /// Events for avatars outside the roster are dropped.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let Some(action) = self.router.route(event) else {
            tracing::trace!(?event, "no binding");
            return false;
        };
        match self.picker.perform(action) {
            Ok(changed) => changed,
            Err(err) => {
                tracing::warn!(?event, %err, "dropping event");
                false
            }
        }
    }

    /// The classified modality.
    pub fn modality(&self) -> Modality {
        self.router.modality()
    }

    /// The router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.picker.selection()
    }

    /// The selection machine.
    pub fn picker(&self) -> &Picker<E> {
        &self.picker
    }

    /// The selection machine, mutably, for programmatic transitions.
    pub fn picker_mut(&mut self) -> &mut Picker<E> {
        &mut self.picker
    }
}
