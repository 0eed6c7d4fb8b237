// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rollcall Picker: the interaction core of a profile picker.
//!
//! ## Overview
//!
//! A profile picker is a row of avatars with a name label above it.
//! Hovering or tapping an avatar swaps the name letter by letter and enlarges the avatar;
//! leaving returns to a default name.
//!
//! This crate owns the parts with real decisions in them and leaves rendering to others:
//!
//! - [`Roster`](crate::roster::Roster): the validated pairing table. Label `0` is the default
//!   name; label `i + 1` names avatar `i`. Labels are split into letters with
//!   [`rollcall_letters`].
//! - [`Picker`](crate::picker::Picker): the selection state machine. It issues fire-and-forget
//!   [`Command`](rollcall_tween::types::Command)s to any
//!   [`TransitionEngine`](rollcall_tween::engine::TransitionEngine) keyed by [`Unit`](crate::types::Unit).
//! - [`Router`](crate::router::Router): maps input events to picker actions according to a
//!   [`Modality`](crate::modality::Modality) classified once at startup.
//! - [`ProfilePicker`](crate::widget::ProfilePicker): the two wired together.
//!
//! ## Modalities
//!
//! - Pointer (wide viewport, no touch): entering an avatar activates it, leaving an avatar
//!   shrinks it, leaving the row resets.
//! - Touch (narrow viewport): tapping an avatar toggles it, tapping outside resets.
//! - Hybrid (wide viewport with touch): both sets at once.
//!
//! ## Guarantees
//!
//! - Requesting the pair that is already active issues no commands.
//! - After any sequence of transitions at most one avatar is headed for the enlarged size, and
//!   it is the active avatar.
//! - Every tween overwrites running tweens on the same units, so fast input never leaves
//!   competing tweens behind.
//!
//! ## Example
//!
//! ```
//! use rollcall_picker::modality::{Capabilities, Environment, Modality};
//! use rollcall_picker::motion::PickerConfig;
//! use rollcall_picker::roster::Content;
//! use rollcall_picker::router::InputEvent;
//! use rollcall_picker::types::{AvatarIndex, PairIndex, Unit};
//! use rollcall_picker::widget::ProfilePicker;
//! use rollcall_tween::ledger::Ledger;
//!
//! let content = Content::new(["Our Team", "Ada", "Alan"], 2);
//! let env = Environment::new(1440.0, Capabilities::empty());
//! let mut widget =
//!     ProfilePicker::new(content, &env, PickerConfig::default(), Ledger::new()).unwrap();
//! assert_eq!(widget.modality(), Modality::Pointer);
//!
//! assert!(widget.handle(InputEvent::PointerEnter(AvatarIndex::new(1))));
//! assert_eq!(widget.selection().active_pair(), PairIndex::new(2));
//!
//! // Hovering again changes nothing.
//! assert!(!widget.handle(InputEvent::PointerEnter(AvatarIndex::new(1))));
//!
//! let engine = widget.picker_mut().engine_mut();
//! engine.settle();
//! let size = engine.resting(&Unit::Avatar(AvatarIndex::new(1))).size.unwrap();
//! assert_eq!(size.width, 140.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod modality;
pub mod motion;
pub mod picker;
pub mod roster;
pub mod router;
pub mod selection;
pub mod types;
pub mod widget;
