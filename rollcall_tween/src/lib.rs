// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rollcall Tween: the command boundary between UI state machines and an animation engine.
//!
//! ## Overview
//!
//! UI code describes *what* should animate as a [`Command`] and hands it to a
//! [`TransitionEngine`]. It never waits for the result: scheduling, easing math and the frame
//! clock belong to the engine.
//!
//! A command targets an ordered set of unit keys `K`. Order matters for staggered tweens,
//! where each unit's start is delayed by its distance from the [`StaggerFrom`] origin.
//!
//! ## Overwrite
//!
//! A tween configured with [`TweenConfig::overwrite`] supersedes every tween still running on any
//! of its units. This is the only interruption mechanism: there are no cancellation handles.
//! Rapid re-targeting (a pointer sweeping across several items) therefore never leaves two
//! tweens fighting over the same unit.
//!
//! ## Engines in this crate
//!
//! - [`Recorder`](crate::engine::Recorder) keeps every command, for tests and logging.
//! - [`Ledger`](crate::ledger::Ledger) tracks resting and pending properties per unit, applying
//!   overwrite exactly as described above. It settles on demand instead of on a clock, which
//!   makes it handy for checking where a sequence of commands will leave each unit.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use rollcall_tween::engine::TransitionEngine;
//! use rollcall_tween::ledger::Ledger;
//! use rollcall_tween::types::{Command, Props, TweenConfig};
//!
//! let mut ledger: Ledger<u32> = Ledger::new();
//! let config = TweenConfig::new(Duration::from_millis(500)).with_overwrite(true);
//!
//! ledger.submit(Command::tween(vec![1, 2], Props::new().y_percent(-120.0), config));
//! // A second tween on unit 2 supersedes the first one there.
//! ledger.submit(Command::tween(vec![2], Props::new().y_percent(0.0), config));
//! assert_eq!(ledger.in_flight(&2), 1);
//!
//! ledger.settle();
//! assert_eq!(ledger.resting(&1).y_percent, Some(-120.0));
//! assert_eq!(ledger.resting(&2).y_percent, Some(0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod engine;
pub mod ledger;
pub mod types;
