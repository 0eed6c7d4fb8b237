// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine trait and a recording engine.

use alloc::vec::Vec;

use crate::types::Command;

/// An animation engine that accepts commands for units keyed by `K`.
///
/// Submission is fire-and-forget: the caller never inspects or awaits a result.
/// Implementations should treat a command with no targets as a silent no-op.
pub trait TransitionEngine<K> {
    /// Accept a command. Must not block.
    fn submit(&mut self, command: Command<K>);
}

impl<K, E: TransitionEngine<K> + ?Sized> TransitionEngine<K> for &mut E {
    #[inline]
    fn submit(&mut self, command: Command<K>) {
        (**self).submit(command);
    }
}

/// An engine that records the commands it receives, in order.
///
/// Commands with no targets are dropped, matching the no-op rule for engines.
#[derive(Clone, Debug, PartialEq)]
pub struct Recorder<K> {
    commands: Vec<Command<K>>,
}

impl<K> Default for Recorder<K> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<K> Recorder<K> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far.
    pub fn commands(&self) -> &[Command<K>] {
        &self.commands
    }

    /// Number of commands received.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the received commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<Command<K>> {
        core::mem::take(&mut self.commands)
    }
}

impl<K> TransitionEngine<K> for Recorder<K> {
    fn submit(&mut self, command: Command<K>) {
        if command.is_empty() {
            tracing::trace!("dropping command with no targets");
            return;
        }
        self.commands.push(command);
    }
}
