// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-unit bookkeeping of resting and pending properties.
//!
//! ## Model
//!
//! Every unit has a *resting* property set (what it shows when nothing is animating) and a
//! queue of *pending* tween destinations.
//!
//! - [`Command::Set`] merges into the resting set immediately; pending tweens keep running.
//! - [`Command::Tween`] applies its `from` set immediately, then queues `to` on each target.
//!   With [`overwrite`](crate::types::TweenConfig::overwrite) the unit's queue is cleared first,
//!   so at most one tween is ever in flight on a unit that only receives overwriting tweens.
//! - [`Ledger::settle`] runs every queue to completion in submission order.
//!
//! Timing (durations, staggers, eases) is not modeled: the ledger answers *where* units end up,
//! not *when*.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::engine::TransitionEngine;
use crate::types::{Command, Props};

#[derive(Clone, Debug, Default)]
struct UnitState {
    resting: Props,
    pending: Vec<Props>,
}

/// An engine that tracks where each unit rests and which tweens are still pending on it.
#[derive(Clone, Debug)]
pub struct Ledger<K> {
    units: BTreeMap<K, UnitState>,
}

impl<K> Default for Ledger<K> {
    fn default() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> Ledger<K> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current resting properties of `unit`; empty if the unit was never targeted.
    pub fn resting(&self, unit: &K) -> Props {
        self.units.get(unit).map(|s| s.resting).unwrap_or_default()
    }

    /// Number of tweens still pending on `unit`.
    pub fn in_flight(&self, unit: &K) -> usize {
        self.units.get(unit).map_or(0, |s| s.pending.len())
    }

    /// Properties `unit` will rest at once its pending tweens complete.
    pub fn destination(&self, unit: &K) -> Props {
        let Some(state) = self.units.get(unit) else {
            return Props::new();
        };
        let mut out = state.resting;
        for p in &state.pending {
            out.merge(p);
        }
        out
    }

    /// True if no tween is pending on any unit.
    pub fn is_idle(&self) -> bool {
        self.units.values().all(|s| s.pending.is_empty())
    }

    /// Every unit the ledger has seen, in key order.
    pub fn units(&self) -> impl Iterator<Item = &K> + '_ {
        self.units.keys()
    }

    /// Run every pending tween to completion.
    pub fn settle(&mut self) {
        for state in self.units.values_mut() {
            for p in state.pending.drain(..) {
                state.resting.merge(&p);
            }
        }
    }
}

impl<K: Ord + Clone> TransitionEngine<K> for Ledger<K> {
    fn submit(&mut self, command: Command<K>) {
        tracing::trace!(targets = command.targets().len(), "ledger command");
        match command {
            Command::Set { targets, props } => {
                for unit in targets {
                    self.units.entry(unit).or_default().resting.merge(&props);
                }
            }
            Command::Tween {
                targets,
                from,
                to,
                config,
            } => {
                for unit in targets {
                    let state = self.units.entry(unit).or_default();
                    if config.overwrite {
                        state.pending.clear();
                    }
                    if let Some(from) = &from {
                        state.resting.merge(from);
                    }
                    state.pending.push(to);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TweenConfig;
    use alloc::vec;
    use core::time::Duration;
    use kurbo::Size;

    fn cfg(overwrite: bool) -> TweenConfig {
        TweenConfig::new(Duration::from_millis(500)).with_overwrite(overwrite)
    }

    #[test]
    fn set_applies_immediately() {
        let mut l: Ledger<u32> = Ledger::new();
        l.submit(Command::set(vec![1, 2], Props::new().y_percent(120.0).opacity(0.0)));
        assert_eq!(l.resting(&1).y_percent, Some(120.0));
        assert_eq!(l.resting(&2).opacity, Some(0.0));
        assert!(l.is_idle());
        assert_eq!(l.units().count(), 2);
    }

    #[test]
    fn from_applies_immediately_and_to_on_settle() {
        let mut l: Ledger<u32> = Ledger::new();
        l.submit(Command::from_to(
            vec![1],
            Props::new().y_percent(120.0).opacity(0.0),
            Props::new().y_percent(0.0).opacity(1.0),
            cfg(true),
        ));
        assert_eq!(l.resting(&1).y_percent, Some(120.0));
        assert_eq!(l.destination(&1).y_percent, Some(0.0));
        assert_eq!(l.in_flight(&1), 1);
        l.settle();
        assert_eq!(l.resting(&1), Props::new().y_percent(0.0).opacity(1.0));
        assert!(l.is_idle());
    }

    // Overwrite clears the queue of each targeted unit, and only those units.
    #[test]
    fn overwrite_is_per_unit() {
        let mut l: Ledger<u32> = Ledger::new();
        let small = Props::new().size(Size::new(70.0, 70.0));
        let large = Props::new().size(Size::new(140.0, 140.0));
        l.submit(Command::tween(vec![0, 1, 2], small, cfg(true)));
        l.submit(Command::tween(vec![1], large, cfg(true)));
        assert_eq!(l.in_flight(&0), 1);
        assert_eq!(l.in_flight(&1), 1);
        assert_eq!(l.destination(&1), large);
        l.settle();
        assert_eq!(l.resting(&0), small);
        assert_eq!(l.resting(&1), large);
        assert_eq!(l.resting(&2), small);
    }

    // Without overwrite, tweens stack and the last one submitted wins on settle.
    #[test]
    fn non_overwriting_tweens_stack() {
        let mut l: Ledger<u32> = Ledger::new();
        l.submit(Command::tween(vec![1], Props::new().opacity(0.0), cfg(false)));
        l.submit(Command::tween(vec![1], Props::new().opacity(1.0), cfg(false)));
        assert_eq!(l.in_flight(&1), 2);
        l.settle();
        assert_eq!(l.resting(&1).opacity, Some(1.0));
    }

    #[test]
    fn unknown_unit_is_empty() {
        let l: Ledger<u32> = Ledger::new();
        assert!(l.resting(&9).is_empty());
        assert!(l.destination(&9).is_empty());
        assert_eq!(l.in_flight(&9), 0);
    }
}
