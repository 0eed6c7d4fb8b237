// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state machine.
//!
//! ## Transitions
//!
//! [`Picker::activate`] and [`Picker::reset`] move the selection and issue the tweens that
//! animate the move. Both are no-ops when the requested pair is already active.
//!
//! | Transition | Outgoing letters exit to | Incoming letters enter from |
//! |---|---|---|
//! | default → pair | `-offset` (up) | `+offset` (below) |
//! | pair → pair | `-offset` (up) | `+offset` (below) |
//! | pair → default | `+offset` (down) | `-offset` (above) |
//!
//! Displaced letters are transparent; resting letters are opaque.
//! Activating a pair shrinks every avatar and then grows the pair's avatar, so at most one avatar
//! is ever headed for the enlarged size.
//!
//! ## Interruption
//!
//! Every tween is issued with overwrite, so a new transition supersedes whatever was still
//! running on the same units. Nothing is awaited.

use alloc::vec;
use alloc::vec::Vec;

use rollcall_tween::engine::TransitionEngine;
use rollcall_tween::types::{Command, Props};

use crate::error::PickerError;
use crate::motion::{Direction, Motion};
use crate::roster::Roster;
use crate::router::Action;
use crate::selection::Selection;
use crate::types::{AvatarIndex, PairIndex, Unit};

/// The selection state machine of one picker, driving engine `E`.
///
/// Owns its roster, its selection and its engine; several pickers can live side by side.
#[derive(Debug)]
pub struct Picker<E> {
    roster: Roster,
    motion: Motion,
    selection: Selection,
    engine: E,
}

impl<E: TransitionEngine<Unit>> Picker<E> {
    /// Create a picker and put every unit in its resting state.
    ///
    /// The default pair starts active: its letters shown, every other pair's letters hidden
    /// below, every avatar at the default size.
    pub fn new(roster: Roster, motion: Motion, engine: E) -> Self {
        let mut picker = Self {
            roster,
            motion,
            selection: Selection::Default,
            engine,
        };
        picker.install();
        picker
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The pairing table.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Motion settings.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The engine, mutably (for example to advance or settle it).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consume the picker, returning its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Make `pair` active. Returns whether the selection changed.
    ///
    /// Activating the default pair is the same as [`Picker::reset`].
    pub fn activate(&mut self, pair: PairIndex) -> Result<bool, PickerError> {
        self.roster.check_pair(pair)?;
        let Some(avatar) = pair.avatar() else {
            return Ok(self.reset());
        };
        let from = self.selection.active_pair();
        if from == pair {
            tracing::trace!(pair = pair.get(), "already active");
            return Ok(false);
        }
        tracing::debug!(from = from.get(), to = pair.get(), "activate");

        let to = Selection::Pair(avatar);
        self.swap_letters(from, pair, to.direction());

        let motion = self.motion;
        self.submit(Command::tween(
            self.roster.avatar_units(),
            Props::new().size(motion.avatar_default),
            motion.avatar_tween(motion.shrink_duration),
        ));
        self.submit(Command::tween(
            vec![Unit::Avatar(avatar)],
            Props::new().size(motion.avatar_enlarged),
            motion.avatar_tween(motion.grow_duration),
        ));

        self.selection = to;
        Ok(true)
    }

    /// Make the default pair active. Returns whether the selection changed.
    pub fn reset(&mut self) -> bool {
        if self.selection.is_default() {
            tracing::trace!("already at default");
            return false;
        }
        let from = self.selection.active_pair();
        tracing::debug!(from = from.get(), "reset");

        self.swap_letters(from, PairIndex::DEFAULT, Selection::Default.direction());

        let motion = self.motion;
        self.submit(Command::tween(
            self.roster.avatar_units(),
            Props::new().size(motion.avatar_default),
            motion.avatar_tween(motion.shrink_duration),
        ));

        self.selection = Selection::Default;
        true
    }

    /// Shrink one avatar back to the default size, leaving the selection alone.
    ///
    /// This is what a pointer leaving an avatar does; the name stays until the pointer leaves
    /// the whole row.
    pub fn shrink(&mut self, avatar: AvatarIndex) -> Result<(), PickerError> {
        let avatar = self.roster.check_avatar(avatar)?;
        let motion = self.motion;
        self.submit(Command::tween(
            vec![Unit::Avatar(avatar)],
            Props::new().size(motion.avatar_default),
            motion.avatar_tween(motion.shrink_duration),
        ));
        Ok(())
    }

    /// Reset if `avatar` is the active one, otherwise activate its pair.
    ///
    /// Returns whether the selection changed, which is always the case for a known avatar.
    pub fn toggle(&mut self, avatar: AvatarIndex) -> Result<bool, PickerError> {
        let avatar = self.roster.check_avatar(avatar)?;
        if self.selection.active_avatar() == Some(avatar) {
            Ok(self.reset())
        } else {
            self.activate(avatar.pair())
        }
    }

    /// Carry out a routed action. Returns whether the selection changed.
    pub fn perform(&mut self, action: Action) -> Result<bool, PickerError> {
        match action {
            Action::Activate(pair) => self.activate(pair),
            Action::Reset => Ok(self.reset()),
            Action::Shrink(avatar) => self.shrink(avatar).map(|()| false),
            Action::Toggle(avatar) => self.toggle(avatar),
        }
    }

    fn install(&mut self) {
        let motion = self.motion;
        let mut hidden: Vec<Unit> = Vec::new();
        for pair in &self.roster.pairs()[1..] {
            hidden.extend(pair.letter_units());
        }
        let shown = self.roster.default_pair().letter_units();
        self.submit(Command::set(shown, motion.shown()));
        self.submit(Command::set(
            hidden,
            motion.hidden(Direction::Rise.enter_sign()),
        ));
        self.submit(Command::set(
            self.roster.avatar_units(),
            Props::new().size(motion.avatar_default),
        ));
    }

    fn swap_letters(&mut self, from: PairIndex, to: PairIndex, direction: Direction) {
        let motion = self.motion;
        let config = motion.letter_tween();
        let outgoing = self.letter_units(from);
        let incoming = self.letter_units(to);
        self.submit(Command::tween(
            outgoing,
            motion.hidden(direction.exit_sign()),
            config,
        ));
        self.submit(Command::from_to(
            incoming,
            motion.hidden(direction.enter_sign()),
            motion.shown(),
            config,
        ));
    }

    fn letter_units(&self, pair: PairIndex) -> Vec<Unit> {
        self.roster
            .pair(pair)
            .map(|p| p.letter_units())
            .unwrap_or_default()
    }

    // A pair without letters (or a roster without avatars) yields empty target sets; skip them.
    fn submit(&mut self, command: Command<Unit>) {
        if !command.is_empty() {
            self.engine.submit(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Content;
    use kurbo::Size;
    use rollcall_tween::engine::Recorder;
    use rollcall_tween::ledger::Ledger;

    const SMALL: Size = Size::new(70.0, 70.0);
    const LARGE: Size = Size::new(140.0, 140.0);

    fn roster() -> Roster {
        Roster::from_content(Content::new(["Team", "Ada", "Alan", "Grace"], 3)).unwrap()
    }

    fn ledger_picker() -> Picker<Ledger<Unit>> {
        Picker::new(roster(), Motion::default(), Ledger::new())
    }

    fn recorder_picker() -> Picker<Recorder<Unit>> {
        let mut p = Picker::new(roster(), Motion::default(), Recorder::new());
        p.engine_mut().take();
        p
    }

    fn pair(i: usize) -> PairIndex {
        PairIndex::new(i)
    }

    fn avatar(i: usize) -> AvatarIndex {
        AvatarIndex::new(i)
    }

    fn letters_of(p: &Picker<Ledger<Unit>>, i: usize) -> Vec<Unit> {
        p.roster().pair(pair(i)).unwrap().letter_units()
    }

    fn enlarged(p: &Picker<Ledger<Unit>>) -> Vec<AvatarIndex> {
        p.roster()
            .avatars()
            .filter(|a| p.engine().destination(&Unit::Avatar(*a)).size == Some(LARGE))
            .collect()
    }

    // The first and, for tweens, last y offsets a command moves letters through.
    fn y_path(c: &Command<Unit>) -> (Option<f64>, Option<f64>) {
        match c {
            Command::Tween { from, to, .. } => (from.and_then(|f| f.y_percent), to.y_percent),
            Command::Set { props, .. } => (None, props.y_percent),
        }
    }

    #[test]
    fn install_sets_resting_state() {
        let p = ledger_picker();
        for u in letters_of(&p, 0) {
            assert_eq!(p.engine().resting(&u), Props::new().y_percent(0.0).opacity(1.0));
        }
        for i in 1..=3 {
            for u in letters_of(&p, i) {
                assert_eq!(
                    p.engine().resting(&u),
                    Props::new().y_percent(120.0).opacity(0.0)
                );
            }
        }
        for a in p.roster().avatars() {
            assert_eq!(p.engine().resting(&Unit::Avatar(a)).size, Some(SMALL));
        }
        assert!(p.engine().is_idle());
        assert_eq!(p.selection(), Selection::Default);
    }

    #[test]
    fn activate_same_pair_is_a_no_op() {
        let mut p = recorder_picker();
        assert_eq!(p.activate(pair(2)), Ok(true));
        let issued = p.engine().len();
        assert_eq!(p.activate(pair(2)), Ok(false));
        assert_eq!(p.engine().len(), issued);
        assert_eq!(p.selection(), Selection::Pair(avatar(1)));
    }

    #[test]
    fn reset_at_default_is_a_no_op() {
        let mut p = recorder_picker();
        assert!(!p.reset());
        assert_eq!(p.activate(PairIndex::DEFAULT), Ok(false));
        assert!(p.engine().is_empty());
    }

    #[test]
    fn default_to_pair_rises() {
        let mut p = recorder_picker();
        p.activate(pair(1)).unwrap();
        let cmds = p.engine().commands();
        assert_eq!(cmds.len(), 4);
        // Outgoing default letters exit upward.
        assert_eq!(cmds[0].targets()[0], Unit::Letter { pair: pair(0), position: 0 });
        assert_eq!(y_path(&cmds[0]), (None, Some(-120.0)));
        // Incoming letters enter from below.
        assert_eq!(cmds[1].targets()[0], Unit::Letter { pair: pair(1), position: 0 });
        assert_eq!(y_path(&cmds[1]), (Some(120.0), Some(0.0)));
        assert!(cmds.iter().all(|c| c.config().is_some_and(|c| c.overwrite)));
    }

    #[test]
    fn pair_to_pair_rises() {
        let mut p = recorder_picker();
        p.activate(pair(1)).unwrap();
        p.engine_mut().take();
        p.activate(pair(3)).unwrap();
        let cmds = p.engine().commands();
        assert_eq!(cmds[0].targets()[0], Unit::Letter { pair: pair(1), position: 0 });
        assert_eq!(y_path(&cmds[0]), (None, Some(-120.0)));
        assert_eq!(cmds[1].targets()[0], Unit::Letter { pair: pair(3), position: 0 });
        assert_eq!(y_path(&cmds[1]), (Some(120.0), Some(0.0)));
    }

    #[test]
    fn pair_to_default_falls() {
        let mut p = recorder_picker();
        p.activate(pair(2)).unwrap();
        p.engine_mut().take();
        assert!(p.reset());
        let cmds = p.engine().commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0].targets()[0], Unit::Letter { pair: pair(2), position: 0 });
        assert_eq!(y_path(&cmds[0]), (None, Some(120.0)));
        assert_eq!(cmds[1].targets()[0], Unit::Letter { pair: pair(0), position: 0 });
        assert_eq!(y_path(&cmds[1]), (Some(-120.0), Some(0.0)));
        assert_eq!(cmds[2].end_props().size, Some(SMALL));
        assert_eq!(cmds[2].targets().len(), 3);
        assert_eq!(p.selection(), Selection::Default);
    }

    #[test]
    fn letter_targets_keep_label_order() {
        let mut p = recorder_picker();
        p.activate(pair(3)).unwrap();
        let incoming = p.engine().commands()[1].targets();
        let positions: Vec<usize> = incoming
            .iter()
            .map(|u| match u {
                Unit::Letter { position, .. } => *position,
                Unit::Avatar(_) => usize::MAX,
            })
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn at_most_one_avatar_enlarged() {
        let mut p = ledger_picker();
        let script = [
            Some(2),
            Some(1),
            Some(1),
            None,
            Some(3),
            Some(2),
            None,
            None,
            Some(3),
        ];
        for step in script {
            match step {
                Some(i) => {
                    p.activate(pair(i)).unwrap();
                }
                None => {
                    p.reset();
                }
            }
            let expected: Vec<AvatarIndex> = p.selection().active_avatar().into_iter().collect();
            assert_eq!(enlarged(&p), expected);
        }
        p.engine_mut().settle();
        assert_eq!(p.engine().resting(&Unit::Avatar(avatar(2))).size, Some(LARGE));
    }

    #[test]
    fn rapid_reentry_leaves_one_target_per_unit() {
        let mut p = ledger_picker();
        p.activate(pair(1)).unwrap();
        p.activate(pair(2)).unwrap();

        for u in letters_of(&p, 1) {
            assert_eq!(p.engine().in_flight(&u), 1);
            assert_eq!(
                p.engine().destination(&u),
                Props::new().y_percent(-120.0).opacity(0.0)
            );
        }
        for u in letters_of(&p, 2) {
            assert_eq!(p.engine().in_flight(&u), 1);
            assert_eq!(p.engine().destination(&u), Props::new().y_percent(0.0).opacity(1.0));
        }
        for a in p.roster().avatars() {
            assert_eq!(p.engine().in_flight(&Unit::Avatar(a)), 1);
        }
        assert_eq!(enlarged(&p), vec![avatar(1)]);

        p.engine_mut().settle();
        assert_eq!(p.selection(), Selection::Pair(avatar(1)));
        for u in letters_of(&p, 1) {
            assert_eq!(p.engine().resting(&u).opacity, Some(0.0));
        }
    }

    // Coming back to a pair whose exit is still running supersedes that exit.
    #[test]
    fn return_supersedes_running_exit() {
        let mut p = ledger_picker();
        p.activate(pair(1)).unwrap();
        p.activate(pair(2)).unwrap();
        p.activate(pair(1)).unwrap();
        for u in letters_of(&p, 1) {
            assert_eq!(p.engine().in_flight(&u), 1);
            assert_eq!(p.engine().destination(&u).y_percent, Some(0.0));
        }
    }

    #[test]
    fn shrink_touches_one_avatar_only() {
        let mut p = recorder_picker();
        p.activate(pair(2)).unwrap();
        p.engine_mut().take();
        p.shrink(avatar(1)).unwrap();
        let cmds = p.engine().commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].targets(), &[Unit::Avatar(avatar(1))]);
        assert_eq!(cmds[0].end_props().size, Some(SMALL));
        assert_eq!(
            cmds[0].config().map(|c| c.duration),
            Some(Motion::default().shrink_duration)
        );
        assert_eq!(p.selection(), Selection::Pair(avatar(1)));
    }

    #[test]
    fn toggle_flips_between_pair_and_default() {
        let mut p = recorder_picker();
        assert_eq!(p.toggle(avatar(0)), Ok(true));
        assert_eq!(p.selection(), Selection::Pair(avatar(0)));
        assert_eq!(p.toggle(avatar(0)), Ok(true));
        assert_eq!(p.selection(), Selection::Default);
        assert_eq!(p.toggle(avatar(2)), Ok(true));
        assert_eq!(p.toggle(avatar(1)), Ok(true));
        assert_eq!(p.selection(), Selection::Pair(avatar(1)));
    }

    #[test]
    fn unknown_indices_are_rejected_without_commands() {
        let mut p = recorder_picker();
        assert_eq!(
            p.activate(pair(9)),
            Err(PickerError::UnknownPair { pair: 9, pairs: 4 })
        );
        assert_eq!(
            p.toggle(avatar(3)),
            Err(PickerError::UnknownAvatar {
                avatar: 3,
                avatars: 3
            })
        );
        assert!(p.shrink(avatar(7)).is_err());
        assert!(p.engine().is_empty());
        assert_eq!(p.selection(), Selection::Default);
    }

    #[test]
    fn pair_without_letters_still_resizes_avatar() {
        let roster = Roster::from_content(Content::new(["Team", " "], 1)).unwrap();
        let mut p = Picker::new(roster, Motion::default(), Recorder::new());
        p.engine_mut().take();
        assert_eq!(p.activate(pair(1)), Ok(true));
        let cmds = p.engine().commands();
        // Default letters exit; the empty incoming group is skipped; avatars resize.
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0].targets()[0], Unit::Letter { .. }));
        assert_eq!(cmds[2].targets(), &[Unit::Avatar(avatar(0))]);
        assert_eq!(cmds[2].end_props().size, Some(LARGE));
    }

    #[test]
    fn perform_maps_actions() {
        let mut p = recorder_picker();
        assert_eq!(p.perform(Action::Activate(pair(1))), Ok(true));
        assert_eq!(p.perform(Action::Shrink(avatar(0))), Ok(false));
        assert_eq!(p.perform(Action::Reset), Ok(true));
        assert_eq!(p.perform(Action::Reset), Ok(false));
        assert_eq!(p.perform(Action::Toggle(avatar(2))), Ok(true));
    }
}
