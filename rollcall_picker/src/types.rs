// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index and unit types shared by the picker, the router and engines.

/// Index of a name pair. `0` is the default pair; pair `i + 1` belongs to avatar `i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairIndex(usize);

impl PairIndex {
    /// The default pair, shown when nothing is selected. It has no avatar.
    pub const DEFAULT: Self = Self(0);

    /// Pair at raw index `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index.
    pub const fn get(self) -> usize {
        self.0
    }

    /// True for the default pair.
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }

    /// Avatar paired with this name, or `None` for the default pair.
    pub const fn avatar(self) -> Option<AvatarIndex> {
        match self.0 {
            0 => None,
            i => Some(AvatarIndex(i - 1)),
        }
    }
}

/// Index of an avatar, in page order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AvatarIndex(usize);

impl AvatarIndex {
    /// Avatar at raw index `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Name pair this avatar belongs to.
    ///
    /// Saturates, so an out-of-range avatar maps to a pair no roster contains.
    pub const fn pair(self) -> PairIndex {
        PairIndex(self.0.saturating_add(1))
    }
}

/// Key of one animatable unit, as handed to a
/// [`TransitionEngine`](rollcall_tween::engine::TransitionEngine).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// A letter of a pair's name label.
    Letter {
        /// Owning pair.
        pair: PairIndex,
        /// Position within the label's letters.
        position: usize,
    },
    /// An avatar image.
    Avatar(AvatarIndex),
}
