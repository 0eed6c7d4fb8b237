// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker's selection state.

use crate::motion::Direction;
use crate::types::{AvatarIndex, PairIndex};

/// Which pair is active.
///
/// The active avatar is part of the variant, so "an avatar is active exactly when a non-default
/// pair matching it is active" holds for every value of this type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The default pair is active and no avatar is.
    #[default]
    Default,
    /// The pair of this avatar is active.
    Pair(AvatarIndex),
}

impl Selection {
    /// Selection that makes `pair` active.
    pub const fn of(pair: PairIndex) -> Self {
        match pair.avatar() {
            Some(avatar) => Self::Pair(avatar),
            None => Self::Default,
        }
    }

    /// Active pair.
    pub const fn active_pair(self) -> PairIndex {
        match self {
            Self::Default => PairIndex::DEFAULT,
            Self::Pair(avatar) => avatar.pair(),
        }
    }

    /// Active avatar, if any.
    pub const fn active_avatar(self) -> Option<AvatarIndex> {
        match self {
            Self::Default => None,
            Self::Pair(avatar) => Some(avatar),
        }
    }

    /// True when the default pair is active.
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// Direction letters travel when moving to this selection.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Default => Direction::Fall,
            Self::Pair(_) => Direction::Rise,
        }
    }
}
