// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page content and the validated pairing table built from it.

use alloc::string::String;
use alloc::vec::Vec;

use rollcall_letters::{Label, Letters};

use crate::error::{ConfigError, PickerError};
use crate::types::{AvatarIndex, PairIndex, Unit};

/// Static page content: name labels (default first) and the number of avatars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Content {
    /// Name label texts. Index 0 is the default label; label `i + 1` names avatar `i`.
    pub names: Vec<String>,
    /// Number of avatar images, in page order.
    pub avatars: usize,
}

impl Content {
    /// Content with the given labels and avatar count.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>, avatars: usize) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            avatars,
        }
    }
}

/// A name label plus its optional avatar: the unit of activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamePair {
    index: PairIndex,
    label: Label,
    avatar: Option<AvatarIndex>,
}

impl NamePair {
    /// This pair's index.
    pub fn index(&self) -> PairIndex {
        self.index
    }

    /// The (split) name label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The label's letters.
    pub fn letters(&self) -> &Letters {
        // Labels are split when the roster is built.
        self.label.letters().unwrap_or(&EMPTY)
    }

    /// Associated avatar; `None` for the default pair.
    pub fn avatar(&self) -> Option<AvatarIndex> {
        self.avatar
    }

    /// Engine keys of this pair's letters, left to right.
    pub fn letter_units(&self) -> Vec<Unit> {
        let pair = self.index;
        self.letters()
            .iter()
            .map(|u| Unit::Letter {
                pair,
                position: u.position(),
            })
            .collect()
    }
}

static EMPTY: Letters = Letters::EMPTY;

/// The validated pairing table: one default pair plus one pair per avatar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pairs: Vec<NamePair>,
}

impl Roster {
    /// Validate `content` and split every label into letters.
    ///
    /// Empty labels are accepted and produce pairs with no letters.
    pub fn from_content(content: Content) -> Result<Self, ConfigError> {
        let Content { names, avatars } = content;
        if names.is_empty() {
            return Err(ConfigError::MissingDefault);
        }
        if names.len() != avatars + 1 {
            return Err(ConfigError::CountMismatch {
                avatars,
                names: names.len(),
            });
        }
        let pairs = names
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let index = PairIndex::new(i);
                let mut label = Label::new(text);
                label.split();
                NamePair {
                    index,
                    label,
                    avatar: index.avatar(),
                }
            })
            .collect();
        Ok(Self { pairs })
    }

    /// All pairs, default first.
    pub fn pairs(&self) -> &[NamePair] {
        &self.pairs
    }

    /// Pair at `index`, if it exists.
    pub fn pair(&self, index: PairIndex) -> Option<&NamePair> {
        self.pairs.get(index.get())
    }

    /// The default pair.
    pub fn default_pair(&self) -> &NamePair {
        // Construction guarantees at least the default pair.
        &self.pairs[0]
    }

    /// Number of avatars.
    pub fn avatar_count(&self) -> usize {
        self.pairs.len() - 1
    }

    /// Every avatar, in page order.
    pub fn avatars(&self) -> impl Iterator<Item = AvatarIndex> + '_ {
        (0..self.avatar_count()).map(AvatarIndex::new)
    }

    /// Engine keys of every avatar, in page order.
    pub fn avatar_units(&self) -> Vec<Unit> {
        self.avatars().map(Unit::Avatar).collect()
    }

    pub(crate) fn check_pair(&self, pair: PairIndex) -> Result<&NamePair, PickerError> {
        self.pair(pair).ok_or(PickerError::UnknownPair {
            pair: pair.get(),
            pairs: self.pairs.len(),
        })
    }

    pub(crate) fn check_avatar(&self, avatar: AvatarIndex) -> Result<AvatarIndex, PickerError> {
        if avatar.get() < self.avatar_count() {
            Ok(avatar)
        } else {
            Err(PickerError::UnknownAvatar {
                avatar: avatar.get(),
                avatars: self.avatar_count(),
            })
        }
    }
}
