// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Page content that cannot form a picker.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// There are no name labels, so there is no default pair.
    #[error("no name labels: the default label is required")]
    MissingDefault,
    /// Names and avatars do not pair up (one default name plus one name per avatar).
    #[error("found {names} name labels for {avatars} avatars; expected one more label than avatars")]
    CountMismatch {
        /// Number of avatars supplied.
        avatars: usize,
        /// Number of name labels supplied.
        names: usize,
    },
}

/// A request that names something outside the picker's roster.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Pair index out of range.
    #[error("pair {pair} does not exist (roster has {pairs} pairs)")]
    UnknownPair {
        /// Requested pair.
        pair: usize,
        /// Number of pairs, including the default.
        pairs: usize,
    },
    /// Avatar index out of range.
    #[error("avatar {avatar} does not exist (roster has {avatars} avatars)")]
    UnknownAvatar {
        /// Requested avatar.
        avatar: usize,
        /// Number of avatars.
        avatars: usize,
    },
}
