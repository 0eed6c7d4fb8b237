// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rollcall Letters: split name labels into individually animatable letter units.
//!
//! ## Overview
//!
//! A [`Label`] starts out holding plain text.
//! Splitting it replaces its rendered content with an ordered sequence of [`LetterUnit`]s, one per
//! visible grapheme cluster, each tagged with [`LETTER_TAG`] so a caller can select them in bulk.
//!
//! Order is left to right and is meaningful: animation engines stagger letters by position, for
//! example from the center of the sequence outward (see [`Letters::center_out`]).
//!
//! Whitespace is kept out of the sequence. An empty label splits into zero letters and is still a
//! valid label.
//!
//! ## Example
//!
//! ```
//! use rollcall_letters::{Label, Rendered, LETTER_TAG};
//!
//! let mut label = Label::new("Ada Lovelace");
//! assert!(matches!(label.rendered(), Rendered::Text("Ada Lovelace")));
//!
//! let letters = label.split();
//! assert_eq!(letters.len(), 11);
//! assert_eq!(letters.select(LETTER_TAG).count(), 11);
//! assert_eq!(letters.get(3).map(|u| u.as_str()), Some("L"));
//!
//! // Splitting again hands back the same letters.
//! assert_eq!(label.split().len(), 11);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod label;
mod letters;

pub use label::{Label, Rendered};
pub use letters::{LETTER_TAG, LetterUnit, Letters, split};
