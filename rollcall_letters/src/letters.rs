// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letter units and the splitter that produces them.

use alloc::string::String;
use alloc::vec::Vec;

use unicode_segmentation::UnicodeSegmentation;

/// Tag carried by every letter unit, used to select a label's letters in bulk.
pub const LETTER_TAG: &str = "letter";

/// One individually animatable letter of a label.
///
/// A letter is a single grapheme cluster, so combining marks and emoji sequences stay whole.
/// It carries no animation state of its own; animated properties live with whatever engine
/// drives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterUnit {
    grapheme: String,
    position: usize,
    tag: &'static str,
}

impl LetterUnit {
    /// The grapheme cluster this unit renders.
    pub fn as_str(&self) -> &str {
        &self.grapheme
    }

    /// Position of this unit within its label's letter sequence (whitespace excluded).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Selection tag of this unit.
    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

/// The ordered letter sequence of a split label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Letters {
    units: Vec<LetterUnit>,
}

impl Letters {
    /// A sequence with no letters.
    pub const EMPTY: Self = Self { units: Vec::new() };

    /// Number of letter units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if the label had no visible characters.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Letter at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&LetterUnit> {
        self.units.get(position)
    }

    /// Iterate letters left to right.
    pub fn iter(&self) -> core::slice::Iter<'_, LetterUnit> {
        self.units.iter()
    }

    /// Letters carrying `tag`, left to right.
    pub fn select<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a LetterUnit> + 'a {
        self.units.iter().filter(move |u| u.tag == tag)
    }

    /// Positions ordered from the center of the sequence outward.
    ///
    /// The center of an even-length sequence lies between its two middle letters, so both
    /// come first. Ties go to the left letter.
    pub fn center_out(&self) -> Vec<usize> {
        let n = self.units.len();
        let mut order: Vec<usize> = (0..n).collect();
        // Distances are doubled so the half-step center of an even sequence stays integral.
        order.sort_by_key(|&i| (2 * i).abs_diff(n.saturating_sub(1)));
        order
    }
}

impl<'a> IntoIterator for &'a Letters {
    type Item = &'a LetterUnit;
    type IntoIter = core::slice::Iter<'a, LetterUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Split `text` into letter units, one per visible grapheme cluster, left to right.
///
/// Whitespace clusters are skipped and do not consume a position.
pub fn split(text: &str) -> Letters {
    let units = text
        .graphemes(true)
        .filter(|g| !g.chars().all(char::is_whitespace))
        .enumerate()
        .map(|(position, g)| LetterUnit {
            grapheme: String::from(g),
            position,
            tag: LETTER_TAG,
        })
        .collect();
    Letters { units }
}
