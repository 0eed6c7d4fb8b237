// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name labels and their one-time split into letters.

use alloc::string::String;

use crate::letters::{Letters, split};

/// A name label: source text, plus its letters once split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    text: String,
    letters: Option<Letters>,
}

/// What a label currently renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rendered<'a> {
    /// Plain text; the label has not been split.
    Text(&'a str),
    /// Individually addressable letters.
    Letters(&'a Letters),
}

impl Label {
    /// Create an unsplit label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            letters: None,
        }
    }

    /// The label's source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split the label into letters, replacing its rendered content.
    ///
    /// Only the first call splits. Later calls return the letters produced by the first one,
    /// so units handed out earlier stay valid.
    pub fn split(&mut self) -> &Letters {
        self.letters.get_or_insert_with(|| split(&self.text))
    }

    /// Letters of the label, or `None` if it has not been split yet.
    pub fn letters(&self) -> Option<&Letters> {
        self.letters.as_ref()
    }

    /// True once [`Label::split`] has run.
    pub fn is_split(&self) -> bool {
        self.letters.is_some()
    }

    /// The label's current rendered content.
    pub fn rendered(&self) -> Rendered<'_> {
        match &self.letters {
            Some(letters) => Rendered::Letters(letters),
            None => Rendered::Text(&self.text),
        }
    }
}
