// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letter splitting and center-out stagger.
//!
//! This example splits a label and prints the start delay of each letter when a tween is
//! staggered from the center.
//!
//! Run:
//! - `cargo run -p rollcall_demos --example letters_stagger`

use std::time::Duration;

use rollcall_letters::{LETTER_TAG, Label};
use rollcall_tween::types::{Stagger, StaggerFrom};

fn main() {
    let mut label = Label::new("Hopper");
    let letters = label.split();
    let stagger = Stagger::new(Duration::from_millis(20), StaggerFrom::Center);

    println!("== Letters of {:?} ==", "Hopper");
    for unit in letters.select(LETTER_TAG) {
        let delay = stagger.delay_for(unit.position(), letters.len());
        println!("  {} at {:>2}: starts after {:?}", unit.as_str(), unit.position(), delay);
    }

    // The middle pair leads, the outer letters trail.
    assert_eq!(letters.center_out(), vec![2, 3, 1, 4, 0, 5]);
    assert_eq!(stagger.delay_for(2, 6), Duration::from_millis(10));
    assert_eq!(stagger.delay_for(0, 6), Duration::from_millis(50));
}
