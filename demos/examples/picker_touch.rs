// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-driven picker.
//!
//! This example taps an avatar twice, then taps another avatar and outside the widget, settling
//! the engine after each tap and printing where the avatars come to rest.
//!
//! Run:
//! - `cargo run -p rollcall_demos --example picker_touch`

use kurbo::Size;
use rollcall_picker::modality::{Capabilities, Environment, Modality};
use rollcall_picker::motion::PickerConfig;
use rollcall_picker::roster::Content;
use rollcall_picker::router::{InputEvent, TapTarget};
use rollcall_picker::types::{AvatarIndex, Unit};
use rollcall_picker::widget::ProfilePicker;
use rollcall_tween::ledger::Ledger;

fn main() {
    let content = Content::new(["Meet the team", "Ada", "Alan"], 2);
    let env = Environment::new(390.0, Capabilities::probe(true, 5));
    let mut widget =
        ProfilePicker::new(content, &env, PickerConfig::default(), Ledger::new()).unwrap();
    assert_eq!(widget.modality(), Modality::Touch);

    let tap = |i| InputEvent::Tap(TapTarget::Avatar(AvatarIndex::new(i)));
    let events = [tap(0), tap(0), tap(1), InputEvent::Tap(TapTarget::Outside)];

    let mut sizes = Vec::new();
    for event in events {
        let changed = widget.handle(event);
        let engine = widget.picker_mut().engine_mut();
        engine.settle();
        let row: Vec<Option<Size>> = (0..2)
            .map(|i| engine.resting(&Unit::Avatar(AvatarIndex::new(i))).size)
            .collect();
        println!(
            "== {:?} (changed: {}) ==\n  active: {:?}\n  sizes: {:?}",
            event,
            changed,
            widget.selection().active_pair(),
            row
        );
        sizes.push(row);
    }

    let small = Some(Size::new(70.0, 70.0));
    let large = Some(Size::new(140.0, 140.0));
    assert_eq!(
        sizes,
        vec![
            vec![large, small],
            vec![small, small],
            vec![small, large],
            vec![small, small],
        ]
    );
}
