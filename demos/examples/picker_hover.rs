// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven picker.
//!
//! This example hovers across two avatars and leaves the row, printing the commands the picker
//! issues for each event.
//!
//! Run:
//! - `cargo run -p rollcall_demos --example picker_hover`

use rollcall_picker::modality::{Capabilities, Environment, Modality};
use rollcall_picker::motion::PickerConfig;
use rollcall_picker::roster::Content;
use rollcall_picker::router::InputEvent;
use rollcall_picker::selection::Selection;
use rollcall_picker::types::{AvatarIndex, Unit};
use rollcall_picker::widget::ProfilePicker;
use rollcall_tween::engine::Recorder;
use rollcall_tween::types::Command;

fn describe(cmd: &Command<Unit>) -> String {
    let first = cmd.targets().first();
    let end = cmd.end_props();
    format!(
        "{} unit(s) from {:?}: y={:?} opacity={:?} size={:?}",
        cmd.targets().len(),
        first,
        end.y_percent,
        end.opacity,
        end.size
    )
}

fn main() {
    let content = Content::new(["Meet the team", "Ada", "Alan", "Grace"], 3);
    let env = Environment::new(1440.0, Capabilities::empty());
    let mut widget =
        ProfilePicker::new(content, &env, PickerConfig::default(), Recorder::new()).unwrap();
    assert_eq!(widget.modality(), Modality::Pointer);
    widget.picker_mut().engine_mut().take();

    let events = [
        InputEvent::PointerEnter(AvatarIndex::new(1)),
        InputEvent::PointerLeave(AvatarIndex::new(1)),
        InputEvent::PointerEnter(AvatarIndex::new(2)),
        InputEvent::PointerEnter(AvatarIndex::new(2)),
        InputEvent::ContainerLeave,
    ];
    for event in events {
        let changed = widget.handle(event);
        println!("== {:?} (changed: {}) ==", event, changed);
        for cmd in widget.picker_mut().engine_mut().take() {
            println!("  {}", describe(&cmd));
        }
    }

    assert_eq!(widget.selection(), Selection::Default);
}
