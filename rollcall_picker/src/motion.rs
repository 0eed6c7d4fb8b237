// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion and widget configuration.

use core::time::Duration;

use kurbo::Size;
use rollcall_tween::types::{Ease, Props, Stagger, StaggerFrom, TweenConfig};

/// Which way letters travel during a name swap.
///
/// Only the destination matters: swapping to a named pair rises, returning to the default pair
/// falls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Outgoing letters exit upward; incoming letters enter from below.
    Rise,
    /// Outgoing letters exit downward; incoming letters enter from above.
    Fall,
}

impl Direction {
    /// Sign of the outgoing letters' exit offset.
    pub const fn exit_sign(self) -> f64 {
        match self {
            Self::Rise => -1.0,
            Self::Fall => 1.0,
        }
    }

    /// Sign of the incoming letters' starting offset.
    pub const fn enter_sign(self) -> f64 {
        -self.exit_sign()
    }
}

/// Timing, offsets and sizes of every picker animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    /// How far displaced letters sit from rest, in percent of their height.
    pub offset_percent: f64,
    /// Duration of each letter's tween.
    pub letter_duration: Duration,
    /// Per-letter start delay.
    pub letter_stagger: Stagger,
    /// Ease for every picker tween.
    pub ease: Ease,
    /// Avatar size at rest.
    pub avatar_default: Size,
    /// Size of the active avatar.
    pub avatar_enlarged: Size,
    /// Duration of an avatar growing to the enlarged size.
    pub grow_duration: Duration,
    /// Duration of avatars shrinking back to the default size.
    pub shrink_duration: Duration,
    /// Compositing hint passed to letter tweens.
    pub force_3d: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            offset_percent: 120.0,
            letter_duration: Duration::from_millis(500),
            letter_stagger: Stagger::new(Duration::from_millis(20), StaggerFrom::Center),
            ease: Ease::Power4Out,
            avatar_default: Size::new(70.0, 70.0),
            avatar_enlarged: Size::new(140.0, 140.0),
            grow_duration: Duration::from_millis(500),
            shrink_duration: Duration::from_millis(300),
            force_3d: true,
        }
    }
}

impl Motion {
    /// Letters at rest: in place and fully opaque.
    pub fn shown(&self) -> Props {
        Props::new().y_percent(0.0).opacity(1.0)
    }

    /// Letters displaced by `sign * offset_percent` and fully transparent.
    pub fn hidden(&self, sign: f64) -> Props {
        Props::new()
            .y_percent(sign * self.offset_percent)
            .opacity(0.0)
    }

    /// Configuration for letter-group tweens.
    pub fn letter_tween(&self) -> TweenConfig {
        TweenConfig::new(self.letter_duration)
            .with_ease(self.ease)
            .with_stagger(self.letter_stagger)
            .with_overwrite(true)
            .with_force_3d(self.force_3d)
    }

    /// Configuration for avatar resize tweens of `duration`.
    pub fn avatar_tween(&self, duration: Duration) -> TweenConfig {
        TweenConfig::new(duration)
            .with_ease(self.ease)
            .with_overwrite(true)
    }
}

/// Everything needed to configure a [`ProfilePicker`](crate::widget::ProfilePicker).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// Animation settings.
    pub motion: Motion,
    /// Viewport width at or above which the viewport counts as wide.
    pub breakpoint: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            motion: Motion::default(),
            breakpoint: 900.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_opposite() {
        assert_eq!(Direction::Rise.exit_sign(), -1.0);
        assert_eq!(Direction::Rise.enter_sign(), 1.0);
        assert_eq!(Direction::Fall.exit_sign(), 1.0);
        assert_eq!(Direction::Fall.enter_sign(), -1.0);
    }

    #[test]
    fn grow_is_slower_than_shrink() {
        let m = Motion::default();
        assert!(m.grow_duration > m.shrink_duration);
        assert!(m.avatar_tween(m.grow_duration).overwrite);
        assert_eq!(m.avatar_tween(m.grow_duration).stagger, None);
    }

    #[test]
    fn letter_tweens_overwrite_and_stagger_from_center() {
        let c = Motion::default().letter_tween();
        assert!(c.overwrite);
        assert!(c.force_3d);
        assert_eq!(c.ease, Ease::Power4Out);
        assert_eq!(c.stagger.map(|s| s.from), Some(StaggerFrom::Center));
    }

    #[test]
    fn hidden_props_follow_sign() {
        let m = Motion::default();
        assert_eq!(m.hidden(-1.0), Props::new().y_percent(-120.0).opacity(0.0));
        assert_eq!(m.hidden(1.0).y_percent, Some(120.0));
        assert_eq!(m.shown(), Props::new().y_percent(0.0).opacity(1.0));
    }
}
