// Copyright 2025 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command vocabulary: eases, staggers, property sets, tween configuration and commands.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Size;

/// Ease-curve identifier.
///
/// Only the name travels to the engine; the engine owns the curve math.
/// `Out` variants decelerate toward the end of the tween, and higher powers decelerate harder.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic deceleration.
    #[default]
    Power1Out,
    /// Cubic deceleration.
    Power2Out,
    /// Quartic deceleration.
    Power3Out,
    /// Quintic deceleration.
    Power4Out,
    /// Quintic acceleration then deceleration.
    Power4InOut,
}

/// Where a stagger starts counting from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StaggerFrom {
    /// First unit starts first.
    #[default]
    Start,
    /// Middle unit (or middle pair) starts first, spreading outward.
    Center,
    /// Last unit starts first.
    End,
}

/// Per-unit start delay for a tween over several units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stagger {
    /// Delay added per step of distance from the origin.
    pub each: Duration,
    /// Origin of the stagger.
    pub from: StaggerFrom,
}

impl Stagger {
    /// Stagger of `each` per unit, counted from `from`.
    pub const fn new(each: Duration, from: StaggerFrom) -> Self {
        Self { each, from }
    }

    /// Start delay for the unit at `position` among `count` units.
    ///
    /// The center of an even count lies between the two middle units, so both of them start
    /// at `each / 2`.
    pub fn delay_for(&self, position: usize, count: usize) -> Duration {
        let last = count.saturating_sub(1);
        // Doubled distance, so a half-step center stays integral.
        let doubled = match self.from {
            StaggerFrom::Start => 2 * position,
            StaggerFrom::End => 2 * last.saturating_sub(position),
            StaggerFrom::Center => (2 * position).abs_diff(last),
        };
        let doubled = u32::try_from(doubled).unwrap_or(u32::MAX);
        self.each * doubled / 2
    }
}

/// A sparse set of animatable properties.
///
/// Unset properties are left alone by commands carrying this set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Props {
    /// Vertical offset as a percentage of the unit's own height; `0` is the resting position.
    pub y_percent: Option<f64>,
    /// Opacity in `0.0..=1.0`.
    pub opacity: Option<f64>,
    /// Rendered size.
    pub size: Option<Size>,
}

impl Props {
    /// An empty property set.
    pub const fn new() -> Self {
        Self {
            y_percent: None,
            opacity: None,
            size: None,
        }
    }

    /// Set the vertical offset.
    #[must_use]
    pub const fn y_percent(mut self, y: f64) -> Self {
        self.y_percent = Some(y);
        self
    }

    /// Set the opacity.
    #[must_use]
    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// True if no property is set.
    pub fn is_empty(&self) -> bool {
        self.y_percent.is_none() && self.opacity.is_none() && self.size.is_none()
    }

    /// Overlay the properties set in `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        if other.y_percent.is_some() {
            self.y_percent = other.y_percent;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.size.is_some() {
            self.size = other.size;
        }
    }
}

/// Timing and interruption settings for a tween.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenConfig {
    /// Duration of each unit's tween, not counting its stagger delay.
    pub duration: Duration,
    /// Ease curve.
    pub ease: Ease,
    /// Optional per-unit stagger.
    pub stagger: Option<Stagger>,
    /// Supersede every running tween on any of the targeted units.
    pub overwrite: bool,
    /// Ask the engine to composite the units on their own layer while animating.
    pub force_3d: bool,
}

impl TweenConfig {
    /// A tween of `duration` with the default ease, no stagger and no overwrite.
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            ease: Ease::Power1Out,
            stagger: None,
            overwrite: false,
            force_3d: false,
        }
    }

    /// Use `ease`.
    #[must_use]
    pub const fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Stagger unit start times.
    #[must_use]
    pub const fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Set overwrite behavior.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the compositing hint.
    #[must_use]
    pub const fn with_force_3d(mut self, force_3d: bool) -> Self {
        self.force_3d = force_3d;
        self
    }

    /// Start delay of the unit at `position` among `count` units.
    pub fn delay_for(&self, position: usize, count: usize) -> Duration {
        self.stagger
            .map_or(Duration::ZERO, |s| s.delay_for(position, count))
    }
}

/// A fire-and-forget instruction for a [`TransitionEngine`](crate::engine::TransitionEngine).
#[derive(Clone, Debug, PartialEq)]
pub enum Command<K> {
    /// Jump the targets to `props` immediately.
    Set {
        /// Units to update, in order.
        targets: Vec<K>,
        /// Properties to apply.
        props: Props,
    },
    /// Animate the targets toward `to`.
    Tween {
        /// Units to animate, in stagger order.
        targets: Vec<K>,
        /// Properties applied immediately before animating, if any.
        from: Option<Props>,
        /// Properties the units come to rest at.
        to: Props,
        /// Timing and interruption settings.
        config: TweenConfig,
    },
}

impl<K> Command<K> {
    /// Instant property update.
    pub fn set(targets: Vec<K>, props: Props) -> Self {
        Self::Set { targets, props }
    }

    /// Tween from the units' current properties to `to`.
    pub fn tween(targets: Vec<K>, to: Props, config: TweenConfig) -> Self {
        Self::Tween {
            targets,
            from: None,
            to,
            config,
        }
    }

    /// Tween from `from` to `to`.
    pub fn from_to(targets: Vec<K>, from: Props, to: Props, config: TweenConfig) -> Self {
        Self::Tween {
            targets,
            from: Some(from),
            to,
            config,
        }
    }

    /// Targeted units, in order.
    pub fn targets(&self) -> &[K] {
        match self {
            Self::Set { targets, .. } | Self::Tween { targets, .. } => targets,
        }
    }

    /// True if the command targets no units. Engines treat such commands as no-ops.
    pub fn is_empty(&self) -> bool {
        self.targets().is_empty()
    }

    /// Properties the targets hold once the command has run its course.
    pub fn end_props(&self) -> &Props {
        match self {
            Self::Set { props, .. } => props,
            Self::Tween { to, .. } => to,
        }
    }

    /// Tween configuration, or `None` for an instant update.
    pub fn config(&self) -> Option<&TweenConfig> {
        match self {
            Self::Set { .. } => None,
            Self::Tween { config, .. } => Some(config),
        }
    }
}
