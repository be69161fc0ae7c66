//! Time-based animation of a single horizontal offset.

use std::time::{Duration, Instant};

use slidestrip_core::ScrollConfig;

use super::curve::{lerp, progress, EasingType, EasingTypeExt};

/// Extension trait for ScrollConfig with timing helpers
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Eases an offset towards a target over the configured duration
///
/// A new target supersedes the running animation, starting from wherever the
/// offset currently is.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
}

impl OffsetAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current interpolated offset
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Where the offset will come to rest
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Jump without animating
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    pub fn animate_to(&mut self, target: f64) {
        self.animate_to_at(target, Instant::now());
    }

    /// Start an animation at `now`; jumps when smooth scrolling is off
    pub fn animate_to_at(&mut self, target: f64, now: Instant) {
        if !self.config.is_smooth() {
            self.set_offset(target);
            return;
        }

        if self.current == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    /// Advance the animation to `now` and return the offset
    pub fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            let t = progress(anim.start, now, anim.duration);
            if t >= 1.0 {
                self.current = anim.to;
                self.animation = None;
            } else {
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }
        self.current
    }
}
