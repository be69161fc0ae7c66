//! Easing curves and time progress for animated horizontal scrolls.

use std::time::{Duration, Instant};

pub use slidestrip_core::EasingType;

/// Extension trait mapping an easing choice onto its curve
pub trait EasingTypeExt {
    /// Map progress in [0, 1] to eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - inv.powi(3),
            EasingType::Quintic => 1.0 - inv.powi(5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
        }
    }
}

/// Fraction of `duration` elapsed between `start` and `now`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curve_endpoints() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_curves_never_reverse() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} reversed at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, start, duration), 0.0);
        assert!((progress(start, start + Duration::from_millis(50), duration) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, start + Duration::from_secs(1), duration), 1.0);
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_lerp_signed() {
        assert_eq!(lerp(0.0, -120.0, 0.5), -60.0);
        assert_eq!(lerp(-120.0, 0.0, 1.0), 0.0);
    }
}
