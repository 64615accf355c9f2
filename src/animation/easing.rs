use serde::{Deserialize, Serialize};

/// Interpolation curve applied to a timed animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the eased progress.
    ///
    /// Inputs outside the unit interval are clamped first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;
    use approx::assert_relative_eq;

    #[test]
    fn every_curve_pins_both_ends() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert_relative_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }
}
