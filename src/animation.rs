//! Eased snap transitions
//!
//! A snap commits the target offset to `PanelState` immediately; the
//! transition only describes how the *presented* offset travels from where it
//! was when the snap was requested to that committed target.

use std::time::Duration;

/// Quadratic ease-in-ease-out (slow start and end)
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Identifies one requested snap transition
///
/// Tokens are allocated per model instance and never reused, so a completion
/// reported for a superseded transition can be recognized and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionToken(pub u64);

/// An in-flight snap animation
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTransition {
    pub token: TransitionToken,
    /// Presented offset when the snap was requested
    pub from_offset: f32,
    /// Presented dim alpha when the snap was requested
    pub from_alpha: f32,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl SnapTransition {
    pub fn new(token: TransitionToken, from_offset: f32, from_alpha: f32, duration: Duration) -> Self {
        Self {
            token,
            from_offset,
            from_alpha,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Eased offset between the starting point and `target`
    pub fn offset(&self, target: f32) -> f32 {
        lerp(self.from_offset, target, ease_in_out(self.progress()))
    }

    /// Eased dim alpha between the starting point and `target`
    pub fn alpha(&self, target: f32) -> f32 {
        lerp(self.from_alpha, target, ease_in_out(self.progress()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert!((ease_in_out(0.0) - 0.0).abs() < f32::EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_ease_in_out_clamps_input() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_transition_progress_and_finish() {
        let mut t = SnapTransition::new(TransitionToken(1), 100.0, 0.0, Duration::from_millis(500));
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.offset(300.0), 100.0);

        t.advance(Duration::from_millis(250));
        assert!((t.progress() - 0.5).abs() < 1e-4);
        assert!((t.offset(300.0) - 200.0).abs() < 0.5);
        assert!(!t.is_finished());

        t.advance(Duration::from_millis(400));
        assert!(t.is_finished());
        assert_eq!(t.elapsed, Duration::from_millis(500));
        assert_eq!(t.offset(300.0), 300.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_finished() {
        let t = SnapTransition::new(TransitionToken(7), 10.0, 0.5, Duration::ZERO);
        assert!(t.is_finished());
        assert_eq!(t.offset(40.0), 40.0);
        assert_eq!(t.alpha(0.0), 0.0);
    }
}
