//! Fire-and-forget offset smoothing
//!
//! Widgets commit values synchronously and hand the resulting pixel offsets
//! to a [`Smoother`]. Re-targeting an in-flight transition supersedes it:
//! the transition restarts from wherever its value currently is, so a burst
//! of drag events keeps the animated offset continuous.

use crate::easing::Easing;

/// A request to animate an offset toward a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Target offset in pixels
    pub target: f32,
    /// Duration in milliseconds; 0 jumps immediately
    pub duration_ms: u32,
    /// Easing applied over the duration
    pub easing: Easing,
}

impl TransitionRequest {
    pub fn new(target: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            target,
            duration_ms,
            easing,
        }
    }

    /// An immediate jump to the target
    pub fn immediate(target: f32) -> Self {
        Self::new(target, 0, Easing::Linear)
    }
}

/// The smoothing collaborator interface.
///
/// `retarget` must return without blocking; completion is never signalled
/// back to the caller.
pub trait Smoother {
    fn retarget(&mut self, request: TransitionRequest);
}

/// A timed transition ticked by the render layer.
///
/// Holds the current in-flight offset and interpolates toward the latest
/// target. `tick` advances the clock; `value` reads the eased offset.
pub struct TimedTransition {
    start_value: f32,
    current_value: f32,
    target: f32,
    easing: Easing,
    duration_ms: u32,
    elapsed_ms: f32,
}

impl TimedTransition {
    /// Create a settled transition resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            start_value: value,
            current_value: value,
            target: value,
            easing: Easing::Linear,
            duration_ms: 0,
            elapsed_ms: 0.0,
        }
    }

    /// The current in-flight offset
    pub fn value(&self) -> f32 {
        self.current_value
    }

    /// The offset the transition is heading toward
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the transition has reached its target
    pub fn is_settled(&self) -> bool {
        self.current_value == self.target
    }

    /// Advance the transition clock
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_settled() {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.current_value = self.target;
            return;
        }

        let progress = self.elapsed_ms / self.duration_ms as f32;
        let eased = self.easing.apply(progress);
        self.current_value = self.start_value + (self.target - self.start_value) * eased;
    }
}

impl Smoother for TimedTransition {
    fn retarget(&mut self, request: TransitionRequest) {
        tracing::trace!(
            "retarget {} -> {} over {}ms",
            self.current_value,
            request.target,
            request.duration_ms
        );

        // Restart from the in-flight value, not the previous start
        self.start_value = self.current_value;
        self.target = request.target;
        self.easing = request.easing;
        self.duration_ms = request.duration_ms;
        self.elapsed_ms = 0.0;

        if request.duration_ms == 0 {
            self.current_value = request.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_jumps_immediately() {
        let mut transition = TimedTransition::new(0.0);
        transition.retarget(TransitionRequest::immediate(80.0));
        assert_eq!(transition.value(), 80.0);
        assert!(transition.is_settled());
    }

    #[test]
    fn linear_transition_interpolates() {
        let mut transition = TimedTransition::new(0.0);
        transition.retarget(TransitionRequest::new(100.0, 200, Easing::Linear));
        assert_eq!(transition.value(), 0.0);

        transition.tick(100.0);
        assert_eq!(transition.value(), 50.0);

        transition.tick(100.0);
        assert_eq!(transition.value(), 100.0);
        assert!(transition.is_settled());
    }

    #[test]
    fn overshooting_tick_pins_to_target() {
        let mut transition = TimedTransition::new(10.0);
        transition.retarget(TransitionRequest::new(20.0, 50, Easing::Linear));
        transition.tick(1000.0);
        assert_eq!(transition.value(), 20.0);
    }

    #[test]
    fn retarget_supersedes_in_flight_transition() {
        let mut transition = TimedTransition::new(0.0);
        transition.retarget(TransitionRequest::new(100.0, 200, Easing::Linear));
        transition.tick(100.0);
        assert_eq!(transition.value(), 50.0);

        // New target takes over from the in-flight value
        transition.retarget(TransitionRequest::new(0.0, 100, Easing::Linear));
        transition.tick(50.0);
        assert_eq!(transition.value(), 25.0);

        transition.tick(50.0);
        assert_eq!(transition.value(), 0.0);
    }

    #[test]
    fn settled_transition_ignores_ticks() {
        let mut transition = TimedTransition::new(42.0);
        transition.tick(16.0);
        assert_eq!(transition.value(), 42.0);
    }
}
