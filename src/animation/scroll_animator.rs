use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::{AnimatedValue, Easing, SequenceId, TimingStep};

/// Timing of the settle phase of a scroll sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTiming {
    pub settle_duration: Duration,
    pub settle_easing: Easing,
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self {
            settle_duration: Duration::from_millis(500),
            settle_easing: Easing::Linear,
        }
    }
}

/// Phase of the scroll sequence owned by one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollPhase {
    /// Offset rests at zero.
    Idle,
    /// Offset is easing from `-step_width` back to zero.
    Settling,
}

/// Horizontal scroll offset of one series.
///
/// Every new path triggers a two-step sequence: a zero-duration jump to
/// `-step_width`, which lines the rebuilt path up with where the previous
/// one ended, then an eased return to zero that slides the newest sample in.
/// Retriggering cancels whatever was in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimator {
    offset: AnimatedValue,
    timing: ScrollTiming,
    step_width: f64,
}

impl ScrollAnimator {
    #[must_use]
    pub fn new(timing: ScrollTiming) -> Self {
        Self {
            offset: AnimatedValue::new(0.0),
            timing,
            step_width: 0.0,
        }
    }

    #[must_use]
    pub fn timing(&self) -> ScrollTiming {
        self.timing
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    /// Step width of the most recent trigger.
    #[must_use]
    pub fn step_width(&self) -> f64 {
        self.step_width
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        if self.offset.is_animating() {
            ScrollPhase::Settling
        } else {
            ScrollPhase::Idle
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase() == ScrollPhase::Idle
    }

    #[must_use]
    pub fn active_sequence(&self) -> Option<SequenceId> {
        self.offset.active_sequence()
    }

    /// Total number of sequences started over the animator's life.
    #[must_use]
    pub fn sequences_started(&self) -> u64 {
        self.offset.scheduled_count()
    }

    /// Restarts the reset/settle sequence for a freshly built path.
    pub fn trigger(&mut self, step_width: f64) -> SequenceId {
        let reset_target = if step_width.is_finite() {
            -step_width
        } else {
            warn!(step_width, "non-finite step width; scroll reset pinned to zero");
            0.0
        };
        self.step_width = if step_width.is_finite() { step_width } else { 0.0 };

        let id = self.offset.schedule_sequence([
            TimingStep::jump(reset_target),
            TimingStep::new(
                0.0,
                self.timing.settle_duration,
                self.timing.settle_easing,
            ),
        ]);
        trace!(
            sequence = id.get(),
            step_width = self.step_width,
            "scroll sequence triggered"
        );
        id
    }

    /// Advances the settle phase by one frame-clock delta.
    pub fn tick(&mut self, delta: Duration) {
        self.offset.advance(delta);
    }

    /// Stops the sequence in flight, leaving the offset where it is.
    pub fn cancel(&mut self) -> bool {
        self.offset.cancel()
    }

    /// Stops the sequence in flight and returns the offset to its idle zero.
    pub fn reset(&mut self) -> bool {
        self.offset.set_value(0.0)
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollTiming::default())
    }
}
