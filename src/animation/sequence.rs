use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Easing;

/// One timed segment of an animation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStep {
    pub target: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl TimingStep {
    #[must_use]
    pub const fn new(target: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            target,
            duration,
            easing,
        }
    }

    /// Zero-duration step that jumps straight to `target`.
    #[must_use]
    pub const fn jump(target: f64) -> Self {
        Self::new(target, Duration::ZERO, Easing::Linear)
    }
}

/// Identifier of one scheduled sequence, unique per [`AnimatedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(u64);

impl SequenceId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveSequence {
    id: SequenceId,
    steps: VecDeque<TimingStep>,
    from: f64,
    elapsed: Duration,
}

/// Scalar driven by a sequence of timed steps.
///
/// At most one sequence is in flight: scheduling a new one cancels the
/// current one first. Zero-duration steps are committed during scheduling, so
/// the value already holds their target when `schedule_sequence` returns.
/// Progress is only made through [`AnimatedValue::advance`], which a host
/// drives from its frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    active: Option<ActiveSequence>,
    next_id: u64,
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            active: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the sequence currently in flight, if any.
    #[must_use]
    pub fn active_sequence(&self) -> Option<SequenceId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Number of sequences scheduled so far.
    #[must_use]
    pub fn scheduled_count(&self) -> u64 {
        self.next_id
    }

    /// Cancels the running sequence (if any) and starts `steps`.
    pub fn schedule_sequence<I>(&mut self, steps: I) -> SequenceId
    where
        I: IntoIterator<Item = TimingStep>,
    {
        self.cancel();

        let id = SequenceId(self.next_id);
        self.next_id += 1;
        self.active = Some(ActiveSequence {
            id,
            steps: steps.into_iter().collect(),
            from: self.value,
            elapsed: Duration::ZERO,
        });
        trace!(sequence = id.0, from = self.value, "schedule animation sequence");

        self.advance(Duration::ZERO);
        id
    }

    /// Stops the running sequence, keeping the current value in place.
    ///
    /// Returns `true` when a sequence was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                trace!(sequence = active.id.0, value = self.value, "cancel animation sequence");
                true
            }
            None => false,
        }
    }

    /// Cancels any running sequence and snaps to `value`.
    ///
    /// Returns `true` when a sequence was actually cancelled.
    pub fn set_value(&mut self, value: f64) -> bool {
        let cancelled = self.cancel();
        self.value = value;
        cancelled
    }

    /// Advances the running sequence by `delta`.
    ///
    /// Time left over after a step completes carries into the next step.
    pub fn advance(&mut self, delta: Duration) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        let mut remaining = delta;
        while let Some(step) = active.steps.front().copied() {
            let step_left = step.duration.saturating_sub(active.elapsed);
            if remaining >= step_left {
                remaining -= step_left;
                self.value = step.target;
                active.from = step.target;
                active.elapsed = Duration::ZERO;
                active.steps.pop_front();
                continue;
            }

            active.elapsed += remaining;
            let progress = active.elapsed.as_secs_f64() / step.duration.as_secs_f64();
            self.value = active.from + (step.target - active.from) * step.easing.apply(progress);
            return;
        }

        trace!(sequence = active.id.0, value = self.value, "animation sequence finished");
        self.active = None;
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
