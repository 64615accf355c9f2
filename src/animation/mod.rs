//! Frame-clock driven animation primitives.
//!
//! Nothing here owns a timer. Hosts call `tick`/`advance` from their display
//! refresh callback with the elapsed time since the previous frame.

mod easing;
mod scroll_animator;
mod sequence;

pub use easing::Easing;
pub use scroll_animator::{ScrollAnimator, ScrollPhase, ScrollTiming};
pub use sequence::{AnimatedValue, SequenceId, TimingStep};
