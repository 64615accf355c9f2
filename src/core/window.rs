use std::collections::VecDeque;

use tracing::trace;

use crate::core::{Channel, Sample};
use crate::error::{ChartError, ChartResult};

/// Default window capacity used by the live demo screen.
pub const DEFAULT_WINDOW_CAPACITY: usize = 36;

/// Fixed-capacity FIFO buffer of samples in chronological order.
///
/// Appending to a full window evicts the oldest sample, so `len()` never
/// exceeds `capacity()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleWindow {
    pub fn new(capacity: usize) -> ChartResult<Self> {
        if capacity == 0 {
            return Err(ChartError::InvalidConfig(
                "sample window capacity must be > 0".to_owned(),
            ));
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates a full window holding `capacity` copies of `sample`.
    pub fn prefilled(capacity: usize, sample: Sample) -> ChartResult<Self> {
        let mut window = Self::new(capacity)?;
        window.samples.extend(std::iter::repeat_n(sample, capacity));
        Ok(window)
    }

    /// Appends one sample, evicting the oldest one when full.
    pub fn append(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        trace!(len = self.samples.len(), capacity = self.capacity, "append sample");
    }

    pub fn extend<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = Sample>,
    {
        for sample in samples {
            self.append(sample);
        }
    }

    /// Returns an owned copy of the current contents, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn latest(&self) -> Option<Sample> {
        self.samples.back().copied()
    }

    /// Values of one channel in window order.
    #[must_use]
    pub fn channel_values(&self, channel: Channel) -> Vec<f64> {
        channel_values(self.samples.iter().copied(), channel)
    }
}

pub(crate) fn channel_values<I>(samples: I, channel: Channel) -> Vec<f64>
where
    I: IntoIterator<Item = Sample>,
{
    samples
        .into_iter()
        .map(|sample| sample.value(channel))
        .collect()
}
