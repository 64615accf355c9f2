use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One of the three value channels carried by every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    X,
    Y,
    Z,
}

impl Channel {
    /// All channels in render order.
    pub const ALL: [Channel; 3] = [Channel::X, Channel::Y, Channel::Z];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Immutable `(x, y, z)` observation.
///
/// All channels are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SampleRepr")]
pub struct Sample {
    x: f64,
    y: f64,
    z: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64) -> ChartResult<Self> {
        for (channel, value) in [(Channel::X, x), (Channel::Y, y), (Channel::Z, z)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "sample channel `{}` must be finite and >= 0",
                    channel.label()
                )));
            }
        }

        Ok(Self { x, y, z })
    }

    /// Sample with every channel at zero, used to prefill fresh windows.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn from_decimals(x: Decimal, y: Decimal, z: Decimal) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(x, "x")?,
            decimal_to_f64(y, "y")?,
            decimal_to_f64(z, "z")?,
        )
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn z(self) -> f64 {
        self.z
    }

    #[must_use]
    pub fn value(self, channel: Channel) -> f64 {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Z => self.z,
        }
    }

    /// Largest value across the three channels.
    #[must_use]
    pub fn max_channel_value(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }
}

#[derive(Deserialize)]
struct SampleRepr {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<SampleRepr> for Sample {
    type Error = ChartError;

    fn try_from(repr: SampleRepr) -> ChartResult<Self> {
        Self::new(repr.x, repr.y, repr.z)
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self::zero()
    }
}
