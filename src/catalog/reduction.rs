use serde::{Deserialize, Serialize};
use std::fmt;

/// Data reduction applied to a pool's effective capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum ReductionTechnique {
    #[serde(rename = "No Data Reduction", alias = "none")]
    None,
    #[serde(rename = "Compression Only", alias = "compression_only")]
    CompressionOnly,
    #[serde(rename = "Compression and Dedupe", alias = "compression_and_dedupe")]
    CompressionAndDedupe,
}

impl ReductionTechnique {
    pub(crate) const ALL: [Self; 3] = [Self::None, Self::CompressionOnly, Self::CompressionAndDedupe];

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::None => "No Data Reduction",
            Self::CompressionOnly => "Compression Only",
            Self::CompressionAndDedupe => "Compression and Dedupe",
        }
    }

    pub(crate) const fn reduces(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Metadata rates applied to (DRD, DRS) effective capacity.
    pub(crate) const fn metadata_rates(self) -> (f64, f64) {
        match self {
            Self::None => (0.0, 0.0),
            Self::CompressionOnly => (0.02, 0.04),
            Self::CompressionAndDedupe => (0.03, 0.06),
        }
    }

    /// Share of the reduced footprint held back as reclaimable garbage.
    pub(crate) const fn garbage_rate(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::CompressionOnly | Self::CompressionAndDedupe => 0.07,
        }
    }
}

impl fmt::Display for ReductionTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReductionTechnique {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "No Data Reduction" | "none" => Ok(Self::None),
            "Compression Only" | "compression_only" => Ok(Self::CompressionOnly),
            "Compression and Dedupe" | "compression_and_dedupe" => Ok(Self::CompressionAndDedupe),
            _ => Err(format!("invalid reduction technique: {s}")),
        }
    }
}
