use serde::{Deserialize, Serialize};
use std::fmt;

/// Erasure-coding profile shared by DDP stripes and traditional parity groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum StripeGeometry {
    #[serde(rename = "14+2")]
    FourteenPlusTwo,
    #[serde(rename = "6+2")]
    SixPlusTwo,
}

impl StripeGeometry {
    /// Every supported geometry, in display order.
    pub(crate) const ALL: [Self; 2] = [Self::FourteenPlusTwo, Self::SixPlusTwo];

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::FourteenPlusTwo => "14+2",
            Self::SixPlusTwo => "6+2",
        }
    }

    pub(crate) const fn data_drives(self) -> u32 {
        match self {
            Self::FourteenPlusTwo => 14,
            Self::SixPlusTwo => 6,
        }
    }

    pub(crate) const fn parity_drives(self) -> u32 {
        match self {
            Self::FourteenPlusTwo | Self::SixPlusTwo => 2,
        }
    }

    /// Data plus parity: the drives in one full stripe.
    pub(crate) const fn total_drives(self) -> u32 {
        self.data_drives() + self.parity_drives()
    }

    /// Fraction of raw capacity left for data.
    pub(crate) fn efficiency(self) -> f64 {
        1.0 - f64::from(self.parity_drives()) / f64::from(self.total_drives())
    }
}

impl fmt::Display for StripeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StripeGeometry {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "14+2" => Ok(Self::FourteenPlusTwo),
            "6+2" => Ok(Self::SixPlusTwo),
            _ => Err(format!("unsupported stripe geometry: {s}")),
        }
    }
}
