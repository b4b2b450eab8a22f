//! Signal strength indication
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signal to noise ratio, as projected onto the 1-9 indicator scale
/// that follows each observation.
#[derive(Default, PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SNR {
    /// SNR ~= 0 dB/Hz
    DbHz0,
    /// SNR < 12 dB/Hz
    DbHz12,
    /// 12 dB/Hz <= SNR < 17 dB/Hz
    DbHz12_17,
    /// 18 dB/Hz <= SNR < 23 dB/Hz
    DbHz18_23,
    /// 24 dB/Hz <= SNR < 29 dB/Hz
    #[default]
    DbHz24_29,
    /// 30 dB/Hz <= SNR < 35 dB/Hz
    DbHz30_35,
    /// 36 dB/Hz <= SNR < 41 dB/Hz
    DbHz36_41,
    /// 42 dB/Hz <= SNR < 47 dB/Hz
    DbHz42_47,
    /// 48 dB/Hz <= SNR < 53 dB/Hz
    DbHz48_53,
    /// SNR >= 54 dB/Hz
    DbHz54,
}

impl From<u8> for SNR {
    fn from(u: u8) -> Self {
        match u {
            1 => Self::DbHz12,
            2 => Self::DbHz12_17,
            3 => Self::DbHz18_23,
            4 => Self::DbHz24_29,
            5 => Self::DbHz30_35,
            6 => Self::DbHz36_41,
            7 => Self::DbHz42_47,
            8 => Self::DbHz48_53,
            9 => Self::DbHz54,
            _ => Self::DbHz0,
        }
    }
}

impl From<SNR> for f64 {
    fn from(snr: SNR) -> Self {
        match snr {
            SNR::DbHz0 => 0.0,
            SNR::DbHz12 => 12.0,
            SNR::DbHz12_17 => 17.0,
            SNR::DbHz18_23 => 23.0,
            SNR::DbHz24_29 => 29.0,
            SNR::DbHz30_35 => 35.0,
            SNR::DbHz36_41 => 41.0,
            SNR::DbHz42_47 => 47.0,
            SNR::DbHz48_53 => 53.0,
            SNR::DbHz54 => 54.0,
        }
    }
}

impl SNR {
    /// Returns true if self describes a bad signal level
    pub fn bad(self) -> bool {
        self <= Self::DbHz18_23
    }
    /// Returns true if self describes a weak signal level
    pub fn weak(self) -> bool {
        self < Self::DbHz30_35
    }
    /// Returns true if self describes a strong signal level
    pub fn strong(self) -> bool {
        self >= Self::DbHz30_35
    }
}
