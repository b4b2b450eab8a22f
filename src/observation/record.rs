//! Decoded epochs and observations
use std::str::FromStr;

use gnss::prelude::{Constellation, SV};
use hifitime::{Epoch, TimeScale};

use crate::{
    epoch::Timestamp,
    observation::{EpochFlag, LliFlags, ObservationHeader, SNR},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One measurement, along with its indicators
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Measurement, None when the value columns are blank
    pub value: Option<f64>,
    /// Loss of lock indicator digit
    pub lli: Option<u8>,
    /// Signal strength indicator digit
    pub signal_strength: Option<u8>,
}

impl Observation {
    /// Returns the [LliFlags] this observation was tagged with
    pub fn lli_flags(&self) -> Option<LliFlags> {
        self.lli.map(LliFlags::from_bits_truncate)
    }
    /// Returns the signal strength indication as [SNR]
    pub fn snr(&self) -> Option<SNR> {
        self.signal_strength.map(SNR::from)
    }
}

/// Observations of one satellite, in the order of the observation codes
/// declared for its system.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationRecord {
    /// Satellite system code
    pub system: char,
    /// Satellite number, within its system
    pub prn: u8,
    pub observations: Vec<Observation>,
}

impl ObservationRecord {
    /// Returns the satellite identity as [SV]
    pub fn sv(&self) -> Option<SV> {
        let constellation = Constellation::from_str(&self.system.to_string()).ok()?;
        Some(SV::new(constellation, self.prn))
    }
    /// Returns the observation for given code, if it was declared
    /// by the header and is present on this line.
    pub fn observation(&self, code: &str, header: &ObservationHeader) -> Option<&Observation> {
        let index = header
            .observation_types(self.system)?
            .iter()
            .position(|c| c == code)?;
        self.observations.get(index)
    }
}

/// [EpochRecord] is one sampling instant
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpochRecord {
    pub timestamp: Timestamp,
    pub flag: EpochFlag,
    /// Number of satellites, or number of special records for events
    pub num_satellites: usize,
    /// Receiver clock offset, in seconds
    pub clock_offset: Option<f64>,
    pub observations: Vec<ObservationRecord>,
    /// Special records following an event epoch, as encoded
    pub events: Vec<String>,
}

impl EpochRecord {
    /// Returns this epoch as an [Epoch], expressed in the time system
    /// of the first observation (GPST by default).
    pub fn epoch(&self, header: &ObservationHeader) -> Option<Epoch> {
        let ts = header
            .time_of_first_obs
            .as_ref()
            .and_then(|t| t.timescale())
            .unwrap_or(TimeScale::GPST);
        self.timestamp.to_epoch(ts)
    }
    /// Returns the [ObservationRecord] of given satellite
    pub fn satellite(&self, sv: SV) -> Option<&ObservationRecord> {
        self.observations.iter().find(|rec| rec.sv() == Some(sv))
    }
}
