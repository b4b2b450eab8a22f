//! Observation file header
use std::collections::{BTreeMap, HashMap};

use hifitime::{Duration, Epoch, TimeScale};
use itertools::Itertools;

use crate::{
    epoch::{timescale, Timestamp},
    hardware::{Antenna, Receiver},
    header::{Header, RinexHeader},
    marker::Marker,
};

pub(crate) mod parsing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time of first (or last) observation
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationTime {
    pub timestamp: Timestamp,
    /// Time system code ("GPS", "GLO", "GAL", "QZS", "BDT", "IRN"),
    /// blank means GPS for GPS only and mixed files
    pub system: String,
}

impl ObservationTime {
    /// Returns the [TimeScale] this time is expressed in
    pub fn timescale(&self) -> Option<TimeScale> {
        match self.system.as_str() {
            "" => Some(TimeScale::GPST),
            system => timescale(system),
        }
    }
    /// Returns this time as an [Epoch]
    pub fn to_epoch(&self) -> Option<Epoch> {
        self.timestamp.to_epoch(self.timescale()?)
    }
}

/// Corrections applied to the observations (DCB or PCV),
/// for one satellite system
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compensation {
    pub system: char,
    /// Program that applied the corrections
    pub program: String,
    /// Source of the corrections (URL)
    pub source: String,
}

/// Factor the observations were scaled by
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleFactor {
    pub system: char,
    /// 1, 10, 100 or 1000
    pub factor: u16,
    /// Observation codes this factor applies to, all of them when empty
    pub codes: Vec<String>,
}

/// Phase shift correction applied to phase observations
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseShift {
    /// Carrier phase observation code
    pub code: String,
    /// Correction, in cycles
    pub correction: f64,
    /// Satellites this correction applies to, all of them when empty
    pub satellites: Vec<String>,
}

/// Leap second description
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeapSeconds {
    /// Current number of leap seconds
    pub current: i32,
    /// Future or past number of leap seconds
    pub future: Option<i32>,
    /// Week number of the future or past leap second
    pub week: Option<u32>,
    /// Day number of the future or past leap second
    pub day: Option<u32>,
    /// Time system code, blank means GPS
    pub system: String,
}

/// Header of an observation file
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationHeader {
    /// Fields shared with all RINEX headers
    pub header: Header,
    pub marker: Marker,
    pub observer: String,
    pub agency: String,
    pub receiver: Receiver,
    pub antenna: Antenna,
    /// Vehicle center of mass (ECEF, m)
    pub center_of_mass: Option<(f64, f64, f64)>,
    /// Observation codes, per satellite system. Their order is
    /// the order of the observations in each data line.
    pub observation_types: HashMap<char, Vec<String>>,
    pub signal_strength_unit: String,
    /// Sampling interval, in seconds
    pub interval: Option<f64>,
    pub time_of_first_obs: Option<ObservationTime>,
    pub time_of_last_obs: Option<ObservationTime>,
    /// True when observations were corrected by the receiver clock offset
    pub clock_offset_applied: bool,
    pub dcbs_applied: Vec<Compensation>,
    pub pcvs_applied: Vec<Compensation>,
    pub scale_factors: Vec<ScaleFactor>,
    /// Phase shift corrections, per satellite system
    pub phase_shifts: HashMap<char, Vec<PhaseShift>>,
    /// GLONASS frequency channel, per slot number
    pub glonass_slots: BTreeMap<u8, i8>,
    /// GLONASS code phase bias corrections (m), per observation code
    pub glonass_code_phase_bias: HashMap<String, f64>,
    pub leap_seconds: Option<LeapSeconds>,
    pub num_satellites: Option<u32>,
    /// Number of observations, per satellite and per observation code
    pub prn_obs_counts: Vec<(String, Vec<Option<u32>>)>,
}

impl RinexHeader for ObservationHeader {
    fn format_version(&self) -> f64 {
        self.header.format_version
    }
    fn file_type(&self) -> char {
        self.header.file_type
    }
}

impl ObservationHeader {
    /// Returns the observation codes declared for given system
    pub fn observation_types(&self, system: char) -> Option<&[String]> {
        self.observation_types.get(&system).map(|v| v.as_slice())
    }
    /// Returns the satellite systems that have declared observations,
    /// in alphabetical order
    pub fn systems(&self) -> Vec<char> {
        self.observation_types.keys().copied().sorted().collect()
    }
    /// Returns the sampling interval as a [Duration]
    pub fn sampling_interval(&self) -> Option<Duration> {
        self.interval.map(Duration::from_seconds)
    }
    /// Returns the GLONASS frequency channel of given slot
    pub fn glonass_channel(&self, slot: u8) -> Option<i8> {
        self.glonass_slots.get(&slot).copied()
    }
}
