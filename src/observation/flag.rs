//! Epoch flag
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown epoch flag \"{0}\"")]
    UnknownValue(String),
}

/// [EpochFlag] validates an epoch,
/// or describes the event it reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpochFlag {
    /// Epoch is sane
    #[default]
    Ok,
    /// Power failure since previous epoch
    PowerFailure,
    /// Antenna is being moved, starting at this epoch
    AntennaBeingMoved,
    /// New site occupation (end of kinematic data)
    NewSiteOccupation,
    /// Header information follows
    HeaderInformationFollows,
    /// External event, significant at this epoch
    ExternalEvent,
    /// Cycle slip records follow
    CycleSlip,
}

impl EpochFlag {
    /// Returns true if self is a valid epoch
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
    /// Returns true if this epoch is an event, which is followed by
    /// special records rather than satellite observations.
    pub fn is_event(self) -> bool {
        matches!(
            self,
            Self::AntennaBeingMoved
                | Self::NewSiteOccupation
                | Self::HeaderInformationFollows
                | Self::ExternalEvent
        )
    }
}

impl FromStr for EpochFlag {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Ok),
            "1" => Ok(Self::PowerFailure),
            "2" => Ok(Self::AntennaBeingMoved),
            "3" => Ok(Self::NewSiteOccupation),
            "4" => Ok(Self::HeaderInformationFollows),
            "5" => Ok(Self::ExternalEvent),
            "6" => Ok(Self::CycleSlip),
            _ => Err(Error::UnknownValue(s.to_string())),
        }
    }
}

impl std::fmt::Display for EpochFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code = match self {
            Self::Ok => "0",
            Self::PowerFailure => "1",
            Self::AntennaBeingMoved => "2",
            Self::NewSiteOccupation => "3",
            Self::HeaderInformationFollows => "4",
            Self::ExternalEvent => "5",
            Self::CycleSlip => "6",
        };
        f.write_str(code)
    }
}
