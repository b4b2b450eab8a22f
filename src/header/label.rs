//! Header record labels
use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

use crate::error::ParsingError;

/// Every header label this crate knows how to decode.
/// Labels are case and space exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum Label {
    #[strum(serialize = "RINEX VERSION / TYPE")]
    Version,
    #[strum(serialize = "PGM / RUN BY / DATE")]
    ProgramRunByDate,
    #[strum(serialize = "COMMENT")]
    Comment,
    #[strum(serialize = "MARKER NAME")]
    MarkerName,
    #[strum(serialize = "MARKER NUMBER")]
    MarkerNumber,
    #[strum(serialize = "MARKER TYPE")]
    MarkerType,
    #[strum(serialize = "OBSERVER / AGENCY")]
    ObserverAgency,
    #[strum(serialize = "REC # / TYPE / VERS")]
    Receiver,
    #[strum(serialize = "ANT # / TYPE")]
    Antenna,
    #[strum(serialize = "APPROX POSITION XYZ")]
    ApproxPosition,
    #[strum(serialize = "ANTENNA: DELTA H/E/N")]
    AntennaDeltaHen,
    #[strum(serialize = "ANTENNA: DELTA X/Y/Z")]
    AntennaDeltaXyz,
    #[strum(serialize = "ANTENNA: PHASECENTER")]
    AntennaPhaseCenter,
    #[strum(serialize = "ANTENNA: B.SIGHT XYZ")]
    AntennaBoreSight,
    #[strum(serialize = "ANTENNA: ZERODIR AZI")]
    AntennaZeroDirAzimuth,
    #[strum(serialize = "ANTENNA: ZERODIR XYZ")]
    AntennaZeroDirXyz,
    #[strum(serialize = "CENTER OF MASS: XYZ")]
    CenterOfMass,
    #[strum(serialize = "SYS / # / OBS TYPES")]
    ObservationTypes,
    #[strum(serialize = "SIGNAL STRENGTH UNIT")]
    SignalStrengthUnit,
    #[strum(serialize = "INTERVAL")]
    Interval,
    #[strum(serialize = "TIME OF FIRST OBS")]
    TimeOfFirstObs,
    #[strum(serialize = "TIME OF LAST OBS")]
    TimeOfLastObs,
    #[strum(serialize = "RCV CLOCK OFFS APPL")]
    ClockOffsetApplied,
    #[strum(serialize = "SYS / DCBS APPLIED")]
    DcbsApplied,
    #[strum(serialize = "SYS / PCVS APPLIED")]
    PcvsApplied,
    #[strum(serialize = "SYS / SCALE FACTOR")]
    ScaleFactor,
    #[strum(serialize = "SYS / PHASE SHIFT")]
    PhaseShift,
    #[strum(serialize = "GLONASS SLOT / FRQ #")]
    GlonassSlots,
    #[strum(serialize = "GLONASS COD/PHS/BIS")]
    GlonassCodePhaseBias,
    #[strum(serialize = "LEAP SECONDS")]
    LeapSeconds,
    #[strum(serialize = "# OF SATELLITES")]
    NumberOfSatellites,
    #[strum(serialize = "PRN / # OF OBS")]
    PrnObsCount,
    #[strum(serialize = "END OF HEADER")]
    EndOfHeader,
}

impl Label {
    /// Returns the label as it is encoded in columns 61-80
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
    /// Identifies the label of a header record
    pub fn identify(label: &str) -> Result<Self, ParsingError> {
        Self::from_str(label).map_err(|_| ParsingError::UnrecognizedHeaderLabel(label.to_string()))
    }
}
