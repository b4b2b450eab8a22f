//! Observation RINEX: header and epochs
mod epochs;
mod flag;
mod lli;
mod parsing;
mod record;
mod snr;

pub(crate) mod header;

pub use epochs::Epochs;
pub use flag::EpochFlag;
pub use header::{
    Compensation, LeapSeconds, ObservationHeader, ObservationTime, PhaseShift, ScaleFactor,
};
pub use lli::LliFlags;
pub use parsing::{parse_epoch_line, parse_observation_line};
pub use record::{EpochRecord, Observation, ObservationRecord};
pub use snr::SNR;
