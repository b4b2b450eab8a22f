//! Calendar timestamps, as encoded in epoch lines and header records
use hifitime::{Epoch, TimeScale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Timestamp] is a calendar date and time of day, as encoded.
/// It is not attached to any time system: see [Timestamp::to_epoch].
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Seconds, including the fractional part
    pub second: f64,
}

impl Timestamp {
    /// Builds a new [Timestamp]
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Interprets this [Timestamp] in given [TimeScale].
    /// Returns None if the calendar fields do not describe a valid date.
    pub fn to_epoch(&self, ts: TimeScale) -> Option<Epoch> {
        if !(0.0..61.0).contains(&self.second) {
            return None;
        }
        let whole = self.second.trunc();
        // 100ns resolution at most
        let nanos = ((self.second - whole) * 1.0E7).round() as u32 * 100;
        Epoch::maybe_from_gregorian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole as u8,
            nanos,
            ts,
        )
        .ok()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:010.7}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Returns the [TimeScale] a 3-letter time system code refers to.
/// GLONASS time is UTC based.
pub(crate) fn timescale(system: &str) -> Option<TimeScale> {
    match system.trim() {
        "GPS" => Some(TimeScale::GPST),
        "GAL" => Some(TimeScale::GST),
        "BDT" => Some(TimeScale::BDT),
        "QZS" => Some(TimeScale::QZSST),
        "GLO" | "UTC" => Some(TimeScale::UTC),
        "TAI" => Some(TimeScale::TAI),
        _ => None,
    }
}
