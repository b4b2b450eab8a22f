//! Observation specific header records
use std::{io::Read, str::FromStr};

use crate::{
    epoch::Timestamp,
    error::{FieldError, ParsingError},
    hardware::PhaseCenter,
    header::{columns, parse_field, read_continuation, Label},
    observation::header::{
        Compensation, LeapSeconds, ObservationHeader, ObservationTime, PhaseShift, ScaleFactor,
    },
    reader::Reader,
};

#[cfg(feature = "log")]
use log::warn;

/// Observation codes per "SYS / # / OBS TYPES" line
const OBS_TYPES_PER_LINE: usize = 13;
/// Observation codes per "SYS / SCALE FACTOR" line
const SCALED_TYPES_PER_LINE: usize = 12;
/// Satellites per "SYS / PHASE SHIFT" line
const SHIFTED_SV_PER_LINE: usize = 10;
/// Slots per "GLONASS SLOT / FRQ #" line
const GLONASS_SLOTS_PER_LINE: usize = 8;
/// Codes per "GLONASS COD/PHS/BIS" line
const GLONASS_BIASES: usize = 4;
/// Counts per "PRN / # OF OBS" line
const PRN_COUNTS_PER_LINE: usize = 9;

fn pattern_error(label: Label) -> ParsingError {
    ParsingError::HeaderRecordPatternError(label.to_string())
}

/// Parses columns [start, end[ when they are not blank
fn optional_field<T>(
    label: Label,
    value: &str,
    start: usize,
    end: usize,
) -> Result<Option<T>, ParsingError>
where
    T: FromStr,
    FieldError: From<T::Err>,
{
    match columns(value, start, end) {
        "" => Ok(None),
        content => parse_field(label, content).map(Some),
    }
}

/// Satellite system code, in column 1
fn system_code(label: Label, value: &str) -> Result<char, ParsingError> {
    value
        .chars()
        .next()
        .filter(|c| c.is_ascii_uppercase())
        .ok_or_else(|| pattern_error(label))
}

/// Collects up to `slots` 3-character codes, each preceded by one blank,
/// starting at column `offset`. Blank slots are skipped.
fn packed_codes(
    label: Label,
    value: &str,
    offset: usize,
    slots: usize,
) -> Result<Vec<String>, ParsingError> {
    let mut codes = Vec::with_capacity(slots);
    for i in 0..slots {
        let start = offset + 4 * i + 1;
        let code = columns(value, start, start + 3);
        if code.is_empty() {
            continue;
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(pattern_error(label));
        }
        codes.push(code.to_string());
    }
    Ok(codes)
}

/// Reads the next line of a multi-line record,
/// whose first `indent` columns must be blank.
fn continuation<R: Read>(
    reader: &mut Reader<R>,
    label: Label,
    indent: usize,
) -> Result<String, ParsingError> {
    let record = read_continuation(reader, label)?;
    if !columns(&record.value, 0, indent).is_empty() {
        return Err(pattern_error(label));
    }
    Ok(record.value)
}

pub(crate) fn receiver(obs: &mut ObservationHeader, value: &str) {
    obs.receiver.number = columns(value, 0, 20).to_string();
    obs.receiver.model = columns(value, 20, 40).to_string();
    obs.receiver.version = columns(value, 40, 60).to_string();
}

pub(crate) fn antenna(obs: &mut ObservationHeader, value: &str) {
    obs.antenna.number = columns(value, 0, 20).to_string();
    obs.antenna.model = columns(value, 20, 40).to_string();
}

pub(crate) fn antenna_delta_hen(obs: &mut ObservationHeader, value: &str) -> Result<(), ParsingError> {
    let label = Label::AntennaDeltaHen;
    obs.antenna.height = Some(parse_field(label, columns(value, 0, 14))?);
    obs.antenna.east = Some(parse_field(label, columns(value, 14, 28))?);
    obs.antenna.north = Some(parse_field(label, columns(value, 28, 42))?);
    Ok(())
}

pub(crate) fn antenna_phase_center(
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::AntennaPhaseCenter;
    let system = system_code(label, value)?;
    let code = columns(value, 2, 5);
    if code.is_empty() {
        return Err(pattern_error(label));
    }
    obs.antenna.phase_centers.push(PhaseCenter {
        system,
        code: code.to_string(),
        position: (
            parse_field(label, columns(value, 5, 14))?,
            parse_field(label, columns(value, 14, 28))?,
            parse_field(label, columns(value, 28, 42))?,
        ),
    });
    Ok(())
}

/// "SYS / # / OBS TYPES": each declaration replaces the codes
/// previously declared for that system.
pub(crate) fn observation_types<R: Read>(
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::ObservationTypes;
    let system = system_code(label, value)?;
    let total = columns(value, 3, 6)
        .parse::<usize>()
        .map_err(|_| pattern_error(label))?;

    let mut codes = Vec::with_capacity(total);
    let mut content = value.to_string();
    loop {
        let found = packed_codes(label, &content, 6, OBS_TYPES_PER_LINE)?;
        codes.extend(found);
        if codes.len() >= total {
            break;
        }
        if columns(&content, 6, 60).is_empty() {
            // line without any code: declared count is never reached
            return Err(pattern_error(label));
        }
        content = continuation(reader, label, 6)?;
    }

    codes.truncate(total);
    if obs.observation_types.insert(system, codes).is_some() {
        #[cfg(feature = "log")]
        warn!("'{}' observation types declared twice", system);
    }
    Ok(())
}

pub(crate) fn observation_time(label: Label, value: &str) -> Result<ObservationTime, ParsingError> {
    Ok(ObservationTime {
        timestamp: Timestamp {
            year: parse_field(label, columns(value, 0, 6))?,
            month: parse_field(label, columns(value, 6, 12))?,
            day: parse_field(label, columns(value, 12, 18))?,
            hour: parse_field(label, columns(value, 18, 24))?,
            minute: parse_field(label, columns(value, 24, 30))?,
            second: parse_field(label, columns(value, 30, 43))?,
        },
        system: columns(value, 48, 51).to_string(),
    })
}

pub(crate) fn clock_offset_applied(
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let flag: u8 = parse_field(Label::ClockOffsetApplied, columns(value, 0, 6))?;
    obs.clock_offset_applied = flag == 1;
    Ok(())
}

/// "SYS / DCBS APPLIED" and "SYS / PCVS APPLIED"
pub(crate) fn compensation(label: Label, value: &str) -> Result<Compensation, ParsingError> {
    Ok(Compensation {
        system: system_code(label, value)?,
        program: columns(value, 2, 19).to_string(),
        source: columns(value, 20, 60).to_string(),
    })
}

pub(crate) fn scale_factor<R: Read>(
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::ScaleFactor;
    let system = system_code(label, value)?;
    let factor = parse_field(label, columns(value, 2, 6))?;
    let total = match columns(value, 8, 10) {
        "" => 0,
        count => parse_field::<usize>(label, count)?,
    };

    let mut codes = packed_codes(label, value, 10, SCALED_TYPES_PER_LINE)?;
    while codes.len() < total {
        let content = continuation(reader, label, 10)?;
        let found = packed_codes(label, &content, 10, SCALED_TYPES_PER_LINE)?;
        if found.is_empty() {
            return Err(pattern_error(label));
        }
        codes.extend(found);
    }

    obs.scale_factors.push(ScaleFactor {
        system,
        factor,
        codes,
    });
    Ok(())
}

/// "SYS / PHASE SHIFT": a blank observation code only declares the system.
pub(crate) fn phase_shift<R: Read>(
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::PhaseShift;
    let system = system_code(label, value)?;
    let shifts = obs.phase_shifts.entry(system).or_default();

    let code = columns(value, 2, 5);
    if code.is_empty() {
        return Ok(());
    }

    let correction = parse_field(label, columns(value, 6, 14))?;
    let total = match columns(value, 16, 18) {
        "" => 0,
        count => parse_field::<usize>(label, count)?,
    };

    let mut satellites = packed_codes(label, value, 18, SHIFTED_SV_PER_LINE)?;
    while satellites.len() < total {
        let content = continuation(reader, label, 18)?;
        let found = packed_codes(label, &content, 18, SHIFTED_SV_PER_LINE)?;
        if found.is_empty() {
            return Err(pattern_error(label));
        }
        satellites.extend(found);
    }

    shifts.push(PhaseShift {
        code: code.to_string(),
        correction,
        satellites,
    });
    Ok(())
}

pub(crate) fn glonass_slots<R: Read>(
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::GlonassSlots;
    let total: usize = parse_field(label, columns(value, 0, 3))?;

    let mut content = value.to_string();
    let mut parsed = 0;
    loop {
        for i in 0..GLONASS_SLOTS_PER_LINE {
            if parsed == total {
                break;
            }
            let sv = columns(&content, 4 + 7 * i, 7 + 7 * i);
            if sv.is_empty() {
                break;
            }
            let slot = sv
                .strip_prefix('R')
                .and_then(|prn| prn.trim().parse::<u8>().ok())
                .ok_or_else(|| pattern_error(label))?;
            let channel = parse_field(label, columns(&content, 8 + 7 * i, 10 + 7 * i))?;
            obs.glonass_slots.insert(slot, channel);
            parsed += 1;
        }
        if parsed == total {
            return Ok(());
        }
        content = continuation(reader, label, 4)?;
        if columns(&content, 4, 60).is_empty() {
            return Err(pattern_error(label));
        }
    }
}

/// "GLONASS COD/PHS/BIS" may be entirely blank.
pub(crate) fn glonass_code_phase_bias(
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::GlonassCodePhaseBias;
    for i in 0..GLONASS_BIASES {
        let code = columns(value, 13 * i + 1, 13 * i + 4);
        if code.is_empty() {
            continue;
        }
        let bias = columns(value, 13 * i + 5, 13 * i + 13);
        if bias.is_empty() {
            // code without any correction: unknown bias
            continue;
        }
        obs.glonass_code_phase_bias
            .insert(code.to_string(), parse_field(label, bias)?);
    }
    Ok(())
}

pub(crate) fn leap_seconds(obs: &mut ObservationHeader, value: &str) -> Result<(), ParsingError> {
    let label = Label::LeapSeconds;
    obs.leap_seconds = Some(LeapSeconds {
        current: parse_field(label, columns(value, 0, 6))?,
        future: optional_field::<i32>(label, value, 6, 12)?,
        week: optional_field::<u32>(label, value, 12, 18)?,
        day: optional_field::<u32>(label, value, 18, 24)?,
        system: columns(value, 24, 27).to_string(),
    });
    Ok(())
}

/// "PRN / # OF OBS": continuation lines are expected when
/// the satellite system declares more observation codes than a line can hold.
pub(crate) fn prn_obs_count<R: Read>(
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    value: &str,
) -> Result<(), ParsingError> {
    let label = Label::PrnObsCount;
    let sv = columns(value, 3, 6);
    if sv.is_empty() {
        return Err(pattern_error(label));
    }
    let expected = sv
        .chars()
        .next()
        .and_then(|system| obs.observation_types.get(&system))
        .map(|codes| codes.len())
        .unwrap_or(PRN_COUNTS_PER_LINE);

    let mut counts = Vec::with_capacity(expected);
    let mut content = value.to_string();
    loop {
        for i in 0..PRN_COUNTS_PER_LINE {
            if counts.len() == expected {
                break;
            }
            let count = optional_field(label, &content, 6 + 6 * i, 12 + 6 * i)?;
            counts.push(count);
        }
        if counts.len() == expected {
            break;
        }
        content = continuation(reader, label, 6)?;
    }

    obs.prn_obs_counts.push((sv.to_string(), counts));
    Ok(())
}
