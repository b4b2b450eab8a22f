//! Header section decoding: record dispatch and shared field helpers.
use std::{io::Read, str::FromStr};

use crate::{
    error::{Error, FieldError, ParsingError},
    header::{Comment, Header, HeaderKind, HeaderRecord, Label},
    observation::{header::parsing as fields, ObservationHeader},
    reader::Reader,
};

#[cfg(feature = "log")]
use log::{debug, error};

/// Parses the [HeaderKind] by consuming [Reader] until "END OF HEADER".
/// "RINEX VERSION / TYPE" must be the very first record.
/// The first faulty record aborts the whole process.
pub fn parse<R: Read>(reader: &mut Reader<R>) -> Result<HeaderKind, Error> {
    let mut record = HeaderRecord::read(reader).map_err(|e| reader.error(e))?;

    if record.label != Label::Version.as_str() {
        #[cfg(feature = "log")]
        error!("header starts with \"{}\"", record.label);
        return Err(reader.error(ParsingError::MissingVersionRecord(record.label)));
    }

    // Observation fields are a superset of the shared fields:
    // they accumulate everything until the file type gets dispatched.
    let mut accumulator = ObservationHeader::default();

    loop {
        let label = Label::identify(&record.label).map_err(|e| reader.error(e))?;

        decode(label, reader, &mut accumulator, &record).map_err(|e| {
            #[cfg(feature = "log")]
            error!("{}: {}", label, e);
            reader.error(e)
        })?;

        #[cfg(feature = "log")]
        debug!("{}: \"{}\"", label, record.value.trim_end());

        if label == Label::EndOfHeader {
            break;
        }

        record = HeaderRecord::read(reader).map_err(|e| reader.error(e))?;
    }

    #[cfg(feature = "log")]
    debug!(
        "header: v{} type '{}' ({} lines)",
        accumulator.header.version,
        accumulator.header.file_type,
        reader.line_number()
    );

    match accumulator.header.file_type {
        'O' => Ok(HeaderKind::Observation(accumulator)),
        other => Err(reader.error(ParsingError::UnsupportedFileType(other))),
    }
}

/// Routes a [HeaderRecord] to its field decoder.
/// Decoders of multi-line records pull their continuation lines
/// from [Reader] themselves.
fn decode<R: Read>(
    label: Label,
    reader: &mut Reader<R>,
    obs: &mut ObservationHeader,
    record: &HeaderRecord,
) -> Result<(), ParsingError> {
    let value = record.value.as_str();
    match label {
        Label::Version => decode_version(&mut obs.header, value),
        Label::ProgramRunByDate => {
            decode_program(&mut obs.header, value);
            Ok(())
        },
        Label::Comment => {
            obs.header.comments.push(Comment {
                content: value.trim_end().to_string(),
                line: record.line,
            });
            Ok(())
        },
        Label::MarkerName => {
            obs.marker.name = columns(value, 0, 60).to_string();
            Ok(())
        },
        Label::MarkerNumber => {
            obs.marker.number = columns(value, 0, 20).to_string();
            Ok(())
        },
        Label::MarkerType => {
            obs.marker.marker_type = columns(value, 0, 20).to_string();
            Ok(())
        },
        Label::ObserverAgency => {
            obs.observer = columns(value, 0, 20).to_string();
            obs.agency = columns(value, 20, 60).to_string();
            Ok(())
        },
        Label::Receiver => {
            fields::receiver(obs, value);
            Ok(())
        },
        Label::Antenna => {
            fields::antenna(obs, value);
            Ok(())
        },
        Label::ApproxPosition => {
            obs.marker.approx_position = Some(parse_xyz(label, value)?);
            Ok(())
        },
        Label::AntennaDeltaHen => fields::antenna_delta_hen(obs, value),
        Label::AntennaDeltaXyz => {
            obs.antenna.delta_xyz = Some(parse_xyz(label, value)?);
            Ok(())
        },
        Label::AntennaPhaseCenter => fields::antenna_phase_center(obs, value),
        Label::AntennaBoreSight => {
            obs.antenna.bore_sight = Some(parse_xyz(label, value)?);
            Ok(())
        },
        Label::AntennaZeroDirAzimuth => {
            obs.antenna.zero_direction_azimuth = Some(parse_field(label, columns(value, 0, 14))?);
            Ok(())
        },
        Label::AntennaZeroDirXyz => {
            obs.antenna.zero_direction_xyz = Some(parse_xyz(label, value)?);
            Ok(())
        },
        Label::CenterOfMass => {
            obs.center_of_mass = Some(parse_xyz(label, value)?);
            Ok(())
        },
        Label::ObservationTypes => fields::observation_types(reader, obs, value),
        Label::SignalStrengthUnit => {
            obs.signal_strength_unit = columns(value, 0, 20).to_string();
            Ok(())
        },
        Label::Interval => {
            obs.interval = Some(parse_field(label, columns(value, 0, 10))?);
            Ok(())
        },
        Label::TimeOfFirstObs => {
            obs.time_of_first_obs = Some(fields::observation_time(label, value)?);
            Ok(())
        },
        Label::TimeOfLastObs => {
            obs.time_of_last_obs = Some(fields::observation_time(label, value)?);
            Ok(())
        },
        Label::ClockOffsetApplied => fields::clock_offset_applied(obs, value),
        Label::DcbsApplied => {
            let dcb = fields::compensation(label, value)?;
            obs.dcbs_applied.push(dcb);
            Ok(())
        },
        Label::PcvsApplied => {
            let pcv = fields::compensation(label, value)?;
            obs.pcvs_applied.push(pcv);
            Ok(())
        },
        Label::ScaleFactor => fields::scale_factor(reader, obs, value),
        Label::PhaseShift => fields::phase_shift(reader, obs, value),
        Label::GlonassSlots => fields::glonass_slots(reader, obs, value),
        Label::GlonassCodePhaseBias => fields::glonass_code_phase_bias(obs, value),
        Label::LeapSeconds => fields::leap_seconds(obs, value),
        Label::NumberOfSatellites => {
            obs.num_satellites = Some(parse_field(label, columns(value, 0, 6))?);
            Ok(())
        },
        Label::PrnObsCount => fields::prn_obs_count(reader, obs, value),
        Label::EndOfHeader => Ok(()),
    }
}

fn decode_version(header: &mut Header, value: &str) -> Result<(), ParsingError> {
    let version = columns(value, 0, 9);
    header.format_version = parse_field(Label::Version, version)?;
    header.version = parse_field(Label::Version, version)?;
    header.file_type = columns(value, 20, 21).chars().next().unwrap_or(' ');
    // some producers shift the system code by one column
    header.satellite_system = columns(value, 40, 60).chars().next().unwrap_or(' ');
    Ok(())
}

fn decode_program(header: &mut Header, value: &str) {
    header.program = columns(value, 0, 20).to_string();
    header.run_by = columns(value, 20, 40).to_string();
    header.creation_date = columns(value, 40, 60).to_string();
}

/// Returns columns [start, end[ of given line or header value, trimmed.
/// Columns beyond the line are blank.
pub(crate) fn columns(value: &str, start: usize, end: usize) -> &str {
    let end = end.min(value.len());
    value.get(start..end).unwrap_or("").trim()
}

/// Parses a (trimmed) header field, attaching the record label to any failure.
pub(crate) fn parse_field<T>(label: Label, content: &str) -> Result<T, ParsingError>
where
    T: FromStr,
    FieldError: From<T::Err>,
{
    content
        .parse::<T>()
        .map_err(|e| ParsingError::HeaderFieldParseError {
            label: label.to_string(),
            cause: e.into(),
        })
}

/// Parses the 3F14.4 triplet most coordinates are encoded as.
pub(crate) fn parse_xyz(label: Label, value: &str) -> Result<(f64, f64, f64), ParsingError> {
    Ok((
        parse_field(label, columns(value, 0, 14))?,
        parse_field(label, columns(value, 14, 28))?,
        parse_field(label, columns(value, 28, 42))?,
    ))
}

/// Pulls the next physical line of a multi-line record.
/// It must carry the very same label.
pub(crate) fn read_continuation<R: Read>(
    reader: &mut Reader<R>,
    label: Label,
) -> Result<HeaderRecord, ParsingError> {
    let record = HeaderRecord::read(reader)?;
    if record.label != label.as_str() {
        return Err(ParsingError::HeaderRecordPatternError(label.to_string()));
    }
    Ok(record)
}
