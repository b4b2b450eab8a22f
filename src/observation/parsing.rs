//! Epoch and observation lines decoding
use std::{collections::HashMap, str::FromStr};

use crate::{
    epoch::Timestamp,
    error::ParsingError,
    header::columns,
    observation::{EpochFlag, EpochRecord, Observation, ObservationRecord},
};

#[cfg(feature = "log")]
use log::warn;

/// Epoch lines must at least describe the satellite count
const MIN_EPOCH_LINE_LEN: usize = 35;
/// Satellite identifier width
const SV_WIDTH: usize = 3;
/// Observation block width: 14 value columns, LLI, signal strength
const BLOCK_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 14;

/// Returns true if given line starts a new epoch
pub(crate) fn is_new_epoch(line: &str) -> bool {
    line.starts_with('>')
}

/// Decodes an epoch line. Observations are left empty:
/// the following `num_satellites` lines carry them.
pub fn parse_epoch_line(line: &str) -> Result<EpochRecord, ParsingError> {
    let invalid = || ParsingError::InvalidEpochRecord(line.to_string());

    if !is_new_epoch(line) || !line.is_ascii() || line.len() < MIN_EPOCH_LINE_LEN {
        return Err(invalid());
    }

    let int = |start: usize, end: usize| -> Result<u8, ParsingError> {
        columns(line, start, end).parse::<u8>().map_err(|_| invalid())
    };

    let year = columns(line, 2, 6)
        .parse::<i32>()
        .map_err(|_| invalid())?;
    let second = columns(line, 18, 29)
        .parse::<f64>()
        .map_err(|_| invalid())?;

    let timestamp = Timestamp {
        year,
        month: int(7, 9)?,
        day: int(10, 12)?,
        hour: int(13, 15)?,
        minute: int(16, 18)?,
        second,
    };

    let flag = EpochFlag::from_str(columns(line, 31, 32)).map_err(|_| invalid())?;

    let num_satellites = columns(line, 32, 35)
        .parse::<usize>()
        .map_err(|_| invalid())?;

    let clock_offset = match columns(line, 41, 56) {
        "" => None,
        offset => Some(offset.parse::<f64>().map_err(|_| invalid())?),
    };

    Ok(EpochRecord {
        timestamp,
        flag,
        num_satellites,
        clock_offset,
        observations: Vec::with_capacity(num_satellites),
        events: Vec::new(),
    })
}

/// Decodes one indicator column: blank or a single digit
fn indicator(byte: Option<&u8>) -> Result<Option<u8>, ParsingError> {
    match byte {
        None | Some(b' ') => Ok(None),
        Some(b) if b.is_ascii_digit() => Ok(Some(b - b'0')),
        Some(b) if b.is_ascii() => Err(ParsingError::InvalidObservationIndicator(*b as char)),
        Some(_) => Err(ParsingError::InvalidObservationIndicator(
            char::REPLACEMENT_CHARACTER,
        )),
    }
}

fn parse_block(block: &[u8]) -> Result<Observation, ParsingError> {
    let value = &block[..block.len().min(VALUE_WIDTH)];
    let value = std::str::from_utf8(value)
        .map_err(|_| ParsingError::InvalidObservationValue(String::from_utf8_lossy(value).to_string()))?;
    let value = match value.trim() {
        "" => None,
        content => Some(
            content
                .parse::<f64>()
                .map_err(|_| ParsingError::InvalidObservationValue(content.to_string()))?,
        ),
    };
    Ok(Observation {
        value,
        lli: indicator(block.get(VALUE_WIDTH))?,
        signal_strength: indicator(block.get(VALUE_WIDTH + 1))?,
    })
}

/// Decodes one satellite line, in the layout the header declared
/// for its system. The line may stop before the last declared block:
/// the record then holds fewer observations. A block cut short is
/// decoded from the columns that are present.
pub fn parse_observation_line(
    line: &str,
    observation_types: &HashMap<char, Vec<String>>,
) -> Result<ObservationRecord, ParsingError> {
    let invalid = || ParsingError::InvalidSatellite(line.get(..SV_WIDTH).unwrap_or(line).to_string());

    let system = line
        .chars()
        .next()
        .filter(|c| c.is_ascii_uppercase())
        .ok_or_else(invalid)?;
    let prn = line
        .get(1..SV_WIDTH)
        .and_then(|s| s.trim().parse::<u8>().ok())
        .ok_or_else(invalid)?;

    let declared = match observation_types.get(&system) {
        Some(codes) => codes.len(),
        None => {
            #[cfg(feature = "log")]
            warn!("no observation types declared for '{}'", system);
            0
        },
    };

    let bytes = line.as_bytes();
    let mut observations = Vec::with_capacity(declared);
    for i in 0..declared {
        let start = SV_WIDTH + BLOCK_WIDTH * i;
        if start >= bytes.len() {
            break;
        }
        let end = (start + BLOCK_WIDTH).min(bytes.len());
        observations.push(parse_block(&bytes[start..end])?);
    }

    Ok(ObservationRecord {
        system,
        prn,
        observations,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn observation_types() -> HashMap<char, Vec<String>> {
        let mut types = HashMap::new();
        types.insert(
            'G',
            ["C1C", "L1C", "D1C", "S1C"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        types.insert(
            'R',
            ["C1C", "L1C", "D1C", "S1C", "C2C", "L2C"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        types
    }

    #[test]
    fn epoch_line() {
        let epoch =
            parse_epoch_line("> 2018 11 24 00 00  0.0000000  0 32         .000000012").unwrap();
        assert_eq!(epoch.timestamp, Timestamp::new(2018, 11, 24, 0, 0, 0.0));
        assert_eq!(epoch.flag, EpochFlag::Ok);
        assert_eq!(epoch.num_satellites, 32);
        assert_eq!(epoch.clock_offset, Some(0.000000012));
        assert!(epoch.observations.is_empty());

        let epoch = parse_epoch_line("> 2018 11 24 08 09 30.5000000  1  3").unwrap();
        assert_eq!(epoch.timestamp, Timestamp::new(2018, 11, 24, 8, 9, 30.5));
        assert_eq!(epoch.flag, EpochFlag::PowerFailure);
        assert_eq!(epoch.num_satellites, 3);
        assert_eq!(epoch.clock_offset, None);

        let epoch = parse_epoch_line("> 2018 11 24 08 09 30.5000000  0  3               ").unwrap();
        assert_eq!(epoch.clock_offset, None);

        let epoch =
            parse_epoch_line("> 2018 11 24 08 09 30.5000000  0  3      -0.123456789012").unwrap();
        assert_eq!(epoch.clock_offset, Some(-0.123456789012));
    }

    #[test]
    fn invalid_epoch_lines() {
        for line in [
            "",
            "  2018 11 24 00 00  0.0000000  0 32",
            "G01  22331467.880 8 117352685.282 8",
            "> 2018 11 24 00 00  0.0000000  0",
            "> 2018 1x 24 00 00  0.0000000  0 32",
            "> 2018 11 24 00 00  0.00000x0  0 32",
            ">                                  ",
            "> 2018 11 24 00 00  0.0000000  9 32",
            "> 2018 11 24 00 00  0.0000000  0 32         .0000x0012",
            "> 2018 11 24 00 00  0.0000000  0 32    é    .000000012",
            "> 2018 11 24 00 00 °0.0000000  0 32",
        ] {
            assert!(
                matches!(
                    parse_epoch_line(line),
                    Err(ParsingError::InvalidEpochRecord(_))
                ),
                "\"{}\" should not be decoded",
                line
            );
        }
    }

    #[test]
    fn full_observation_line() {
        let line = "G01  22331467.880 8 117352685.282 8     -1009.418          48.950  ";
        let record = parse_observation_line(line, &observation_types()).unwrap();
        assert_eq!(record.system, 'G');
        assert_eq!(record.prn, 1);
        assert_eq!(record.observations.len(), 4);
        assert_eq!(record.observations[0].value, Some(22331467.880));
        assert_eq!(record.observations[0].lli, None);
        assert_eq!(record.observations[0].signal_strength, Some(8));
        assert_eq!(record.observations[2].value, Some(-1009.418));
        assert_eq!(record.observations[2].signal_strength, None);
        assert_eq!(record.observations[3].value, Some(48.950));
    }

    #[test]
    fn short_observation_line() {
        let line = "R01  19818123.456 7";
        let record = parse_observation_line(line, &observation_types()).unwrap();
        assert_eq!(record.observations.len(), 1);

        // last block cut after its value
        let line = "R01  19818123.456 7 105897001.237";
        let record = parse_observation_line(line, &observation_types()).unwrap();
        assert_eq!(record.observations.len(), 2);
        assert_eq!(record.observations[1].value, Some(105897001.237));
        assert_eq!(record.observations[1].lli, None);
        assert_eq!(record.observations[1].signal_strength, None);

        let record = parse_observation_line("R01", &observation_types()).unwrap();
        assert!(record.observations.is_empty());
    }

    #[test]
    fn blank_observations() {
        let line = format!("G12{:16}{:>14}16", "", "117352685.282");
        let record = parse_observation_line(&line, &observation_types()).unwrap();
        assert_eq!(record.prn, 12);
        assert_eq!(record.observations.len(), 2);
        assert_eq!(record.observations[0], Observation::default());
        assert_eq!(record.observations[1].value, Some(117352685.282));
        assert_eq!(record.observations[1].lli, Some(1));
        assert_eq!(record.observations[1].signal_strength, Some(6));
    }

    #[test]
    fn undeclared_system() {
        let record =
            parse_observation_line("E11  25107711.730 5", &observation_types()).unwrap();
        assert_eq!(record.system, 'E');
        assert!(record.observations.is_empty());
    }

    #[test]
    fn invalid_observation_lines() {
        let types = observation_types();
        assert!(matches!(
            parse_observation_line("G01  22331467.880x8", &types),
            Err(ParsingError::InvalidObservationIndicator('x'))
        ));
        assert!(matches!(
            parse_observation_line("G01  22331467.880 *", &types),
            Err(ParsingError::InvalidObservationIndicator('*'))
        ));
        assert!(matches!(
            parse_observation_line("G01  22331x67.880 8", &types),
            Err(ParsingError::InvalidObservationValue(_))
        ));
        for line in ["", "G", "GAB  22331467.880 8", "101  22331467.880 8"] {
            assert!(matches!(
                parse_observation_line(line, &types),
                Err(ParsingError::InvalidSatellite(_))
            ));
        }
    }
}
