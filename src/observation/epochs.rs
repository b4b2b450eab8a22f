//! Lazy epoch iteration over the data section
use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use crate::{
    epoch::Timestamp,
    error::{Error, ParsingError},
    header::{self, HeaderKind},
    observation::{
        parsing::{parse_epoch_line, parse_observation_line},
        EpochRecord, ObservationHeader,
    },
    reader::Reader,
};

#[cfg(feature = "log")]
use log::{debug, error, warn};

/// [Epochs] decodes the data section one [EpochRecord] at a time.
/// The header is decoded when [Epochs] is built.
/// Iteration is single pass: it stops after the last epoch,
/// or after the first error.
pub struct Epochs<R: Read> {
    reader: Reader<R>,
    header: ObservationHeader,
    /// Last timestamp of a regular (not event) epoch
    previous: Option<Timestamp>,
    /// Regular epochs that did not follow their predecessor
    disordered: usize,
    done: bool,
}

impl<R: Read> Epochs<R> {
    /// Decodes the header from given stream, which is then ready
    /// to deliver its epochs.
    pub fn new(stream: R) -> Result<Self, Error> {
        let mut reader = Reader::new(stream);
        let header = match header::parse(&mut reader)? {
            HeaderKind::Observation(obs) => obs,
        };
        Ok(Self {
            reader,
            header,
            previous: None,
            disordered: 0,
            done: false,
        })
    }

    /// Returns the decoded header
    pub fn header(&self) -> &ObservationHeader {
        &self.header
    }

    /// Consumes self, returning the decoded header
    pub fn into_header(self) -> ObservationHeader {
        self.header
    }

    /// Number of the last line that was consumed
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    /// Number of regular epochs delivered so far whose timestamp
    /// did not strictly follow the previous regular epoch.
    pub fn ordering_violations(&self) -> usize {
        self.disordered
    }

    fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.reader
            .next_line()
            .map_err(|e| self.reader.error(ParsingError::Io(e)))
    }

    /// Decodes the next epoch, or returns None at end of stream.
    fn next_epoch(&mut self) -> Result<Option<EpochRecord>, Error> {
        let line = match self.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        // blank lines are tolerated at end of stream only
        if line.trim().is_empty() {
            let blank = self.reader.line_number();
            while let Some(next) = self.next_line()? {
                if !next.trim().is_empty() {
                    return Err(Error::new(blank, ParsingError::InvalidEpochRecord(line)));
                }
            }
            return Ok(None);
        }

        let mut epoch = parse_epoch_line(&line).map_err(|e| self.reader.error(e))?;

        for pending in (1..=epoch.num_satellites).rev() {
            let line = match self.next_line()? {
                Some(line) => line,
                None => {
                    return Err(self.reader.error(ParsingError::TruncatedEpoch(pending)));
                },
            };
            if epoch.flag.is_event() {
                epoch.events.push(line.trim_end().to_string());
            } else {
                let record = parse_observation_line(&line, &self.header.observation_types)
                    .map_err(|e| self.reader.error(e))?;
                epoch.observations.push(record);
            }
        }

        if !epoch.flag.is_event() {
            if let Some(previous) = self.previous {
                if epoch.timestamp <= previous {
                    self.disordered += 1;
                    #[cfg(feature = "log")]
                    warn!(
                        "line {}: epoch {} does not follow {}",
                        self.reader.line_number(),
                        epoch.timestamp,
                        previous
                    );
                }
            }
            self.previous = Some(epoch.timestamp);
        }

        #[cfg(feature = "log")]
        debug!(
            "epoch {} flag {}: {} record(s)",
            epoch.timestamp, epoch.flag, epoch.num_satellites
        );

        Ok(Some(epoch))
    }
}

impl Epochs<File> {
    /// Opens given file and decodes its header
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fd = File::open(path).map_err(|e| Error::new(0, ParsingError::Io(e)))?;
        Self::new(fd)
    }
}

#[cfg(feature = "flate2")]
#[cfg_attr(docrs, doc(cfg(feature = "flate2")))]
impl Epochs<GzDecoder<File>> {
    /// Opens given gzip compressed file and decodes its header
    pub fn from_gzip_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fd = File::open(path).map_err(|e| Error::new(0, ParsingError::Io(e)))?;
        Self::new(GzDecoder::new(fd))
    }
}

impl<R: Read> Iterator for Epochs<R> {
    type Item = Result<EpochRecord, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_epoch() {
            Ok(Some(epoch)) => Some(Ok(epoch)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(e) => {
                #[cfg(feature = "log")]
                error!("{}", e);
                self.done = true;
                Some(Err(e))
            },
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Epochs<R> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::observation::EpochFlag;

    fn header() -> String {
        [
            ("     3.03           OBSERVATION DATA    G", "RINEX VERSION / TYPE"),
            ("G    2 C1C L1C", "SYS / # / OBS TYPES"),
            ("", "END OF HEADER"),
        ]
        .iter()
        .map(|(value, label)| format!("{:<60}{}\n", value, label))
        .collect()
    }

    #[test]
    fn epochs_iteration() {
        let content = header()
            + "> 2018 11 24 00 00  0.0000000  0  2\n"
            + "G01  22331467.880 8 117352685.282 8\n"
            + "G03  20342516.786 8\n"
            + "> 2018 11 24 00 00 30.0000000  0  1\n"
            + "G01  22331567.880 8 117353210.113 8\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        assert_eq!(epochs.line_number(), 3);
        assert_eq!(epochs.header().observation_types('G').map(|c| c.len()), Some(2));

        let first = epochs.next().unwrap().unwrap();
        assert_eq!(first.observations.len(), 2);
        assert_eq!(first.observations[1].observations.len(), 1);

        let second = epochs.next().unwrap().unwrap();
        assert_eq!(second.timestamp.second, 30.0);
        assert_eq!(second.observations.len(), 1);

        assert!(epochs.next().is_none());
        assert!(epochs.next().is_none());
    }

    #[test]
    fn truncated_epoch() {
        let content = header()
            + "> 2018 11 24 00 00  0.0000000  0  3\n"
            + "G01  22331467.880 8 117352685.282 8\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        let error = epochs.next().unwrap().unwrap_err();
        assert_eq!(error.line, 6);
        assert!(matches!(error.kind, ParsingError::TruncatedEpoch(2)));
        assert!(epochs.next().is_none());
    }

    #[test]
    fn invalid_epoch_is_fatal() {
        let content = header()
            + "  2018 11 24 00 00  0.0000000  0  1\n"
            + "G01  22331467.880 8 117352685.282 8\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        let error = epochs.next().unwrap().unwrap_err();
        assert_eq!(error.line, 4);
        assert!(matches!(error.kind, ParsingError::InvalidEpochRecord(_)));
        assert!(epochs.next().is_none());
    }

    #[test]
    fn event_epochs() {
        let content = header()
            + "> 2018 11 24 00 00 45.0000000  4  1\n"
            + "ANTENNA CHANGED                                             COMMENT\n"
            + "> 2018 11 24 00 01  0.0000000  0  0\n";
        let epochs = Epochs::new(content.as_bytes()).unwrap();
        let epochs = epochs.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(epochs.len(), 2);
        assert_eq!(epochs[0].flag, EpochFlag::HeaderInformationFollows);
        assert!(epochs[0].observations.is_empty());
        assert_eq!(epochs[0].events.len(), 1);
        assert!(epochs[0].events[0].starts_with("ANTENNA CHANGED"));
        assert_eq!(epochs[1].num_satellites, 0);
    }

    #[test]
    fn trailing_blank_lines() {
        let content = header()
            + "> 2018 11 24 00 00  0.0000000  0  1\n"
            + "G01  22331467.880 8 117352685.282 8\n"
            + "\n"
            + "   \r\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        assert!(epochs.next().unwrap().is_ok());
        assert!(epochs.next().is_none());
        assert_eq!(epochs.line_number(), 7);
    }

    #[test]
    fn blank_line_between_epochs() {
        let content = header()
            + "> 2018 11 24 00 00  0.0000000  0  1\n"
            + "G01  22331467.880 8 117352685.282 8\n"
            + "\n"
            + "> 2018 11 24 00 00 30.0000000  0  1\n"
            + "G01  22331567.880 8 117353210.113 8\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        assert!(epochs.next().unwrap().is_ok());
        let error = epochs.next().unwrap().unwrap_err();
        assert_eq!(error.line, 6);
        assert!(matches!(error.kind, ParsingError::InvalidEpochRecord(_)));
        assert!(epochs.next().is_none());
    }

    #[test]
    fn ordering_violations() {
        let content = header()
            + "> 2018 11 24 00 00 30.0000000  0  1\n"
            + "G01  22331467.880 8 117352685.282 8\n"
            + "> 2018 11 24 00 00  0.0000000  0  1\n"
            + "G01  22331567.880 8 117353210.113 8\n"
            + "> 2018 11 24 00 00  0.0000000  0  1\n"
            + "G01  22331567.880 8 117353210.113 8\n"
            + "> 2018 11 24 00 00 15.0000000  5  0\n"
            + "> 2018 11 24 00 01  0.0000000  0  1\n"
            + "G01  22331667.880 8 117353735.113 8\n";
        let mut epochs = Epochs::new(content.as_bytes()).unwrap();
        assert_eq!(epochs.ordering_violations(), 0);
        assert!(epochs.next().unwrap().is_ok());
        assert!(epochs.next().unwrap().is_ok());
        assert_eq!(epochs.ordering_violations(), 1);
        let remaining = epochs.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(remaining.len(), 3);
        assert_eq!(epochs.ordering_violations(), 2);
    }

    #[test]
    fn missing_file() {
        let error = Epochs::from_file("test_resources/OBS/V3/NOPE00XXX.rnx")
            .err()
            .unwrap();
        assert_eq!(error.line, 0);
        assert!(matches!(error.kind, ParsingError::Io(_)));
    }
}
