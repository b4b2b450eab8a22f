#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

#[macro_use]
extern crate lazy_static;

pub mod epoch;
pub mod filename;
pub mod hardware;
pub mod header;
pub mod marker;
pub mod observation;
pub mod reader;
pub mod version;

mod error;

#[cfg(test)]
mod tests;

use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use observation::{EpochRecord, Epochs, ObservationHeader};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        epoch::Timestamp,
        error::{Error, FieldError, ParsingError},
        filename::{DataSource, Filename},
        hardware::{Antenna, PhaseCenter, Receiver},
        header::{Comment, Header, HeaderKind, HeaderRecord, Label, RinexHeader},
        marker::{Marker, MarkerType},
        observation::{
            EpochFlag, EpochRecord, Epochs, LliFlags, Observation, ObservationHeader,
            ObservationRecord, ObservationTime, SNR,
            parse_epoch_line, parse_observation_line,
        },
        reader::Reader,
        version::Version,
        Rinex,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

pub use error::{Error, FieldError, ParsingError};

/// [Rinex] is a fully decoded observation file
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rinex {
    /// Decoded header
    pub header: ObservationHeader,
    /// Epochs, in order of appearance
    pub record: Vec<EpochRecord>,
}

impl Rinex {
    /// Builds a new [Rinex] from given header and epochs
    pub fn new(header: ObservationHeader, record: Vec<EpochRecord>) -> Self {
        Self { header, record }
    }

    /// Decodes the whole stream. Use [Epochs] to iterate
    /// large files without holding every epoch in memory.
    pub fn parse<R: Read>(stream: R) -> Result<Self, Error> {
        Self::collect(Epochs::new(stream)?)
    }

    /// Decodes given local file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::collect(Epochs::<File>::from_file(path)?)
    }

    /// Decodes given gzip compressed local file
    #[cfg(feature = "flate2")]
    #[cfg_attr(docrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::collect(Epochs::<GzDecoder<File>>::from_gzip_file(path)?)
    }

    fn collect<R: Read>(mut epochs: Epochs<R>) -> Result<Self, Error> {
        let record = epochs.by_ref().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            header: epochs.into_header(),
            record,
        })
    }

    /// Returns the first epoch, if any
    pub fn first_epoch(&self) -> Option<&EpochRecord> {
        self.record.first()
    }

    /// Returns the last epoch, if any
    pub fn last_epoch(&self) -> Option<&EpochRecord> {
        self.record.last()
    }

    /// Iterates over the regular epochs (events are skipped)
    pub fn observation_epochs(&self) -> impl Iterator<Item = &EpochRecord> + '_ {
        self.record.iter().filter(|e| !e.flag.is_event())
    }
}
