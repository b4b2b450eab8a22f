//! RINEX file Header

use crate::{observation::ObservationHeader, version::Version};

mod label;
mod parsing;
mod record;

pub use label::Label;
pub use parsing::parse;
pub use record::HeaderRecord;

pub(crate) use parsing::{columns, parse_field, read_continuation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Header comment, stored "as is".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    /// Comment content (trailing padding removed)
    pub content: String,
    /// 1-based line number this comment was found at
    pub line: usize,
}

/// Fields shared by all `RINEX` headers, whatever the file type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// Format revision, as encoded
    pub format_version: f64,
    /// Format revision, as (major, minor)
    pub version: Version,
    /// File type code: 'O' for observation data
    pub file_type: char,
    /// Satellite system code, 'M' for mixed files
    pub satellite_system: char,
    /// Program that created this file
    pub program: String,
    /// Agency that created this file
    pub run_by: String,
    /// File creation date, as encoded
    pub creation_date: String,
    /// Comments, in order of appearance
    pub comments: Vec<Comment>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            format_version: 0.0,
            version: Version::default(),
            file_type: ' ',
            satellite_system: ' ',
            program: String::new(),
            run_by: String::new(),
            creation_date: String::new(),
            comments: Vec::new(),
        }
    }
}

/// Capabilities that every header variant provides.
pub trait RinexHeader {
    /// Format revision, as encoded
    fn format_version(&self) -> f64;
    /// File type code
    fn file_type(&self) -> char;
}

impl RinexHeader for Header {
    fn format_version(&self) -> f64 {
        self.format_version
    }
    fn file_type(&self) -> char {
        self.file_type
    }
}

/// Header variants, selected by the file type code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeaderKind {
    /// Observation file header ('O')
    Observation(ObservationHeader),
}

impl HeaderKind {
    /// Returns the shared [Header] fields
    pub fn header(&self) -> &Header {
        match self {
            Self::Observation(obs) => &obs.header,
        }
    }
    /// Returns [ObservationHeader] if this is an observation header
    pub fn as_observation(&self) -> Option<&ObservationHeader> {
        match self {
            Self::Observation(obs) => Some(obs),
        }
    }
}

impl RinexHeader for HeaderKind {
    fn format_version(&self) -> f64 {
        self.header().format_version
    }
    fn file_type(&self) -> char {
        self.header().file_type
    }
}
