use thiserror::Error;

use crate::version::ParsingError as VersionParsingError;

/// Reasons why a single header field could not be interpreted.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("failed to parse float value")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    #[error("failed to parse integer value")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("failed to parse version")]
    VersionParsing(#[from] VersionParsingError),
}

/// Errors that may rise in Parsing process
#[derive(Error, Debug)]
pub enum ParsingError {
    /// Stream ended while a record was still expected
    #[error("unexpected end of stream")]
    TruncatedInput,
    /// Header lines carry a 60 byte value and a label of up to 20 bytes
    #[error("invalid header line \"{0}\"")]
    InvalidHeaderLine(String),
    /// First header record is not "RINEX VERSION / TYPE"
    #[error("header should start with \"RINEX VERSION / TYPE\", found \"{0}\"")]
    MissingVersionRecord(String),
    #[error("unrecognized header label \"{0}\"")]
    UnrecognizedHeaderLabel(String),
    #[error("failed to parse \"{label}\" field")]
    HeaderFieldParseError {
        label: String,
        #[source]
        cause: FieldError,
    },
    /// Record (or one of its continuation lines) does not follow its layout
    #[error("\"{0}\" record does not match its pattern")]
    HeaderRecordPatternError(String),
    #[error("file type '{0}' is not supported")]
    UnsupportedFileType(char),
    #[error("invalid epoch record \"{0}\"")]
    InvalidEpochRecord(String),
    /// Stream ended while this many lines of the current epoch were pending
    #[error("truncated epoch: {0} line(s) missing")]
    TruncatedEpoch(usize),
    #[error("invalid satellite identifier \"{0}\"")]
    InvalidSatellite(String),
    #[error("invalid observation value \"{0}\"")]
    InvalidObservationValue(String),
    #[error("invalid observation indicator '{0}'")]
    InvalidObservationIndicator(char),
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

/// [Error] is a [ParsingError] located in the source stream.
#[derive(Error, Debug)]
#[error("line {line}: {kind}")]
pub struct Error {
    /// 1-based line number of the faulty content
    pub line: usize,
    /// What went wrong
    pub kind: ParsingError,
}

impl Error {
    pub(crate) fn new(line: usize, kind: ParsingError) -> Self {
        Self { line, kind }
    }
    /// Returns the underlying [ParsingError]
    pub fn kind(&self) -> &ParsingError {
        &self.kind
    }
}
