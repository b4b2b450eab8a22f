//! `RINEX` revision description
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latest `RINEX` observation revision this crate was designed against
pub const SUPPORTED_VERSION: Version = Version { major: 3, minor: 5 };

/// Version is used to describe RINEX standards revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParsingError {
    #[error("empty version descriptor")]
    Empty,
    #[error("failed to parse version")]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl Default for Version {
    /// Builds a default `Version` object
    fn default() -> Self {
        SUPPORTED_VERSION
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl From<Version> for (u8, u8) {
    fn from(v: Version) -> Self {
        (v.major, v.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsingError::Empty);
        }
        match s.split_once('.') {
            Some((major, minor)) => {
                // minor is a decimal fraction: "3.1" stands for 3.10
                let minor = match minor.len() {
                    0 => 0,
                    1 => minor.parse::<u8>()? * 10,
                    _ => minor.parse::<u8>()?,
                };
                Ok(Self {
                    major: major.parse::<u8>()?,
                    minor,
                })
            },
            None => Ok(Self {
                major: s.parse::<u8>()?,
                minor: 0,
            }),
        }
    }
}

impl Version {
    /// Builds a new `Version` object
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
    /// Returns true if this version is supported
    pub fn is_supported(&self) -> bool {
        self.major == SUPPORTED_VERSION.major && self.minor <= SUPPORTED_VERSION.minor
    }
}
