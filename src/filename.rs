//! Standardized (V3+ long) file names
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid RINEX filename \"{0}\"")]
    InvalidFilename(String),
}

lazy_static! {
    static ref LONG_NAME: Regex = Regex::new(concat!(
        r"^(?P<station>\w{4}\d{2}[a-zA-Z]{3})_",
        r"(?P<source>[RSU])_",
        r"(?P<start>\d{11})_",
        r"(?P<duration>\d{2}[SMHDYU])_",
        r"((((?P<nav_frequency>\d{2}[CZSMHDU])_)?(?P<nav_type>[GREJCISM]N))",
        r"|((?P<obs_frequency>\d{2}[CZSMHDU])_(?P<obs_type>[GREJCISM]O))",
        r"|(((?P<met_frequency>\d{2}[CZSMHDU])_)?(?P<met_type>MM)))",
        r"\.(?P<format>rnx|crx)(\.(?P<compression>.*))?$",
    ))
    .unwrap_or_else(|e| panic!("invalid filename pattern: {}", e));
}

/// Data Source as described in standard filenames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataSource {
    /// Hardware (radio) receiver
    Receiver,
    /// Stream source, like RTCM
    Stream,
    /// Unknown data source
    #[default]
    Unknown,
}

impl FromStr for DataSource {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        match content {
            "R" => Ok(Self::Receiver),
            "S" => Ok(Self::Stream),
            "U" => Ok(Self::Unknown),
            other => Err(Error::InvalidFilename(other.to_string())),
        }
    }
}

/// Attributes of a standardized long file name, like
/// `ALBY00AUS_R_20183280000_01D_30S_MO.rnx.gz`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Filename {
    /// Station name: 4 character site, monument and receiver numbers,
    /// 3 letter country code
    pub station: String,
    pub data_source: DataSource,
    /// Start time, as YYYYDDDHHMM
    pub start_time: String,
    /// File period, for example "01D"
    pub duration: String,
    /// Data frequency, for example "30S". Optional for navigation
    /// and meteo files.
    pub frequency: Option<String>,
    /// File type code, for example "MO" (mixed observations)
    pub file_type: String,
    /// "rnx" or "crx"
    pub format: String,
    pub compression: Option<String>,
}

impl Filename {
    /// Returns the 3 letter country code
    pub fn country(&self) -> &str {
        self.station.get(6..).unwrap_or("")
    }
    /// Returns true for observation files
    pub fn is_observation(&self) -> bool {
        self.file_type.ends_with('O')
    }
    /// Returns (year, day of year, hour, minute) of the start time
    pub fn start(&self) -> Option<(i32, u16, u8, u8)> {
        let t = &self.start_time;
        Some((
            t.get(0..4)?.parse().ok()?,
            t.get(4..7)?.parse().ok()?,
            t.get(7..9)?.parse().ok()?,
            t.get(9..11)?.parse().ok()?,
        ))
    }
}

impl FromStr for Filename {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let captures = LONG_NAME
            .captures(name)
            .ok_or_else(|| Error::InvalidFilename(name.to_string()))?;

        let group = |key: &str| captures.name(key).map(|m| m.as_str().to_string());

        let (frequency, file_type) = if let Some(code) = group("nav_type") {
            (group("nav_frequency"), code)
        } else if let Some(code) = group("obs_type") {
            (group("obs_frequency"), code)
        } else {
            (group("met_frequency"), group("met_type").unwrap_or_default())
        };

        Ok(Self {
            station: group("station").unwrap_or_default(),
            data_source: DataSource::from_str(&group("source").unwrap_or_default())?,
            start_time: group("start").unwrap_or_default(),
            duration: group("duration").unwrap_or_default(),
            frequency,
            file_type,
            format: group("format").unwrap_or_default(),
            compression: group("compression").filter(|c| !c.is_empty()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn observation_long_name() {
        for (name, compression) in [
            ("SITE00AUS_R_20183280000_01D_30S_MO.rnx", None),
            ("SITE00AUS_R_20183280000_01D_30S_MO.rnx.gz", Some("gz")),
        ] {
            let filename = Filename::from_str(name).unwrap();
            assert_eq!(filename.station, "SITE00AUS");
            assert_eq!(filename.country(), "AUS");
            assert_eq!(filename.data_source, DataSource::Receiver);
            assert_eq!(filename.start_time, "20183280000");
            assert_eq!(filename.start(), Some((2018, 328, 0, 0)));
            assert_eq!(filename.duration, "01D");
            assert_eq!(filename.frequency.as_deref(), Some("30S"));
            assert_eq!(filename.file_type, "MO");
            assert!(filename.is_observation());
            assert_eq!(filename.format, "rnx");
            assert_eq!(filename.compression.as_deref(), compression);
        }
    }

    #[test]
    fn navigation_long_name() {
        for name in [
            "SITE00AUS_R_20183280000_01D_MN.rnx",
            "SITE00AUS_R_20183280000_01D_MN.rnx.gz",
        ] {
            let filename = Filename::from_str(name).unwrap();
            assert_eq!(filename.file_type, "MN");
            assert_eq!(filename.frequency, None);
            assert!(!filename.is_observation());
        }
        let filename = Filename::from_str("BRUX00BEL_S_20240010000_01H_05M_GN.crx").unwrap();
        assert_eq!(filename.data_source, DataSource::Stream);
        assert_eq!(filename.frequency.as_deref(), Some("05M"));
        assert_eq!(filename.format, "crx");
    }

    #[test]
    fn invalid_long_names() {
        for name in [
            "SITE00AUS_R_201832800000_01D_MN.rnx.gz",
            "SITE00AUS_X_20183280000_01D_MN.rnx",
            "SITE00AUS_R_20183280000_01D_MO.rnx",
            "alby3280.18o",
        ] {
            assert_eq!(
                Filename::from_str(name),
                Err(Error::InvalidFilename(name.to_string()))
            );
        }
    }
}
