//! Hardware: receiver, antenna informations
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GNSS receiver description
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Receiver {
    /// Receiver serial number
    pub number: String,
    /// Receiver (hardware) model
    pub model: String,
    /// Receiver embedded software version
    pub version: String,
}

/// Average phase center position, for one observation code
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseCenter {
    /// Satellite system code
    pub system: char,
    /// Observation code
    pub code: String,
    /// North/East/Up (fixed station) or X/Y/Z (vehicle) offsets, in meter
    pub position: (f64, f64, f64),
}

/// Antenna description
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Antenna {
    /// Serial number / identification number
    pub number: String,
    /// Hardware model / make descriptor
    pub model: String,
    /// `h` eccentricity (height component),
    /// referenced to the marker, in meter
    pub height: Option<f64>,
    /// `eastern` eccentricity, in meter
    pub east: Option<f64>,
    /// `northern` eccentricity, in meter
    pub north: Option<f64>,
    /// Reference point position in body fixed frame (vehicles), in meter
    pub delta_xyz: Option<(f64, f64, f64)>,
    pub phase_centers: Vec<PhaseCenter>,
    /// Bore sight direction (vehicles)
    pub bore_sight: Option<(f64, f64, f64)>,
    /// Zero direction azimuth, in degrees
    pub zero_direction_azimuth: Option<f64>,
    /// Zero direction (vehicles)
    pub zero_direction_xyz: Option<(f64, f64, f64)>,
}

impl Antenna {
    /// Returns the (height, east, north) eccentricities, if all were described
    pub fn eccentricities(&self) -> Option<(f64, f64, f64)> {
        Some((self.height?, self.east?, self.north?))
    }
    /// Returns the [PhaseCenter] described for given observation code
    pub fn phase_center(&self, system: char, code: &str) -> Option<&PhaseCenter> {
        self.phase_centers
            .iter()
            .find(|pc| pc.system == system && pc.code == code)
    }
}
