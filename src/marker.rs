//! Geodetic marker description
use std::str::FromStr;
use strum::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Station marker, as described by the header
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker {
    /// Marker name
    pub name: String,
    /// Marker/monument number
    pub number: String,
    /// Marker type, as encoded
    pub marker_type: String,
    /// Approximate marker position (ECEF, m)
    pub approx_position: Option<(f64, f64, f64)>,
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerType {
    /// Earth fixed & high precision
    #[strum(serialize = "GEODETIC")]
    #[default]
    Geodetic,
    /// Earth fixed & low precision
    #[strum(serialize = "NON_GEODETIC", serialize = "NON GEODETIC")]
    NonGeodetic,
    /// Generated from network
    #[strum(serialize = "NON_PHYSICAL", serialize = "NON PHYSICAL")]
    NonPhysical,
    /// Orbiting space vehicle
    #[strum(serialize = "SPACEBORNE")]
    Spaceborne,
    /// Aircraft, balloon..
    #[strum(serialize = "AIRBORNE")]
    Airborne,
    /// Mobile water craft
    #[strum(serialize = "WATER_CRAFT", serialize = "WATERCRAFT")]
    Watercraft,
    /// Mobile terrestrial vehicle
    #[strum(serialize = "GROUND_CRAFT", serialize = "GROUNDCRAFT")]
    Groundcraft,
    /// Fixed on water surface
    #[strum(serialize = "FIXED_BUOY")]
    FixedBuoy,
    /// Floating on water surface
    #[strum(serialize = "FLOATING_BUOY")]
    FloatingBuoy,
    /// Floating on ice
    #[strum(serialize = "FLOATING_ICE")]
    FloatingIce,
    /// Fixed on glacier
    #[strum(serialize = "GLACIER")]
    Glacier,
    /// Rockets, shells, etc..
    #[strum(serialize = "BALLISTIC")]
    Ballistic,
    /// Animal carrying a receiver
    #[strum(serialize = "ANIMAL")]
    Animal,
    /// Human being carrying a receiver
    #[strum(serialize = "HUMAN")]
    Human,
}

impl Marker {
    /// Returns the typed [MarkerType], when the encoded type is a standard one.
    /// User defined types are only available as text.
    pub fn kind(&self) -> Option<MarkerType> {
        MarkerType::from_str(self.marker_type.trim()).ok()
    }
}
