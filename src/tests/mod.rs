//! integrated tests

#[cfg(feature = "flate2")]
mod compression;

#[cfg(feature = "serde")]
mod json;
