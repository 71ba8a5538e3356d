//! The 16 directional zones and their angular partition.
//!
//! Zone `i` (clockwise from N) is centered at `tilt + i·22.5°` and spans
//! `±11.25°` around that center, so each named direction sits at the middle
//! of its sector. Boundary angles, not center angles, delimit the wedges used
//! for area measurement.

mod overlay;

pub use overlay::{zone_overlay, OverlayCfg, Segment, ZoneOverlay};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of zones in the partition.
pub const ZONE_COUNT: usize = 16;

/// Angular width of one zone in degrees.
pub const ZONE_STEP_DEG: f64 = 360.0 / ZONE_COUNT as f64;

/// One of the 16 named sectors, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Zone {
    pub const ALL: [Zone; ZONE_COUNT] = [
        Zone::N,
        Zone::NNE,
        Zone::NE,
        Zone::ENE,
        Zone::E,
        Zone::ESE,
        Zone::SE,
        Zone::SSE,
        Zone::S,
        Zone::SSW,
        Zone::SW,
        Zone::WSW,
        Zone::W,
        Zone::WNW,
        Zone::NW,
        Zone::NNW,
    ];

    /// Position in clockwise order starting at `N = 0`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Zone> {
        Self::ALL.get(i).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::N => "N",
            Zone::NNE => "NNE",
            Zone::NE => "NE",
            Zone::ENE => "ENE",
            Zone::E => "E",
            Zone::ESE => "ESE",
            Zone::SE => "SE",
            Zone::SSE => "SSE",
            Zone::S => "S",
            Zone::SSW => "SSW",
            Zone::SW => "SW",
            Zone::WSW => "WSW",
            Zone::W => "W",
            Zone::WNW => "WNW",
            Zone::NW => "NW",
            Zone::NNW => "NNW",
        }
    }

    /// Center angle for the given tilt, unreduced.
    #[inline]
    pub fn center_deg(self, tilt: f64) -> f64 {
        tilt + self.index() as f64 * ZONE_STEP_DEG
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown zone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZoneError(pub String);

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone name: {}", self.0)
    }
}

impl std::error::Error for ParseZoneError {}

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let up = s.trim().to_ascii_uppercase();
        Zone::ALL
            .into_iter()
            .find(|z| z.name() == up)
            .ok_or_else(|| ParseZoneError(s.to_string()))
    }
}

/// Angular definition of one sector for a given tilt (degrees, unreduced).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectorDef {
    pub zone: Zone,
    pub center_deg: f64,
    pub low_deg: f64,
    pub high_deg: f64,
}

fn check_tilt(tilt: f64) -> Result<()> {
    if tilt.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidTilt(tilt))
    }
}

/// The 16 sectors in clockwise order for `tilt`.
///
/// Adjacent sectors share a boundary angle exactly: `high_deg` of sector `i`
/// equals `low_deg` of sector `i+1`.
pub fn sector_definitions(tilt: f64) -> Result<[SectorDef; ZONE_COUNT]> {
    check_tilt(tilt)?;
    let start = tilt - ZONE_STEP_DEG / 2.0;
    Ok(Zone::ALL.map(|zone| {
        let i = zone.index() as f64;
        SectorDef {
            zone,
            center_deg: zone.center_deg(tilt),
            low_deg: start + i * ZONE_STEP_DEG,
            high_deg: start + (i + 1.0) * ZONE_STEP_DEG,
        }
    }))
}

/// The four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    N,
    E,
    S,
    W,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [Cardinal::N, Cardinal::E, Cardinal::S, Cardinal::W];

    pub fn zone(self) -> Zone {
        match self {
            Cardinal::N => Zone::N,
            Cardinal::E => Zone::E,
            Cardinal::S => Zone::S,
            Cardinal::W => Zone::W,
        }
    }
}

/// Cardinal ray angles `tilt + k·90°` for N, E, S, W.
pub fn cardinal_directions(tilt: f64) -> Result<[(Cardinal, f64); 4]> {
    check_tilt(tilt)?;
    Ok(Cardinal::ALL.map(|c| (c, c.zone().center_deg(tilt))))
}

/// Per-zone areas in zone order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneAreas(pub [f64; ZONE_COUNT]);

impl ZoneAreas {
    /// Build from a slice; the length must be exactly 16.
    pub fn from_slice(areas: &[f64]) -> Result<Self> {
        let arr: [f64; ZONE_COUNT] = areas
            .try_into()
            .map_err(|_| Error::InvalidAreaVector { got: areas.len() })?;
        Ok(Self(arr))
    }

    #[inline]
    pub fn get(&self, zone: Zone) -> f64 {
        self.0[zone.index()]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Zone, f64)> + '_ {
        Zone::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl std::ops::Index<Zone> for ZoneAreas {
    type Output = f64;

    fn index(&self, zone: Zone) -> &f64 {
        &self.0[zone.index()]
    }
}
