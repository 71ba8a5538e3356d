//! Elemental (prakriti) grouping of the 16 zones.
//!
//! Fixed partition: Fire = E..SSW (6 zones), Water = NNW..ENE (5 zones),
//! Air = SW..NW (5 zones).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::zones::{Zone, ZoneAreas};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prakriti {
    Fire,
    Water,
    Air,
}

const FIRE: [Zone; 6] = [Zone::E, Zone::ESE, Zone::SE, Zone::SSE, Zone::S, Zone::SSW];
const WATER: [Zone; 5] = [Zone::NNW, Zone::N, Zone::NNE, Zone::NE, Zone::ENE];
const AIR: [Zone; 5] = [Zone::SW, Zone::WSW, Zone::W, Zone::WNW, Zone::NW];

impl Prakriti {
    pub const ALL: [Prakriti; 3] = [Prakriti::Fire, Prakriti::Water, Prakriti::Air];

    pub fn zones(self) -> &'static [Zone] {
        match self {
            Prakriti::Fire => &FIRE,
            Prakriti::Water => &WATER,
            Prakriti::Air => &AIR,
        }
    }

    /// Group that owns `zone`.
    pub fn of(zone: Zone) -> Prakriti {
        match zone {
            Zone::E | Zone::ESE | Zone::SE | Zone::SSE | Zone::S | Zone::SSW => Prakriti::Fire,
            Zone::NNW | Zone::N | Zone::NNE | Zone::NE | Zone::ENE => Prakriti::Water,
            Zone::SW | Zone::WSW | Zone::W | Zone::WNW | Zone::NW => Prakriti::Air,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Prakriti::Fire => "Fire",
            Prakriti::Water => "Water",
            Prakriti::Air => "Air",
        }
    }

    /// Leading letter used in the composite label.
    pub fn letter(self) -> char {
        match self {
            Prakriti::Fire => 'F',
            Prakriti::Water => 'W',
            Prakriti::Air => 'A',
        }
    }
}

impl fmt::Display for Prakriti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One group's share of the grouped total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrakritiShare {
    pub prakriti: Prakriti,
    pub area: f64,
    /// Percent of the grouped total, in [0, 100].
    pub percentage: f64,
    /// 1-based position in the descending ranking.
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrakritiReport {
    /// Fire, Water, Air in that order.
    pub groups: [PrakritiShare; 3],
    /// Descending by area; equal areas keep Fire, Water, Air order.
    pub ranked: [Prakriti; 3],
    /// Leading letters in ranked order, e.g. `F-A-W`.
    pub label: String,
}

impl PrakritiReport {
    #[inline]
    pub fn share(&self, p: Prakriti) -> &PrakritiShare {
        &self.groups[p as usize]
    }
}

/// Separator between letters of the composite label.
pub const LABEL_SEPARATOR: &str = "-";

/// Group areas, percentages and ranking.
///
/// Fails with `ZeroPrakritiTotal` when the grouped total is not positive.
pub fn aggregate_prakriti(areas: &ZoneAreas) -> Result<PrakritiReport> {
    let group_area = Prakriti::ALL.map(|p| p.zones().iter().map(|z| areas[*z]).sum::<f64>());
    let total: f64 = group_area.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Err(Error::ZeroPrakritiTotal);
    }

    let mut ranked = Prakriti::ALL;
    // Stable sort keeps declaration order on ties.
    ranked.sort_by(|a, b| group_area[*b as usize].total_cmp(&group_area[*a as usize]));

    let groups = Prakriti::ALL.map(|p| PrakritiShare {
        prakriti: p,
        area: group_area[p as usize],
        percentage: 100.0 * group_area[p as usize] / total,
        rank: ranked.iter().position(|r| *r == p).map_or(0, |i| i + 1),
    });
    let label = ranked
        .iter()
        .map(|p| p.letter().to_string())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR);

    Ok(PrakritiReport {
        groups,
        ranked,
        label,
    })
}
