//! Balance lines and per-zone remarks.
//!
//! `LOB = mean`, `ULOB = (LOB + max) / 2`, `LLOB = (LOB + min) / 2`. A zone is
//! `High` above ULOB, `Low` below LLOB and `Balanced` otherwise (ties included).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::zones::{Zone, ZoneAreas, ZONE_COUNT};

/// Line of balance and its upper/lower thresholds.
///
/// Invariant: `llob <= lob <= ulob`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceLines {
    pub lob: f64,
    pub ulob: f64,
    pub llob: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remark {
    High,
    Low,
    Balanced,
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Remark::High => "High",
            Remark::Low => "Low",
            Remark::Balanced => "Balanced",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub lines: BalanceLines,
    /// One remark per zone in zone order.
    pub remarks: [(Zone, Remark); ZONE_COUNT],
}

impl BalanceReport {
    #[inline]
    pub fn remark(&self, zone: Zone) -> Remark {
        self.remarks[zone.index()].1
    }
}

impl BalanceLines {
    pub fn from_areas(areas: &ZoneAreas) -> Self {
        let a = areas.as_slice();
        let lob = a.iter().sum::<f64>() / a.len() as f64;
        let max = a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = a.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            lob,
            ulob: (lob + max) / 2.0,
            llob: (lob + min) / 2.0,
        }
    }

    pub fn classify(&self, area: f64) -> Remark {
        if area > self.ulob {
            Remark::High
        } else if area < self.llob {
            Remark::Low
        } else {
            Remark::Balanced
        }
    }
}

/// Balance lines and remarks for a zone area vector.
pub fn classify_balance(areas: &ZoneAreas) -> BalanceReport {
    let lines = BalanceLines::from_areas(areas);
    BalanceReport {
        lines,
        remarks: Zone::ALL.map(|z| (z, lines.classify(areas[z]))),
    }
}

/// Same as `classify_balance` for a raw slice; the length must be 16.
pub fn classify_balance_slice(areas: &[f64]) -> Result<BalanceReport> {
    Ok(classify_balance(&ZoneAreas::from_slice(areas)?))
}
