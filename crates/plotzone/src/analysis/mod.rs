//! Derived classifications over a zone area vector.
//!
//! - `balance`: LOB/ULOB/LLOB lines and High/Low/Balanced remarks.
//! - `prakriti`: Fire/Water/Air grouping, percentages and ranked label.
//! - `report`: the full pipeline from boundary to report payload.

mod balance;
mod prakriti;
mod report;

pub use balance::{classify_balance, classify_balance_slice, BalanceLines, BalanceReport, Remark};
pub use prakriti::{aggregate_prakriti, Prakriti, PrakritiReport, PrakritiShare, LABEL_SEPARATOR};
pub use report::{analyze, AnalysisCfg, AnalysisReport, PlotInput, ZoneRow};
