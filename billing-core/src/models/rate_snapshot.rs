use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily rates supplied once per billing session by the rate service.
/// Treated as immutable input for the duration of one computation pass;
/// any field the service could not provide stays `None` and the
/// corresponding session input is left open for manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Benchmark rate for 10 g of fine 24K gold.
    pub gold_rate_per_10g_24k: Option<Decimal>,
    pub usd_to_inr: Option<Decimal>,
    pub gst_percentage: Option<Decimal>,
    pub effective_date: NaiveDate,
}
