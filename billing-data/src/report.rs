//! CSV export of a billing snapshot.
//!
//! One bill renders as a single CSV row carrying the item, its weights, and
//! every derived total. A derived value that has not been computed exports
//! as an empty cell — never a fabricated `0` — so a spreadsheet consumer
//! can tell "blank" from "zero" the same way the bill form does.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use billing_core::BillingSession;

/// Serde-compatible row mirroring the exported column layout.
#[derive(Debug, Serialize)]
struct BillRow<'a> {
    billing_date: Option<NaiveDate>,
    item_code: &'a str,
    purity: Option<&'static str>,
    gross_weight_g: Option<Decimal>,
    net_weight_g: Option<Decimal>,
    fine_weight_g: Option<Decimal>,
    gold_rate_per_10g_24k: Option<Decimal>,
    gold_price_per_unit: Option<Decimal>,
    gold_value: Option<Decimal>,
    wastage_percent: Option<Decimal>,
    wastage_amount: Option<Decimal>,
    making_charge_per_gram: Option<Decimal>,
    making_amount: Option<Decimal>,
    total_gold_amount: Option<Decimal>,
    stone_total: Option<Decimal>,
    cert_charges: Option<Decimal>,
    taxable_value: Option<Decimal>,
    tax_amount: Option<Decimal>,
    grand_total: Option<Decimal>,
    usd_to_inr: Option<Decimal>,
}

impl<'a> BillRow<'a> {
    fn from_session(session: &'a BillingSession) -> Self {
        let item = session.item();
        let totals = session.totals();
        Self {
            billing_date: session.billing_date(),
            item_code: &item.item_code,
            purity: item.purity.map(|p| p.as_str()),
            gross_weight_g: item.gross_weight,
            net_weight_g: item.net_weight,
            fine_weight_g: totals.fine_weight,
            gold_rate_per_10g_24k: session.gold_rate_per_10g_24k(),
            gold_price_per_unit: totals.gold_price_per_unit,
            gold_value: totals.gold_value,
            wastage_percent: session.wastage_percent(),
            wastage_amount: totals.wastage_amount,
            making_charge_per_gram: session.making_charge_per_gram(),
            making_amount: totals.making_amount,
            total_gold_amount: totals.total_gold_amount,
            stone_total: totals.stone_total,
            cert_charges: totals.cert_charges,
            taxable_value: totals.taxable_value,
            tax_amount: totals.tax_amount,
            grand_total: totals.grand_total,
            usd_to_inr: session.usd_to_inr(),
        }
    }
}

/// Errors that can occur while exporting a bill.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export buffer error: {0}")]
    Buffer(String),
}

/// Writes the snapshot as a header plus one data row.
pub fn write_csv<W: Write>(
    session: &BillingSession,
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.serialize(BillRow::from_session(session))?;
    csv_writer.flush().map_err(|e| ReportError::Buffer(e.to_string()))?;
    Ok(())
}

/// Renders the snapshot to a CSV string.
pub fn render_csv(session: &BillingSession) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_csv(session, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ReportError::Buffer(e.to_string()))
}
