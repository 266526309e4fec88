//! Billing session: the recompute orchestrator.
//!
//! A [`BillingSession`] owns one bill's source fields, its stone rows, and
//! the derived [`BillingTotals`]. Every setter synchronously re-runs exactly
//! the calculation stages whose dependency set includes the changed field,
//! in dependency order (gold and stones are independent of each other; the
//! totals stage consumes both), so no derived value is ever stale once a
//! setter returns.
//!
//! The dependency map is explicit:
//!
//! | Changed field | Stages re-run |
//! |------------------------------------------|------------------|
//! | purity, net weight, gold rate, wastage %, making charge | gold, totals |
//! | stone rate | stones, totals |
//! | cert charges, GST % | totals |
//! | gross weight | none (no formula reads it) |
//!
//! Collaborator events (rate snapshot, item lookup) may arrive in any order
//! and at any time; the session recomputes best-effort with whatever data is
//! present when each event lands. In particular, an item lookup that arrives
//! before the category list has loaded resolves its wastage/making defaults
//! to absent — there is no retry or wait inside the core.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::{
    CategoryDefaults, GoldWorksheet, GoldWorksheetInput, TotalsWorksheet, TotalsWorksheetInput,
    resolve_category_defaults, stone_costs, stone_total,
};
use crate::models::{BillingTotals, Category, JewelryLineItem, Purity, RateSnapshot, StoneLineItem};
use crate::services::{ItemRecord, normalize_item_code};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// All inputs blank; no derived value present.
    Idle,
    /// At least one input present but the grand total is not yet derivable.
    Editing,
    /// The grand total is present.
    Computed,
}

/// Derived-value stages, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Gold,
    Stones,
    Totals,
}

/// Source fields a setter can mutate, mapped to the stages that read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceField {
    Purity,
    GrossWeight,
    NetWeight,
    GoldRate,
    WastagePercent,
    MakingCharge,
    StoneRate,
    CertCharges,
    GstPercentage,
}

impl SourceField {
    fn stages(self) -> &'static [Stage] {
        match self {
            Self::Purity
            | Self::NetWeight
            | Self::GoldRate
            | Self::WastagePercent
            | Self::MakingCharge => &[Stage::Gold, Stage::Totals],
            Self::StoneRate => &[Stage::Stones, Stage::Totals],
            Self::CertCharges | Self::GstPercentage => &[Stage::Totals],
            // Gross weight is recorded on the bill but no formula reads it.
            Self::GrossWeight => &[],
        }
    }
}

/// One bill's inputs and derived values. Single-writer, synchronous;
/// independent sessions share nothing.
#[derive(Debug, Clone, Default)]
pub struct BillingSession {
    item: JewelryLineItem,
    stones: Vec<StoneLineItem>,
    billing_date: Option<NaiveDate>,
    rate_effective_date: Option<NaiveDate>,
    gold_rate_per_10g_24k: Option<Decimal>,
    usd_to_inr: Option<Decimal>,
    gst_percentage: Option<Decimal>,
    wastage_percent: Option<Decimal>,
    making_charge_per_gram: Option<Decimal>,
    cert_charges: Option<Decimal>,
    totals: BillingTotals,
}

impl BillingSession {
    pub fn new() -> Self {
        Self::default()
    }

    // --- accessors ---

    pub fn item(&self) -> &JewelryLineItem {
        &self.item
    }

    pub fn stones(&self) -> &[StoneLineItem] {
        &self.stones
    }

    /// Current derived snapshot, for display and export.
    pub fn totals(&self) -> &BillingTotals {
        &self.totals
    }

    /// Per-row stone costs, computed from the current rates (never stale).
    pub fn stone_costs(&self) -> Vec<Decimal> {
        stone_costs(&self.stones)
    }

    pub fn billing_date(&self) -> Option<NaiveDate> {
        self.billing_date
    }

    pub fn rate_effective_date(&self) -> Option<NaiveDate> {
        self.rate_effective_date
    }

    pub fn gold_rate_per_10g_24k(&self) -> Option<Decimal> {
        self.gold_rate_per_10g_24k
    }

    /// Passed through for display; no conversion happens in the core.
    pub fn usd_to_inr(&self) -> Option<Decimal> {
        self.usd_to_inr
    }

    pub fn gst_percentage(&self) -> Option<Decimal> {
        self.gst_percentage
    }

    pub fn wastage_percent(&self) -> Option<Decimal> {
        self.wastage_percent
    }

    pub fn making_charge_per_gram(&self) -> Option<Decimal> {
        self.making_charge_per_gram
    }

    pub fn cert_charges(&self) -> Option<Decimal> {
        self.cert_charges
    }

    pub fn state(&self) -> SessionState {
        if self.is_blank() {
            SessionState::Idle
        } else if self.totals.grand_total.is_some() {
            SessionState::Computed
        } else {
            SessionState::Editing
        }
    }

    // --- setters ---

    pub fn set_item_code(&mut self, code: &str) {
        self.item.item_code = normalize_item_code(code);
    }

    pub fn set_purity(&mut self, purity: Option<Purity>) {
        self.item.purity = purity;
        self.recompute(SourceField::Purity);
    }

    pub fn set_gross_weight(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("gross_weight", value) {
            return;
        }
        self.item.gross_weight = value;
        self.recompute(SourceField::GrossWeight);
    }

    pub fn set_net_weight(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("net_weight", value) {
            return;
        }
        self.item.net_weight = value;
        self.recompute(SourceField::NetWeight);
    }

    pub fn set_gold_rate_per_10g_24k(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("gold_rate", value) {
            return;
        }
        self.gold_rate_per_10g_24k = value;
        self.recompute(SourceField::GoldRate);
    }

    pub fn set_wastage_percent(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("wastage_percent", value) {
            return;
        }
        self.wastage_percent = value;
        self.recompute(SourceField::WastagePercent);
    }

    pub fn set_making_charge_per_gram(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("making_charge", value) {
            return;
        }
        self.making_charge_per_gram = value;
        self.recompute(SourceField::MakingCharge);
    }

    pub fn set_cert_charges(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("cert_charges", value) {
            return;
        }
        self.cert_charges = value;
        self.recompute(SourceField::CertCharges);
    }

    pub fn set_gst_percentage(&mut self, value: Option<Decimal>) {
        if !accept_non_negative("gst_percentage", value) {
            return;
        }
        self.gst_percentage = value;
        self.recompute(SourceField::GstPercentage);
    }

    /// Edits one stone row's per-carat rate. Weight is read-only once
    /// populated from item lookup. An out-of-range row index is ignored.
    pub fn set_stone_rate(
        &mut self,
        index: usize,
        rate: Option<Decimal>,
    ) {
        if !accept_non_negative("stone_rate", rate) {
            return;
        }
        let Some(stone) = self.stones.get_mut(index) else {
            warn!(index, rows = self.stones.len(), "stone rate edit ignored; no such row");
            return;
        };
        stone.rate_per_ct = rate;
        self.recompute(SourceField::StoneRate);
    }

    /// A billing date later than today does not update the field.
    pub fn set_billing_date(&mut self, date: NaiveDate) {
        let today = Local::now().date_naive();
        if date > today {
            warn!(%date, %today, "rejected billing date in the future; field unchanged");
            return;
        }
        self.billing_date = Some(date);
    }

    // --- collaborator events ---

    /// Installs the daily rates. Fields the service could not provide leave
    /// the corresponding input untouched so the operator can enter it
    /// manually.
    pub fn apply_rate_snapshot(&mut self, snapshot: &RateSnapshot) {
        if let Some(rate) = snapshot.gold_rate_per_10g_24k
            && accept_non_negative("gold_rate", Some(rate))
        {
            self.gold_rate_per_10g_24k = Some(rate);
        }
        if let Some(usd) = snapshot.usd_to_inr
            && accept_non_negative("usd_to_inr", Some(usd))
        {
            self.usd_to_inr = Some(usd);
        }
        if let Some(gst) = snapshot.gst_percentage
            && accept_non_negative("gst_percentage", Some(gst))
        {
            self.gst_percentage = Some(gst);
        }
        self.rate_effective_date = Some(snapshot.effective_date);
        self.run_stages(&[Stage::Gold, Stage::Totals]);
    }

    /// Applies the result of an item-code lookup.
    ///
    /// The query code is normalized (trim + uppercase) before comparison. A
    /// record whose own code does not match the normalized query is treated
    /// as not found: the stone list is cleared and every other field is left
    /// untouched.
    ///
    /// A matching record overwrites purity, weights, and category id, seeds
    /// the wastage/making defaults from the category list, and replaces the
    /// stone list wholesale — manual edits to those fields do not survive a
    /// lookup.
    pub fn lookup_item(
        &mut self,
        query_code: &str,
        record: Option<&ItemRecord>,
        categories: &[Category],
    ) {
        let normalized = normalize_item_code(query_code);
        let matched = record.filter(|r| normalize_item_code(&r.code) == normalized);

        let Some(record) = matched else {
            if record.is_some() {
                warn!(code = %normalized, "lookup returned a different code; treating as not found");
            }
            self.stones.clear();
            self.run_stages(&[Stage::Stones, Stage::Totals]);
            return;
        };

        self.item.item_code = normalized;
        self.item.purity = match record.gold_purity {
            Some(karat) => match Purity::from_karats(karat) {
                Some(purity) => Some(purity),
                None => {
                    warn!(%karat, "catalog purity outside the supported grades; keeping current");
                    self.item.purity
                }
            },
            None => None,
        };
        self.item.gross_weight = sanitize_weight("gross_weight", record.gross_weight);
        self.item.net_weight = sanitize_weight("net_weight", record.net_weight);
        self.item.category_id = record.category_id;

        let defaults = match record.category_id {
            Some(id) => resolve_category_defaults(id, categories),
            None => CategoryDefaults::default(),
        };
        if categories.is_empty() {
            debug!(code = %self.item.item_code, "category list not loaded; defaults resolve to absent");
        }
        self.wastage_percent = defaults.wastage_percent;
        self.making_charge_per_gram = defaults.making_charge_per_gram;

        self.stones = record
            .stones
            .iter()
            .map(|s| StoneLineItem {
                code: s.stone_code.clone(),
                name: s.stone_name.clone(),
                weight_ct: s.weight,
                rate_per_ct: Some(s.sale_price),
            })
            .collect();

        self.run_stages(&[Stage::Gold, Stage::Stones, Stage::Totals]);
    }

    /// Resets every source and derived field to its initial empty state.
    /// Idempotent: clearing an already-empty session is a no-op.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // --- recompute ---

    fn recompute(&mut self, field: SourceField) {
        self.run_stages(field.stages());
    }

    fn run_stages(&mut self, stages: &[Stage]) {
        if stages.contains(&Stage::Gold) {
            self.recompute_gold();
        }
        if stages.contains(&Stage::Stones) {
            self.recompute_stones();
        }
        if stages.contains(&Stage::Totals) {
            self.recompute_totals();
        }
        debug!(?stages, "recompute pass complete");
    }

    fn recompute_gold(&mut self) {
        let input = GoldWorksheetInput {
            net_weight: self.item.net_weight,
            purity_karat: self.item.purity.map(|p| p.karats()),
            gold_rate_per_10g_24k: self.gold_rate_per_10g_24k,
            wastage_percent: self.wastage_percent,
            making_charge_per_gram: self.making_charge_per_gram,
        };
        let result = GoldWorksheet::calculate(&input);

        self.totals.fine_weight = result.fine_weight;
        self.totals.gold_price_per_unit = result.gold_price_per_unit;
        self.totals.gold_value = result.gold_value;
        self.totals.wastage_amount = result.wastage_amount;
        self.totals.making_amount = result.making_amount;
        self.totals.total_gold_amount = Some(result.total_gold_amount);
    }

    fn recompute_stones(&mut self) {
        self.totals.stone_total = Some(stone_total(&self.stones));
    }

    fn recompute_totals(&mut self) {
        let input = TotalsWorksheetInput {
            total_gold_amount: self.totals.total_gold_amount.unwrap_or(Decimal::ZERO),
            stone_total: self.totals.stone_total.unwrap_or(Decimal::ZERO),
            cert_charges: self.cert_charges,
            gst_percentage: self.gst_percentage,
        };
        let result = TotalsWorksheet::calculate(&input);

        self.totals.cert_charges = Some(self.cert_charges.unwrap_or(Decimal::ZERO));
        self.totals.taxable_value = Some(result.taxable_value);
        self.totals.tax_amount = Some(result.tax_amount);
        self.totals.grand_total = Some(result.grand_total);
    }

    fn is_blank(&self) -> bool {
        self.item == JewelryLineItem::default()
            && self.stones.is_empty()
            && self.billing_date.is_none()
            && self.rate_effective_date.is_none()
            && self.gold_rate_per_10g_24k.is_none()
            && self.usd_to_inr.is_none()
            && self.gst_percentage.is_none()
            && self.wastage_percent.is_none()
            && self.making_charge_per_gram.is_none()
            && self.cert_charges.is_none()
            && self.totals.is_empty()
    }
}

fn accept_non_negative(
    field: &'static str,
    value: Option<Decimal>,
) -> bool {
    match value {
        Some(v) if v < Decimal::ZERO => {
            warn!(field, value = %v, "rejected negative input; field unchanged");
            false
        }
        _ => true,
    }
}

fn sanitize_weight(
    field: &'static str,
    value: Option<Decimal>,
) -> Option<Decimal> {
    match value {
        Some(v) if v < Decimal::ZERO => {
            warn!(field, value = %v, "negative weight in catalog record; treating as absent");
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::services::StoneRecord;

    fn full_session() -> BillingSession {
        let mut session = BillingSession::new();
        session.set_net_weight(Some(dec!(10)));
        session.set_purity(Some(Purity::K22));
        session.set_gold_rate_per_10g_24k(Some(dec!(6000)));
        session.set_wastage_percent(Some(dec!(8)));
        session.set_making_charge_per_gram(Some(dec!(500)));
        session.set_gst_percentage(Some(dec!(3)));
        session
    }

    fn chain_record() -> ItemRecord {
        ItemRecord {
            code: "GR-101".to_string(),
            gold_purity: Some(dec!(22)),
            gross_weight: Some(dec!(11.2)),
            net_weight: Some(dec!(10)),
            category_id: Some(2),
            stones: vec![StoneRecord {
                stone_code: "D1".to_string(),
                stone_name: "Diamond".to_string(),
                weight: dec!(0.50),
                sale_price: dec!(30000),
            }],
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Chains".to_string(),
                wastage_percent: Some(dec!(8)),
                making_charge_per_gram: Some(dec!(450)),
                parent_id: None,
            },
            Category {
                id: 2,
                name: "Rope Chains".to_string(),
                wastage_percent: Some(dec!(0)),
                making_charge_per_gram: Some(dec!(600)),
                parent_id: Some(1),
            },
        ]
    }

    // =========================================================================
    // cascade tests
    // =========================================================================

    #[test]
    fn setters_cascade_to_grand_total() {
        let session = full_session();
        let totals = session.totals();

        assert_eq!(totals.fine_weight, Some(dec!(9.167)));
        assert_eq!(totals.gold_price_per_unit, Some(dec!(5500.00)));
        assert_eq!(totals.gold_value, Some(dec!(50418.50)));
        assert_eq!(totals.wastage_amount, Some(dec!(4400.00)));
        assert_eq!(totals.making_amount, Some(dec!(5000.00)));
        assert_eq!(totals.total_gold_amount, Some(dec!(59818.50)));
        assert_eq!(totals.taxable_value, Some(dec!(59818.50)));
        assert_eq!(totals.tax_amount, Some(dec!(1794.56)));
        assert_eq!(totals.grand_total, Some(dec!(61613.06)));
        assert_eq!(session.state(), SessionState::Computed);
    }

    #[test]
    fn partial_inputs_clear_dependent_fields_but_keep_aggregates() {
        let mut session = BillingSession::new();
        session.set_net_weight(Some(dec!(10)));
        session.set_making_charge_per_gram(Some(dec!(500)));

        let totals = session.totals();
        assert_eq!(totals.fine_weight, None);
        assert_eq!(totals.gold_value, None);
        assert_eq!(totals.making_amount, Some(dec!(5000.00)));
        assert_eq!(totals.total_gold_amount, Some(dec!(5000.00)));
        assert_eq!(totals.grand_total, Some(dec!(5000.00)));
    }

    #[test]
    fn upstream_edit_refreshes_downstream_fields() {
        let mut session = full_session();

        session.set_net_weight(Some(dec!(20)));

        let totals = session.totals();
        assert_eq!(totals.fine_weight, Some(dec!(18.333)));
        assert_eq!(totals.making_amount, Some(dec!(10000.00)));
        // 5500 × 18.333 = 100831.50; + wastage 8800 + making 10000
        assert_eq!(totals.total_gold_amount, Some(dec!(119631.50)));
    }

    #[test]
    fn clearing_an_input_clears_dependents_on_the_next_pass() {
        let mut session = full_session();

        session.set_gold_rate_per_10g_24k(None);

        let totals = session.totals();
        assert_eq!(totals.gold_price_per_unit, None);
        assert_eq!(totals.gold_value, None);
        assert_eq!(totals.wastage_amount, None);
        assert_eq!(totals.fine_weight, Some(dec!(9.167)));
        assert_eq!(totals.total_gold_amount, Some(dec!(5000.00)));
    }

    #[test]
    fn gross_weight_triggers_no_recompute() {
        let mut session = BillingSession::new();

        session.set_gross_weight(Some(dec!(11.2)));

        assert!(session.totals().is_empty());
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn cert_and_gst_only_touch_the_totals_stage() {
        let mut session = full_session();
        session.set_cert_charges(Some(dec!(750)));

        let totals = session.totals();
        assert_eq!(totals.cert_charges, Some(dec!(750)));
        assert_eq!(totals.taxable_value, Some(dec!(60568.50)));
        // 60568.50 × 0.03 = 1817.055 → 1817.06
        assert_eq!(totals.tax_amount, Some(dec!(1817.06)));
        assert_eq!(totals.grand_total, Some(dec!(62385.56)));
        // Gold stage untouched.
        assert_eq!(totals.gold_value, Some(dec!(50418.50)));
    }

    // =========================================================================
    // boundary rejection tests
    // =========================================================================

    #[test]
    fn negative_input_leaves_field_unchanged() {
        let mut session = full_session();
        let before = session.totals().clone();

        session.set_net_weight(Some(dec!(-1)));

        assert_eq!(session.item().net_weight, Some(dec!(10)));
        assert_eq!(session.totals(), &before);
    }

    #[test]
    fn negative_stone_rate_rejected() {
        let mut session = BillingSession::new();
        session.lookup_item("GR-101", Some(&chain_record()), &categories());

        session.set_stone_rate(0, Some(dec!(-5)));

        assert_eq!(session.stones()[0].rate_per_ct, Some(dec!(30000)));
    }

    #[test]
    fn future_billing_date_rejected() {
        let mut session = BillingSession::new();
        let today = Local::now().date_naive();

        session.set_billing_date(today + Duration::days(1));
        assert_eq!(session.billing_date(), None);

        session.set_billing_date(today);
        assert_eq!(session.billing_date(), Some(today));
    }

    #[test]
    fn stone_rate_edit_on_missing_row_is_ignored() {
        let mut session = full_session();
        let before = session.totals().clone();

        session.set_stone_rate(5, Some(dec!(100)));

        assert_eq!(session.totals(), &before);
    }

    // =========================================================================
    // rate snapshot tests
    // =========================================================================

    #[test]
    fn rate_snapshot_installs_present_fields_only() {
        let mut session = BillingSession::new();
        session.set_gold_rate_per_10g_24k(Some(dec!(5900)));

        let snapshot = RateSnapshot {
            gold_rate_per_10g_24k: None,
            usd_to_inr: Some(dec!(83.12)),
            gst_percentage: Some(dec!(3)),
            effective_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
        };
        session.apply_rate_snapshot(&snapshot);

        // Missing gold rate leaves the manual entry in place.
        assert_eq!(session.gold_rate_per_10g_24k(), Some(dec!(5900)));
        assert_eq!(session.usd_to_inr(), Some(dec!(83.12)));
        assert_eq!(session.gst_percentage(), Some(dec!(3)));
        assert_eq!(
            session.rate_effective_date(),
            NaiveDate::from_ymd_opt(2024, 11, 4)
        );
    }

    #[test]
    fn rate_snapshot_recomputes_gold_and_totals() {
        let mut session = full_session();

        let snapshot = RateSnapshot {
            gold_rate_per_10g_24k: Some(dec!(6600)),
            usd_to_inr: None,
            gst_percentage: None,
            effective_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
        };
        session.apply_rate_snapshot(&snapshot);

        // 6600 × 22/24 = 6050
        assert_eq!(session.totals().gold_price_per_unit, Some(dec!(6050.00)));
    }

    // =========================================================================
    // item lookup tests
    // =========================================================================

    #[test]
    fn lookup_populates_fields_and_stones() {
        let mut session = BillingSession::new();
        session.set_gold_rate_per_10g_24k(Some(dec!(6000)));

        session.lookup_item("  gr-101 ", Some(&chain_record()), &categories());

        assert_eq!(session.item().item_code, "GR-101");
        assert_eq!(session.item().purity, Some(Purity::K22));
        assert_eq!(session.item().gross_weight, Some(dec!(11.2)));
        assert_eq!(session.item().net_weight, Some(dec!(10)));
        assert_eq!(session.item().category_id, Some(2));
        // Own wastage is 0 → parent's 8; own making 600 wins.
        assert_eq!(session.wastage_percent(), Some(dec!(8)));
        assert_eq!(session.making_charge_per_gram(), Some(dec!(600)));
        assert_eq!(session.stones().len(), 1);
        assert_eq!(session.stone_costs(), vec![dec!(15000.00)]);
        assert_eq!(session.totals().stone_total, Some(dec!(15000.00)));
        // Gold stage ran with the seeded defaults.
        assert_eq!(session.totals().wastage_amount, Some(dec!(4400.00)));
        assert_eq!(session.totals().making_amount, Some(dec!(6000.00)));
    }

    #[test]
    fn lookup_overwrites_manual_edits_wholesale() {
        let mut session = full_session();
        session.set_wastage_percent(Some(dec!(15)));

        session.lookup_item("GR-101", Some(&chain_record()), &categories());

        // Not a merge: the category default replaces the manual edit.
        assert_eq!(session.wastage_percent(), Some(dec!(8)));
        assert_eq!(session.making_charge_per_gram(), Some(dec!(600)));
    }

    #[test]
    fn lookup_before_categories_load_resolves_defaults_to_absent() {
        let mut session = BillingSession::new();

        session.lookup_item("GR-101", Some(&chain_record()), &[]);

        assert_eq!(session.wastage_percent(), None);
        assert_eq!(session.making_charge_per_gram(), None);
        // The rest of the record still lands.
        assert_eq!(session.item().net_weight, Some(dec!(10)));
    }

    #[test]
    fn lookup_code_mismatch_clears_stones_and_nothing_else() {
        let mut session = full_session();
        session.lookup_item("GR-101", Some(&chain_record()), &categories());
        assert_eq!(session.stones().len(), 1);

        let mut other = chain_record();
        other.code = "GR-999".to_string();
        session.lookup_item("GR-101", Some(&other), &categories());

        assert!(session.stones().is_empty());
        assert_eq!(session.totals().stone_total, Some(dec!(0)));
        // Other populated fields unchanged.
        assert_eq!(session.item().item_code, "GR-101");
        assert_eq!(session.item().net_weight, Some(dec!(10)));
        assert_eq!(session.wastage_percent(), Some(dec!(8)));
    }

    #[test]
    fn lookup_not_found_clears_stones() {
        let mut session = BillingSession::new();
        session.lookup_item("GR-101", Some(&chain_record()), &categories());

        session.lookup_item("GR-404", None, &categories());

        assert!(session.stones().is_empty());
        assert_eq!(session.totals().stone_total, Some(dec!(0)));
    }

    #[test]
    fn lookup_with_empty_stone_list_yields_zero_stone_total() {
        let mut session = BillingSession::new();
        let mut record = chain_record();
        record.stones.clear();

        session.lookup_item("GR-101", Some(&record), &categories());

        assert_eq!(session.totals().stone_total, Some(dec!(0)));
    }

    #[test]
    fn lookup_with_unsupported_purity_keeps_current_value() {
        let mut session = BillingSession::new();
        session.set_purity(Some(Purity::K18));

        let mut record = chain_record();
        record.gold_purity = Some(dec!(21));
        session.lookup_item("GR-101", Some(&record), &categories());

        assert_eq!(session.item().purity, Some(Purity::K18));
    }

    // =========================================================================
    // stone rate edit tests
    // =========================================================================

    #[test]
    fn stone_rate_edits_keep_the_total_fresh() {
        let mut session = BillingSession::new();
        let mut record = chain_record();
        record.stones.push(StoneRecord {
            stone_code: "E1".to_string(),
            stone_name: "Emerald".to_string(),
            weight: dec!(0.75),
            sale_price: dec!(8000),
        });
        session.lookup_item("GR-101", Some(&record), &categories());
        assert_eq!(session.totals().stone_total, Some(dec!(21000.00)));

        session.set_stone_rate(0, Some(dec!(40000)));
        assert_eq!(session.totals().stone_total, Some(dec!(26000.00)));

        session.set_stone_rate(1, None);
        assert_eq!(session.totals().stone_total, Some(dec!(20000.00)));
        assert_eq!(session.stone_costs(), vec![dec!(20000.00), dec!(0.00)]);
    }

    // =========================================================================
    // clear tests
    // =========================================================================

    #[test]
    fn clear_returns_to_idle_with_no_stale_values() {
        let mut session = full_session();
        session.lookup_item("GR-101", Some(&chain_record()), &categories());

        session.clear();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.totals().is_empty());
        assert!(session.stones().is_empty());
        assert_eq!(session.item(), &JewelryLineItem::default());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = full_session();

        session.clear();
        let after_first = session.clone();
        session.clear();

        assert_eq!(session.totals(), after_first.totals());
        assert_eq!(session.state(), SessionState::Idle);

        let mut fresh = BillingSession::new();
        fresh.clear();
        assert_eq!(fresh.state(), SessionState::Idle);
        assert!(fresh.totals().is_empty());
    }

    // =========================================================================
    // state machine tests
    // =========================================================================

    #[test]
    fn state_progresses_idle_editing_computed() {
        let mut session = BillingSession::new();
        assert_eq!(session.state(), SessionState::Idle);

        session.set_gross_weight(Some(dec!(11.2)));
        assert_eq!(session.state(), SessionState::Editing);

        session.set_net_weight(Some(dec!(10)));
        assert_eq!(session.state(), SessionState::Computed);

        session.clear();
        assert_eq!(session.state(), SessionState::Idle);
    }
}
