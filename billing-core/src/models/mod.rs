mod category;
mod line_item;
mod purity;
mod rate_snapshot;
mod stone;
mod totals;

pub use category::Category;
pub use line_item::JewelryLineItem;
pub use purity::Purity;
pub use rate_snapshot::RateSnapshot;
pub use stone::StoneLineItem;
pub use totals::BillingTotals;
