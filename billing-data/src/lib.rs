pub mod backup;
pub mod catalog;
pub mod category_csv;
pub mod item_csv;
pub mod report;

pub use backup::{BACKUP_SCHEMA_VERSION, BackupError, BackupSnapshot, Material, UserRecord};
pub use catalog::SeedCatalog;
pub use category_csv::CategoryCsvError;
pub use item_csv::ItemCsvError;
pub use report::ReportError;
