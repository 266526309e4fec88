use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use billing_core::ItemCatalog;
use billing_data::backup::{BackupSnapshot, Material, UserRecord, export_snapshot};
use billing_data::catalog::SeedCatalog;
use billing_data::{category_csv, item_csv};

/// Bootstrap a versioned backup snapshot from CSV seed data.
///
/// Loads the category, item, and stone files, validates every reference,
/// and writes a version-1 snapshot ready for import. Optionally seeds the
/// bootstrap admin account.
#[derive(Parser, Debug)]
#[command(name = "billing-seed")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the category CSV (id,name,wastage_percent,making_charge_per_gram,parent_id)
    #[arg(short, long)]
    categories: PathBuf,

    /// Path to the item CSV (code,gold_purity,gross_weight,net_weight,category_id)
    #[arg(short, long)]
    items: PathBuf,

    /// Path to the stone CSV (item_code,stone_code,stone_name,weight_ct,rate_per_ct)
    #[arg(short, long)]
    stones: PathBuf,

    /// Path to an optional materials CSV (id,name,rate_per_gram)
    #[arg(short, long)]
    materials: Option<PathBuf>,

    /// Output path for the snapshot JSON
    #[arg(short, long)]
    output: PathBuf,

    /// Seed a bootstrap admin account with this username
    #[arg(long)]
    admin_user: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_materials(path: &PathBuf) -> Result<Vec<Material>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read: {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    reader
        .deserialize::<Material>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to parse materials CSV: {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let category_text = fs::read_to_string(&args.categories)
        .with_context(|| format!("failed to read: {}", args.categories.display()))?;
    let categories = category_csv::load_from_str(&category_text)
        .with_context(|| format!("failed to load categories: {}", args.categories.display()))?;
    info!(count = categories.len(), "loaded categories");

    let item_text = fs::read_to_string(&args.items)
        .with_context(|| format!("failed to read: {}", args.items.display()))?;
    let stone_text = fs::read_to_string(&args.stones)
        .with_context(|| format!("failed to read: {}", args.stones.display()))?;
    let items = item_csv::load_from_str(&item_text, &stone_text)
        .with_context(|| format!("failed to load items: {}", args.items.display()))?;
    info!(count = items.len(), "loaded items");

    let materials = match &args.materials {
        Some(path) => {
            let materials = load_materials(path)?;
            info!(count = materials.len(), "loaded materials");
            materials
        }
        None => Vec::new(),
    };

    let mut snapshot = BackupSnapshot::new(Utc::now());
    snapshot.categories = categories;
    snapshot.jewelry_pieces = items;
    snapshot.materials = materials;
    if let Some(username) = &args.admin_user {
        snapshot.users.push(UserRecord {
            username: username.clone(),
            display_name: "Administrator".to_string(),
            role: "admin".to_string(),
        });
        info!(username = %username, "seeded bootstrap admin account");
    }

    // export_snapshot validates references before writing anything.
    let json = export_snapshot(&snapshot).context("snapshot failed validation")?;

    // Smoke-check the seeded catalog through the same service seam the
    // billing app uses.
    let catalog = SeedCatalog::from_snapshot(&snapshot);
    if let Some(item) = snapshot.jewelry_pieces.first() {
        let found = catalog
            .find_by_code(&item.code)
            .await
            .context("catalog smoke check failed")?;
        anyhow::ensure!(
            found.is_some(),
            "catalog smoke check failed: seeded item '{}' not found",
            item.code
        );
    }

    fs::write(&args.output, json)
        .with_context(|| format!("failed to write: {}", args.output.display()))?;

    info!(
        categories = snapshot.categories.len(),
        items = snapshot.jewelry_pieces.len(),
        materials = snapshot.materials.len(),
        users = snapshot.users.len(),
        output = %args.output.display(),
        "snapshot written"
    );

    Ok(())
}
