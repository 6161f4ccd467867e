//! The `trivia seed` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use trivia_core::seed::seed_store;
use trivia_store::config::{create_store, load_config_from};

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = create_store(&config.store)?;

    let summary = seed_store(store.as_ref())
        .await
        .context("failed to seed store")?;

    if summary.is_empty() {
        println!("Store already has categories, nothing seeded.");
    } else {
        println!(
            "Seeded {} categories and {} questions.",
            summary.categories, summary.questions
        );
    }
    Ok(())
}
