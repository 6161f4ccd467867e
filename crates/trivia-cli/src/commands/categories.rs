//! The `trivia categories` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use trivia_core::paginate::total_pages;
use trivia_core::traits::QuestionStore;
use trivia_store::config::{create_store, load_config_from};

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = create_store(&config.store)?;

    let categories = store.list_categories().await?;
    if categories.is_empty() {
        println!("No categories. Run `trivia seed` to add the defaults.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Category", "Questions"]);

    for category in &categories {
        let count = store.list_questions_by_category(category.id).await?.len();
        table.add_row(vec![
            Cell::new(category.id),
            Cell::new(&category.kind),
            Cell::new(count),
        ]);
    }

    let total = store.count_questions().await?;
    println!("{table}");
    println!("{total} questions, {} pages", total_pages(total));
    Ok(())
}
