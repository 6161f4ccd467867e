//! The `trivia init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("trivia.toml").exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write("trivia.toml", SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    println!("\nNext steps:");
    println!("  1. Review trivia.toml (bind address, database path)");
    println!("  2. Run: trivia seed");
    println!("  3. Run: trivia serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

bind = "127.0.0.1:5000"

# Insert the default categories and starter questions into an empty store
# when the server starts.
seed_on_start = false

[store]
type = "sqlite"
path = "trivia.db"

# For a throwaway in-process store:
# [store]
# type = "memory"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = trivia_store::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert!(!config.seed_on_start);
    }
}
