//! Service configuration and store factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trivia_core::memory::MemoryStore;
use trivia_core::traits::QuestionStore;

use crate::sqlite::SqliteStore;

/// Which backend stores questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process-local store, emptied on restart.
    Memory,
    Sqlite {
        #[serde(default = "default_database_path")]
        path: PathBuf,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Sqlite {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("trivia.db")
}

/// Top-level trivia configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Address the HTTP API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Question store backend.
    #[serde(default)]
    pub store: StoreConfig,
    /// Seed default categories and questions into an empty store at startup.
    #[serde(default)]
    pub seed_on_start: bool,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            store: StoreConfig::default(),
            seed_on_start: false,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::Memory => StoreConfig::Memory,
        StoreConfig::Sqlite { path } => StoreConfig::Sqlite {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `trivia.toml` in the current directory
/// 2. `~/.config/trivia/config.toml`
///
/// Environment variable overrides: `TRIVIA_BIND`, `TRIVIA_DATABASE_PATH`.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TriviaConfig::default(),
    };

    if let Ok(bind) = std::env::var("TRIVIA_BIND") {
        config.bind = bind;
    }
    if let Ok(path) = std::env::var("TRIVIA_DATABASE_PATH") {
        config.store = StoreConfig::Sqlite {
            path: PathBuf::from(path),
        };
    }

    tracing::debug!(
        source = ?config_path,
        bind = %config.bind,
        store = ?config.store,
        "loaded configuration"
    );
    Ok(config)
}

/// Parse a TOML string into a `TriviaConfig`, resolving `${VAR}` references.
pub fn parse_config(content: &str) -> Result<TriviaConfig> {
    let mut config: TriviaConfig = toml::from_str(content)?;
    config.bind = resolve_env_vars(&config.bind);
    config.store = resolve_store_config(&config.store);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trivia"))
}

/// Create a store instance from its configuration.
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn QuestionStore>> {
    match config {
        StoreConfig::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreConfig::Sqlite { path } => Ok(Arc::new(SqliteStore::open(path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_TRIVIA_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_TRIVIA_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_TRIVIA_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_vars"), "no_vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_TRIVIA_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = TriviaConfig::default();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert!(!config.seed_on_start);
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: PathBuf::from("trivia.db")
            }
        );
    }

    #[test]
    fn parse_memory_store() {
        let config = parse_config(
            r#"
bind = "0.0.0.0:8080"
seed_on_start = true

[store]
type = "memory"
"#,
        )
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert!(config.seed_on_start);
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn parse_sqlite_store_with_env_path() {
        std::env::set_var("_TRIVIA_TEST_DATA_DIR", "/var/lib/trivia");
        let config = parse_config(
            r#"
[store]
type = "sqlite"
path = "${_TRIVIA_TEST_DATA_DIR}/questions.db"
"#,
        )
        .unwrap();
        std::env::remove_var("_TRIVIA_TEST_DATA_DIR");
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: PathBuf::from("/var/lib/trivia/questions.db")
            }
        );
    }

    #[test]
    fn unknown_store_type_is_rejected() {
        assert!(parse_config("[store]\ntype = \"postgres\"\n").is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/trivia.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[tokio::test]
    async fn create_memory_store() {
        let store = create_store(&StoreConfig::Memory).unwrap();
        assert_eq!(store.name(), "memory");
        assert_eq!(store.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = create_store(&StoreConfig::Sqlite {
            path: dir.path().join("t.db"),
        })
        .unwrap();
        assert_eq!(store.name(), "sqlite");
        assert!(store.list_categories().await.unwrap().is_empty());
    }
}
