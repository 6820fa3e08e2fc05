use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Runtime configuration for the journal.
///
/// Always passed explicitly into [`crate::Journal`]; the journal itself never
/// reads the environment or any global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the narrative and tabular stores live.
    pub data_dir: PathBuf,
    /// City used by callers when the user does not name one.
    pub default_city: String,
    /// Default number of entries returned by the recent-entries query.
    pub recent_limit: usize,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    default_city: Option<String>,
    recent_limit: Option<usize>,
}

impl Config {
    /// Loads config from disk (first XDG path, then native) and applies
    /// defaults for anything the file leaves unset.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            data_dir: None,
            default_city: None,
            recent_limit: None,
        });

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);
        let default_city = file_config
            .default_city
            .unwrap_or_else(|| "New York".to_string());
        let recent_limit = file_config.recent_limit.unwrap_or(10);

        Ok(Self {
            data_dir,
            default_city,
            recent_limit,
        })
    }

    /// Default data root: `{data_dir}/wlog`
    /// - macOS:   `~/Library/Application Support/wlog`
    /// - Linux:   `$XDG_DATA_HOME/wlog` or `~/.local/share/wlog`
    /// - Windows: `%APPDATA%\wlog`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("wlog");
            p
        } else {
            PathBuf::from("./wlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("wlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("wlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            data_dir: None,
            default_city: None,
            recent_limit: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(data_dir: PathBuf) -> Config {
        Config {
            data_dir,
            default_city: "New York".to_string(),
            recent_limit: 10,
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("wlog")
                .join("config.toml");
            let expected_native = b.config_dir().join("wlog").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_fields() {
        let toml = r#"
            data_dir = "/tmp/my-journal"
            default_city = "Lisbon"
            recent_limit = 25
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.data_dir.as_deref(), Some(Path::new("/tmp/my-journal")));
        assert_eq!(fc.default_city.as_deref(), Some("Lisbon"));
        assert_eq!(fc.recent_limit, Some(25));
    }

    #[test]
    fn parse_file_tolerates_missing_fields() {
        let fc = Config::parse_file("default_city = \"Oslo\"").unwrap();
        assert!(fc.data_dir.is_none());
        assert!(fc.recent_limit.is_none());
    }
}
