use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Base name shared by the narrative store and everything derived from it.
pub const STORE_STEM: &str = "weather_history";

/// `{data_dir}/weather_history.txt`
pub fn narrative_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{STORE_STEM}.txt"))
}

/// `{data_dir}/weather_history.csv`
pub fn tabular_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{STORE_STEM}.csv"))
}

/// `{data_dir}/weather_history.json` — overwritten on every JSON export.
pub fn json_export_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{STORE_STEM}.json"))
}

/// `{data_dir}/weather_history_backup_YYYYmmdd_HHMMSS.txt`
pub fn backup_path(data_dir: &Path, at: NaiveDateTime) -> PathBuf {
    data_dir.join(format!(
        "{STORE_STEM}_backup_{}.txt",
        at.format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn derived_paths_share_the_stem() {
        let dir = Path::new("/tmp/wlog");
        assert_eq!(
            narrative_path(dir),
            PathBuf::from("/tmp/wlog/weather_history.txt")
        );
        assert_eq!(
            tabular_path(dir),
            PathBuf::from("/tmp/wlog/weather_history.csv")
        );
        assert_eq!(
            json_export_path(dir),
            PathBuf::from("/tmp/wlog/weather_history.json")
        );
    }

    #[test]
    fn backup_name_is_timestamped() {
        let at = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(21, 4, 9)
            .unwrap();
        assert_eq!(
            backup_path(Path::new("/tmp/wlog"), at),
            PathBuf::from("/tmp/wlog/weather_history_backup_20250815_210409.txt")
        );
    }
}
