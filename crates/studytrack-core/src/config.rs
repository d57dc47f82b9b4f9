//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::grading::GradingPolicy;
use crate::student::StudentProfile;

pub const CONFIG_FILE_NAME: &str = "studytrack.toml";

/// Top-level studytrack configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTrackConfig {
    /// SQLite database file.
    #[serde(default = "default_database")]
    pub database: PathBuf,
    /// Insert the demo courses when a fresh database is set up.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    #[serde(default)]
    pub grading: GradingPolicy,
    #[serde(default)]
    pub student: StudentProfile,
}

fn default_database() -> PathBuf {
    PathBuf::from("studytrack.db")
}

fn default_true() -> bool {
    true
}

impl Default for StudyTrackConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            seed_demo_data: true,
            grading: GradingPolicy::default(),
            student: StudentProfile::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `studytrack.toml` in the current directory
/// 2. `~/.config/studytrack/config.toml`
///
/// Environment variable overrides: `STUDYTRACK_DATABASE`,
/// `STUDYTRACK_POINTS_TO_PASS`.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyTrackConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            parse_config_file(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            StudyTrackConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    config.grading.validate()?;

    Ok(config)
}

/// Parse a config file without applying environment overrides.
pub fn parse_config_file(path: &Path) -> Result<StudyTrackConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<StudyTrackConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn apply_env_overrides(config: &mut StudyTrackConfig) {
    if let Ok(db) = std::env::var("STUDYTRACK_DATABASE") {
        if !db.trim().is_empty() {
            config.database = PathBuf::from(db);
        }
    }

    if let Ok(raw) = std::env::var("STUDYTRACK_POINTS_TO_PASS") {
        match raw.trim().parse::<u32>() {
            Ok(points) => config.grading.points_to_pass = points,
            Err(_) => {
                warn!(value = %raw, "ignoring invalid STUDYTRACK_POINTS_TO_PASS");
            }
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studytrack"))
}

/// Starter configuration written by `studytrack init`.
pub const SAMPLE_CONFIG: &str = r#"# studytrack configuration

database = "studytrack.db"
seed_demo_data = true

[grading]
points_to_pass = 50
max_attempts = 3

[student]
name = "Max Mustermann"
birthday = "2000-01-01"
student_number = "IU12345678"
degree = "Bachelor Software Development"
period = 12
enrolled = "2025-02-02"
ects = 180
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StudyTrackConfig::default();
        assert_eq!(config.database, PathBuf::from("studytrack.db"));
        assert!(config.seed_demo_data);
        assert_eq!(config.grading.points_to_pass, 50);
        assert_eq!(config.student.name, "Max Mustermann");
    }

    #[test]
    fn sample_config_matches_defaults() {
        let config: StudyTrackConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, StudyTrackConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
database = "/tmp/grades.db"

[grading]
points_to_pass = 60
"#;
        let config: StudyTrackConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database, PathBuf::from("/tmp/grades.db"));
        assert_eq!(config.grading.points_to_pass, 60);
        assert_eq!(config.grading.max_attempts, 3);
        assert_eq!(config.student, StudentProfile::default());
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "seed_demo_data = false\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/studytrack.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_policy_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[grading]\nmax_attempts = 0\n").unwrap();

        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn malformed_toml_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "database = [").unwrap();

        let err = parse_config_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }
}
