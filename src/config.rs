use std::path::{Path, PathBuf};

use crate::schedule::{Result, ScheduleError};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROSTER_CSV: &str = "data/roster.csv";
pub const DEFAULT_GROUP_TOURS_CSV: &str = "data/group_tours.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Load, assign once, print and write the schedule
    Cli,
    /// Serve the JSON API
    Web { port: u16 },
}

/// Settings from the command line and `TOUR_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: RunMode,
    /// `None` means the built-in sample roster
    pub roster_csv: Option<PathBuf>,
    pub group_tours_csv: Option<PathBuf>,
    /// Seed for the tie-breaking shuffle; entropy when absent
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_parts(&args, |key| std::env::var(key).ok(), |path| path.exists())
    }

    /// `args[1] == "web"` selects web mode with an optional port in `args[2]`.
    /// CSV paths fall back to the files under `data/` when they exist.
    pub fn from_parts<E, X>(args: &[String], env: E, exists: X) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        X: Fn(&Path) -> bool,
    {
        let mode = if args.get(1).map(String::as_str) == Some("web") {
            let port = args
                .get(2)
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            RunMode::Web { port }
        } else {
            RunMode::Cli
        };

        let csv_path = |key: &str, fallback: &str| -> Option<PathBuf> {
            match env(key) {
                Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
                _ => {
                    let fallback = PathBuf::from(fallback);
                    exists(&fallback).then_some(fallback)
                }
            }
        };
        let roster_csv = csv_path("TOUR_ROSTER_CSV", DEFAULT_ROSTER_CSV);
        let group_tours_csv = csv_path("TOUR_GROUPS_CSV", DEFAULT_GROUP_TOURS_CSV);

        let seed = match env("TOUR_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ScheduleError::invalid_input(format!("TOUR_SEED must be an unsigned integer, got '{}'", raw))
            })?),
            None => None,
        };

        let output_dir = env("TOUR_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(AppConfig {
            mode,
            roster_csv,
            group_tours_csv,
            seed,
            output_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_cli_without_files() {
        let cfg = AppConfig::from_parts(&args(&["tours"]), |_| None, |_| false).unwrap();
        assert_eq!(cfg.mode, RunMode::Cli);
        assert_eq!(cfg.roster_csv, None);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.output_dir, PathBuf::from("."));
    }

    #[test]
    fn web_mode_with_port_and_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TOUR_SEED", "42"),
            ("TOUR_ROSTER_CSV", "/tmp/roster.csv"),
            ("TOUR_OUTPUT_DIR", "out"),
        ]
        .into_iter()
        .collect();
        let cfg = AppConfig::from_parts(
            &args(&["tours", "web", "9000"]),
            |k| env.get(k).map(|v| v.to_string()),
            |_| false,
        )
        .unwrap();
        assert_eq!(cfg.mode, RunMode::Web { port: 9000 });
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.roster_csv, Some(PathBuf::from("/tmp/roster.csv")));
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn bad_port_falls_back_and_data_files_are_picked_up() {
        let cfg = AppConfig::from_parts(&args(&["tours", "web", "nope"]), |_| None, |_| true).unwrap();
        assert_eq!(cfg.mode, RunMode::Web { port: DEFAULT_PORT });
        assert_eq!(cfg.roster_csv, Some(PathBuf::from(DEFAULT_ROSTER_CSV)));
        assert_eq!(cfg.group_tours_csv, Some(PathBuf::from(DEFAULT_GROUP_TOURS_CSV)));
    }

    #[test]
    fn bad_seed_is_rejected() {
        let result = AppConfig::from_parts(&args(&["tours"]), |k| (k == "TOUR_SEED").then(|| "abc".to_string()), |_| false);
        assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
    }
}
