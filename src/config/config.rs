use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// chrono formats accepted for `--time-start` and `--time-end`, tried in order
    #[serde(default = "default_time_formats")]
    pub time_formats: Vec<String>,

    /// terminator written after every output line
    #[serde(default = "default_newline")]
    pub newline: String,
}

fn default_time_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

fn default_newline() -> String {
    "\n".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_formats: default_time_formats(),
            newline: default_newline(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load(config_path: Option<&Path>) -> Self {
        let default_paths = [Path::new("ipfilter.toml"), Path::new("/etc/ipfilter/config.toml")];

        let paths: Vec<&Path> = config_path
            .into_iter()
            .chain(default_paths)
            .collect();

        for path in paths {
            match Self::from_file(path) {
                Ok(config) => {
                    info!("config loaded from {}", path.display());
                    return config;
                }
                Err(err) => {
                    if let Some(io_err) = err.downcast_ref::<io::Error>() {
                        if io_err.kind() == io::ErrorKind::NotFound {
                            continue;
                        }
                    }
                    warn!("{} failed to load: {}", path.display(), err);
                }
            }
        }

        info!("falling back to default config");
        Config::default()
    }

    /// Parses a command-line time with the first matching format. Date-only
    /// formats resolve to midnight.
    pub fn parse_time(&self, value: &str) -> Option<NaiveDateTime> {
        self.time_formats.iter().find_map(|format| {
            NaiveDateTime::parse_from_str(value, format)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(value, format)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
        })
    }
}
