use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_PROFILES_FILE: &str = "profiles.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "rds_instances.csv";
pub const DEFAULT_REGIONS: [&str; 4] = [
    "us-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profiles_file: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub regions: Option<Vec<String>>,
}

impl Settings {
    /// Layers command line values over the file settings. An empty `regions`
    /// leaves the configured list in place.
    pub fn with_overrides(
        mut self,
        profiles_file: Option<PathBuf>,
        output: Option<PathBuf>,
        regions: Vec<String>,
    ) -> Self {
        if profiles_file.is_some() {
            self.profiles_file = profiles_file;
        }
        if output.is_some() {
            self.output = output;
        }
        if !regions.is_empty() {
            self.regions = Some(regions);
        }
        self
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.profiles_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_FILE))
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    pub fn regions(&self) -> AppResult<Vec<String>> {
        let Some(configured) = &self.regions else {
            return Ok(DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect());
        };

        let mut out: Vec<String> = Vec::new();
        for raw in configured {
            let region = raw.trim();
            if region.is_empty() || out.iter().any(|seen| seen == region) {
                continue;
            }
            out.push(region.to_string());
        }

        if out.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one region is required".to_string(),
            ));
        }

        Ok(out)
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}
