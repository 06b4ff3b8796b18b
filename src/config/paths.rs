use std::path::{Path, PathBuf};

const APP_DIR: &str = "rds-inventory";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Option<Self> {
        let config_dir = dirs::config_dir()?.join(APP_DIR);
        Some(Self { config_dir })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
