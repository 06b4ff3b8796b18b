pub mod paths;
pub mod profiles;
pub mod settings;

use std::path::Path;

pub use paths::AppPaths;
pub use profiles::{load_profiles, parse_profiles};
pub use settings::Settings;

use crate::error::{AppError, AppResult};

/// Loads settings from `explicit` when given, otherwise from the per-user
/// settings file if one exists.
pub fn load_settings(explicit: Option<&Path>) -> AppResult<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "settings file '{}' not found",
                path.display()
            )));
        }
        return settings::load(path);
    }

    match AppPaths::discover() {
        Some(paths) => settings::load(&paths.settings_file()),
        None => Ok(Settings::default()),
    }
}
