use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{self, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub profiles_file: PathBuf,
    pub report_path: PathBuf,
    pub regions: Vec<String>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(cli: Cli) -> AppResult<Self> {
        let Cli {
            profiles_file,
            output,
            regions,
            config,
            json,
            ..
        } = cli;

        let settings = config::load_settings(config.as_deref())?
            .with_overrides(profiles_file, output, regions);

        Self::from_settings(&settings, Output::new(json))
    }

    pub fn from_settings(settings: &Settings, output: Output) -> AppResult<Self> {
        Ok(Self {
            profiles_file: settings.profiles_file(),
            report_path: settings.output(),
            regions: settings.regions()?,
            output,
        })
    }

    pub fn profiles_file(&self) -> &Path {
        &self.profiles_file
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}
