use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::api::models::{InstanceRecord, ScanFailure};
use crate::api::session::SessionProvider;
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::inventory;
use crate::output::report;

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub profiles: usize,
    pub regions: Vec<String>,
    pub total: usize,
    pub output: PathBuf,
    pub failures: Vec<ScanFailure>,
    #[serde(skip)]
    pub records: Vec<InstanceRecord>,
}

#[derive(Debug, Serialize)]
struct AbortedRun<'a> {
    aborted: bool,
    message: &'a str,
}

/// Runs the inventory. Returns `None` when the profile list could not be
/// read, in which case no session is opened and no report is written.
pub async fn run<P: SessionProvider>(
    ctx: &AppContext,
    provider: &P,
) -> AppResult<Option<ScanSummary>> {
    let profiles = match config::load_profiles(ctx.profiles_file()) {
        Ok(profiles) => profiles,
        Err(err) => {
            let message = profile_load_message(&err);
            warn!(error = %err, "cannot read profile list");
            ctx.output.emit(
                std::slice::from_ref(&message),
                &AbortedRun {
                    aborted: true,
                    message: &message,
                },
            )?;
            return Ok(None);
        }
    };

    let inventory::Inventory { records, failures } =
        inventory::collect(provider, &profiles, &ctx.regions, &ctx.output).await;

    report::write_report(ctx.report_path(), &records)?;
    info!(
        records = records.len(),
        failures = failures.len(),
        "report written"
    );

    let summary = ScanSummary {
        profiles: profiles.len(),
        regions: ctx.regions.clone(),
        total: records.len(),
        output: ctx.report_path().to_path_buf(),
        failures,
        records,
    };

    ctx.output.emit(
        &[
            format!("Total RDS instances found: {}", summary.total),
            format!(
                "Results have been written to {}",
                summary.output.display()
            ),
        ],
        &summary,
    )?;

    Ok(Some(summary))
}

fn profile_load_message(err: &AppError) -> String {
    match err {
        AppError::ProfileFileNotFound(path) => {
            format!("Profile file '{}' not found.", path.display())
        }
        other => format!("Error reading profile file: {other}"),
    }
}
