use tracing::info;

use crate::api::AwsSessionProvider;
use crate::cli::Cli;
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let ctx = AppContext::bootstrap(cli)?;
    info!(
        profiles_file = %ctx.profiles_file().display(),
        report = %ctx.report_path().display(),
        regions = ?ctx.regions,
        "starting rds inventory"
    );

    let provider = AwsSessionProvider::new();
    commands::scan::run(&ctx, &provider).await?;
    Ok(())
}
