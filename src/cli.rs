use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "rds-inventory",
    version,
    about = "List available RDS instances across AWS profiles and regions"
)]
pub struct Cli {
    #[arg(long, help = "File with one AWS profile name per line [default: profiles.txt]")]
    pub profiles_file: Option<PathBuf>,
    #[arg(long, help = "CSV report path [default: rds_instances.csv]")]
    pub output: Option<PathBuf>,
    #[arg(
        long = "region",
        value_delimiter = ',',
        num_args = 1..,
        action = ArgAction::Append,
        help = "Region to scan (repeatable)"
    )]
    pub regions: Vec<String>,
    #[arg(long, help = "Read settings from this JSON file")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Emit the run summary as JSON")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
