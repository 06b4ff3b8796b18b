use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Reads the profile list, one name per line. Blank lines are dropped and
/// the remaining names keep their file order.
pub fn load_profiles(path: &Path) -> AppResult<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::ProfileFileNotFound(path.to_path_buf()),
        _ => AppError::Io(err),
    })?;

    Ok(parse_profiles(&raw))
}

pub fn parse_profiles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_skips_blank_lines() {
        let profiles = parse_profiles("  prod \n\n\t\nstaging\r\n   \ndev");
        assert_eq!(profiles, ["prod", "staging", "dev"]);
    }

    #[test]
    fn empty_input_has_no_profiles() {
        assert!(parse_profiles("").is_empty());
        assert!(parse_profiles("\n \n").is_empty());
    }
}
