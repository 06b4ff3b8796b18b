pub mod json;
pub mod report;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    /// Prints a progress line. JSON mode keeps stdout for the final summary.
    pub fn progress(&self, line: &str) {
        if self.mode == OutputMode::Text {
            text::print_line(line);
        }
    }

    pub fn emit<T: Serialize>(&self, text_lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                for line in text_lines {
                    text::print_line(line);
                }
                Ok(())
            }
            OutputMode::Json => json::print(json_value),
        }
    }
}
