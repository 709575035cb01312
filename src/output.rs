//! # Output Configuration
//!
//! This module controls CLI output appearance: whether colors are used, how
//! status words are styled, and how plain-text tables are laid out.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ansiqa::output::{OutputConfig, Status};
//!
//! OutputConfig::from_env_and_flag("auto").apply();
//! println!("{}", Status::Ok);
//! ```

use std::env;
use std::fmt;

use console::{measure_text_width, pad_str, style, Alignment};

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Make every `console::style` call in the process follow this config.
    pub fn apply(&self) {
        console::set_colors_enabled(self.use_color);
        console::set_colors_enabled_stderr(self.use_color);
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// A colored status word shown in report tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Present, or unchanged
    Ok,
    /// Missing
    None,
    /// Would be or was modified
    Changed,
}

impl Status {
    /// `Ok` when `present`, `None` otherwise.
    pub fn presence(present: bool) -> Self {
        if present {
            Status::Ok
        } else {
            Status::None
        }
    }

    fn word(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::None => "none",
            Status::Changed => "changed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled = match self {
            Status::Ok => style(self.word()).green(),
            Status::None => style(self.word()).red(),
            Status::Changed => style(self.word()).yellow(),
        };
        write!(f, "{}", styled)
    }
}

/// A plain-text table: left-aligned columns separated by two spaces.
///
/// Column widths ignore ANSI escape codes, so styled cells line up.
#[derive(Debug, Default)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            headers: Some(headers.into_iter().map(Into::into).collect()),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table; each line is right-trimmed and newline-terminated.
    pub fn render(&self) -> String {
        let all_rows: Vec<&Vec<String>> = self.headers.iter().chain(self.rows.iter()).collect();
        let columns = all_rows.iter().map(|row| row.len()).max().unwrap_or(0);

        let mut widths = vec![0; columns];
        for row in &all_rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }

        let mut out = String::new();
        for row in all_rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| pad_str(cell, widths[i], Alignment::Left, None).into_owned())
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
