// crates/cli/src/lib.rs
//! Command line surface of `activity-chart`: argument parsing, exit codes and
//! user-facing messages.

mod exit;
pub mod options;
mod print;
mod version;

pub use exit::{ExitCode, exit_code_for, exit_code_from_error_kind};
pub use options::{ChartOpts, FractionGlyphs, cli_command};
pub use print::{handle_clap_error, render_error, report_error};
pub use version::{print_version_if_requested, render_version_lines, version_banner};
