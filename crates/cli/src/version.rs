// crates/cli/src/version.rs
use std::ffi::OsString;

use logging::PROGRAM;

const BUILD_REVISION: &str = match option_env!("BUILD_REVISION") {
    Some(v) => v,
    None => "unknown",
};

pub fn render_version_lines() -> Vec<String> {
    vec![
        format!("{PROGRAM} {}", env!("CARGO_PKG_VERSION")),
        format!("revision {BUILD_REVISION}"),
        format!(
            "default scale {}, default bar width {}",
            chart::DEFAULT_SCALE,
            chart::DEFAULT_MAX_BAR_WIDTH
        ),
    ]
}

pub fn version_banner() -> String {
    format!("{}\n", render_version_lines().join("\n"))
}

/// Prints the banner when `-V`/`--version` is present. `--quiet` still
/// short-circuits the run but keeps stdout empty.
pub fn print_version_if_requested<I>(args: I) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    let mut show_version = false;
    let mut quiet = false;
    for arg in args {
        if arg == "--version" || arg == "-V" {
            show_version = true;
        } else if arg == "--quiet" || arg == "-q" {
            quiet = true;
        }
    }
    if show_version {
        if !quiet {
            print!("{}", version_banner());
        }
        true
    } else {
        false
    }
}
