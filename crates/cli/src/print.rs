// crates/cli/src/print.rs
use std::fmt::Display;

use logging::PROGRAM;

use crate::exit::exit_code_from_error_kind;

pub fn handle_clap_error(cmd: &clap::Command, e: clap::Error) -> ! {
    use clap::error::ErrorKind;
    let kind = e.kind();
    let code = exit_code_from_error_kind(kind);
    if kind == ErrorKind::DisplayHelp {
        let mut cmd = cmd.clone();
        println!("{}", cmd.render_help());
    } else {
        let msg = e.to_string();
        let msg = msg.strip_prefix("error: ").unwrap_or(&msg).trim_end();
        let mut lines = msg.lines();
        if let Some(first) = lines.next() {
            eprintln!("{PROGRAM}: {first}");
            for line in lines {
                eprintln!("{line}");
            }
        }
    }
    std::process::exit(i32::from(code));
}

/// One-line `activity-chart: error: ...` message for stderr.
pub fn render_error(err: &dyn Display) -> String {
    format!("{PROGRAM}: error: {err}")
}

pub fn report_error(err: &dyn Display) {
    eprintln!("{}", render_error(err));
}
