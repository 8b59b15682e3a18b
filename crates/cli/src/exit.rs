// crates/cli/src/exit.rs
use chart::ChartError;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    SyntaxOrUsage = 1,
    FileNotFound = 2,
    InvalidJson = 3,
    NoProjects = 4,
    FileIo = 11,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        i32::from(u8::from(code))
    }
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp | DisplayVersion => ExitCode::Ok,
        Io | Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}

pub fn exit_code_for(err: &ChartError) -> ExitCode {
    match err {
        ChartError::FileNotFound { .. } => ExitCode::FileNotFound,
        ChartError::InvalidJson { .. } => ExitCode::InvalidJson,
        ChartError::EmptyProjectSet => ExitCode::NoProjects,
        ChartError::Read { .. } | ChartError::OutputWrite { .. } | ChartError::Stdout(_) => {
            ExitCode::FileIo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn maps_error_kinds_to_exit_codes() {
        let cases = [
            (InvalidValue, ExitCode::SyntaxOrUsage),
            (UnknownArgument, ExitCode::SyntaxOrUsage),
            (ValueValidation, ExitCode::SyntaxOrUsage),
            (ArgumentConflict, ExitCode::SyntaxOrUsage),
            (DisplayHelp, ExitCode::Ok),
            (DisplayVersion, ExitCode::Ok),
            (Io, ExitCode::FileIo),
        ];

        for (kind, expected) in cases {
            assert_eq!(exit_code_from_error_kind(kind), expected);
        }
    }

    #[test]
    fn maps_chart_errors_to_exit_codes() {
        let path = PathBuf::from("projects.json");
        let cases = [
            (
                ChartError::FileNotFound { path: path.clone() },
                ExitCode::FileNotFound,
            ),
            (ChartError::EmptyProjectSet, ExitCode::NoProjects),
            (
                ChartError::OutputWrite {
                    path: path.clone(),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                },
                ExitCode::FileIo,
            ),
            (
                ChartError::Stdout(io::Error::from(io::ErrorKind::BrokenPipe)),
                ExitCode::FileIo,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(exit_code_for(&err), expected);
        }
    }

    #[test]
    fn numeric_values_are_stable() {
        assert_eq!(u8::from(ExitCode::Ok), 0);
        assert_eq!(u8::from(ExitCode::InvalidJson), 3);
        assert_eq!(i32::from(ExitCode::FileIo), 11);
    }
}
