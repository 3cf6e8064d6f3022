//! CLI error type.

use std::path::PathBuf;

use calc_core::CalcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("File error: {operation} on '{}' - {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file '{}' already exists (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Process exit code: 1 for bad input, 2 for I/O and config problems
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Calc(_) => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let calc: CliError = CalcError::missing_field("load").into();
        assert_eq!(calc.exit_code(), 1);

        let io = CliError::io(
            "read",
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(io.exit_code(), 2);
        assert_eq!(io.to_string(), "File error: read on 'missing.json' - not found");
    }
}
