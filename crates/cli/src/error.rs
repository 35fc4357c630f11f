// crates/cli/src/error.rs

use globber::GlobError;
use registry::RegistryError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status of `pkgprune`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    NoMatch = 1,
    Usage = 2,
    Pattern = 3,
    Config = 4,
    Input = 5,
    Io = 11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownExit(pub u8);

impl fmt::Display for UnknownExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exit code {}", self.0)
    }
}

impl std::error::Error for UnknownExit {}

impl TryFrom<u8> for ExitCode {
    type Error = UnknownExit;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0 => Ok(ExitCode::Ok),
            1 => Ok(ExitCode::NoMatch),
            2 => Ok(ExitCode::Usage),
            3 => Ok(ExitCode::Pattern),
            4 => Ok(ExitCode::Config),
            5 => Ok(ExitCode::Input),
            11 => Ok(ExitCode::Io),
            other => Err(UnknownExit(other)),
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(e: ExitCode) -> Self {
        e as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(e: ExitCode) -> Self {
        i32::from(u8::from(e))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Glob(#[from] GlobError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file: {0}")]
    LogFile(#[source] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Glob(_) => ExitCode::Pattern,
            CliError::Registry(RegistryError::Json(_) | RegistryError::Io(_)) => ExitCode::Input,
            CliError::Registry(_) => ExitCode::Config,
            CliError::Input { .. } => ExitCode::Input,
            CliError::LogFile(_) | CliError::Json(_) | CliError::Io(_) => ExitCode::Io,
        }
    }
}
