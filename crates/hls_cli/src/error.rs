//! The CLI's top-level error type, composing the three lower-level error
//! types behind `#[from]`.

use hls_config::ConfigError;
use hls_core::ScheduleError;
use hls_io::{EdgelistError, LpFileError};

/// Any failure the `schedule` command can surface.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Failed to load or parse `sched.toml`.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to parse the input edgelist.
    #[error(transparent)]
    Edgelist(#[from] EdgelistError),

    /// The graph failed validation or mobility/emission preconditions.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Failed to write the `.lp` file or read back a solver result.
    #[error(transparent)]
    LpFile(#[from] LpFileError),

    /// An unclassified I/O failure (e.g. spawning the solver process).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
