use std::process::ExitStatus;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    /// Not even a single label cell fits between the margins, in at least one direction
    #[error("not enough space on the page to fit even one row or column")]
    ImpossibleLayout,

    /// More labels were requested than the grid can hold
    #[error("too many labels: {requested} requested, but only {capacity} fit on one sheet")]
    TooManyLabels { requested: usize, capacity: usize },

    #[error(transparent)]
    /// Formatting the markup failed
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    /// An external program could not be started at all
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The document compiler exited unsuccessfully
    #[error("`{program}` could not compile the label sheet ({status})")]
    Compiler { program: String, status: ExitStatus },

    /// The viewer exited unsuccessfully
    #[error("`{program}` could not open the label sheet ({status})")]
    Viewer { program: String, status: ExitStatus },
}

pub type Result<T, E = LabelError> = std::result::Result<T, E>;
