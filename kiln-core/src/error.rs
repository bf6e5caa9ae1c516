use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for kiln operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("module name is empty")]
    #[diagnostic(
        code(kiln::empty_name),
        help("pass a module name, e.g. 'kiln gen order'")
    )]
    EmptyName,

    #[error("invalid module name '{name}'")]
    #[diagnostic(
        code(kiln::invalid_name),
        help("{reason}. Use ASCII letters, digits, '-' and '_', starting with a letter.")
    )]
    InvalidName { name: String, reason: String },

    #[error("file already exists: {path}")]
    #[diagnostic(
        code(kiln::conflict),
        help("kiln never overwrites generated files; move or delete it first")
    )]
    FileExists { path: PathBuf },

    #[error("template '{template}' is malformed: {reason}")]
    #[diagnostic(code(kiln::malformed_template))]
    MalformedTemplate { template: String, reason: String },

    #[error("template '{template}' references unknown field '{field}'")]
    #[diagnostic(
        code(kiln::unknown_field),
        help(
            "known fields are: name, pascal, camel, snake, kebab, plural, label, module_path"
        )
    )]
    UnknownField { template: String, field: String },

    #[error("marker comment not found in {path}")]
    #[diagnostic(
        code(kiln::marker_not_found),
        help("restore the marker line '{marker}' or add the registration by hand")
    )]
    MarkerNotFound { path: PathBuf, marker: String },

    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(kiln::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an io error with the operation and path it came from
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Errors raised while editing an existing file are advisory; everything
    /// raised during render/emit aborts the run.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::MarkerNotFound { .. })
    }
}
