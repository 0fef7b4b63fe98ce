use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depcalc operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepcalcError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A resolver call was made with malformed input (e.g. no seed modules).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No module-map root could be located.
    #[error("Configuration missing: {message}")]
    #[diagnostic(help(
        "Pass --root <PATH>, set DEPCALC_ROOT, or run from a directory containing depcalc.toml"
    ))]
    ConfigurationMissing { message: String },

    /// A module map, component descriptor, or config file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A seed module does not exist in the module map (strict mode only).
    #[error("Unknown module: {id}")]
    #[diagnostic(help("Check the spelling, or drop --strict to ignore unknown modules"))]
    UnknownModule { id: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepcalcResult<T> = miette::Result<T>;
