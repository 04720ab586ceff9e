use std::fmt;
use std::path::PathBuf;

/// Comprehensive error types for relink operations
#[derive(Debug)]
pub enum RelinkError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Moving the source file to its destination failed
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl RelinkError {
    /// True when the error means a required file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            RelinkError::FileNotFound(_) => true,
            RelinkError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            RelinkError::Move { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl fmt::Display for RelinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelinkError::Io(err) => write!(f, "IO error: {err}"),
            RelinkError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RelinkError::Move { from, to, source } => write!(
                f,
                "Move error: could not move '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
            RelinkError::Regex(err) => write!(f, "Regex error: {err}"),
            RelinkError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            RelinkError::FileNotFound(path) => write!(f, "File not found: {path}"),
            RelinkError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for RelinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelinkError::Io(err) => Some(err),
            RelinkError::Move { source, .. } => Some(source),
            RelinkError::Regex(err) => Some(err),
            RelinkError::TomlParsing(err) => Some(err),
            RelinkError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RelinkError {
    fn from(err: std::io::Error) -> Self {
        RelinkError::Io(err)
    }
}

impl From<regex::Error> for RelinkError {
    fn from(err: regex::Error) -> Self {
        RelinkError::Regex(err)
    }
}

impl From<toml::de::Error> for RelinkError {
    fn from(err: toml::de::Error) -> Self {
        RelinkError::TomlParsing(err)
    }
}

impl From<ignore::Error> for RelinkError {
    fn from(err: ignore::Error) -> Self {
        RelinkError::FileWalking(err)
    }
}

/// Type alias for Results using RelinkError
pub type Result<T> = std::result::Result<T, RelinkError>;
