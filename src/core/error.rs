use std::fmt;

/// Error types for sitemap generation
#[derive(Debug)]
pub enum SitemapError {
    /// IO error (listing directories, writing sitemap files, etc.)
    Io(std::io::Error),

    /// Directory walking error
    Walk(ignore::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error for the run report
    Serialization(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SitemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitemapError::Io(err) => write!(f, "IO error: {err}"),
            SitemapError::Walk(err) => write!(f, "Directory walking error: {err}"),
            SitemapError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SitemapError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SitemapError::Serialization(err) => write!(f, "Serialization error: {err}"),
            SitemapError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SitemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SitemapError::Io(err) => Some(err),
            SitemapError::Walk(err) => Some(err),
            SitemapError::TomlParsing(err) => Some(err),
            SitemapError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SitemapError {
    fn from(err: std::io::Error) -> Self {
        SitemapError::Io(err)
    }
}

impl From<ignore::Error> for SitemapError {
    fn from(err: ignore::Error) -> Self {
        SitemapError::Walk(err)
    }
}

impl From<toml::de::Error> for SitemapError {
    fn from(err: toml::de::Error) -> Self {
        SitemapError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for SitemapError {
    fn from(err: serde_json::Error) -> Self {
        SitemapError::Serialization(err)
    }
}

/// Type alias for Results using SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
