use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Static source for the record store (`.yaml`, `.yml` or `.json`).
    pub locations_path: PathBuf,
    /// Prefix for downloadable documents, e.g. `/uploads`.
    pub uploads_base: String,
    /// Prepended to relative cover image paths when set.
    pub cover_base_url: Option<String>,
    /// Accordion title for listings whose hours cannot be summarized.
    pub hours_fallback: String,
}
