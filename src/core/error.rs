/// Application-wide Result type
pub type Result<T> = std::result::Result<T, TaxError>;

/// Main error type for the tax engine
#[derive(thiserror::Error, Debug)]
pub enum TaxError {
    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The rate/jurisdiction/settings store returned unreadable data
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A referenced rate or setting does not resolve to usable data
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl TaxError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TaxError::Validation(msg.into())
    }

    pub fn data_source(msg: impl Into<String>) -> Self {
        TaxError::DataSource(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        TaxError::Configuration(msg.into())
    }
}
