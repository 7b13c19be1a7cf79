pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(thiserror::Error, Debug)]
pub enum PortfolioError {
    #[error("content is not valid JSON: {0}")]
    ContentFormat(#[from] serde_json::Error),

    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} is not a valid link ({value}): {source}")]
    InvalidLink {
        field: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{field} must use http or https, got `{scheme}`")]
    UnsupportedScheme { field: String, scheme: String },

    #[error("contact email `{0}` is not a valid address")]
    InvalidEmail(String),

    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),
}

impl PortfolioError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }
}
