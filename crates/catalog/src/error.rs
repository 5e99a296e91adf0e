use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog contains no components")]
    Empty,

    #[error("Component #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Duplicate component name '{name}'")]
    DuplicateName { name: String },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
