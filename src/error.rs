use thiserror::Error;

/// everything that can go wrong outside of the geometry, which itself never fails
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the catalog header has no column named '{0}'")]
    MissingColumn(String),

    #[error("the catalog ended before its header line")]
    MissingHeader,

    #[error("{column} on row {row} is not a float: '{value}'")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
