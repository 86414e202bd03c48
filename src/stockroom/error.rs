use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid stock value: '{0}' is not a whole number")]
    InvalidStock(String),

    #[error("Stock overflow: '{name}' has {current}, adding {delta} is out of range")]
    StockOverflow {
        name: String,
        current: i64,
        delta: i64,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
