// src/infra/errors.rs — Error types for stockroom

use thiserror::Error;

/// Errors raised while bringing the server up (config loading, binding the
/// listener). Request handling never produces these: validation failures and
/// backend trouble are swallowed per the page's always-200 contract and only
/// logged.
#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
