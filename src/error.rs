// error.rs
use thiserror::Error;

use crate::model::ModelError;
use crate::utils::io::IoError;

#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, EncoderError>;
