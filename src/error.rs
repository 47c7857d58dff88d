// Errors from loading a job file and writing the image.
//
// The numeric core never fails, everything in here comes from the edges.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Couldn't write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Couldn't parse input: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl From<json::Error> for FractalError {
    fn from(err : json::Error) -> FractalError {
        FractalError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FractalError>;
