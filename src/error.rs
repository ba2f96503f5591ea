use thiserror::Error;

use markup::MarkupError;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Could not read book: {0}")]
    IO(#[from] std::io::Error),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, BookError>;
