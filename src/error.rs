use thiserror::Error;

/// Startup failures. Anything past startup is a no-op, never an error.
#[derive(Error, Debug)]
pub enum Error {
    /// The dropdown has nothing to show
    #[error("no dropdown options configured")]
    NoOptions,

    /// An option with empty display text can never be activated
    #[error("dropdown option at index {index} has empty text")]
    BlankOption { index: usize },

    /// The window or event loop failed to start
    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
