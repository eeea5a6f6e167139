//! Main Crate Error

use crate::formatter::FormatError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Transport(#[from] buildchat_requests::error::Error),

    #[error(transparent)]
    Config(#[from] buildchat_config::error::Error),
}
