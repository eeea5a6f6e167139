#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::error::Error),

    #[error(transparent)]
    Config(#[from] buildchat_config::error::Error),

    #[error(transparent)]
    Notifier(#[from] buildchat::error::Error),
}
