use thiserror::Error;

use crate::notifier::NotifyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Uh oh.. Something went wrong sending notification: {0}")]
    Notify(#[from] NotifyError),
    #[error("Uh oh.. Something went wrong: {0}")]
    Io(#[from] std::io::Error),
}
