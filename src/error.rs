use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid game settings. Reason: '{0}'.")]
    InvalidGameSettings(String),
    #[error("The round has more answers than players. ActualAnswers: '{0}', Players: '{1}'.")]
    TooManyAnswers(usize, usize),
    #[error("Received a bad formatted game. Payload: '{1}', Error: '{0}'.")]
    UnprocessableGame(String, String),
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
}

impl Error {
    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }
}
