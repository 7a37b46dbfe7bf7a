use thiserror::Error;

/// Everything that can stop a leaderboard computation.
///
/// All three kinds are fatal for the invocation: no partial ranking is
/// produced once one of them is raised.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("registry fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected registry response: {0}")]
    ResponseSchema(String),
    #[error("attestation {index}: payload could not be decoded: {reason}")]
    Decode { index: usize, reason: String },
}

impl BoardError {
    pub fn decode(index: usize, err: impl std::fmt::Display) -> Self {
        BoardError::Decode {
            index,
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Fetch(err.to_string())
    }
}
