use crate::Game;

#[derive(Debug)]
pub enum Error {
    /// The API answered with `success: false`.
    Api { status: u16, cause: String },
    /// A stats key that is not one of the known games.
    UnknownGame(String),
    /// A second decoder was registered for a game.
    DuplicateDecoder(Game),
    /// The item data of an auction could not be decoded.
    Item {
        auction: String,
        source: itemnbt::error::Error,
    },
    Json(serde_json::Error),
    MalformedResponse(String),
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Api { status, cause } => {
                write!(f, "api request failed with status {}: {}", status, cause)
            }
            Error::UnknownGame(key) => write!(f, "unknown game in stats: {}", key),
            Error::DuplicateDecoder(game) => {
                write!(f, "a stats decoder is already registered for {}", game)
            }
            Error::Item { auction, source } => {
                write!(f, "could not decode item of auction {}: {}", auction, source)
            }
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
            Error::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Item { source, .. } => Some(source),
            Error::Json(e) => Some(e),
            Error::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
