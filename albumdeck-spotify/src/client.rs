#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// An error that occurred when deserializing a response.
    DeserializationError(serde_json::Error),
    /// The API returned an error.
    ApiError {
        /// The HTTP status code.
        status: u16,
        /// The error message.
        message: Option<String>,
    },
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            ClientError::DeserializationError(e) => write!(f, "Deserialization error: {e}"),
            ClientError::ApiError { status, message } => {
                write!(f, "Spotify error: {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}
impl std::error::Error for ClientError {}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DeserializationError(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the Spotify Web API.
///
/// Obtaining the access token is up to the caller.
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) access_token: String,
    pub(crate) client: reqwest::Client,
}
impl Client {
    /// The default base URL of the Web API.
    pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

    /// Create a new client.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client: reqwest::Client::new(),
        }
    }
}
