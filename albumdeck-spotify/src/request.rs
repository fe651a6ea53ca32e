use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

/// Making requests to the Web API.
impl Client {
    /// Make a `GET` request to `path` and deserialize the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<T> {
        let (status, bytes) = self.request_raw(Method::GET, path, parameters, None).await?;
        Self::parse_response(status, &bytes)
    }

    /// Like [`Self::request`], but `204 No Content` yields `None`.
    pub(crate) async fn request_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<Option<T>> {
        let (status, bytes) = self.request_raw(Method::GET, path, parameters, None).await?;
        if status == 204 || (Self::is_success(status) && bytes.is_empty()) {
            return Ok(None);
        }
        Self::parse_response(status, &bytes).map(Some)
    }

    /// Send a command that has no meaningful response body.
    pub(crate) async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ClientResult<()> {
        let (status, bytes) = self.request_raw(method, path, &[], body).await?;
        Self::check_status(status, &bytes)
    }

    pub(crate) async fn request_raw(
        &self,
        method: Method,
        path: &str,
        parameters: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> ClientResult<(u16, Vec<u8>)> {
        let mut request = self
            .client
            .request(method, format!("{}/{}", self.base_url, path.trim_start_matches('/')))
            .bearer_auth(&self.access_token)
            .query(parameters);

        // The player endpoints reject bodiless PUT/POST requests without a length.
        request = match body {
            Some(body) => request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body)?),
            None => request.header(reqwest::header::CONTENT_LENGTH, 0),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        Ok((status, response.bytes().await?.into()))
    }

    fn is_success(status: u16) -> bool {
        (200..300).contains(&status)
    }

    pub(crate) fn check_status(status: u16, bytes: &[u8]) -> ClientResult<()> {
        if Self::is_success(status) {
            return Ok(());
        }

        let message = serde_json::from_slice::<ErrorResponse>(bytes)
            .ok()
            .and_then(|response| response.error.message);
        Err(ClientError::ApiError { status, message })
    }

    pub(crate) fn parse_response<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> ClientResult<T> {
        Self::check_status(status, bytes)?;
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The body the API sends alongside a failing status.
struct ErrorResponse {
    error: ResponseError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// An error that occurred when making a request.
struct ResponseError {
    /// The error message.
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_response() {
        let body = br#"{"error": {"status": 404, "message": "Player command failed: No active device found"}}"#;
        match Client::parse_response::<serde_json::Value>(404, body) {
            Err(ClientError::ApiError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(
                    message.as_deref(),
                    Some("Player command failed: No active device found")
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_without_body() {
        let err = Client::check_status(502, b"").unwrap_err();
        assert_eq!(err.to_string(), "Spotify error: 502");
    }

    #[test]
    fn test_success_status() {
        assert!(Client::check_status(204, b"").is_ok());
        let value: serde_json::Value = Client::parse_response(200, br#"{"a": 1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            Client::parse_response::<serde_json::Value>(200, b"not json"),
            Err(ClientError::DeserializationError(_))
        ));
    }
}
